use assert_cmd::Command;
use predicates::prelude::*;

fn semvername() -> Command {
    Command::new(env!("CARGO_BIN_EXE_semvername"))
}

#[test]
fn parse_canonical() {
    semvername()
        .arg("parse")
        .arg("1.2.3")
        .arg("1.0.0-alpha.1+build.5")
        .assert()
        .success()
        .stdout("1.2.3\n1.0.0-alpha.1+build.5\n");
}

#[test]
fn parse_json() -> anyhow::Result<()> {
    let output = semvername()
        .arg("parse")
        .arg("--json")
        .arg("1.0.0-beta.11+exp.sha.5114f85")
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        value,
        serde_json::json!({
            "version": "1.0.0-beta.11+exp.sha.5114f85",
            "major": 1,
            "minor": 0,
            "patch": 0,
            "prerelease": ["beta", "11"],
            "build": ["exp", "sha", "5114f85"],
        })
    );

    Ok(())
}

#[test]
fn parse_named_json() -> anyhow::Result<()> {
    let output = semvername()
        .arg("parse")
        .arg("--named")
        .arg("--json")
        .arg("apple_jack-0.1.2-pre1")
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["name"], "apple_jack");
    assert_eq!(value["version"], "0.1.2-pre1");
    assert_eq!(value["named_version"], "apple_jack-0.1.2-pre1");
    assert_eq!(value["prerelease"], serde_json::json!(["pre1"]));

    Ok(())
}

#[test]
fn parse_invalid() {
    semvername()
        .arg("parse")
        .arg("1.2.3")
        .arg("01.2.3")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "error: Failed to parse version `01.2.3`: the major version `01` must not contain leading zeros",
        ));
}

#[test]
fn parse_named_invalid() {
    semvername()
        .arg("--named")
        .arg("parse")
        .arg("product.subproduct-1.2.3")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Failed to parse named version `product.subproduct-1.2.3`",
        ));
}

#[test]
fn parse_quiet() {
    semvername()
        .arg("parse")
        .arg("--quiet")
        .arg("1.2.3")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn compare() {
    semvername()
        .args(["compare", "2.0.0", "10.0.0"])
        .assert()
        .success()
        .stdout("2.0.0 < 10.0.0\n");

    semvername()
        .args(["compare", "1.0.0", "1.0.0-rc.1"])
        .assert()
        .success()
        .stdout("1.0.0 > 1.0.0-rc.1\n");

    semvername()
        .args(["compare", "1.0.0", "1.0.0"])
        .assert()
        .success()
        .stdout("1.0.0 = 1.0.0\n");

    semvername()
        .args(["compare", "1.0.0+a", "1.0.0+b"])
        .assert()
        .success()
        .stdout("1.0.0+a = 1.0.0+b (build metadata differs)\n");
}

#[test]
fn compare_named() {
    semvername()
        .args(["compare", "--named", "apple-1.2.3", "banana-1.2.3"])
        .assert()
        .success()
        .stdout("apple-1.2.3 < banana-1.2.3\n");
}

#[test]
fn compare_named_build() {
    semvername()
        .args(["compare", "--named", "a-1.0.0+x", "a-1.0.0+y"])
        .assert()
        .success()
        .stdout("a-1.0.0+x = a-1.0.0+y (build metadata differs)\n");
}

#[test]
fn sort() {
    semvername()
        .args([
            "sort",
            "5.3.1",
            "2.3.5",
            "1.9.10",
            "3.10.5",
            "2.3.5-beta1",
            "2.3.5-beta2",
        ])
        .assert()
        .success()
        .stdout("1.9.10\n2.3.5-beta1\n2.3.5-beta2\n2.3.5\n3.10.5\n5.3.1\n");
}

#[test]
fn sort_reverse_named() {
    semvername()
        .args([
            "sort",
            "--named",
            "--reverse",
            "banana-1.0.0",
            "apple-2.0.0",
            "apple-10.0.0",
        ])
        .assert()
        .success()
        .stdout("banana-1.0.0\napple-10.0.0\napple-2.0.0\n");
}

#[test]
fn cgt() {
    semvername()
        .args(["cgt", "1.3.0", "1.2.0"])
        .assert()
        .success()
        .stdout("true\n");

    semvername()
        .args(["cgt", "2.0.0", "1.9.9"])
        .assert()
        .code(1)
        .stdout("false\n");

    semvername()
        .args(["cgt", "0.4.1", "0.4.0"])
        .assert()
        .code(1)
        .stdout("false\n");
}

#[test]
fn cgt_named() {
    semvername()
        .args(["cgt", "--named", "foo-1.3.0", "foo-1.2.0"])
        .assert()
        .success()
        .stdout("true\n");

    semvername()
        .args(["cgt", "--named", "bar-1.3.0", "foo-1.2.0"])
        .assert()
        .code(1)
        .stdout("false\n");
}

#[test]
fn missing_arguments() {
    semvername().arg("compare").arg("1.0.0").assert().code(2);
    semvername().arg("sort").assert().code(2);
}

#[test]
fn log_without_color_when_redirected() {
    semvername()
        .env("RUST_LOG", "semvername=debug")
        .args(["sort", "1.0.0", "0.1.0"])
        .assert()
        .success()
        .stdout("0.1.0\n1.0.0\n")
        .stderr(predicate::str::contains("Sorting 2 versions"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}
