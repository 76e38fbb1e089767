use std::process::ExitCode;

use anstream::eprintln;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;

use semvername_named::NamedVersion;
use semvername_semver::Version;

use crate::commands::ExitStatus;

mod commands;
mod logging;
mod printer;

#[derive(Parser)]
#[command(author, version, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Treat inputs as name-prefixed versions, such as `hello-1.2.3`.
    #[arg(global = true, long)]
    named: bool,

    /// Do not print any output.
    #[arg(global = true, long, short, conflicts_with = "verbose")]
    quiet: bool,

    /// Use verbose output.
    #[arg(global = true, long, short, conflicts_with = "quiet")]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate versions and print their canonical form.
    Parse(ParseArgs),
    /// Compare two versions by precedence.
    Compare(CompareArgs),
    /// Sort versions in ascending order.
    Sort(SortArgs),
    /// Check whether a version is a compatible upgrade from another.
    ///
    /// Prints `true` or `false`, and exits with status 1 when `false`.
    Cgt(CgtArgs),
}

#[derive(Args)]
struct ParseArgs {
    /// The versions to parse, e.g., `1.0.0-rc.1+build.5`.
    #[arg(required = true)]
    versions: Vec<String>,

    /// Print a JSON object with the components of each version.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CompareArgs {
    lhs: String,
    rhs: String,
}

#[derive(Args)]
struct SortArgs {
    #[arg(required = true)]
    versions: Vec<String>,

    /// Sort in descending order.
    #[arg(long, short)]
    reverse: bool,
}

#[derive(Args)]
struct CgtArgs {
    /// The version to upgrade to.
    candidate: String,
    /// The version to upgrade from.
    base: String,
}

fn inner() -> Result<ExitStatus> {
    let cli = Cli::parse();

    logging::setup_logging(if cli.verbose {
        logging::Level::Verbose
    } else {
        logging::Level::Default
    })?;

    let printer = if cli.quiet {
        printer::Printer::Quiet
    } else if cli.verbose {
        printer::Printer::Verbose
    } else {
        printer::Printer::Default
    };

    match (cli.command, cli.named) {
        (Commands::Parse(args), false) => {
            commands::parse::<Version>(&args.versions, args.json, printer)
        }
        (Commands::Parse(args), true) => {
            commands::parse::<NamedVersion>(&args.versions, args.json, printer)
        }
        (Commands::Compare(args), false) => {
            commands::compare::<Version>(&args.lhs, &args.rhs, printer)
        }
        (Commands::Compare(args), true) => {
            commands::compare::<NamedVersion>(&args.lhs, &args.rhs, printer)
        }
        (Commands::Sort(args), false) => {
            commands::sort::<Version>(&args.versions, args.reverse, printer)
        }
        (Commands::Sort(args), true) => {
            commands::sort::<NamedVersion>(&args.versions, args.reverse, printer)
        }
        (Commands::Cgt(args), false) => {
            commands::cgt::<Version>(&args.candidate, &args.base, printer)
        }
        (Commands::Cgt(args), true) => {
            commands::cgt::<NamedVersion>(&args.candidate, &args.base, printer)
        }
    }
}

fn main() -> ExitCode {
    match inner() {
        Ok(code) => code.into(),
        Err(err) => {
            #[allow(clippy::print_stderr)]
            {
                eprintln!("{}: {}", "error".red().bold(), err);
                for cause in err.chain().skip(1) {
                    eprintln!("  {}: {}", "Caused by".red().bold(), cause);
                }
            }
            ExitStatus::Error.into()
        }
    }
}
