use thiserror::Error;

pub use product_name::ProductName;

mod product_name;

/// Validate a product name: non-empty, ASCII alphanumerics, `-`, and `_` only.
///
/// Names are case-sensitive and are never normalized: `Foo_bar` and `foo-bar` are distinct.
pub(crate) fn validate(name: &str) -> Result<(), InvalidNameError> {
    if name.is_empty() {
        return Err(InvalidNameError::Empty);
    }

    for (offset, char) in name.char_indices() {
        match char {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' => {}
            _ => {
                return Err(InvalidNameError::Character {
                    name: name.to_string(),
                    character: char,
                    offset,
                });
            }
        }
    }

    Ok(())
}

/// Invalid [`crate::ProductName`].
#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum InvalidNameError {
    #[error("Product name must not be empty")]
    Empty,
    #[error(
        "Not a valid product name: \"{name}\". Found `{character}` at offset {offset}, but names may only contain -, _, and alphanumeric characters."
    )]
    Character {
        name: String,
        character: char,
        offset: usize,
    },
}

impl InvalidNameError {
    /// Returns the invalid name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Character { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid() {
        for name in [
            "hello",
            "apple_jack",
            "my-product",
            "_leading",
            "trailing-",
            "MixedCase123",
            "0",
        ] {
            assert_eq!(validate(name), Ok(()), "{name}");
        }
    }

    #[test]
    fn invalid() {
        for name in ["product.subproduct", "has space", "tab\t", "emoji🦀", "a+b", "a/b"] {
            assert!(validate(name).is_err(), "{name}");
        }
    }

    #[test]
    fn empty() {
        let err = validate("").unwrap_err();
        assert_eq!(err, InvalidNameError::Empty);
        insta::assert_snapshot!(err, @"Product name must not be empty");
    }

    #[test]
    fn error_message() {
        let err = validate("product.subproduct").unwrap_err();
        assert_eq!(err.as_str(), "product.subproduct");
        insta::assert_snapshot!(err, @r#"Not a valid product name: "product.subproduct". Found `.` at offset 7, but names may only contain -, _, and alphanumeric characters."#);
    }
}
