use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{InvalidNameError, validate};

/// The name half of a name-prefixed version, such as `apple_jack` in `apple_jack-0.1.2-pre1`.
///
/// A name is a non-empty run of ASCII letters, digits, `-`, and `_`. Names compare by ordinal
/// string order and are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ProductName(Box<str>);

impl ProductName {
    /// Create a validated product name from an owned string.
    pub fn from_owned(name: String) -> Result<Self, InvalidNameError> {
        validate(&name)?;
        Ok(Self(name.into_boxed_str()))
    }

    /// Returns the underlying name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProductName {
    /// The placeholder name used by an empty named version.
    fn default() -> Self {
        Self(Box::from("untitled"))
    }
}

impl FromStr for ProductName {
    type Err = InvalidNameError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        validate(name)?;
        Ok(Self(Box::from(name)))
    }
}

impl<'de> Deserialize<'de> for ProductName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = ProductName;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a string")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                ProductName::from_str(v).map_err(serde::de::Error::custom)
            }

            fn visit_string<E: serde::de::Error>(self, v: String) -> Result<Self::Value, E> {
                ProductName::from_owned(v).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

impl std::fmt::Display for ProductName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::ProductName;

    #[test]
    fn preserves_case() {
        let name = ProductName::from_str("Apple_Jack").unwrap();
        assert_eq!(name.as_str(), "Apple_Jack");
        assert_ne!(name, ProductName::from_str("apple_jack").unwrap());
    }

    #[test]
    fn ordinal_order() {
        let mut names = ["banana", "Zebra", "apple", "apple-pie", "apple_jack"]
            .into_iter()
            .map(|name| ProductName::from_str(name).unwrap())
            .collect::<Vec<_>>();
        names.sort();
        let names = names.iter().map(ProductName::as_str).collect::<Vec<_>>();
        // Uppercase sorts before lowercase, `-` before `_`.
        assert_eq!(names, ["Zebra", "apple", "apple-pie", "apple_jack", "banana"]);
    }

    #[test]
    fn default_is_untitled() {
        assert_eq!(ProductName::default().as_str(), "untitled");
    }

    #[test]
    fn serde() {
        let name = ProductName::from_str("hello").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), r#""hello""#);
        assert_eq!(
            serde_json::from_str::<ProductName>(r#""hello""#).unwrap(),
            name
        );
        assert!(serde_json::from_str::<ProductName>(r#""hello.world""#).is_err());
        assert!(serde_json::from_str::<ProductName>(r#""""#).is_err());
    }
}
