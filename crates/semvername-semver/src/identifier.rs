use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

/// An error in a single dot-separated prerelease or build identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// A leading, trailing, or doubled `.`, or a `-`/`+` with nothing after it.
    #[error("identifiers must not be empty")]
    Empty,
    #[error(
        "invalid character `{character}` in identifier `{identifier}`, identifiers may only contain ASCII alphanumerics and hyphens"
    )]
    InvalidCharacter { identifier: String, character: char },
    #[error("numeric identifier `{0}` must not contain leading zeros")]
    LeadingZero(String),
}

/// A single prerelease identifier, such as `alpha` or `1` in `1.0.0-alpha.1`.
///
/// Identifiers can only be created by parsing, so a numeric identifier always consists of ASCII
/// digits without a leading zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(Segment);

/// Numeric identifiers are stored as their digits, so there is no upper bound on their size.
/// Since a numeric identifier never has a leading zero, comparing by length and then digit by
/// digit is the same as comparing by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
    /// Only ASCII digits, and no leading zero unless the identifier is exactly `0`.
    Numeric(Box<str>),
    /// ASCII alphanumerics and hyphens, with at least one non-digit.
    AlphaNumeric(Box<str>),
}

impl Identifier {
    pub fn as_str(&self) -> &str {
        match &self.0 {
            Segment::Numeric(digits) => digits,
            Segment::AlphaNumeric(string) => string,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.0, Segment::Numeric(_))
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(identifier: &str) -> Result<Self, Self::Err> {
        parse_prerelease_identifier(identifier)
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifier {
    /// Numeric identifiers compare numerically, alphanumeric identifiers compare by ASCII order,
    /// and a numeric identifier always has lower precedence than an alphanumeric one.
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Segment::Numeric(a), Segment::Numeric(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (Segment::AlphaNumeric(a), Segment::AlphaNumeric(b)) => a.cmp(b),
            (Segment::Numeric(_), Segment::AlphaNumeric(_)) => Ordering::Less,
            (Segment::AlphaNumeric(_), Segment::Numeric(_)) => Ordering::Greater,
        }
    }
}

/// Check that `segment` is a non-empty run of `[A-Za-z0-9-]`, returning whether it is all digits.
pub(crate) fn check_characters(segment: &str) -> Result<bool, IdentifierError> {
    if segment.is_empty() {
        return Err(IdentifierError::Empty);
    }

    let mut numeric = true;
    for char in segment.chars() {
        match char {
            '0'..='9' => {}
            'A'..='Z' | 'a'..='z' | '-' => numeric = false,
            _ => {
                return Err(IdentifierError::InvalidCharacter {
                    identifier: segment.to_string(),
                    character: char,
                });
            }
        }
    }
    Ok(numeric)
}

/// Parse one prerelease identifier, rejecting numeric identifiers with leading zeros.
pub(crate) fn parse_prerelease_identifier(segment: &str) -> Result<Identifier, IdentifierError> {
    if check_characters(segment)? {
        if segment.len() > 1 && segment.starts_with('0') {
            return Err(IdentifierError::LeadingZero(segment.to_string()));
        }
        Ok(Identifier(Segment::Numeric(Box::from(segment))))
    } else {
        Ok(Identifier(Segment::AlphaNumeric(Box::from(segment))))
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;

    fn numeric(digits: &str) -> Identifier {
        Identifier(Segment::Numeric(Box::from(digits)))
    }

    fn alpha(string: &str) -> Identifier {
        Identifier(Segment::AlphaNumeric(Box::from(string)))
    }

    #[test]
    fn classify() {
        assert_eq!(parse_prerelease_identifier("0"), Ok(numeric("0")));
        assert_eq!(parse_prerelease_identifier("42"), Ok(numeric("42")));
        assert_eq!(parse_prerelease_identifier("beta1"), Ok(alpha("beta1")));
        assert_eq!(parse_prerelease_identifier("-"), Ok(alpha("-")));
        assert_eq!(parse_prerelease_identifier("0-0"), Ok(alpha("0-0")));
    }

    #[test]
    fn leading_zero() {
        assert_eq!(
            parse_prerelease_identifier("01"),
            Err(IdentifierError::LeadingZero("01".to_string()))
        );
        assert_eq!(
            parse_prerelease_identifier("00"),
            Err(IdentifierError::LeadingZero("00".to_string()))
        );
        // A leading zero is fine as long as the identifier isn't numeric.
        assert!(parse_prerelease_identifier("01a").is_ok());
    }

    #[test]
    fn invalid_character() {
        let err = parse_prerelease_identifier("be_ta").unwrap_err();
        insta::assert_snapshot!(err, @"invalid character `_` in identifier `be_ta`, identifiers may only contain ASCII alphanumerics and hyphens");
        assert!(parse_prerelease_identifier("é").is_err());
        assert_eq!(parse_prerelease_identifier(""), Err(IdentifierError::Empty));
    }

    #[test]
    fn ordering() {
        assert_eq!(numeric("2").cmp(&numeric("10")), Ordering::Less);
        assert_eq!(numeric("10").cmp(&numeric("10")), Ordering::Equal);
        assert_eq!(
            numeric("99999999999999999999999").cmp(&numeric("100000000000000000000000")),
            Ordering::Less
        );
        assert_eq!(alpha("beta10").cmp(&alpha("beta2")), Ordering::Less);
        assert_eq!(alpha("Beta").cmp(&alpha("alpha")), Ordering::Less);
        assert_eq!(numeric("999").cmp(&alpha("a")), Ordering::Less);
        assert_eq!(alpha("a").cmp(&numeric("0")), Ordering::Greater);
    }

    /// The only public way to build an identifier validates it, so the numeric ordering can rely
    /// on digits without leading zeros.
    #[test]
    fn from_str_validates() {
        let identifier = Identifier::from_str("11").unwrap();
        assert!(identifier.is_numeric());
        assert_eq!(identifier.as_str(), "11");
        assert!(Identifier::from_str("2").unwrap() < identifier);

        let identifier = Identifier::from_str("abc").unwrap();
        assert!(!identifier.is_numeric());
        assert!(Identifier::from_str("999").unwrap() < identifier);

        assert_eq!(
            Identifier::from_str("01"),
            Err(IdentifierError::LeadingZero("01".to_string()))
        );
        assert_eq!(Identifier::from_str(""), Err(IdentifierError::Empty));
    }
}
