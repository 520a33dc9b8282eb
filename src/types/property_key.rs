use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A non-positional key attached to a sequence, such as a named field on an
/// array-like value.
///
/// Keys are either human-readable names or opaque tokens that have no string
/// representation of their own.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Named(String),
    Token(u64),
}

impl PropertyKey {
    /// Whether the key is spelled like a canonical base-ten position
    /// (`"0"`, `"17"`, ...). Such names address items, not properties, and
    /// are skipped during key discovery.
    #[must_use]
    pub fn is_positional_alias(&self) -> bool {
        match self {
            PropertyKey::Named(name) => {
                name == "0"
                    || (!name.is_empty()
                        && !name.starts_with('0')
                        && name.chars().all(|character| character.is_ascii_digit()))
            }
            PropertyKey::Token(_) => false,
        }
    }
}

impl From<String> for PropertyKey {
    fn from(name: String) -> Self { PropertyKey::Named(name) }
}

impl From<&str> for PropertyKey {
    fn from(name: &str) -> Self { PropertyKey::Named(name.to_owned()) }
}

impl Display for PropertyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyKey::Named(name) => write!(f, "{name}"),
            PropertyKey::Token(token) => write!(f, "<token {token}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("0", true)]
    #[test_case("17", true)]
    #[test_case("", false)]
    #[test_case("01", false; "leading zero is not canonical")]
    #[test_case("1a", false)]
    #[test_case("foo", false)]
    fn test_positional_alias(name: &str, expected: bool) {
        assert_eq!(PropertyKey::from(name).is_positional_alias(), expected);
    }

    #[test]
    fn test_tokens_are_never_positional() {
        assert!(!PropertyKey::Token(3).is_positional_alias());
    }

    #[test]
    fn test_display() {
        assert_eq!(PropertyKey::from("length").to_string(), "length");
        assert_eq!(PropertyKey::Token(7).to_string(), "<token 7>");
    }
}
