use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::property_key::PropertyKey;

/// Where an item lives on one side of the reconciliation: either a position
/// in the sequence or a non-positional property key.
///
/// Equivalence predicates receive a pair of these so that callers can make
/// position-dependent decisions.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryIndex {
    Position(usize),
    Key(PropertyKey),
}

impl From<usize> for EntryIndex {
    fn from(position: usize) -> Self { EntryIndex::Position(position) }
}

impl From<PropertyKey> for EntryIndex {
    fn from(key: PropertyKey) -> Self { EntryIndex::Key(key) }
}

impl Display for EntryIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryIndex::Position(position) => write!(f, "{position}"),
            EntryIndex::Key(key) => write!(f, "{key}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(EntryIndex::from(4), EntryIndex::Position(4));
        assert_eq!(
            EntryIndex::from(PropertyKey::from("id")),
            EntryIndex::Key(PropertyKey::Named("id".to_owned()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(EntryIndex::Position(2).to_string(), "2");
        assert_eq!(EntryIndex::Key("id".into()).to_string(), "id");
    }
}
