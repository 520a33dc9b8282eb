use std::fmt::{Debug, Formatter};

use crate::types::entry_index::EntryIndex;

/// A caller-supplied comparison taking both items and their positions.
pub type EquivalencePredicate<'a, T> = dyn Fn(&T, &T, &EntryIndex, &EntryIndex) -> bool + 'a;

/// The pair of predicates driving a reconciliation.
///
/// `equal` claims two items are interchangeable; `similar` claims they stand
/// for the same logical item and should be paired up and rendered as a
/// change. Omitted predicates fall back to identity comparison and
/// always-false respectively.
///
/// Predicates must be pure: they can be invoked several times for the same
/// pair of items (during alignment, fallback evaluation and promotion), so
/// callers must not rely on call counts. The argument values are part of the
/// contract, the order and number of calls are not.
pub struct Equivalence<'a, T> {
    equal: Option<&'a EquivalencePredicate<'a, T>>,
    similar: Option<&'a EquivalencePredicate<'a, T>>,
}

impl<'a, T> Equivalence<'a, T>
where
    T: PartialEq,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            equal: None,
            similar: None,
        }
    }

    #[must_use]
    pub fn with_equal(mut self, predicate: &'a EquivalencePredicate<'a, T>) -> Self {
        self.equal = Some(predicate);
        self
    }

    #[must_use]
    pub fn with_similar(mut self, predicate: &'a EquivalencePredicate<'a, T>) -> Self {
        self.similar = Some(predicate);
        self
    }

    /// Strict interchangeability, identity comparison when no predicate was
    /// supplied.
    pub fn equal(&self, a: &T, b: &T, a_index: &EntryIndex, b_index: &EntryIndex) -> bool {
        match self.equal {
            Some(predicate) => predicate(a, b, a_index, b_index),
            None => a == b,
        }
    }

    /// Correspondence short of equality, never true when no predicate was
    /// supplied.
    pub fn similar(&self, a: &T, b: &T, a_index: &EntryIndex, b_index: &EntryIndex) -> bool {
        self.similar
            .is_some_and(|predicate| predicate(a, b, a_index, b_index))
    }

    /// The combined predicate handed to the alignment: `equal` or `similar`.
    pub fn corresponds(&self, a: &T, b: &T, a_index: &EntryIndex, b_index: &EntryIndex) -> bool {
        self.equal(a, b, a_index, b_index) || self.similar(a, b, a_index, b_index)
    }
}

impl<T: PartialEq> Default for Equivalence<'_, T> {
    fn default() -> Self { Self::new() }
}

impl<T> Debug for Equivalence<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Equivalence")
            .field("equal", &self.equal.map(|_| "<predicate>"))
            .field("similar", &self.similar.map(|_| "<predicate>"))
            .finish()
    }
}
