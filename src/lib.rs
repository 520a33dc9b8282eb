//! Annotated change-lists between two ordered sequences.
//!
//! [`reconcile`] compares an "actual" and an "expected" sequence and returns
//! an ordered list of [`ChangeEntry`]s telling a diff renderer which items
//! are unchanged, which correspond but differ, which were truly inserted or
//! removed, and which merely moved. Correspondence is driven by a pair of
//! caller-supplied predicates (see [`Equivalence`]); non-positional named
//! properties can be reconciled alongside the items themselves (see
//! [`ReconcileOptions`]).

mod alignment;
mod equivalence;
mod reconcile;
mod types;

pub use equivalence::{Equivalence, EquivalencePredicate};
pub use reconcile::{
    ChangeEntry, ChangeKind, OptionsInput, PropertyInclusion, ReconcileError, ReconcileOptions,
    reconcile,
};
pub use types::{
    entry_index::EntryIndex,
    property_key::PropertyKey,
    sequence::{AnnotatedSequence, SequenceLike},
};
