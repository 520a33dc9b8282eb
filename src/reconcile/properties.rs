use std::fmt::Debug;

use super::{
    change_entry::{ChangeEntry, ChangeKind},
    options::PropertyInclusion,
};
use crate::{
    equivalence::Equivalence,
    types::{entry_index::EntryIndex, property_key::PropertyKey, sequence::SequenceLike},
};

/// Appends one entry per named property present on either side.
///
/// A key with no value on a side counts as absent there; when it is absent
/// on both sides no entry is produced and no predicate is invoked.
pub(crate) fn reconcile_properties<T, A, E>(
    actual: &A,
    expected: &E,
    equivalence: &Equivalence<'_, T>,
    inclusion: &PropertyInclusion,
    entries: &mut Vec<ChangeEntry<T>>,
) where
    T: PartialEq + Clone + Debug,
    A: SequenceLike<T> + ?Sized,
    E: SequenceLike<T> + ?Sized,
{
    let keys = match inclusion {
        PropertyInclusion::Off => return,
        PropertyInclusion::Keys(keys) => keys.clone(),
        PropertyInclusion::Discover => discover_keys(actual, expected),
    };

    for key in keys {
        match (actual.property(&key), expected.property(&key)) {
            (Some(value), Some(counterpart)) => {
                let index = EntryIndex::Key(key);
                let kind = if equivalence.equal(value, counterpart, &index, &index) {
                    ChangeKind::Equal
                } else {
                    ChangeKind::Similar
                };
                entries.push(ChangeEntry {
                    kind,
                    value: value.clone(),
                    expected: Some(counterpart.clone()),
                    actual_index: Some(index.clone()),
                    expected_index: Some(index),
                    move_id: None,
                    same_under_equal: None,
                    is_last: false,
                });
            }
            (Some(value), None) => entries.push(ChangeEntry {
                kind: ChangeKind::Remove,
                value: value.clone(),
                expected: None,
                actual_index: Some(EntryIndex::Key(key)),
                expected_index: None,
                move_id: None,
                same_under_equal: None,
                is_last: false,
            }),
            (None, Some(counterpart)) => entries.push(ChangeEntry {
                kind: ChangeKind::Insert,
                value: counterpart.clone(),
                expected: None,
                actual_index: None,
                expected_index: Some(EntryIndex::Key(key)),
                move_id: None,
                same_under_equal: None,
                is_last: false,
            }),
            (None, None) => {}
        }
    }
}

/// The union of both sides' keys in first-seen order, skipping names that
/// are spelled like positions.
fn discover_keys<T, A, E>(actual: &A, expected: &E) -> Vec<PropertyKey>
where
    A: SequenceLike<T> + ?Sized,
    E: SequenceLike<T> + ?Sized,
{
    let mut keys = Vec::new();
    for key in actual
        .property_keys()
        .into_iter()
        .chain(expected.property_keys())
    {
        if !key.is_positional_alias() && !keys.contains(&key) {
            keys.push(key);
        }
    }

    keys
}
