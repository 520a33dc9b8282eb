use std::fmt::Debug;

use super::{change_entry::ChangeKind, live_view::Slot};
use crate::{equivalence::Equivalence, types::entry_index::EntryIndex};

/// Decides whether a naive row-by-row comparison beats the edit-script
/// result, and builds it when so.
///
/// The walk stops as soon as the naive conflict count exceeds the
/// edit-script's `conflicts` (it cannot win past that point); ties go to the
/// naive result, biasing the output toward the simpler, move-free rendering.
pub(crate) fn item_by_item<T>(
    actual: &[T],
    expected: &[T],
    equivalence: &Equivalence<'_, T>,
    conflicts: usize,
) -> Option<Vec<Slot<T>>>
where
    T: PartialEq + Clone + Debug,
{
    let longest = actual.len().max(expected.len());

    let mut naive_conflicts = 0;
    let mut row = 0;
    while row < longest && naive_conflicts <= conflicts {
        let corresponds = row < actual.len() && row < expected.len() && {
            let position = EntryIndex::Position(row);
            equivalence.corresponds(&actual[row], &expected[row], &position, &position)
        };
        if !corresponds {
            naive_conflicts += 1;
        }
        row += 1;
    }

    if naive_conflicts > conflicts {
        return None;
    }

    let shared = actual.len().min(expected.len());
    let mut slots = Vec::with_capacity(longest);
    for index in 0..shared {
        slots.push(Slot {
            kind: ChangeKind::Similar,
            value: actual[index].clone(),
            expected: Some(expected[index].clone()),
            actual_index: Some(index),
            expected_index: Some(index),
            move_id: None,
            same_under_equal: None,
        });
    }
    for index in shared..expected.len() {
        slots.push(Slot {
            kind: ChangeKind::Insert,
            value: expected[index].clone(),
            expected: None,
            actual_index: None,
            expected_index: Some(index),
            move_id: None,
            same_under_equal: None,
        });
    }
    for index in shared..actual.len() {
        slots.push(Slot {
            kind: ChangeKind::Remove,
            value: actual[index].clone(),
            expected: None,
            actual_index: Some(index),
            expected_index: None,
            move_id: None,
            same_under_equal: None,
        });
    }

    Some(slots)
}
