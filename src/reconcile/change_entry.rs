#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::entry_index::EntryIndex;

/// How one change-list entry relates the two sides.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// The item is interchangeable between the two sides.
    Equal,
    /// The items correspond but differ, and should be rendered as a change.
    Similar,
    /// The item only exists on the expected side.
    Insert,
    /// The item only exists on the actual side.
    Remove,
    /// The old position of a relocated item.
    MoveSource,
    /// The new position of a relocated item.
    MoveTarget,
}

/// One entry of the reconciliation output.
///
/// `actual_index` and `expected_index` always refer to the pristine input
/// sequences (or to a property key for non-positional entries), never to
/// intermediate positions. A relocated item appears twice, as a
/// `MoveSource`/`MoveTarget` pair linked by `move_id`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEntry<T> {
    pub kind: ChangeKind,
    /// The actual-side item; for `Insert` entries, the inserted item itself.
    pub value: T,
    /// The expected-side item, absent for entries with no counterpart
    /// (`Insert`, `Remove`, `MoveSource`).
    pub expected: Option<T>,
    pub actual_index: Option<EntryIndex>,
    pub expected_index: Option<EntryIndex>,
    /// Links the two halves of one relocation; unique per moved item. Never
    /// present on `Equal` entries.
    pub move_id: Option<u64>,
    /// On move entries: whether the relocated item is equal, not merely
    /// similar, at its new position.
    pub same_under_equal: Option<bool>,
    /// Set on the final entry of the whole list only.
    pub is_last: bool,
}
