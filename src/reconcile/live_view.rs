use std::fmt::Debug;

use super::change_entry::{ChangeEntry, ChangeKind};
use crate::{
    alignment::AlignmentOp, equivalence::Equivalence, types::entry_index::EntryIndex,
};

/// Working representation of one tracked item. Owned exclusively by a single
/// reconciliation call and converted 1:1 into [`ChangeEntry`]s at the end.
///
/// `actual_index` stays pristine throughout; positions in the slot list
/// shift as move targets and inserts are spliced in.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Slot<T> {
    pub kind: ChangeKind,
    pub value: T,
    pub expected: Option<T>,
    pub actual_index: Option<usize>,
    pub expected_index: Option<usize>,
    pub move_id: Option<u64>,
    pub same_under_equal: Option<bool>,
}

impl<T> Slot<T> {
    fn seeded(value: T, actual_index: usize) -> Self {
        Self {
            kind: ChangeKind::Similar,
            value,
            expected: None,
            actual_index: Some(actual_index),
            expected_index: None,
            move_id: None,
            same_under_equal: None,
        }
    }
}

/// The live, mutating view of the actual sequence.
///
/// Seeded with one `Similar` slot per actual item, then transformed by the
/// edit script in a fixed phase order: removes, moves, inserts. Each phase
/// addresses the list through [`LiveView::live_index`], which re-derives the
/// coordinate correction from the current slot kinds instead of carrying
/// precomputed offsets.
#[derive(Debug)]
pub(crate) struct LiveView<T> {
    slots: Vec<Slot<T>>,
    next_move_id: u64,
}

impl<T> LiveView<T>
where
    T: PartialEq + Clone + Debug,
{
    pub fn seed(actual: &[T]) -> Self {
        Self {
            slots: actual
                .iter()
                .enumerate()
                .map(|(index, value)| Slot::seeded(value.clone(), index))
                .collect(),
            next_move_id: 0,
        }
    }

    /// The position in the slot list with exactly `pristine` not-removed,
    /// not-moved-away slots before it.
    fn live_index(&self, pristine: usize) -> usize {
        let mut live_seen = 0;
        let mut position = 0;
        while position < self.slots.len() && live_seen < pristine {
            if !matches!(
                self.slots[position].kind,
                ChangeKind::Remove | ChangeKind::MoveSource
            ) {
                live_seen += 1;
            }
            position += 1;
        }

        position
    }

    /// Applies the whole edit script. The phase order matters: removes and
    /// moves consume slots that later phases' coordinates already discount.
    pub fn apply(&mut self, operations: &[AlignmentOp<T>]) {
        self.apply_removes(operations);
        self.apply_moves(operations);
        self.apply_inserts(operations);
    }

    fn apply_removes(&mut self, operations: &[AlignmentOp<T>]) {
        let mut removed_so_far = 0;
        for operation in operations {
            if let AlignmentOp::Remove { index, count } = *operation {
                let start = removed_so_far + index;
                for slot in &mut self.slots[start..start + count] {
                    slot.kind = ChangeKind::Remove;
                }
                removed_so_far += count;
            }
        }
    }

    fn apply_moves(&mut self, operations: &[AlignmentOp<T>]) {
        for operation in operations {
            if let AlignmentOp::Move { from, to, count } = *operation {
                // Addressing one-past the source and stepping back avoids
                // ambiguity when `from` lands on a boundary between dead and
                // live slots.
                let source_start = self.live_index(from + 1) - 1;

                let mut targets = Vec::with_capacity(count);
                for offset in 0..count {
                    let move_id = self.next_move_id;
                    self.next_move_id += 1;

                    let source = &mut self.slots[source_start + offset];
                    source.kind = ChangeKind::MoveSource;
                    source.move_id = Some(move_id);
                    targets.push(Slot {
                        kind: ChangeKind::MoveTarget,
                        value: source.value.clone(),
                        expected: None,
                        actual_index: source.actual_index,
                        expected_index: None,
                        move_id: Some(move_id),
                        same_under_equal: None,
                    });
                }

                let destination = self.live_index(to);
                self.slots.splice(destination..destination, targets);
            }
        }
    }

    fn apply_inserts(&mut self, operations: &[AlignmentOp<T>]) {
        for operation in operations {
            if let AlignmentOp::Insert { index, values } = operation {
                let added: Vec<Slot<T>> = values
                    .iter()
                    .map(|value| Slot {
                        kind: ChangeKind::Insert,
                        value: value.clone(),
                        expected: None,
                        actual_index: None,
                        expected_index: Some(*index),
                        move_id: None,
                        same_under_equal: None,
                    })
                    .collect();

                let destination = self.live_index(*index);
                self.slots.splice(destination..destination, added);
            }
        }
    }

    /// Pairs every surviving slot with the expected item at its live
    /// position. Move targets are included so that their equality at the new
    /// position can be judged during promotion.
    pub fn assign_correspondence(&mut self, expected: &[T]) {
        let mut live_position = 0;
        for slot in &mut self.slots {
            match slot.kind {
                ChangeKind::Remove | ChangeKind::MoveSource => {}
                ChangeKind::Similar | ChangeKind::MoveTarget => {
                    if let Some(counterpart) = expected.get(live_position) {
                        slot.expected = Some(counterpart.clone());
                        slot.expected_index = Some(live_position);
                    }
                    live_position += 1;
                }
                ChangeKind::Equal | ChangeKind::Insert => live_position += 1,
            }
        }
    }

    /// The number of true conflicts: slots that neither correspond nor
    /// belong to a relocation.
    pub fn conflicts(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| {
                !matches!(
                    slot.kind,
                    ChangeKind::Similar | ChangeKind::MoveSource | ChangeKind::MoveTarget
                )
            })
            .count()
    }

    /// Discards the edit-script result in favor of a replacement slot list.
    pub fn replace(&mut self, slots: Vec<Slot<T>>) { self.slots = slots; }

    /// Promotes `Similar` slots to `Equal` under the strict predicate (the
    /// alignment only guaranteed `equal` OR `similar` held at match time)
    /// and records `same_under_equal` on both halves of every move pair.
    pub fn promote(&mut self, equivalence: &Equivalence<'_, T>) {
        let mut move_verdicts: Vec<(u64, bool)> = Vec::new();

        for slot in &mut self.slots {
            let strictly_equal = match (&slot.expected, slot.actual_index, slot.expected_index) {
                (Some(expected), Some(actual_index), Some(expected_index)) => equivalence.equal(
                    &slot.value,
                    expected,
                    &EntryIndex::Position(actual_index),
                    &EntryIndex::Position(expected_index),
                ),
                _ => false,
            };

            match slot.kind {
                ChangeKind::Similar if strictly_equal => slot.kind = ChangeKind::Equal,
                ChangeKind::MoveTarget => {
                    slot.same_under_equal = Some(strictly_equal);
                    if let Some(move_id) = slot.move_id {
                        move_verdicts.push((move_id, strictly_equal));
                    }
                }
                _ => {}
            }
        }

        for slot in &mut self.slots {
            if slot.kind == ChangeKind::MoveSource {
                if let Some(move_id) = slot.move_id {
                    if let Some(&(_, verdict)) = move_verdicts
                        .iter()
                        .find(|&&(candidate, _)| candidate == move_id)
                    {
                        slot.same_under_equal = Some(verdict);
                    }
                }
            }
        }
    }

    pub fn into_entries(self) -> Vec<ChangeEntry<T>> {
        self.slots
            .into_iter()
            .map(|slot| ChangeEntry {
                kind: slot.kind,
                value: slot.value,
                expected: slot.expected,
                actual_index: slot.actual_index.map(EntryIndex::Position),
                expected_index: slot.expected_index.map(EntryIndex::Position),
                move_id: slot.move_id,
                same_under_equal: slot.same_under_equal,
                is_last: false,
            })
            .collect()
    }
}
