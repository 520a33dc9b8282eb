mod myers;

use std::fmt::Debug;

/// One step of the edit script produced by [`align`].
///
/// `Remove` indices are expressed against the actual sequence with earlier
/// removes already applied; `Move::from` and `Move::to` against the live
/// view at processing time (removes applied, earlier move sources consumed,
/// earlier move targets spliced in); `Insert::index` against the pristine
/// expected sequence.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AlignmentOp<T> {
    Remove { index: usize, count: usize },
    Move { from: usize, to: usize, count: usize },
    Insert { index: usize, values: Vec<T> },
}

/// Replay model of the consumer's slot list while move coordinates are
/// computed. `Settled` slots (kept items and already-placed move targets)
/// carry the expected position they end up at; `AwaitingMove` slots still
/// occupy a live position but owe their final place to a later operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModelSlot {
    Dead,
    AwaitingMove { actual_index: usize },
    Settled { expected_index: usize },
}

/// Aligns the two sequences under `corresponds` and describes how to turn
/// `actual` into something order-compatible with `expected`.
///
/// Matching is Myers' diff; unmatched items on either side are then swept
/// for relocations: a removed actual item that corresponds to an inserted
/// expected item becomes a `Move` instead of a remove/insert pair (first
/// such insert wins, scanning in expected order). The remaining unmatched
/// items are grouped into contiguous `Remove` and `Insert` runs.
pub(crate) fn align<T, F>(actual: &[T], expected: &[T], corresponds: F) -> Vec<AlignmentOp<T>>
where
    T: PartialEq + Clone + Debug,
    F: Fn(&T, &T, usize, usize) -> bool,
{
    let pairs = myers::matched_pairs(actual, expected, &corresponds);

    let mut matched_actual = vec![false; actual.len()];
    let mut matched_expected = vec![false; expected.len()];
    for &(actual_index, expected_index) in &pairs {
        matched_actual[actual_index] = true;
        matched_expected[expected_index] = true;
    }

    let mut removed: Vec<usize> = (0..actual.len())
        .filter(|&index| !matched_actual[index])
        .collect();
    let inserted: Vec<usize> = (0..expected.len())
        .filter(|&index| !matched_expected[index])
        .collect();

    // Relocation sweep: pair up removed and inserted items that correspond.
    let mut relocations: Vec<(usize, usize)> = Vec::new();
    let mut claimed = vec![false; inserted.len()];
    removed.retain(|&actual_index| {
        for (slot, &expected_index) in inserted.iter().enumerate() {
            if !claimed[slot]
                && corresponds(
                    &actual[actual_index],
                    &expected[expected_index],
                    actual_index,
                    expected_index,
                )
            {
                claimed[slot] = true;
                relocations.push((actual_index, expected_index));
                return false;
            }
        }
        true
    });
    let inserted: Vec<usize> = inserted
        .into_iter()
        .zip(&claimed)
        .filter(|&(_, &was_claimed)| !was_claimed)
        .map(|(expected_index, _)| expected_index)
        .collect();

    let mut operations = Vec::new();

    // Removes, grouped into contiguous runs, each run's index discounted by
    // the items removed before it.
    let mut removed_so_far = 0;
    let mut cursor = 0;
    while cursor < removed.len() {
        let start = removed[cursor];
        let mut count = 1;
        while cursor + count < removed.len() && removed[cursor + count] == start + count {
            count += 1;
        }
        operations.push(AlignmentOp::Remove {
            index: start - removed_so_far,
            count,
        });
        removed_so_far += count;
        cursor += count;
    }

    // Moves, one per relocated item in destination order. Both coordinates
    // are derived by replaying the consumer's live view: a slot is dead once
    // removed or moved away, and each target is spliced in right after the
    // settled slots whose expected position precedes its own, keeping the
    // slots that survive to the end ordered by expected position. Slots
    // still awaiting their own later move occupy a live position but carry
    // no order key, so they never push a target past its place.
    relocations.sort_by_key(|&(_, expected_index)| expected_index);

    let mut matched_position = vec![None; actual.len()];
    for &(actual_index, expected_index) in &pairs {
        matched_position[actual_index] = Some(expected_index);
    }
    let mut model: Vec<ModelSlot> = (0..actual.len())
        .map(|index| {
            if removed.binary_search(&index).is_ok() {
                ModelSlot::Dead
            } else if let Some(expected_index) = matched_position[index] {
                ModelSlot::Settled { expected_index }
            } else {
                ModelSlot::AwaitingMove {
                    actual_index: index,
                }
            }
        })
        .collect();

    for &(actual_index, expected_index) in &relocations {
        let Some(position) = model
            .iter()
            .position(|&slot| slot == ModelSlot::AwaitingMove { actual_index })
        else {
            continue;
        };
        let live_through_source = model[..=position]
            .iter()
            .filter(|&&slot| slot != ModelSlot::Dead)
            .count();
        model[position] = ModelSlot::Dead;

        let mut destination = 0;
        for (candidate, &slot) in model.iter().enumerate() {
            if let ModelSlot::Settled {
                expected_index: settled,
            } = slot
            {
                if settled < expected_index {
                    destination = candidate + 1;
                }
            }
        }
        let to = model[..destination]
            .iter()
            .filter(|&&slot| slot != ModelSlot::Dead)
            .count();

        operations.push(AlignmentOp::Move {
            from: live_through_source - 1,
            to,
            count: 1,
        });
        model.insert(destination, ModelSlot::Settled { expected_index });
    }

    // Inserts, grouped into contiguous runs of pristine expected positions.
    let mut cursor = 0;
    while cursor < inserted.len() {
        let start = inserted[cursor];
        let mut count = 1;
        while cursor + count < inserted.len() && inserted[cursor + count] == start + count {
            count += 1;
        }
        operations.push(AlignmentOp::Insert {
            index: start,
            values: expected[start..start + count].to_vec(),
        });
        cursor += count;
    }

    operations
}
