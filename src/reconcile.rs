mod change_entry;
mod error;
mod fallback;
mod live_view;
mod options;
mod properties;

use std::fmt::Debug;

pub use change_entry::{ChangeEntry, ChangeKind};
pub use error::ReconcileError;
use live_view::LiveView;
pub use options::{OptionsInput, PropertyInclusion, ReconcileOptions};

use crate::{
    alignment,
    equivalence::Equivalence,
    types::{entry_index::EntryIndex, sequence::SequenceLike},
};

/// Computes an annotated change-list describing how to turn `actual` into
/// `expected`, for rendering human-friendly diffs.
///
/// Items that survive on both sides come back as [`ChangeKind::Equal`] or
/// [`ChangeKind::Similar`] entries, relocated items as linked
/// [`ChangeKind::MoveSource`]/[`ChangeKind::MoveTarget`] pairs, and items
/// with no counterpart as [`ChangeKind::Insert`]/[`ChangeKind::Remove`]
/// entries. When the edit script ends up noisier than simply lining the two
/// sequences up row by row, the row-by-row result is returned instead (see
/// [`ReconcileOptions::fallback_to_item_by_item_diff`]).
///
/// The whole computation is a pure, synchronous function of its inputs and
/// the supplied predicates.
///
/// # Errors
///
/// Returns [`ReconcileError::InvalidOptions`] when the options position
/// receives a legacy-style bare boolean or key list.
///
/// ```
/// use seq_changes::{reconcile, ChangeKind, Equivalence, ReconcileOptions};
///
/// let changes = reconcile(
///     &[1, 2, 4][..],
///     &[1, 3, 4][..],
///     &Equivalence::new(),
///     ReconcileOptions::default(),
/// )
/// .unwrap();
///
/// let kinds: Vec<ChangeKind> = changes.iter().map(|entry| entry.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![ChangeKind::Equal, ChangeKind::Similar, ChangeKind::Equal]
/// );
/// assert!(changes[2].is_last);
/// ```
pub fn reconcile<T, A, E>(
    actual: &A,
    expected: &E,
    equivalence: &Equivalence<'_, T>,
    options: impl Into<OptionsInput>,
) -> Result<Vec<ChangeEntry<T>>, ReconcileError>
where
    T: PartialEq + Clone + Debug,
    A: SequenceLike<T> + ?Sized,
    E: SequenceLike<T> + ?Sized,
{
    let options = options.into().into_options()?;

    let actual_items: Vec<T> = (0..actual.len()).map(|i| actual.item(i).clone()).collect();
    let expected_items: Vec<T> = (0..expected.len())
        .map(|i| expected.item(i).clone())
        .collect();

    let operations = alignment::align(&actual_items, &expected_items, |a, b, i, j| {
        equivalence.corresponds(a, b, &EntryIndex::Position(i), &EntryIndex::Position(j))
    });

    let mut view = LiveView::seed(&actual_items);
    view.apply(&operations);
    view.assign_correspondence(&expected_items);

    if options.fallback_to_item_by_item_diff {
        if let Some(slots) =
            fallback::item_by_item(&actual_items, &expected_items, equivalence, view.conflicts())
        {
            view.replace(slots);
        }
    }

    view.promote(equivalence);

    let mut entries = view.into_entries();
    properties::reconcile_properties(
        actual,
        expected,
        equivalence,
        &options.include_non_numerical_properties,
        &mut entries,
    );

    if let Some(last) = entries.last_mut() {
        last.is_last = true;
    }

    Ok(entries)
}
