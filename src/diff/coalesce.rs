//! Coalescing of per-period diff entries.
//!
//! Adjacent entries with the same kind and the same subject set are folded
//! into one entry covering a period range. Entries that carry no change
//! are then dropped.
//!
//! # Merge predicate
//! Two entries merge iff:
//! - their kinds are equal,
//! - the right entry starts at the period after the left entry ends, and
//! - their subject lists are equal as sets (order-independent, comparing
//!   kind, changed fields and assignment).
//!
//! The predicate is an equivalence on contiguous runs, so a single left
//! fold reaches the fixed point; running `coalesce` again is a no-op.

use std::collections::BTreeSet;

use log::trace;

use super::{PeriodDiff, PeriodKind, SubjectDiff};

/// Merges adjacent identical entries and strips no-op entries.
///
/// Returns a new list; the input is not modified.
pub fn coalesce(diffs: &[PeriodDiff]) -> Vec<PeriodDiff> {
    let merged = diffs.iter().fold(Vec::<PeriodDiff>::new(), |mut acc, entry| {
        match acc.last_mut() {
            Some(last) if can_merge(last, entry) => {
                last.periods.extend_from_slice(&entry.periods);
            }
            _ => acc.push(entry.clone()),
        }
        acc
    });

    let merged_len = merged.len();
    let survivors: Vec<PeriodDiff> = merged.into_iter().filter(|e| !is_noop(e)).collect();
    trace!(
        "coalesced {} entries into {} ranges, {} with changes",
        diffs.len(),
        merged_len,
        survivors.len()
    );
    survivors
}

/// Whether `right` can be folded into `left`.
pub fn can_merge(left: &PeriodDiff, right: &PeriodDiff) -> bool {
    left.kind == right.kind
        && follows(left, right)
        && same_subjects(&left.subjects, &right.subjects)
}

/// Whether an entry carries no signal.
///
/// Only a shared period whose subjects are all unchanged is a no-op. Added
/// and removed periods always survive: their subjects are marked unchanged
/// but the period itself is the change.
pub fn is_noop(entry: &PeriodDiff) -> bool {
    entry.kind == PeriodKind::Default && entry.subjects.iter().all(SubjectDiff::is_unchanged)
}

fn follows(left: &PeriodDiff, right: &PeriodDiff) -> bool {
    matches!(
        (left.last_period(), right.first_period()),
        (Some(l), Some(r)) if l.checked_add(1) == Some(r)
    )
}

fn same_subjects(a: &[SubjectDiff], b: &[SubjectDiff]) -> bool {
    a.iter().collect::<BTreeSet<_>>() == b.iter().collect::<BTreeSet<_>>()
}
