//! Snapshot-level comparison.
//!
//! Runs split, diff and coalesce for every weekday index and keeps only
//! the days with surviving entries.

use log::debug;
use serde::{Deserialize, Serialize};

use super::matcher::ByName;
use super::{
    coalesce, diff_day, diff_day_with, split, DayDiffResult, PeriodDiff, PeriodKind, SubjectChange,
    SubjectMatcher,
};
use crate::error::{DiffError, DiffResult};
use crate::models::{weekday_label, DaySchedule, ScheduleSnapshot};
use crate::validation::validate_snapshot;

/// Compares two snapshots day by day, matching subjects by name.
///
/// # Errors
/// `DiffError::InvalidSnapshot` if either snapshot fails validation.
pub fn compare_snapshots(
    base: &ScheduleSnapshot,
    compare: &ScheduleSnapshot,
) -> DiffResult<Vec<DayDiffResult>> {
    compare_snapshots_with(&ByName, base, compare)
}

/// Compares two snapshots with a custom subject matcher.
pub fn compare_snapshots_with<M: SubjectMatcher + ?Sized>(
    matcher: &M,
    base: &ScheduleSnapshot,
    compare: &ScheduleSnapshot,
) -> DiffResult<Vec<DayDiffResult>> {
    ensure_valid("base", base)?;
    ensure_valid("compare", compare)?;

    let results = diff_days_with(matcher, &base.days, &compare.days);
    debug!(
        "compared plan {} against {} using {}: {} day(s) changed",
        base.start_date,
        compare.start_date,
        matcher.name(),
        results.len()
    );
    Ok(results)
}

/// Diffs already validated day lists, matching subjects by name.
pub fn diff_days(base: &[DaySchedule], compare: &[DaySchedule]) -> Vec<DayDiffResult> {
    diff_days_with(&ByName, base, compare)
}

/// Diffs already validated day lists with a custom subject matcher.
///
/// Days are aligned by index; only indices present on both sides are
/// compared.
pub fn diff_days_with<M: SubjectMatcher + ?Sized>(
    matcher: &M,
    base: &[DaySchedule],
    compare: &[DaySchedule],
) -> Vec<DayDiffResult> {
    base.iter()
        .zip(compare)
        .enumerate()
        .filter_map(|(day_index, (b, c))| {
            let entries = coalesce(&diff_day_with(matcher, &split(b), &split(c)));
            if entries.is_empty() {
                return None;
            }
            Some(DayDiffResult {
                day_index,
                day_label: weekday_label(day_index).unwrap_or("Unknown").to_string(),
                entries,
            })
        })
        .collect()
}

/// Full pipeline for a single day pair.
///
/// Returns `None` when nothing changed.
pub fn diff_schedule_day(base: &DaySchedule, compare: &DaySchedule) -> Option<Vec<PeriodDiff>> {
    let entries = coalesce(&diff_day(&split(base), &split(compare)));
    (!entries.is_empty()).then_some(entries)
}

fn ensure_valid(role: &'static str, snapshot: &ScheduleSnapshot) -> DiffResult<()> {
    validate_snapshot(snapshot).map_err(|errors| DiffError::InvalidSnapshot { role, errors })
}

/// Change counts across a diff result, for notification copy.
///
/// Periods are counted individually; subjects are counted once per
/// coalesced entry, so a teacher change spanning a double period counts
/// as one update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSummary {
    pub changed_days: usize,
    pub added_periods: usize,
    pub removed_periods: usize,
    pub new_subjects: usize,
    pub removed_subjects: usize,
    pub updated_subjects: usize,
}

impl DiffSummary {
    /// Tallies a diff result.
    pub fn from_results(results: &[DayDiffResult]) -> Self {
        let mut summary = Self {
            changed_days: results.len(),
            ..Self::default()
        };

        for entry in results.iter().flat_map(|day| &day.entries) {
            match entry.kind {
                PeriodKind::Added => summary.added_periods += entry.periods.len(),
                PeriodKind::Removed => summary.removed_periods += entry.periods.len(),
                PeriodKind::Default => {
                    for subject in &entry.subjects {
                        match subject.change {
                            SubjectChange::New => summary.new_subjects += 1,
                            SubjectChange::Removed => summary.removed_subjects += 1,
                            SubjectChange::Updated { .. } => summary.updated_subjects += 1,
                            SubjectChange::Unchanged => {}
                        }
                    }
                }
            }
        }

        summary
    }

    /// Whether nothing changed.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
