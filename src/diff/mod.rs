//! Timetable change detection.
//!
//! Compares two weekly snapshots at per-period granularity in three
//! stages:
//!
//! 1. **Split** (`split`): expand merged storage slots into one atomic
//!    slot per period, so differently merged plans stay comparable.
//! 2. **Diff** (`diff_day`): align two atomic days by period index and
//!    classify every subject (new, removed, updated, unchanged) and every
//!    period present on one side only (added, removed).
//! 3. **Coalesce** (`coalesce`): fold adjacent identical entries back into
//!    period ranges and drop entries that carry no change.
//!
//! `compare_snapshots` runs the pipeline over Monday..Friday.
//!
//! # Usage
//!
//! ```
//! use timetable_diff::diff::{coalesce, diff_day, split};
//! use timetable_diff::models::{ClassAssignment, DaySchedule, MergedSlot};
//!
//! let math = ClassAssignment::new("Math", "Dr. X", "101");
//! let base = DaySchedule::new().with_slot(MergedSlot::range(1..=2, vec![math.clone()]));
//! let compare = DaySchedule::new()
//!     .with_slot(MergedSlot::single(1, vec![math.clone()]))
//!     .with_slot(MergedSlot::single(2, vec![math.with_teacher("Dr. Y")]));
//!
//! let entries = coalesce(&diff_day(&split(&base), &split(&compare)));
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].periods, vec![2]);
//! ```

mod coalesce;
mod compare;
mod day;
pub mod matcher;
mod split;

pub use coalesce::{can_merge, coalesce, is_noop};
pub use compare::{
    compare_snapshots, compare_snapshots_with, diff_days, diff_days_with, diff_schedule_day,
    DiffSummary,
};
pub use day::{diff_day, diff_day_with, diff_subjects};
pub use split::{merge, split};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::models::ClassAssignment;

/// Decides whether two assignments are the same subject.
///
/// The portal has no stable subject identifier, so the default strategy
/// ([`matcher::ByName`]) compares subject labels. A renamed subject is
/// therefore reported as one removal plus one addition. Swap in another
/// matcher once a stable key exists; the differencer does not change.
pub trait SubjectMatcher: Send + Sync + Debug {
    /// Matcher name (e.g., "by-name").
    fn name(&self) -> &'static str;

    /// Whether `base` and `compare` denote the same subject.
    fn is_same_subject(&self, base: &ClassAssignment, compare: &ClassAssignment) -> bool;
}

/// An assignment field whose value changed between snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangedField {
    Room,
    Teacher,
}

/// Changed fields mapped to `[new value, old value]`.
pub type ChangedFields = BTreeMap<ChangedField, [String; 2]>;

/// How a subject differs between base and compare.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SubjectChange {
    /// Only in compare.
    New,
    /// Only in base.
    Removed,
    /// In both, with a different room or teacher.
    Updated {
        #[serde(rename = "changedFields")]
        changed_fields: ChangedFields,
    },
    /// In both, identical; also used for every subject of a period that
    /// exists on one side only.
    Unchanged,
}

/// A subject with its classification.
///
/// Serialized flat: `{"kind": "updated", "changedFields": {...}, "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubjectDiff {
    #[serde(flatten)]
    pub change: SubjectChange,
    /// The assignment as seen in compare (base for removals).
    pub data: ClassAssignment,
}

impl SubjectDiff {
    /// A subject present only in compare.
    pub fn new_subject(data: ClassAssignment) -> Self {
        Self {
            change: SubjectChange::New,
            data,
        }
    }

    /// A subject present only in base.
    pub fn removed(data: ClassAssignment) -> Self {
        Self {
            change: SubjectChange::Removed,
            data,
        }
    }

    /// A subject with changed fields.
    pub fn updated(data: ClassAssignment, changed_fields: ChangedFields) -> Self {
        Self {
            change: SubjectChange::Updated { changed_fields },
            data,
        }
    }

    /// A subject identical on both sides.
    pub fn unchanged(data: ClassAssignment) -> Self {
        Self {
            change: SubjectChange::Unchanged,
            data,
        }
    }

    /// Wire name of the change kind.
    pub fn kind(&self) -> &'static str {
        match self.change {
            SubjectChange::New => "new",
            SubjectChange::Removed => "removed",
            SubjectChange::Updated { .. } => "updated",
            SubjectChange::Unchanged => "unchanged",
        }
    }

    /// Whether the subject is identical on both sides.
    #[inline]
    pub fn is_unchanged(&self) -> bool {
        self.change == SubjectChange::Unchanged
    }

    /// Changed fields, present only for updates.
    pub fn changed_fields(&self) -> Option<&ChangedFields> {
        match &self.change {
            SubjectChange::Updated { changed_fields } => Some(changed_fields),
            _ => None,
        }
    }
}

/// Period-level classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    /// Period exists in both snapshots; subjects carry the changes.
    Default,
    /// Period exists only in compare.
    Added,
    /// Period exists only in base.
    Removed,
}

/// Diff entry for one period or a coalesced range of periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodDiff {
    pub kind: PeriodKind,
    /// 1-based periods, ascending and contiguous.
    pub periods: Vec<u32>,
    pub subjects: Vec<SubjectDiff>,
}

impl PeriodDiff {
    /// Creates an entry for a single period.
    pub fn single(kind: PeriodKind, period: u32, subjects: Vec<SubjectDiff>) -> Self {
        Self {
            kind,
            periods: vec![period],
            subjects,
        }
    }

    /// First covered period.
    pub fn first_period(&self) -> Option<u32> {
        self.periods.first().copied()
    }

    /// Last covered period.
    pub fn last_period(&self) -> Option<u32> {
        self.periods.last().copied()
    }
}

/// Surviving diff entries for one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayDiffResult {
    /// Position in the week (0 = Monday).
    pub day_index: usize,
    pub day_label: String,
    pub entries: Vec<PeriodDiff>,
}
