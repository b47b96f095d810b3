//! Period slot models.
//!
//! The upstream storage format merges consecutive periods that carry the
//! same assignment list into a single [`MergedSlot`]. Comparison works on
//! [`AtomicSlot`]s instead, one per period.
//!
//! # Period Numbering
//! Periods are 1-based. Within a valid [`DaySchedule`] the periods run
//! `1, 2, 3, ...` without gaps, so the atomic slot at index `i` is period
//! `i + 1`. A free period is a slot with no assignments.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::ClassAssignment;

/// A single period with its assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomicSlot {
    /// Period number (1-based).
    pub period: u32,
    /// Subjects held during this period (split classes have several).
    pub assignments: Vec<ClassAssignment>,
}

impl AtomicSlot {
    /// Creates an atomic slot.
    pub fn new(period: u32, assignments: Vec<ClassAssignment>) -> Self {
        Self {
            period,
            assignments,
        }
    }

    /// Creates a free period.
    pub fn free(period: u32) -> Self {
        Self::new(period, Vec::new())
    }
}

/// A contiguous run of periods sharing an identical assignment list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedSlot {
    /// Covered periods (ascending, contiguous).
    pub periods: Vec<u32>,
    /// Subjects held during every one of `periods`.
    pub assignments: Vec<ClassAssignment>,
}

impl MergedSlot {
    /// Creates a slot covering exactly one period.
    pub fn single(period: u32, assignments: Vec<ClassAssignment>) -> Self {
        Self {
            periods: vec![period],
            assignments,
        }
    }

    /// Creates a slot covering an inclusive period range.
    pub fn range(periods: RangeInclusive<u32>, assignments: Vec<ClassAssignment>) -> Self {
        Self {
            periods: periods.collect(),
            assignments,
        }
    }

    /// First covered period, if any.
    pub fn first_period(&self) -> Option<u32> {
        self.periods.first().copied()
    }

    /// Last covered period, if any.
    pub fn last_period(&self) -> Option<u32> {
        self.periods.last().copied()
    }

    /// Whether `periods` is ascending and gap-free.
    pub fn is_contiguous(&self) -> bool {
        self.periods
            .windows(2)
            .all(|w| w[0].checked_add(1) == Some(w[1]))
    }
}

/// One weekday's schedule in storage (merged) form.
///
/// The weekday itself is not stored; it is the position of the day inside
/// [`ScheduleSnapshot::days`](super::ScheduleSnapshot::days).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DaySchedule {
    /// Merged slots, ordered by period.
    pub slots: Vec<MergedSlot>,
}

impl DaySchedule {
    /// Creates an empty day.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slot.
    pub fn with_slot(mut self, slot: MergedSlot) -> Self {
        self.slots.push(slot);
        self
    }

    /// Number of periods covered by all slots.
    pub fn period_count(&self) -> usize {
        self.slots.iter().map(|s| s.periods.len()).sum()
    }

    /// Whether the day has no periods at all.
    pub fn is_empty(&self) -> bool {
        self.period_count() == 0
    }
}
