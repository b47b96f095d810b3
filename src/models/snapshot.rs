//! Weekly schedule snapshot model.
//!
//! A snapshot is one immutable revision of a class's weekly timetable as
//! of a given start date. The fetch layer builds snapshots; the engine
//! only reads them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DaySchedule, PeriodTime};

/// Number of school days in a snapshot (Monday to Friday).
pub const SCHOOL_DAYS: usize = 5;

/// Weekday labels, indexed by position in [`ScheduleSnapshot::days`].
pub const WEEKDAY_LABELS: [&str; SCHOOL_DAYS] =
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Label for a day index, or `None` past Friday.
pub fn weekday_label(day_index: usize) -> Option<&'static str> {
    WEEKDAY_LABELS.get(day_index).copied()
}

/// One revision of a weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSnapshot {
    /// Monday..Friday, index-aligned.
    pub days: Vec<DaySchedule>,
    /// Period clock times as delivered upstream (`period_times[row][col]`).
    #[serde(default)]
    pub period_times: Vec<Vec<PeriodTime>>,
    /// First day this revision is valid. Identity of the revision.
    pub start_date: NaiveDate,
    /// Last day this revision is valid. `None` while the current revision
    /// is still open-ended.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Whether this is the currently active revision.
    #[serde(default)]
    pub is_current: bool,
}

impl ScheduleSnapshot {
    /// Creates a snapshot with five empty days.
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            days: vec![DaySchedule::new(); SCHOOL_DAYS],
            period_times: Vec::new(),
            start_date,
            end_date: None,
            is_current: false,
        }
    }

    /// Replaces the schedule of one weekday.
    ///
    /// Indices past the stored days are ignored.
    pub fn with_day(mut self, day_index: usize, day: DaySchedule) -> Self {
        if let Some(slot) = self.days.get_mut(day_index) {
            *slot = day;
        }
        self
    }

    /// Sets the end date.
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Marks the snapshot as the current revision.
    pub fn current(mut self) -> Self {
        self.is_current = true;
        self
    }

    /// Sets the period clock times.
    pub fn with_period_times(mut self, period_times: Vec<Vec<PeriodTime>>) -> Self {
        self.period_times = period_times;
        self
    }

    /// Whether the revision covers `date`.
    ///
    /// An open-ended revision covers every date from its start onwards.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && self.end_date.map_or(true, |end| date <= end)
    }

    /// Whether both snapshots hold the same day content (merged form).
    pub fn same_days(&self, other: &[DaySchedule]) -> bool {
        self.days.as_slice() == other
    }
}
