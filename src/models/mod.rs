//! Timetable domain models.
//!
//! Provides the normalized in-memory representation of a weekly class
//! schedule as the portal delivers it, plus the atomic (one period per
//! slot) form used for comparison.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `ClassAssignment` | One subject, teacher and room |
//! | `MergedSlot` | Storage form: run of periods with identical assignments |
//! | `AtomicSlot` | Comparison form: exactly one period |
//! | `DaySchedule` | One weekday, positionally identified |
//! | `ScheduleSnapshot` | Monday..Friday revision keyed by start date |

mod assignment;
mod period_time;
mod slot;
mod snapshot;

pub use assignment::ClassAssignment;
pub use period_time::{ClockTime, PeriodTime};
pub use slot::{AtomicSlot, DaySchedule, MergedSlot};
pub use snapshot::{weekday_label, ScheduleSnapshot, SCHOOL_DAYS, WEEKDAY_LABELS};
