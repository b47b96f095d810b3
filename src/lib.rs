//! Timetable change detection for a school portal mirror.
//!
//! Given two snapshots of a weekly class schedule, determines per period
//! what changed (subject added or removed, teacher or room updated) and
//! reports it as compact period ranges. The portal stores consecutive
//! identical periods merged into one slot, so comparison runs as a
//! split → diff → coalesce pipeline.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ClassAssignment`, `MergedSlot`,
//!   `AtomicSlot`, `DaySchedule`, `ScheduleSnapshot`, `PeriodTime`
//! - **`validation`**: Input integrity checks (day count, contiguous periods,
//!   date range, clock times)
//! - **`diff`**: Slot splitting, day differencing, coalescing and the
//!   snapshot-level pipeline
//! - **`announce`**: Whether a fresh current schedule should be surfaced,
//!   against a caller-owned cached baseline
//!
//! # Scope
//!
//! The engine is pure and synchronous. Fetching snapshots, persisting the
//! cache and rendering diffs belong to the caller.

pub mod announce;
pub mod diff;
mod error;
pub mod models;
pub mod validation;

pub use error::{DiffError, DiffResult};
