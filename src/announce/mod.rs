//! Change-announcement workflow.
//!
//! Wraps the diff pipeline with the rules that decide whether a newly
//! fetched current schedule is news for the user, and with the cached
//! baseline it is compared against.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use timetable_diff::announce::{AnnouncementPolicy, MemoryCache};
//! use timetable_diff::models::ScheduleSnapshot;
//!
//! let policy = AnnouncementPolicy::new();
//! let mut cache = MemoryCache::new();
//! let today = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
//! let current = ScheduleSnapshot::new(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
//!
//! // First run only stores a baseline.
//! let result = policy.should_announce(&current, &mut cache, today).unwrap();
//! assert!(result.is_none());
//! assert!(cache.record().is_some());
//! ```

mod cache;
mod config;
mod policy;

pub use cache::{CacheRecord, MemoryCache, SnapshotCache};
pub use config::PolicyConfig;
pub use policy::{acknowledge, remember_upcoming, Announcement, AnnouncementPolicy, PolicyDecision};
