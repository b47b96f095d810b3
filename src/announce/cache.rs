//! Snapshot cache record and store.
//!
//! The cache holds a single "last known current schedule" record per user
//! session. Storage is owned by the caller; the engine only reads and
//! replaces the record through [`SnapshotCache`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DiffResult;
use crate::models::{DaySchedule, ScheduleSnapshot};

/// The cached baseline a fresh snapshot is compared against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheRecord {
    /// Start date of the cached revision.
    pub start_date: NaiveDate,
    /// Cached day content (merged form).
    pub days: Vec<DaySchedule>,
    /// Start dates of upcoming revisions the user already knows about.
    #[serde(default)]
    pub upcoming_start_dates: Vec<NaiveDate>,
}

impl CacheRecord {
    /// Creates a record from a snapshot, with no known upcoming revisions.
    pub fn from_snapshot(snapshot: &ScheduleSnapshot) -> Self {
        Self {
            start_date: snapshot.start_date,
            days: snapshot.days.clone(),
            upcoming_start_dates: Vec::new(),
        }
    }

    /// New baseline for `snapshot`, keeping the upcoming dates of `previous`.
    pub fn refreshed(previous: Option<&CacheRecord>, snapshot: &ScheduleSnapshot) -> Self {
        Self {
            upcoming_start_dates: previous
                .map(|p| p.upcoming_start_dates.clone())
                .unwrap_or_default(),
            ..Self::from_snapshot(snapshot)
        }
    }

    /// Adds upcoming start dates, keeping the list sorted and unique.
    pub fn with_upcoming(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.upcoming_start_dates.extend(dates);
        self.upcoming_start_dates.sort_unstable();
        self.upcoming_start_dates.dedup();
        self
    }

    /// Whether `start_date` was announced as upcoming before.
    pub fn knows_upcoming(&self, start_date: NaiveDate) -> bool {
        self.upcoming_start_dates.contains(&start_date)
    }
}

/// Single-slot store for the cached baseline.
///
/// Implementations wrap whatever the caller persists to (session storage,
/// a database row, a file). Errors should be reported as
/// [`DiffError::Cache`](crate::DiffError::Cache).
pub trait SnapshotCache {
    /// Reads the current record, if any.
    fn load(&self) -> DiffResult<Option<CacheRecord>>;

    /// Replaces the current record.
    fn store(&mut self, record: CacheRecord) -> DiffResult<()>;
}

/// In-memory cache.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    record: Option<CacheRecord>,
}

impl MemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache holding `record`.
    pub fn with_record(record: CacheRecord) -> Self {
        Self {
            record: Some(record),
        }
    }

    /// Current record.
    pub fn record(&self) -> Option<&CacheRecord> {
        self.record.as_ref()
    }
}

impl SnapshotCache for MemoryCache {
    fn load(&self) -> DiffResult<Option<CacheRecord>> {
        Ok(self.record.clone())
    }

    fn store(&mut self, record: CacheRecord) -> DiffResult<()> {
        self.record = Some(record);
        Ok(())
    }
}
