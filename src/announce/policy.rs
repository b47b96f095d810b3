//! Change-announcement policy.
//!
//! Decides whether a freshly fetched current schedule differs enough from
//! the cached baseline, and is recent enough, to surface to the user.
//!
//! # Rules (in order)
//! 1. No cached record: first run, store a baseline, nothing to announce.
//! 2. Same start date and identical days: nothing changed.
//! 3. Start date older than `max_age_days`: assume the user has seen it.
//! 4. Coalesced diff is empty: only storage grouping changed.
//! 5. Otherwise announce. `announce` is `true` when the start date was
//!    already known as upcoming (a confirmed change to an expected plan)
//!    and `false` for a plan nobody saw coming.
//!
//! The cache is refreshed in every case except 5; there the caller calls
//! [`acknowledge`] once the user has seen the change.

use chrono::{Local, NaiveDate};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::{CacheRecord, PolicyConfig, SnapshotCache};
use crate::diff::{diff_days, DayDiffResult};
use crate::error::{DiffError, DiffResult};
use crate::models::ScheduleSnapshot;
use crate::validation::{validate_days, validate_snapshot};

/// A change worth surfacing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// `true` if the plan was known as upcoming, `false` for a surprise plan.
    pub announce: bool,
    /// Changed days, cached baseline as base and the fresh snapshot as compare.
    pub diff: Vec<DayDiffResult>,
}

/// Outcome of evaluating the policy, before any cache write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyDecision {
    /// No cached baseline existed.
    FirstRun,
    /// Same revision, same content.
    Unchanged,
    /// Revision started `age_days` ago, past the threshold.
    Stale { age_days: i64 },
    /// Content differs only in how periods are merged.
    NoEffectiveChange,
    /// A change to surface.
    Changed(Announcement),
}

impl PolicyDecision {
    /// Whether the cached baseline should be replaced now.
    pub fn refreshes_cache(&self) -> bool {
        !matches!(self, PolicyDecision::Changed(_))
    }

    /// The announcement, if the decision carries one.
    pub fn into_announcement(self) -> Option<Announcement> {
        match self {
            PolicyDecision::Changed(announcement) => Some(announcement),
            _ => None,
        }
    }
}

/// Change-announcement policy.
#[derive(Debug, Clone, Default)]
pub struct AnnouncementPolicy {
    config: PolicyConfig,
}

impl AnnouncementPolicy {
    /// Creates a policy with default settings (7-day threshold).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a policy from a validated configuration.
    pub fn with_config(config: PolicyConfig) -> DiffResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Evaluates the rules without touching any cache.
    ///
    /// `today` is the reference date for the staleness rule.
    ///
    /// # Errors
    /// `DiffError::InvalidSnapshot` if `current` or the cached days are
    /// malformed.
    pub fn decide(
        &self,
        current: &ScheduleSnapshot,
        cached: Option<&CacheRecord>,
        today: NaiveDate,
    ) -> DiffResult<PolicyDecision> {
        validate_snapshot(current).map_err(|errors| DiffError::InvalidSnapshot {
            role: "current",
            errors,
        })?;

        let Some(cached) = cached else {
            return Ok(PolicyDecision::FirstRun);
        };

        validate_days(&cached.days).map_err(|errors| DiffError::InvalidSnapshot {
            role: "cached",
            errors,
        })?;

        if cached.start_date == current.start_date && current.same_days(&cached.days) {
            return Ok(PolicyDecision::Unchanged);
        }

        let age_days = (today - current.start_date).num_days();
        if age_days > self.config.max_age_days {
            return Ok(PolicyDecision::Stale { age_days });
        }

        let diff = diff_days(&cached.days, &current.days);
        if diff.is_empty() {
            return Ok(PolicyDecision::NoEffectiveChange);
        }

        Ok(PolicyDecision::Changed(Announcement {
            announce: cached.knows_upcoming(current.start_date),
            diff,
        }))
    }

    /// Evaluates the rules and refreshes the cache where they say so.
    ///
    /// Returns the announcement, or `None` when there is nothing to show.
    pub fn should_announce<C: SnapshotCache + ?Sized>(
        &self,
        current: &ScheduleSnapshot,
        cache: &mut C,
        today: NaiveDate,
    ) -> DiffResult<Option<Announcement>> {
        let cached = cache.load()?;
        let decision = self.decide(current, cached.as_ref(), today)?;

        match &decision {
            PolicyDecision::Changed(announcement) => info!(
                "plan starting {} changed on {} day(s), expected: {}",
                current.start_date,
                announcement.diff.len(),
                announcement.announce
            ),
            other => debug!("plan starting {}: {other:?}", current.start_date),
        }

        if decision.refreshes_cache() {
            cache.store(CacheRecord::refreshed(cached.as_ref(), current))?;
        }

        Ok(decision.into_announcement())
    }

    /// [`should_announce`](Self::should_announce) against the local date.
    pub fn should_announce_now<C: SnapshotCache + ?Sized>(
        &self,
        current: &ScheduleSnapshot,
        cache: &mut C,
    ) -> DiffResult<Option<Announcement>> {
        self.should_announce(current, cache, Local::now().date_naive())
    }
}

/// Stores `current` as the new baseline after the user has seen a change.
pub fn acknowledge<C: SnapshotCache + ?Sized>(
    current: &ScheduleSnapshot,
    cache: &mut C,
) -> DiffResult<()> {
    let cached = cache.load()?;
    debug!("acknowledged plan starting {}", current.start_date);
    cache.store(CacheRecord::refreshed(cached.as_ref(), current))
}

/// Records upcoming revision start dates in the cached record.
///
/// Returns `false` when there is no record yet to attach them to.
pub fn remember_upcoming<C: SnapshotCache + ?Sized>(
    cache: &mut C,
    dates: impl IntoIterator<Item = NaiveDate>,
) -> DiffResult<bool> {
    let Some(record) = cache.load()? else {
        debug!("no cached plan yet, upcoming dates not recorded");
        return Ok(false);
    };
    cache.store(record.with_upcoming(dates))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::announce::MemoryCache;
    use crate::diff::PeriodKind;
    use crate::models::{ClassAssignment, DaySchedule, MergedSlot};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn monday(teacher: &str) -> DaySchedule {
        DaySchedule::new()
            .with_slot(MergedSlot::range(
                1..=2,
                vec![ClassAssignment::new("Math", teacher, "101")],
            ))
            .with_slot(MergedSlot::single(
                3,
                vec![ClassAssignment::new("Art", "Ms. A", "B2")],
            ))
    }

    fn plan(start: &str, teacher: &str) -> ScheduleSnapshot {
        ScheduleSnapshot::new(date(start))
            .with_day(0, monday(teacher))
            .current()
    }

    #[test]
    fn test_first_run_stores_baseline() {
        let policy = AnnouncementPolicy::new();
        let mut cache = MemoryCache::new();
        let current = plan("2024-01-08", "Dr. X");

        let result = policy
            .should_announce(&current, &mut cache, date("2024-01-09"))
            .unwrap();
        assert!(result.is_none());
        assert_eq!(cache.record(), Some(&CacheRecord::from_snapshot(&current)));
    }

    #[test]
    fn test_identical_snapshot_is_idempotent() {
        let policy = AnnouncementPolicy::new();
        let current = plan("2024-01-08", "Dr. X");
        let record = CacheRecord::from_snapshot(&current).with_upcoming([date("2024-01-15")]);
        let mut cache = MemoryCache::with_record(record.clone());

        let result = policy
            .should_announce(&current, &mut cache, date("2024-01-09"))
            .unwrap();
        assert!(result.is_none());
        assert_eq!(cache.record(), Some(&record));
    }

    #[test]
    fn test_stale_snapshot_refreshes_silently() {
        let policy = AnnouncementPolicy::new();
        let cached = plan("2024-01-08", "Dr. X");
        let mut cache = MemoryCache::with_record(CacheRecord::from_snapshot(&cached));
        let current = plan("2023-12-01", "Dr. Y");

        let decision = policy
            .decide(&current, cache.record(), date("2024-01-09"))
            .unwrap();
        assert!(matches!(decision, PolicyDecision::Stale { age_days } if age_days > 7));

        let result = policy
            .should_announce(&current, &mut cache, date("2024-01-09"))
            .unwrap();
        assert!(result.is_none());
        assert_eq!(cache.record().map(|r| r.start_date), Some(date("2023-12-01")));
    }

    #[test]
    fn test_exactly_threshold_is_not_stale() {
        let policy = AnnouncementPolicy::new();
        let cached = CacheRecord::from_snapshot(&plan("2024-01-01", "Dr. X"));
        let current = plan("2024-01-08", "Dr. Y");

        let decision = policy
            .decide(&current, Some(&cached), date("2024-01-15"))
            .unwrap();
        assert!(matches!(decision, PolicyDecision::Changed(_)));
    }

    #[test]
    fn test_regrouping_only_is_no_effective_change() {
        let policy = AnnouncementPolicy::new();
        let cached = CacheRecord::from_snapshot(&plan("2024-01-08", "Dr. X"));
        let regrouped = DaySchedule::new()
            .with_slot(MergedSlot::single(1, vec![ClassAssignment::new("Math", "Dr. X", "101")]))
            .with_slot(MergedSlot::single(2, vec![ClassAssignment::new("Math", "Dr. X", "101")]))
            .with_slot(MergedSlot::single(3, vec![ClassAssignment::new("Art", "Ms. A", "B2")]));
        let current = ScheduleSnapshot::new(date("2024-01-08")).with_day(0, regrouped);

        let decision = policy
            .decide(&current, Some(&cached), date("2024-01-09"))
            .unwrap();
        assert_eq!(decision, PolicyDecision::NoEffectiveChange);
        assert!(decision.refreshes_cache());
    }

    #[test]
    fn test_surprise_plan_defers_refresh() {
        let policy = AnnouncementPolicy::new();
        let cached = CacheRecord::from_snapshot(&plan("2024-01-08", "Dr. X"));
        let mut cache = MemoryCache::with_record(cached.clone());
        let current = plan("2024-01-15", "Dr. Y");

        let announcement = policy
            .should_announce(&current, &mut cache, date("2024-01-15"))
            .unwrap()
            .unwrap();
        assert!(!announcement.announce);
        assert_eq!(announcement.diff.len(), 1);
        assert_eq!(announcement.diff[0].day_label, "Monday");
        assert_eq!(announcement.diff[0].entries[0].kind, PeriodKind::Default);
        assert_eq!(announcement.diff[0].entries[0].periods, vec![1, 2]);

        // Not acknowledged yet: baseline untouched.
        assert_eq!(cache.record(), Some(&cached));

        acknowledge(&current, &mut cache).unwrap();
        assert_eq!(cache.record().map(|r| r.start_date), Some(date("2024-01-15")));
        assert!(policy
            .should_announce(&current, &mut cache, date("2024-01-15"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_known_upcoming_plan_is_announced() {
        let policy = AnnouncementPolicy::new();
        let mut cache =
            MemoryCache::with_record(CacheRecord::from_snapshot(&plan("2024-01-08", "Dr. X")));
        assert!(remember_upcoming(&mut cache, [date("2024-01-15")]).unwrap());

        let announcement = policy
            .should_announce(&plan("2024-01-15", "Dr. Y"), &mut cache, date("2024-01-14"))
            .unwrap()
            .unwrap();
        assert!(announcement.announce);
    }

    #[test]
    fn test_remember_upcoming_without_record() {
        let mut cache = MemoryCache::new();
        assert!(!remember_upcoming(&mut cache, [date("2024-01-15")]).unwrap());
        assert!(cache.record().is_none());
    }

    #[test]
    fn test_invalid_current_is_rejected() {
        let policy = AnnouncementPolicy::new();
        let mut cache = MemoryCache::new();
        let mut current = plan("2024-01-08", "Dr. X");
        current.days.truncate(2);

        let err = policy
            .should_announce(&current, &mut cache, date("2024-01-09"))
            .unwrap_err();
        assert!(matches!(err, DiffError::InvalidSnapshot { role: "current", .. }));
        assert!(cache.record().is_none());
    }

    #[test]
    fn test_custom_threshold() {
        let policy =
            AnnouncementPolicy::with_config(PolicyConfig::default().with_max_age_days(30)).unwrap();
        let cached = CacheRecord::from_snapshot(&plan("2024-01-08", "Dr. X"));
        let current = plan("2023-12-20", "Dr. Y");

        let decision = policy
            .decide(&current, Some(&cached), date("2024-01-09"))
            .unwrap();
        assert!(matches!(decision, PolicyDecision::Changed(_)));

        let negative = PolicyConfig::default().with_max_age_days(-3);
        assert!(AnnouncementPolicy::with_config(negative).is_err());
    }
}
