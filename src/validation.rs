//! Input validation for schedule snapshots.
//!
//! Malformed snapshots are rejected before comparison instead of being
//! tolerated, since a gap or reordering inside a day would shift the
//! index alignment the differencer relies on. Detects:
//! - Day count other than five
//! - Slots with no periods
//! - Slots whose periods are not ascending and contiguous
//! - Days whose periods do not run `1, 2, 3, ...` without gaps
//! - End dates before start dates
//! - Out-of-range or inverted period clock times
//!
//! Duplicate subject names inside one slot are accepted; matching takes
//! the first one in list order.

use crate::models::{weekday_label, DaySchedule, ScheduleSnapshot, SCHOOL_DAYS};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Snapshot does not hold exactly five days.
    WrongDayCount,
    /// A merged slot covers no period.
    EmptySlot,
    /// A merged slot's periods are unordered or have gaps.
    NonContiguousPeriods,
    /// A day's periods do not continue from the previous slot, or do not
    /// start at period 1.
    PeriodGap,
    /// End date lies before start date.
    InvalidDateRange,
    /// A period clock time is out of range or ends before it starts.
    InvalidPeriodTime,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a snapshot before comparison.
///
/// Checks:
/// 1. Exactly five days
/// 2. Every slot covers at least one period
/// 3. Every slot's periods are ascending and contiguous
/// 4. Every day's periods start at 1 and continue across slots without gaps
/// 5. `end_date` is not before `start_date`
/// 6. Period clock times are valid
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_snapshot(snapshot: &ScheduleSnapshot) -> ValidationResult {
    let mut errors = Vec::new();

    check_days(&snapshot.days, &mut errors);

    if let Some(end) = snapshot.end_date {
        if end < snapshot.start_date {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDateRange,
                format!(
                    "End date {end} is before start date {}",
                    snapshot.start_date
                ),
            ));
        }
    }

    for (row, times) in snapshot.period_times.iter().enumerate() {
        for (col, time) in times.iter().enumerate() {
            if !time.is_valid() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidPeriodTime,
                    format!("Period time [{row}][{col}] is invalid: {time:?}"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates day content alone, as stored in a snapshot cache record.
///
/// Runs checks 1 to 4 of [`validate_snapshot`].
pub fn validate_days(days: &[DaySchedule]) -> ValidationResult {
    let mut errors = Vec::new();
    check_days(days, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_days(days: &[DaySchedule], errors: &mut Vec<ValidationError>) {
    if days.len() != SCHOOL_DAYS {
        errors.push(ValidationError::new(
            ValidationErrorKind::WrongDayCount,
            format!("Expected {SCHOOL_DAYS} days, found {}", days.len()),
        ));
    }

    for (index, day) in days.iter().enumerate() {
        validate_day(index, day, errors);
    }
}

/// Validates one day's slots.
///
/// `expected` tracks the next period the day must continue with.
fn validate_day(index: usize, day: &DaySchedule, errors: &mut Vec<ValidationError>) {
    let label = weekday_label(index).unwrap_or("extra day");
    let mut expected = 1;

    for slot in &day.slots {
        let Some(first) = slot.first_period() else {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptySlot,
                format!("{label}: slot without periods"),
            ));
            continue;
        };

        if !slot.is_contiguous() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonContiguousPeriods,
                format!("{label}: slot periods {:?} are not contiguous", slot.periods),
            ));
        }

        if first != expected {
            errors.push(ValidationError::new(
                ValidationErrorKind::PeriodGap,
                format!("{label}: expected period {expected}, found {first}"),
            ));
        }

        let Some(last) = slot.last_period() else {
            continue;
        };
        match last.checked_add(1) {
            Some(next) => expected = next,
            None => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::PeriodGap,
                    format!("{label}: period {last} leaves no room for a following period"),
                ));
                return;
            }
        }
    }
}
