//! Period clock times.
//!
//! Wire format follows the portal: a clock time is `[hour, minute]` and a
//! period time is `[[startHour, startMinute], [endHour, endMinute]]`.
//! The engine never interprets these for diffing; they are carried so a
//! presentation layer can label changed periods.

use serde::{Deserialize, Serialize};

/// A wall-clock time of day `[hour, minute]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClockTime(pub u8, pub u8);

impl ClockTime {
    /// Creates a clock time.
    pub fn new(hour: u8, minute: u8) -> Self {
        Self(hour, minute)
    }

    /// Hour of day (0-23).
    #[inline]
    pub fn hour(&self) -> u8 {
        self.0
    }

    /// Minute of hour (0-59).
    #[inline]
    pub fn minute(&self) -> u8 {
        self.1
    }

    /// Whether hour and minute are in range.
    pub fn is_valid(&self) -> bool {
        self.0 < 24 && self.1 < 60
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes_of_day(&self) -> u32 {
        u32::from(self.0) * 60 + u32::from(self.1)
    }
}

/// Start and end time of one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTime(pub ClockTime, pub ClockTime);

impl PeriodTime {
    /// Creates a period time from `(hour, minute)` pairs.
    pub fn new(start: (u8, u8), end: (u8, u8)) -> Self {
        Self(ClockTime::new(start.0, start.1), ClockTime::new(end.0, end.1))
    }

    /// Period start.
    pub fn start(&self) -> ClockTime {
        self.0
    }

    /// Period end.
    pub fn end(&self) -> ClockTime {
        self.1
    }

    /// Length in minutes. Zero if the range is inverted.
    pub fn duration_minutes(&self) -> u32 {
        self.1
            .minutes_of_day()
            .saturating_sub(self.0.minutes_of_day())
    }

    /// Whether both clock times are valid and start is not after end.
    pub fn is_valid(&self) -> bool {
        self.0.is_valid() && self.1.is_valid() && self.0 <= self.1
    }
}
