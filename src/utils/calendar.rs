//! Calendar primitives for the sky clock.
//!
//! The calendar uses a simplified month table: months 1, 3, 5, 7, 8, 10 and 12
//! have 31 days, every other month has 30. There are no leap years and no
//! 28-day February.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const SECONDS_PER_MINUTE: u32 = 60;
pub const SECONDS_PER_HOUR: u32 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: u32 = 24 * SECONDS_PER_HOUR;

pub const MONTHS_PER_YEAR: u32 = 12;

const LONG_MONTHS: [u32; 7] = [1, 3, 5, 7, 8, 10, 12];

/// Number of days in `month` (1-indexed), or `None` if the month is out of range.
pub fn days_in_month(month: u32) -> Option<u32> {
    if !(1..=MONTHS_PER_YEAR).contains(&month) {
        return None;
    }
    Some(if LONG_MONTHS.contains(&month) { 31 } else { 30 })
}

/// A calendar date, advanced one day at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Date {
    year: u32,
    month: u32,
    day: u32,
}

impl Default for Date {
    fn default() -> Self {
        Self { year: 1, month: 1, day: 1 }
    }
}

impl Date {
    pub fn new(year: u32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// True if the month is 1..=12 and the day fits in that month.
    pub fn is_valid(&self) -> bool {
        days_in_month(self.month).is_some_and(|len| (1..=len).contains(&self.day))
    }

    /// Moves the date forward by one day, rolling over month and year.
    ///
    /// The last day of year `u32::MAX` has no successor; the date stays put.
    pub fn advance_day(&mut self) {
        // An out-of-range month counts as a 30-day month so the date still moves.
        let month_len = days_in_month(self.month).unwrap_or(30);

        if self.day < month_len {
            self.day += 1;
        } else if self.month < MONTHS_PER_YEAR {
            self.day = 1;
            self.month += 1;
        } else if let Some(year) = self.year.checked_add(1) {
            self.day = 1;
            self.month = 1;
            self.year = year;
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Wall-clock time within a simulated day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
    second: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self { hour, minute, second }
    }

    /// Splits seconds since midnight into hours, minutes and seconds.
    /// Values of a full day or more wrap around.
    pub fn from_seconds(seconds: u32) -> Self {
        let seconds = seconds % SECONDS_PER_DAY;
        Self {
            hour: seconds / SECONDS_PER_HOUR,
            minute: (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            second: seconds % SECONDS_PER_MINUTE,
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    pub fn total_seconds(&self) -> u32 {
        self.hour * SECONDS_PER_HOUR + self.minute * SECONDS_PER_MINUTE + self.second
    }

    pub fn is_valid(&self) -> bool {
        self.hour < 24 && self.minute < 60 && self.second < 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}
