use bevy::prelude::*;

use crate::resources::sky_settings::{SkyInitError, SkySettings};
use crate::utils::calendar::{Date, TimeOfDay, SECONDS_PER_DAY, SECONDS_PER_HOUR};

const DAY_SECONDS: f64 = SECONDS_PER_DAY as f64;

/// Resource tracking the simulated calendar and time of day.
///
/// The seconds accumulator is the authoritative clock. Each time step adds
/// a fixed amount derived from `realtime_minutes_per_cycle`:
/// - When the accumulator reaches a full day it resets to 0 and the date
///   advances by one day
/// - The time of day is re-derived from the accumulator after every step
///
/// Date and time are written together at the end of a step, so readers
/// always see a consistent pair.
#[derive(Resource, Debug, Clone)]
pub struct CalendarClock {
    date: Date,
    time: TimeOfDay,
    /// Seconds since midnight, always in [0, 86400).
    /// Kept in f64 so steps of a few milliseconds still register near midnight.
    total_seconds: f64,
    realtime_minutes_per_cycle: f64,
}

impl CalendarClock {
    /// Builds a running clock from the host settings.
    ///
    /// Validation runs before the cycle check; the first failure is returned.
    pub fn start(settings: &SkySettings) -> Result<Self, SkyInitError> {
        settings.validate()?;
        settings.check_cycle()?;

        let time = settings.start_time();
        Ok(Self {
            date: settings.start_date(),
            time,
            total_seconds: time.total_seconds() as f64,
            realtime_minutes_per_cycle: settings.realtime_minutes_per_cycle,
        })
    }

    /// Simulated seconds added by a single time step.
    pub fn seconds_per_step(realtime_minutes_per_cycle: f64) -> f64 {
        let realtime_seconds = realtime_minutes_per_cycle * 60.0;
        (DAY_SECONDS / realtime_seconds) / 24.0
    }

    /// Advances the clock by one step. Returns true if a new day started.
    pub fn advance_time_step(&mut self) -> bool {
        let mut total = self.total_seconds + Self::seconds_per_step(self.realtime_minutes_per_cycle);
        let mut date = self.date;

        let new_day = total >= DAY_SECONDS;
        if new_day {
            total = 0.0;
            date.advance_day();
        }

        let time = TimeOfDay::from_seconds(total as u32);

        self.total_seconds = total;
        self.date = date;
        self.time = time;

        if new_day {
            debug!("New day: {}", self.date);
        }
        new_day
    }

    /// Hours since midnight as a fraction, for visual consumers.
    pub fn solar_hour(&self) -> f32 {
        self.time.total_seconds() as f32 / SECONDS_PER_HOUR as f32
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    pub fn total_seconds(&self) -> f64 {
        self.total_seconds
    }

    pub fn realtime_minutes_per_cycle(&self) -> f64 {
        self.realtime_minutes_per_cycle
    }

    /// Returns a formatted string for HUD display.
    /// Format: "YYYY-MM-DD HH:MM:SS"
    pub fn formatted(&self) -> String {
        format!("{} {}", self.date, self.time)
    }
}
