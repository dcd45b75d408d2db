use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeRateParseError {
    #[error("unknown time rate '{0}'")]
    Unknown(String),
    #[error("unsupported time rate of {0} per second")]
    Unsupported(u32),
}

/// Named update frequencies for the sky loops.
///
/// Each rate maps to the wait between two consecutive steps of a loop,
/// e.g. `Fps30` waits 1/30 of a second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRate {
    Fps1,
    Fps5,
    Fps10,
    Fps15,
    Fps24,
    #[default]
    Fps30,
    Fps60,
    Fps120,
}

impl TimeRate {
    pub const ALL: [TimeRate; 8] = [
        TimeRate::Fps1,
        TimeRate::Fps5,
        TimeRate::Fps10,
        TimeRate::Fps15,
        TimeRate::Fps24,
        TimeRate::Fps30,
        TimeRate::Fps60,
        TimeRate::Fps120,
    ];

    /// Steps per real second.
    pub fn hz(self) -> u32 {
        match self {
            TimeRate::Fps1 => 1,
            TimeRate::Fps5 => 5,
            TimeRate::Fps10 => 10,
            TimeRate::Fps15 => 15,
            TimeRate::Fps24 => 24,
            TimeRate::Fps30 => 30,
            TimeRate::Fps60 => 60,
            TimeRate::Fps120 => 120,
        }
    }

    /// Wait between two steps, in seconds.
    pub fn interval_secs(self) -> f32 {
        self.interval().as_secs_f32()
    }

    pub fn interval(self) -> Duration {
        Duration::from_secs(1) / self.hz()
    }

    pub fn label(self) -> String {
        format!("{} per second", self.hz())
    }
}

impl FromStr for TimeRate {
    type Err = TimeRateParseError;

    /// Accepts "30", "fps30" or "Fps30".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let digits = lower.strip_prefix("fps").unwrap_or(&lower);
        let hz: u32 = digits
            .parse()
            .map_err(|_| TimeRateParseError::Unknown(s.to_string()))?;

        TimeRate::ALL
            .into_iter()
            .find(|rate| rate.hz() == hz)
            .ok_or(TimeRateParseError::Unsupported(hz))
    }
}
