use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resources::time_rate::TimeRate;
use crate::utils::calendar::{Date, TimeOfDay};

/// Reasons the sky clock refuses to start.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkyInitError {
    #[error("Sky validation failed: {0}")]
    Validation(String),
    #[error("RealtimeMinutesPerCycle must be a finite number greater than zero (got {0})")]
    InvalidCycle(f64),
}

#[derive(Error, Debug)]
pub enum SkyConfigError {
    #[error("failed to read sky config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse sky config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Initial values and knobs for the sky clock, assigned by the host before startup.
///
/// Changing `update_time`/`update_visuals` to false at runtime ends the
/// matching loop at its next step. Rate changes apply on the next frame.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkySettings {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,

    pub update_visuals: bool,
    pub update_time: bool,
    pub visual_update_rate: TimeRate,
    pub time_update_rate: TimeRate,
    /// Real minutes that make up one full simulated cycle.
    pub realtime_minutes_per_cycle: f64,
}

impl Default for SkySettings {
    fn default() -> Self {
        Self {
            year: 1,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
            update_visuals: true,
            update_time: true,
            visual_update_rate: TimeRate::Fps30,
            time_update_rate: TimeRate::Fps30,
            realtime_minutes_per_cycle: 120.0,
        }
    }
}

/// Default file name for the sky configuration.
const CONFIG_FILE_NAME: &str = "sky.json";

impl SkySettings {
    pub fn start_date(&self) -> Date {
        Date::new(self.year, self.month, self.day)
    }

    pub fn start_time(&self) -> TimeOfDay {
        TimeOfDay::new(self.hour, self.minute, self.second)
    }

    /// Checks the starting date and time against the calendar ranges.
    pub fn validate(&self) -> Result<(), SkyInitError> {
        if !self.start_date().is_valid() {
            return Err(SkyInitError::Validation(format!(
                "invalid start date {}",
                self.start_date()
            )));
        }
        if !self.start_time().is_valid() {
            return Err(SkyInitError::Validation(format!(
                "invalid start time {}",
                self.start_time()
            )));
        }
        Ok(())
    }

    /// Checks that the cycle length can drive the clock.
    /// NaN and infinity fail this check as well.
    pub fn check_cycle(&self) -> Result<(), SkyInitError> {
        let minutes = self.realtime_minutes_per_cycle;
        if minutes.is_finite() && minutes > 0.0 {
            Ok(())
        } else {
            Err(SkyInitError::InvalidCycle(minutes))
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, SkyConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, SkyConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SkyConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json_str(&contents)?;
        info!("Loaded sky config from {:?}", path);
        Ok(settings)
    }

    /// Returns the platform-specific path for the sky config file.
    ///
    /// - macOS: ~/Library/Application Support/sky_clock/sky.json
    /// - Linux: ~/.config/sky_clock/sky.json
    /// - Windows: %APPDATA%/sky_clock/sky.json
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("sky_clock");
            path.push(CONFIG_FILE_NAME);
            path
        })
    }

    /// Loads `path` if given, else the default config file if one exists,
    /// else the built-in defaults. Failures are logged and fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    info!("No sky config found, using defaults");
                    return Self::default();
                }
            },
        };

        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                error!("{}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = SkySettings::default();
        assert_eq!(settings.validate(), Ok(()));
        assert_eq!(settings.check_cycle(), Ok(()));
        assert_eq!(settings.realtime_minutes_per_cycle, 120.0);
        assert_eq!(settings.time_update_rate, TimeRate::Fps30);
    }

    #[test]
    fn test_rejects_bad_dates() {
        let settings = SkySettings { month: 13, ..default() };
        assert!(matches!(settings.validate(), Err(SkyInitError::Validation(_))));

        let settings = SkySettings { month: 6, day: 31, ..default() };
        assert!(matches!(settings.validate(), Err(SkyInitError::Validation(_))));

        let settings = SkySettings { day: 0, ..default() };
        assert!(matches!(settings.validate(), Err(SkyInitError::Validation(_))));
    }

    #[test]
    fn test_rejects_bad_times() {
        for settings in [
            SkySettings { hour: 24, ..default() },
            SkySettings { minute: 60, ..default() },
            SkySettings { second: 60, ..default() },
        ] {
            assert!(matches!(settings.validate(), Err(SkyInitError::Validation(_))));
        }
    }

    #[test]
    fn test_cycle_must_be_positive() {
        for minutes in [0.0, -5.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let settings = SkySettings { realtime_minutes_per_cycle: minutes, ..default() };
            assert!(matches!(settings.check_cycle(), Err(SkyInitError::InvalidCycle(_))));
        }
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = SkySettings::from_json_str(
            r#"{ "month": 4, "day": 30, "time_update_rate": "Fps60" }"#,
        )
        .unwrap();
        assert_eq!(settings.month, 4);
        assert_eq!(settings.day, 30);
        assert_eq!(settings.time_update_rate, TimeRate::Fps60);
        assert_eq!(settings.visual_update_rate, TimeRate::Fps30);
        assert_eq!(settings.realtime_minutes_per_cycle, 120.0);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result = SkySettings::from_json_str("{ month: ");
        assert!(matches!(result, Err(SkyConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let result = SkySettings::load_from_file(Path::new("/nonexistent/sky_clock/sky.json"));
        assert!(matches!(result, Err(SkyConfigError::Read { .. })));
    }

    #[test]
    fn test_error_messages() {
        let err = SkyInitError::InvalidCycle(0.0);
        assert_eq!(
            err.to_string(),
            "RealtimeMinutesPerCycle must be a finite number greater than zero (got 0)"
        );
        let err = SkyInitError::InvalidCycle(f64::INFINITY);
        assert_eq!(
            err.to_string(),
            "RealtimeMinutesPerCycle must be a finite number greater than zero (got inf)"
        );
    }
}
