use std::path::PathBuf;

use bevy::prelude::*;

use crate::resources::sky_settings::SkySettings;
use crate::resources::time_rate::TimeRate;

/// Command-line arguments parsed at startup.
/// Overrides applied on top of the loaded `SkySettings` before the app starts.
#[derive(Debug, Default, PartialEq)]
pub struct CliArgs {
    /// Sky config file to load instead of the default location.
    /// Usage: `cargo run -- --config my_sky.json`
    pub config: Option<PathBuf>,

    /// Usage: `cargo run -- --minutes-per-cycle 2`
    pub minutes_per_cycle: Option<f64>,

    /// Usage: `cargo run -- --time-rate 60`
    pub time_rate: Option<TimeRate>,

    /// Usage: `cargo run -- --visual-rate fps10`
    pub visual_rate: Option<TimeRate>,
}

impl CliArgs {
    /// Parse the process arguments.
    pub fn parse() -> Self {
        Self::parse_from(std::env::args().skip(1))
    }

    /// Parse an argument list (without the program name).
    /// Supports:
    /// - `--config <path>`
    /// - `--minutes-per-cycle <minutes>`
    /// - `--time-rate <rate>`
    /// - `--visual-rate <rate>`
    pub fn parse_from(args: impl IntoIterator<Item = String>) -> Self {
        let args: Vec<String> = args.into_iter().collect();
        let mut cli = CliArgs::default();

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            let value = args.get(i + 1);
            match (flag, value) {
                ("--config", Some(path)) => {
                    cli.config = Some(PathBuf::from(path));
                    info!("CLI: Using sky config '{}'", path);
                    i += 2;
                }
                ("--minutes-per-cycle", Some(raw)) => {
                    match raw.parse::<f64>() {
                        Ok(minutes) => cli.minutes_per_cycle = Some(minutes),
                        Err(_) => warn!("CLI: --minutes-per-cycle expects a number, got '{}'", raw),
                    }
                    i += 2;
                }
                ("--time-rate", Some(raw)) => {
                    match raw.parse::<TimeRate>() {
                        Ok(rate) => cli.time_rate = Some(rate),
                        Err(e) => warn!("CLI: --time-rate: {}", e),
                    }
                    i += 2;
                }
                ("--visual-rate", Some(raw)) => {
                    match raw.parse::<TimeRate>() {
                        Ok(rate) => cli.visual_rate = Some(rate),
                        Err(e) => warn!("CLI: --visual-rate: {}", e),
                    }
                    i += 2;
                }
                ("--config" | "--minutes-per-cycle" | "--time-rate" | "--visual-rate", None) => {
                    warn!("CLI: {} requires an argument", flag);
                    i += 1;
                }
                (arg, _) => {
                    if arg.starts_with('-') {
                        warn!("CLI: Unknown argument '{}'", arg);
                    }
                    i += 1;
                }
            }
        }

        cli
    }

    /// Applies the overrides to `settings`.
    pub fn apply(&self, settings: &mut SkySettings) {
        if let Some(minutes) = self.minutes_per_cycle {
            settings.realtime_minutes_per_cycle = minutes;
        }
        if let Some(rate) = self.time_rate {
            settings.time_update_rate = rate;
        }
        if let Some(rate) = self.visual_rate {
            settings.visual_update_rate = rate;
        }
    }
}
