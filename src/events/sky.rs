use bevy::prelude::*;

use crate::utils::calendar::{Date, TimeOfDay};

/// Event emitted on every visual step of the sky.
/// Renderers read this to update lighting, tint, sun position, etc.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SkyVisualsRefreshed {
    /// Hours since midnight (0.0..24.0).
    pub solar_hour: f32,
    pub date: Date,
    pub time: TimeOfDay,
}

/// Event emitted when the simulated clock wraps past midnight.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayElapsed {
    /// The date that just started.
    pub date: Date,
}
