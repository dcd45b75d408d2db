//! Sky plugin - drives the calendar clock and the visual refresh loop.
//!
//! Startup validates `SkySettings` once. A failed start leaves the plugin
//! disabled for the lifetime of the app: `CalendarClock` is never inserted
//! and both loops are skipped by their run condition.

use bevy::prelude::*;

use crate::events::{DayElapsed, SkyVisualsRefreshed};
use crate::resources::{CalendarClock, PeriodicLoop, SkyInitError, SkySettings};

pub struct SkyPlugin;

impl Plugin for SkyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SkySettings>()
            .add_event::<SkyVisualsRefreshed>()
            .add_event::<DayElapsed>()
            .add_systems(Startup, start_sky)
            .add_systems(
                Update,
                (sync_loop_rates, update_time, update_visuals)
                    .chain()
                    .in_set(SkySystems)
                    .run_if(resource_exists::<CalendarClock>),
            );
    }
}

/// Systems that step the sky. Consumers of sky events order themselves after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SkySystems;

/// Outcome of the startup check.
#[derive(Resource, Debug, Clone, PartialEq)]
pub enum SkyStatus {
    Running,
    Disabled(SkyInitError),
}

/// The two repeating tasks of a running sky.
#[derive(Resource, Debug, Clone)]
pub struct SkyLoops {
    pub time: PeriodicLoop,
    pub visuals: PeriodicLoop,
}

impl SkyLoops {
    pub fn from_settings(settings: &SkySettings) -> Self {
        Self {
            time: PeriodicLoop::new(settings.time_update_rate),
            visuals: PeriodicLoop::new(settings.visual_update_rate),
        }
    }
}

fn start_sky(mut commands: Commands, settings: Res<SkySettings>) {
    match CalendarClock::start(&settings) {
        Ok(clock) => {
            info!(
                "Sky Component: started at {} ({} real minutes per cycle)",
                clock.formatted(),
                clock.realtime_minutes_per_cycle()
            );
            commands.insert_resource(SkyLoops::from_settings(&settings));
            commands.insert_resource(clock);
            commands.insert_resource(SkyStatus::Running);
        }
        Err(e) => {
            error!("Sky Component: {}. Disabling component.", e);
            commands.insert_resource(SkyStatus::Disabled(e));
        }
    }
}

/// Applies rate changes made to `SkySettings` after startup.
fn sync_loop_rates(settings: Res<SkySettings>, mut loops: ResMut<SkyLoops>) {
    if !settings.is_changed() {
        return;
    }
    loops.time.set_rate(settings.time_update_rate);
    loops.visuals.set_rate(settings.visual_update_rate);
}

/// Runs the due time steps for this frame.
fn update_time(
    time: Res<Time>,
    settings: Res<SkySettings>,
    mut loops: ResMut<SkyLoops>,
    mut clock: ResMut<CalendarClock>,
    mut day_events: EventWriter<DayElapsed>,
) {
    let steps = loops.time.poll(time.delta(), settings.update_time);
    for _ in 0..steps {
        if clock.advance_time_step() {
            day_events.send(DayElapsed { date: clock.date() });
        }
    }
}

/// Publishes the current solar hour when a visual step is due.
/// Several due steps in one frame collapse into a single event.
fn update_visuals(
    time: Res<Time>,
    settings: Res<SkySettings>,
    mut loops: ResMut<SkyLoops>,
    clock: Res<CalendarClock>,
    mut visual_events: EventWriter<SkyVisualsRefreshed>,
) {
    if loops.visuals.poll(time.delta(), settings.update_visuals) == 0 {
        return;
    }

    visual_events.send(SkyVisualsRefreshed {
        solar_hour: clock.solar_hour(),
        date: clock.date(),
        time: clock.time(),
    });
}
