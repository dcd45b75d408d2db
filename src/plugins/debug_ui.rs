use bevy::prelude::*;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy_egui::{egui, EguiContexts};

use crate::plugins::sky::{SkyLoops, SkyStatus};
use crate::resources::{CalendarClock, SkySettings, TimeRate};

pub struct DebugUiPlugin;

impl Plugin for DebugUiPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
            app.add_plugins(FrameTimeDiagnosticsPlugin::default());
        }

        app.add_systems(Update, debug_panel);
    }
}

fn debug_panel(
    mut contexts: EguiContexts,
    status: Option<Res<SkyStatus>>,
    clock: Option<Res<CalendarClock>>,
    loops: Option<Res<SkyLoops>>,
    mut settings: ResMut<SkySettings>,
    diagnostics: Res<DiagnosticsStore>,
) {
    egui::Window::new("Sky").show(contexts.ctx_mut(), |ui| {
        match status.as_deref() {
            Some(SkyStatus::Running) => ui.label("Status: running"),
            Some(SkyStatus::Disabled(reason)) => ui.label(format!("Status: disabled ({})", reason)),
            None => ui.label("Status: starting"),
        };

        if let Some(fps) = diagnostics
            .get(&FrameTimeDiagnosticsPlugin::FPS)
            .and_then(|diag| diag.smoothed())
        {
            ui.label(format!("FPS: {:.1}", fps));
        }

        let Some(clock) = clock else { return; };

        ui.separator();
        ui.heading(clock.formatted());
        ui.label(format!("Solar hour: {:.2}", clock.solar_hour()));
        ui.label(format!(
            "Cycle: {} real minutes ({:.3} sim seconds per step)",
            clock.realtime_minutes_per_cycle(),
            CalendarClock::seconds_per_step(clock.realtime_minutes_per_cycle())
        ));

        ui.separator();
        ui.heading("Loops");

        let (time_stopped, visuals_stopped) = loops
            .map(|loops| (loops.time.is_stopped(), loops.visuals.is_stopped()))
            .unwrap_or_default();

        // Bypass change detection unless something was actually edited.
        let mut edited = settings.bypass_change_detection().clone();
        loop_controls(ui, "Time", &mut edited.update_time, &mut edited.time_update_rate, time_stopped);
        loop_controls(
            ui,
            "Visuals",
            &mut edited.update_visuals,
            &mut edited.visual_update_rate,
            visuals_stopped,
        );
        if edited != *settings {
            *settings = edited;
        }
    });
}

fn loop_controls(ui: &mut egui::Ui, name: &str, enabled: &mut bool, rate: &mut TimeRate, stopped: bool) {
    ui.horizontal(|ui| {
        ui.add_enabled(!stopped, egui::Checkbox::new(enabled, name));
        egui::ComboBox::from_id_salt(name)
            .selected_text(rate.label())
            .show_ui(ui, |ui| {
                for option in TimeRate::ALL {
                    ui.selectable_value(rate, option, option.label());
                }
            });
        if stopped {
            ui.label("(ended)");
        }
    });
}
