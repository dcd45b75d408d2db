use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use sky_clock::plugins::debug_ui::DebugUiPlugin;
use sky_clock::plugins::sky::SkyPlugin;
use sky_clock::plugins::sky_tint::SkyTintPlugin;
use sky_clock::resources::{CliArgs, SkySettings};

fn main() {
    let cli = CliArgs::parse();
    let mut settings = SkySettings::load_or_default(cli.config.as_deref());
    cli.apply(&mut settings);

    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin)
        .insert_resource(settings)
        .add_plugins(SkyPlugin)
        .add_plugins(SkyTintPlugin)
        .add_plugins(DebugUiPlugin)
        .add_systems(Startup, spawn_camera)
        .run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
