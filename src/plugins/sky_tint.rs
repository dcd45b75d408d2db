//! SkyTint plugin - tints the clear color along a day/night gradient.
//!
//! Listens for `SkyVisualsRefreshed` and samples `SkyGradient` at the
//! reported solar hour.

use bevy::prelude::*;

use crate::events::SkyVisualsRefreshed;
use crate::plugins::sky::SkySystems;

pub struct SkyTintPlugin;

impl Plugin for SkyTintPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SkyGradient>()
            .init_resource::<ClearColor>()
            .add_event::<SkyVisualsRefreshed>()
            .add_systems(Update, apply_sky_tint.after(SkySystems));
    }
}

/// Colour keys over a 24 hour day, sorted by hour.
/// Sampling wraps from the last key back to the first across midnight.
#[derive(Resource, Debug, Clone)]
pub struct SkyGradient {
    keys: Vec<(f32, Color)>,
}

impl Default for SkyGradient {
    fn default() -> Self {
        let night = Color::srgb(0.02, 0.03, 0.10);
        let dawn = Color::srgb(0.95, 0.55, 0.35);
        let day = Color::srgb(0.45, 0.70, 0.95);
        let dusk = Color::srgb(0.85, 0.40, 0.30);
        Self::new(vec![
            (5.0, night),
            (6.5, dawn),
            (8.0, day),
            (17.0, day),
            (18.5, dusk),
            (20.0, night),
        ])
    }
}

impl SkyGradient {
    /// Keys outside 0..24 are clamped; order is normalized.
    pub fn new(mut keys: Vec<(f32, Color)>) -> Self {
        for key in &mut keys {
            key.0 = key.0.clamp(0.0, 24.0);
        }
        keys.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { keys }
    }

    /// Colour at `solar_hour`, interpolated between the surrounding keys.
    pub fn sample(&self, solar_hour: f32) -> Color {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return Color::BLACK,
        };
        if self.keys.len() == 1 {
            return first.1;
        }

        let hour = solar_hour.rem_euclid(24.0);
        let (from, to) = match self.keys.iter().position(|(h, _)| *h > hour) {
            Some(0) => ((last.0 - 24.0, last.1), first),
            Some(i) => (self.keys[i - 1], self.keys[i]),
            None => (last, (first.0 + 24.0, first.1)),
        };

        let span = to.0 - from.0;
        let t = if span > 0.0 { (hour - from.0) / span } else { 0.0 };
        lerp_color(from.1, to.1, t)
    }
}

fn apply_sky_tint(
    mut events: EventReader<SkyVisualsRefreshed>,
    gradient: Res<SkyGradient>,
    mut clear_color: ResMut<ClearColor>,
) {
    // Only the latest refresh matters.
    let Some(latest) = events.read().last() else { return; };
    clear_color.0 = gradient.sample(latest.solar_hour);
}

/// Linearly interpolates between two colors.
fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    let from_srgba = from.to_srgba();
    let to_srgba = to.to_srgba();

    Color::srgba(
        from_srgba.red + (to_srgba.red - from_srgba.red) * t,
        from_srgba.green + (to_srgba.green - from_srgba.green) * t,
        from_srgba.blue + (to_srgba.blue - from_srgba.blue) * t,
        from_srgba.alpha + (to_srgba.alpha - from_srgba.alpha) * t,
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::time::TimeUpdateStrategy;

    use super::*;
    use crate::plugins::sky::SkyPlugin;
    use crate::resources::SkySettings;

    fn assert_color_near(actual: Color, expected: Color) {
        let (a, e) = (actual.to_srgba(), expected.to_srgba());
        let diff = (a.red - e.red).abs() + (a.green - e.green).abs() + (a.blue - e.blue).abs();
        assert!(diff < 1e-4, "{:?} != {:?}", a, e);
    }

    fn two_key_gradient() -> SkyGradient {
        SkyGradient::new(vec![
            (22.0, Color::srgb(0.0, 0.0, 0.0)),
            (2.0, Color::srgb(1.0, 1.0, 1.0)),
        ])
    }

    #[test]
    fn test_sample_at_keys() {
        let gradient = two_key_gradient();
        assert_color_near(gradient.sample(2.0), Color::srgb(1.0, 1.0, 1.0));
        assert_color_near(gradient.sample(22.0), Color::srgb(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_sample_between_keys() {
        let gradient = two_key_gradient();
        assert_color_near(gradient.sample(12.0), Color::srgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_sample_wraps_midnight() {
        let gradient = two_key_gradient();
        // 22 -> 2 spans four hours; midnight is halfway.
        assert_color_near(gradient.sample(0.0), Color::srgb(0.5, 0.5, 0.5));
        assert_color_near(gradient.sample(23.0), Color::srgb(0.25, 0.25, 0.25));
        assert_color_near(gradient.sample(24.0), gradient.sample(0.0));
    }

    #[test]
    fn test_degenerate_gradients() {
        assert_color_near(SkyGradient::new(vec![]).sample(3.0), Color::BLACK);
        let single = SkyGradient::new(vec![(9.0, Color::WHITE)]);
        assert_color_near(single.sample(21.0), Color::WHITE);
    }

    #[test]
    fn test_default_gradient_is_dark_at_night() {
        let gradient = SkyGradient::default();
        let midnight = gradient.sample(0.0).to_srgba();
        let noon = gradient.sample(12.0).to_srgba();
        assert!(midnight.blue < noon.blue);
        assert!(midnight.green < noon.green);
    }

    #[test]
    fn test_tint_follows_visual_refresh() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));
        app.insert_resource(SkySettings { hour: 12, ..default() });
        app.add_plugins((SkyPlugin, SkyTintPlugin));
        app.update();

        let expected = app.world().resource::<SkyGradient>().sample(12.0);
        assert_color_near(app.world().resource::<ClearColor>().0, expected);
    }
}
