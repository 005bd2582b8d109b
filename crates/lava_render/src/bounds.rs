use bevy::prelude::*;
use lava_physics::forces::allowed_half_width;
use lava_sim::LampState;

/// Debug overlay state; off by default, toggled with F1.
#[derive(Resource, Default)]
pub struct BoundsOverlay {
    pub enabled: bool,
}

pub fn toggle_bounds_overlay(
    keys: Res<ButtonInput<KeyCode>>,
    mut overlay: ResMut<BoundsOverlay>,
) {
    if keys.just_pressed(KeyCode::F1) {
        overlay.enabled = !overlay.enabled;
    }
}

/// Trace the trapezoidal glass and a marker circle per blob.
pub fn draw_lamp_bounds(overlay: Res<BoundsOverlay>, lamp: Res<LampState>, mut gizmos: Gizmos) {
    if !overlay.enabled {
        return;
    }

    let config = lamp.config();
    let height = config.height();
    let bottom_half = allowed_half_width(0.0, config);
    let top_half = allowed_half_width(height, config);

    let bottom_left = Vec2::new(-bottom_half, 0.0);
    let bottom_right = Vec2::new(bottom_half, 0.0);
    let top_left = Vec2::new(-top_half, height);
    let top_right = Vec2::new(top_half, height);

    let glass = Color::srgb(0.4, 0.55, 0.75);
    gizmos.line_2d(bottom_left, bottom_right, glass);
    gizmos.line_2d(bottom_right, top_right, glass);
    gizmos.line_2d(top_right, top_left, glass);
    gizmos.line_2d(top_left, bottom_left, glass);

    let marker = Color::srgb(0.9, 0.9, 0.9);
    for blob in lamp.blobs() {
        gizmos.circle_2d(Vec2::from(blob.position), 0.05, marker);
    }
}
