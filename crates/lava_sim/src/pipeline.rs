use bevy::prelude::*;

use crate::lamp::LampState;

/// Bevy plugin driving the lamp simulation.
///
/// Runs on `FixedUpdate` so blob motion is independent of render frame
/// rate; the host's scheduler decides the cadence, the lamp just consumes
/// whatever `dt` it is handed.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, simulation_tick)
            .add_systems(Update, toggle_pause);
    }
}

/// Advance the lamp by one fixed time step.
fn simulation_tick(mut lamp: ResMut<LampState>, time: Res<Time>) {
    let dt = time.delta_secs();
    if let Err(err) = lamp.step(dt) {
        warn!("lamp step rejected: {err}");
    }
}

/// Space bar suspends and resumes the wax.
fn toggle_pause(keys: Res<ButtonInput<KeyCode>>, mut lamp: ResMut<LampState>) {
    if keys.just_pressed(KeyCode::Space) {
        lamp.paused = !lamp.paused;
        info!("lamp {}", if lamp.paused { "paused" } else { "resumed" });
    }
}
