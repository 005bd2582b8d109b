use bevy::prelude::*;
use lava_core::LampConfig;
use lava_physics::spawn;
use lava_render::LampRenderPlugin;
use lava_sim::{LampState, SimulationPlugin};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    let config = LampConfig {
        lamp_size: [2.0, 4.0],
        top_narrowing: 0.6,
        ..LampConfig::default()
    };

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let blobs = spawn::scatter_blobs(8, &config, &mut rng);
    let mut lamp = LampState::new(config, blobs).expect("default lamp config is valid");
    lamp.randomize(&mut rng);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Lava Lamp".into(),
                resolution: (540.0, 960.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.03, 0.02, 0.05)))
        .insert_resource(lamp)
        .add_plugins(SimulationPlugin)
        .add_plugins(LampRenderPlugin)
        .run();
}
