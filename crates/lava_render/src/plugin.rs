use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use bevy::sprite::{Material2dPlugin, MeshMaterial2d};
use lava_sim::LampState;

use crate::bounds::{draw_lamp_bounds, toggle_bounds_overlay, BoundsOverlay};
use crate::material::{pack_blobs, LampParams, LavaLampMaterial};

/// Handles for the lamp quad, so the sync system can find its material.
#[derive(Resource)]
pub struct LampDisplay {
    pub material: Handle<LavaLampMaterial>,
}

/// Host-side rendering collaborator: owns the quad, the metaball material
/// and the bounds overlay. Reads the simulator through its read accessor
/// only — blob state never flows back.
pub struct LampRenderPlugin;

impl Plugin for LampRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(Material2dPlugin::<LavaLampMaterial>::default())
            .init_resource::<BoundsOverlay>()
            .add_systems(Startup, setup_lamp_display)
            .add_systems(
                Update,
                (sync_lamp_material, toggle_bounds_overlay, draw_lamp_bounds),
            );
    }
}

/// Spawn the camera and the quad covering the glass.
fn setup_lamp_display(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<LavaLampMaterial>>,
    lamp: Res<LampState>,
) {
    let config = lamp.config();
    let [width, height] = config.lamp_size;

    // Frame the whole lamp with a little margin, centered on the glass
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: height * 1.25,
            },
            ..OrthographicProjection::default_2d()
        },
        Transform::from_xyz(0.0, height * 0.5, 0.0),
    ));

    let blobs = pack_blobs(lamp.blobs());
    let mut params = LampParams::for_lamp(config);
    params.blob_count = blobs.len() as u32;
    let material = materials.add(LavaLampMaterial { params, blobs });

    // The quad spans the glass exactly: x in ±width/2, y in [0, height]
    commands.spawn((
        Mesh2d(meshes.add(Rectangle::new(width, height))),
        MeshMaterial2d(material.clone()),
        Transform::from_xyz(0.0, height * 0.5, 0.0),
    ));

    commands.insert_resource(LampDisplay { material });

    info!(
        "lamp display ready: {} blobs in a {width} x {height} glass",
        lamp.blobs().len()
    );
}

/// Refresh the blob buffer and lamp uniforms from the simulator.
///
/// Runs every frame so runtime config changes (geometry, taper) show up
/// immediately, matching the simulator's own no-staleness rule.
fn sync_lamp_material(
    lamp: Res<LampState>,
    display: Res<LampDisplay>,
    mut materials: ResMut<Assets<LavaLampMaterial>>,
) {
    let Some(material) = materials.get_mut(&display.material) else {
        return;
    };

    let config = lamp.config();
    material.params.lamp_size = Vec2::from(config.lamp_size);
    material.params.top_narrowing = config.top_narrowing;
    material.params.blob_count = lamp.blobs().len() as u32;

    material.blobs.clear();
    material
        .blobs
        .extend(lamp.blobs().iter().map(crate::material::GpuBlob::new));
}
