use bevy::prelude::*;
use bevy::render::render_resource::{AsBindGroup, ShaderRef, ShaderType};
use bevy::sprite::Material2d;
use bytemuck::{Pod, Zeroable};
use lava_core::{Blob, LampConfig};

/// One blob packed for the fragment shader: (x, y, size, temperature).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable, ShaderType)]
pub struct GpuBlob {
    pub data: Vec4,
}

impl GpuBlob {
    pub fn new(blob: &Blob) -> Self {
        Self {
            data: Vec4::new(
                blob.position[0],
                blob.position[1],
                blob.size,
                blob.temperature,
            ),
        }
    }
}

/// Per-frame lamp uniforms. Field order and padding mirror the WGSL struct.
#[derive(Clone, Copy, Debug, ShaderType)]
pub struct LampParams {
    /// Glass extent (width at the floor, height)
    pub lamp_size: Vec2,
    /// Half-width multiplier at the top of the glass
    pub top_narrowing: f32,
    /// How many entries of the blob buffer are live
    pub blob_count: u32,
    /// Wax tint at the cold end of the ramp
    pub cool_color: Vec4,
    /// Wax tint at the hot end of the ramp
    pub hot_color: Vec4,
    /// Iso threshold on the summed metaball field
    pub threshold: f32,
    pub _pad0: f32,
    pub _pad1: f32,
    pub _pad2: f32,
}

impl Default for LampParams {
    fn default() -> Self {
        Self {
            lamp_size: Vec2::new(2.0, 4.0),
            top_narrowing: 1.0,
            blob_count: 0,
            cool_color: Vec4::new(0.55, 0.12, 0.45, 1.0),
            hot_color: Vec4::new(1.0, 0.45, 0.15, 1.0),
            threshold: 0.9,
            _pad0: 0.0,
            _pad1: 0.0,
            _pad2: 0.0,
        }
    }
}

impl LampParams {
    /// Params seeded from the simulator's config, so the first frame shows
    /// the right glass even before the per-frame sync has run. Geometry is
    /// never duplicated anywhere else; the sync system refreshes these same
    /// fields from the live config.
    pub fn for_lamp(config: &LampConfig) -> Self {
        Self {
            lamp_size: Vec2::from(config.lamp_size),
            top_narrowing: config.top_narrowing,
            ..Self::default()
        }
    }
}

/// Quad material that draws the wax as an iso-surface over the summed
/// per-blob field. The blob array travels in a read-only storage buffer,
/// refreshed from `LampState` every frame.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct LavaLampMaterial {
    #[uniform(0)]
    pub params: LampParams,
    #[storage(1, read_only)]
    pub blobs: Vec<GpuBlob>,
}

impl Material2d for LavaLampMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/lava_lamp.wgsl".into()
    }
}

/// Pack the simulator's read view into the shader-side layout.
pub fn pack_blobs(blobs: &[Blob]) -> Vec<GpuBlob> {
    blobs.iter().map(GpuBlob::new).collect()
}
