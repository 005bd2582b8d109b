use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::constants::MIN_BLOB_MASS;

/// One simulated wax blob.
///
/// Plain value type, repr(C) and Pod so the render layer can pack blob
/// arrays straight into GPU buffers. Coordinates are lamp-local: x origin
/// at the horizontal center, y = 0 at the lamp floor.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Blob {
    /// Location in lamp-local coordinates
    pub position: [f32; 2],
    /// Integrator state, accumulated from all force terms each step
    pub velocity: [f32; 2],
    /// Radius/weight proxy; doubles as inertial mass (clamped away from zero)
    pub size: f32,
    /// Drives buoyancy; pulled toward a height-implied equilibrium
    pub temperature: f32,
}

impl Blob {
    /// Blob at rest with no stored heat. Position and size are authored by
    /// the host; temperature and velocity get filled in by randomization.
    pub fn new(position: [f32; 2], size: f32) -> Self {
        Self {
            position,
            velocity: [0.0, 0.0],
            size,
            temperature: 0.0,
        }
    }

    /// Inertial mass, never zero even for degenerate authored sizes.
    pub fn mass(&self) -> f32 {
        self.size.max(MIN_BLOB_MASS)
    }
}
