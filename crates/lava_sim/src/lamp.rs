use bevy::prelude::*;
use lava_core::{Blob, LampConfig, LampError};
use lava_physics::{forces, spawn, thermal};
use rand::Rng;

/// Authoritative lamp state, tracked as a Bevy Resource.
///
/// Owns the blob array exclusively; the render layer only ever gets a read
/// view through `blobs()`. The blob count is fixed for the lifetime of the
/// state — wax neither appears nor disappears mid-run.
#[derive(Resource)]
pub struct LampState {
    blobs: Vec<Blob>,
    config: LampConfig,
    /// Whether stepping is suspended
    pub paused: bool,
    /// Total simulated time in seconds
    pub elapsed: f64,
    /// Pre-step position snapshot, reused across steps
    snapshot: Vec<[f32; 2]>,
}

impl LampState {
    /// Build a lamp from an authored blob layout.
    ///
    /// Validation is eager: a malformed config is rejected here rather than
    /// surfacing as non-finite positions somewhere down the step loop.
    pub fn new(config: LampConfig, blobs: Vec<Blob>) -> Result<Self, LampError> {
        config.validate()?;
        if blobs.is_empty() {
            return Err(LampError::NoBlobs);
        }
        Ok(Self {
            blobs,
            config,
            paused: false,
            elapsed: 0.0,
            snapshot: Vec::new(),
        })
    }

    /// Assign random starting temperatures and velocities to every blob.
    /// Called once by the host after construction; positions and sizes keep
    /// their authored values.
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        spawn::randomize_blobs(&mut self.blobs, rng);
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    pub fn config(&self) -> &LampConfig {
        &self.config
    }

    /// Swap in a new config. The next `step` sees the new geometry — there
    /// is no cached boundary state to go stale.
    pub fn set_config(&mut self, config: LampConfig) -> Result<(), LampError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Advance every blob by `dt` seconds of simulated time.
    ///
    /// Each blob's update reads only the pre-step state of its neighbors
    /// (positions are snapshotted before the loop), so the result does not
    /// depend on iteration order. The interaction terms are one-sided and
    /// not momentum-conserving — that asymmetry is part of the lamp's look
    /// and is kept as-is.
    pub fn step(&mut self, dt: f32) -> Result<(), LampError> {
        if !(dt >= 0.0 && dt.is_finite()) {
            return Err(LampError::InvalidTimeStep(dt));
        }
        if self.paused {
            return Ok(());
        }
        self.elapsed += dt as f64;

        self.snapshot.clear();
        self.snapshot.extend(self.blobs.iter().map(|b| b.position));

        let config = &self.config;
        for (i, blob) in self.blobs.iter_mut().enumerate() {
            // Temperature relaxation toward the height equilibrium
            blob.temperature += thermal::temperature_delta(blob.position[1], config) * dt;

            // Buoyancy from stored heat
            blob.velocity[1] += thermal::buoyant_acceleration(blob.temperature, blob.mass()) * dt;

            // One-sided pairwise repulsion against pre-step neighbor positions
            for (j, &other) in self.snapshot.iter().enumerate() {
                if i == j {
                    continue;
                }
                let dv = forces::repulsion(blob.position, other, config.repulsion_strength, dt);
                blob.velocity[0] += dv[0];
                blob.velocity[1] += dv[1];
            }

            // Glass confinement
            let dv = forces::wall_correction(blob.position, config, dt);
            blob.velocity[0] += dv[0];
            blob.velocity[1] += dv[1];

            // Viscous damping, applied after this step's forces have landed
            blob.velocity[0] -= dt * blob.velocity[0] * config.viscosity;
            blob.velocity[1] -= dt * blob.velocity[1] * config.viscosity;

            // Explicit Euler position update with the damped velocity
            blob.position[0] += blob.velocity[0] * dt;
            blob.position[1] += blob.velocity[1] * dt;
        }
        Ok(())
    }
}
