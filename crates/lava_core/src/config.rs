use serde::{Deserialize, Serialize};

use crate::error::LampError;

/// Lamp geometry and physics tuning.
///
/// Shared read-only during a step; geometry changes applied through
/// `LampState::set_config` take effect on the very next step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LampConfig {
    /// Full container extent: width at the floor (the widest point), height
    pub lamp_size: [f32; 2],
    /// Multiplier in (0, 1] on the allowed half-width at the top of the
    /// lamp; the glass tapers linearly from the floor up (a trapezoid)
    pub top_narrowing: f32,
    /// Rate at which blob temperature is pulled toward the height-based
    /// equilibrium
    pub temperature_gradient: f32,
    /// Coefficient on the inverse-cube pairwise repulsion
    pub repulsion_strength: f32,
    /// Fraction of velocity removed per unit time
    pub viscosity: f32,
    /// Seed for blob randomization, kept here so runs are reproducible
    pub seed: u64,
}

impl Default for LampConfig {
    fn default() -> Self {
        Self {
            lamp_size: [2.0, 4.0],
            top_narrowing: 1.0,
            temperature_gradient: 0.5,
            repulsion_strength: 0.1,
            viscosity: 2.0,
            seed: 42,
        }
    }
}

impl LampConfig {
    /// Reject malformed geometry and non-finite tuning values up front.
    /// A zero-height lamp would otherwise surface as division by zero in
    /// the temperature relaxation on every step.
    pub fn validate(&self) -> Result<(), LampError> {
        let [w, h] = self.lamp_size;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(LampError::LampSizeNotPositive(w, h));
        }
        if !(self.top_narrowing.is_finite()
            && self.top_narrowing > 0.0
            && self.top_narrowing <= 1.0)
        {
            return Err(LampError::TopNarrowingOutOfRange(self.top_narrowing));
        }
        if !self.temperature_gradient.is_finite() {
            return Err(LampError::ParameterNotFinite("temperature_gradient"));
        }
        if !self.repulsion_strength.is_finite() {
            return Err(LampError::ParameterNotFinite("repulsion_strength"));
        }
        if !self.viscosity.is_finite() {
            return Err(LampError::ParameterNotFinite("viscosity"));
        }
        Ok(())
    }

    /// Half-width of the glass at the floor.
    pub fn half_width(&self) -> f32 {
        self.lamp_size[0] * 0.5
    }

    /// Height of the glass.
    pub fn height(&self) -> f32 {
        self.lamp_size[1]
    }
}
