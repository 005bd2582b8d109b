use thiserror::Error;

/// Configuration and stepping failures.
///
/// Everything here is rejected eagerly at construction or config-update
/// time; the step loop itself has no fallible paths besides the time step
/// guard. Coincident blobs are not an error — their repulsion contribution
/// is skipped (see `lava_physics::forces::repulsion`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LampError {
    #[error("lamp size must be positive and finite, got {0} x {1}")]
    LampSizeNotPositive(f32, f32),

    #[error("top narrowing must be in (0, 1], got {0}")]
    TopNarrowingOutOfRange(f32),

    #[error("{0} must be finite")]
    ParameterNotFinite(&'static str),

    #[error("at least one blob is required")]
    NoBlobs,

    #[error("time step must be non-negative and finite, got {0}")]
    InvalidTimeStep(f32),
}
