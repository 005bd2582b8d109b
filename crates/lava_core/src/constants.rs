// Simulation units are lamp-local: 1 unit ≈ 1 lamp-width of a small desk
// lamp, time in seconds. None of the force terms are physically calibrated;
// the constants below only pin down the edge behavior.

/// Smallest mass a blob can present to the buoyancy term.
/// Guards the division when an authored size is zero.
pub const MIN_BLOB_MASS: f32 = 1e-3;

/// Initial temperature is drawn uniformly from ±this range.
pub const INITIAL_TEMPERATURE_RANGE: f32 = 1.0;

/// Initial velocity components are drawn uniformly from ±this range.
pub const INITIAL_VELOCITY_RANGE: f32 = 0.5;

/// Fixed time step used by the headless binary (seconds).
pub const DEFAULT_DT: f32 = 0.02;
