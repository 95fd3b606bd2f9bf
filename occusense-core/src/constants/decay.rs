//! Decay Model Constants

/// Practical cutoff below which a decay factor is treated as fully
/// decayed.
///
/// Exponential decay never reaches zero; below 5% the remaining evidence
/// is indistinguishable from noise, so the factor is floored to 0.0 and
/// the next `tick` clears the decaying flag.
pub const DECAY_CUTOFF: f32 = 0.05;

/// Default evidence half-life in seconds when no purpose is configured.
pub const DEFAULT_HALF_LIFE_S: f32 = 300.0;

/// Milliseconds per second, for `Timestamp` age conversions.
pub const MS_PER_SECOND: f32 = 1000.0;
