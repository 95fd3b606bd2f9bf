//! Activity Classifier Constants
//!
//! Boost magnitudes are expressed in logit units: a boost of 1.0 moves a
//! 0.5 base probability to sigmoid(1.0) = 0.73 at full confidence.

// ===== OCCUPANCY BOOST TIERS =====

/// Mild boost: the activity only weakly implies continued presence.
pub const ACTIVITY_BOOST_MILD: f32 = 0.3;

/// Moderate boost.
pub const ACTIVITY_BOOST_MODERATE: f32 = 0.6;

/// Strong boost: the activity is a reliable presence signal.
pub const ACTIVITY_BOOST_STRONG: f32 = 0.9;

/// High boost: the combined signal pattern is near-conclusive
/// (showering, sleeping in an instrumented bed).
pub const ACTIVITY_BOOST_HIGH: f32 = 1.2;

// ===== CLASSIFIER THRESHOLDS =====

/// Default minimum matched weight a definition must accumulate, applied
/// both to the raw matched weight and to the normalized confidence.
/// Prevents single weak indicators from claiming an activity.
pub const DEFAULT_MIN_MATCH_WEIGHT: f32 = 0.3;

/// An environmental entity is discriminative only when its occupied and
/// unoccupied means are separated by at least this fraction of the
/// average standard deviation.
pub const ENV_SEPARATION_FACTOR: f32 = 0.5;

/// Tolerance guard for the mean span; below this the signal strength is
/// 0 rather than risking division by a vanishing span.
pub const ENV_SPAN_TOLERANCE: f32 = 1e-9;
