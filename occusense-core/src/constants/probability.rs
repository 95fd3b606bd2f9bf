//! Probability Bands, Blend Weights, and Rounding
//!
//! The fusion engine manipulates probabilities in logit space, which is
//! singular at exactly 0 and 1. Every probability that enters a logit
//! transform is first clamped to the band below.

// ===== CLAMPING BAND =====

/// Lower bound of the probability band.
///
/// Probabilities are never reported below this value. Keeps `logit`
/// finite and encodes that no amount of evidence makes a room
/// *certainly* empty.
pub const MIN_PROBABILITY: f32 = 0.01;

/// Upper bound of the probability band.
///
/// Mirror of `MIN_PROBABILITY` on the high side. NaN inputs also clamp
/// here: a malfunctioning sensor must not suppress occupancy.
pub const MAX_PROBABILITY: f32 = 0.99;

/// Neutral probability carrying no information either way.
///
/// Used as the sigmoid bias when scoring environmental evidence in
/// isolation, as the interpolation target for decaying Bayesian
/// likelihoods, and as the "no environmental sensors" sentinel.
pub const NEUTRAL_PROBABILITY: f32 = 0.5;

// ===== FUSION BLEND =====

/// Weight of the presence channel in the combined logit blend.
///
/// Binary presence evidence (motion, doors, media) is far more
/// discriminative than slow environmental drift, so it dominates.
pub const PRESENCE_BLEND_WEIGHT: f32 = 0.8;

/// Weight of the environmental channel in the combined logit blend.
///
/// Complements `PRESENCE_BLEND_WEIGHT`; the two must sum to 1.0.
pub const ENVIRONMENTAL_BLEND_WEIGHT: f32 = 0.2;

/// Prior discount applied when an area has no presence sensors at all.
///
/// "No direct evidence available" is reported as half the learned
/// prior - an uncertainty discount, not a neutral 0.5.
pub const NO_PRESENCE_PRIOR_DISCOUNT: f32 = 0.5;

// ===== NUMERIC GUARDS =====

/// Positive floor applied to continuous (density) likelihoods before
/// taking logs.
///
/// Densities may legitimately exceed 1.0 so only the lower bound is
/// enforced.
pub const DENSITY_FLOOR: f32 = 1e-9;

/// Decimal places used when rounding reported confidences and
/// activity-cache keys.
pub const CONFIDENCE_DECIMALS: u32 = 4;
