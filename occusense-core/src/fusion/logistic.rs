//! Sigmoid/Logit Fusion of Entity Evidence
//!
//! All probabilities pass through `logit(p) = ln(p / (1 - p))` computed
//! on a band-clamped `p`, are combined additively in log-odds space, and
//! return through a numerically stable `sigmoid`.
//!
//! The evidence contribution of an entity is a single canonical mapping
//! of its [`Evidence`] snapshot:
//!
//! ```text
//! Active        1.0
//! Decaying(f)   f          (gradual fade, never negative)
//! Inactive      0.0        (silence, not counter-evidence)
//! Unavailable   0.0
//! ```

use crate::constants::probability::{
    CONFIDENCE_DECIMALS, ENVIRONMENTAL_BLEND_WEIGHT, MAX_PROBABILITY, MIN_PROBABILITY,
    NEUTRAL_PROBABILITY, NO_PRESENCE_PRIOR_DISCOUNT, PRESENCE_BLEND_WEIGHT,
};
use crate::entity::{Entity, Evidence};
use crate::time::Timestamp;
use crate::traits::CorrelationSource;

/// Clamp a probability to the configured band
///
/// Non-finite inputs never propagate: positive infinity clamps to the
/// maximum, negative infinity to the minimum, and NaN to the maximum
/// with a logged warning. Clamping NaN high is deliberate fail-safe
/// policy - a malfunctioning sensor must not suppress occupancy.
pub fn clamp_probability(value: f32) -> f32 {
    if value.is_nan() {
        log_warn!("clamp_probability received NaN, using MAX_PROBABILITY");
        return MAX_PROBABILITY;
    }
    if value.is_infinite() {
        return if value > 0.0 {
            MAX_PROBABILITY
        } else {
            MIN_PROBABILITY
        };
    }
    value.clamp(MIN_PROBABILITY, MAX_PROBABILITY)
}

/// Numerically stable sigmoid
///
/// Branches on the sign of `z` so `exp` never sees a large positive
/// argument.
pub fn sigmoid(z: f32) -> f32 {
    if z >= 0.0 {
        1.0 / (1.0 + libm::expf(-z))
    } else {
        let exp_z = libm::expf(z);
        exp_z / (1.0 + exp_z)
    }
}

/// Log-odds transform on a band-clamped probability
pub fn logit(p: f32) -> f32 {
    let p = clamp_probability(p);
    libm::logf(p / (1.0 - p))
}

/// Round a probability to the reporting precision (4 decimals)
///
/// Used for reported confidences and activity-cache keys.
pub fn round_probability(p: f32) -> f32 {
    let scale = libm::powf(10.0, CONFIDENCE_DECIMALS as f32);
    libm::roundf(p * scale) / scale
}

/// Evidence contribution of a snapshot, in [0, 1]
pub(crate) fn evidence_contribution(evidence: Evidence) -> f32 {
    match evidence {
        Evidence::Active => 1.0,
        Evidence::Decaying(factor) => factor.clamp(0.0, 1.0),
        Evidence::Inactive | Evidence::Unavailable => 0.0,
    }
}

fn weighted_log_odds<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    prior: f32,
    correlations: Option<&dyn CorrelationSource>,
    now: Timestamp,
) -> f32 {
    // Bias from the prior: logit(0.5) = 0, logit(0.7) = 0.85.
    let mut z = logit(prior);

    for entity in entities {
        if entity.weight() <= 0.0 {
            continue;
        }

        let correlation = correlations
            .and_then(|c| c.correlation(entity.id()))
            .unwrap_or(1.0);

        let evidence = evidence_contribution(entity.evidence_at(now));

        // Scale by sensor strength: a motion sensor (0.95) contributes
        // more than a door (0.2), and its per-type multiplier more still.
        let strength =
            entity.likelihood().given_true() * entity.input().strength_multiplier();

        z += entity.effective_weight() * evidence * correlation * strength;
    }

    z
}

/// Occupancy probability from a weighted sigmoid over all entities
///
/// `z = logit(prior) + sum(effective_weight x evidence x correlation x
/// strength)`, returned as `sigmoid(z)` clamped to the probability band.
/// An empty entity set returns the clamped prior.
pub fn sigmoid_probability(
    entities: &[Entity],
    prior: f32,
    correlations: Option<&dyn CorrelationSource>,
    now: Timestamp,
) -> f32 {
    if entities.is_empty() {
        return clamp_probability(prior);
    }

    clamp_probability(sigmoid(weighted_log_odds(
        entities.iter(),
        prior,
        correlations,
        now,
    )))
}

/// Presence probability from the strong binary indicator category
///
/// Restricts to motion, door, window, cover, media, appliance, and
/// power entities. With none configured, returns the prior discounted
/// by half: "no direct evidence available", not "evidence of absence".
pub fn presence_probability(
    entities: &[Entity],
    prior: f32,
    correlations: Option<&dyn CorrelationSource>,
    now: Timestamp,
) -> f32 {
    let mut presence = entities.iter().filter(|e| e.input().is_presence());

    if presence.clone().next().is_none() {
        return clamp_probability(prior * NO_PRESENCE_PRIOR_DISCOUNT);
    }

    clamp_probability(sigmoid(weighted_log_odds(
        &mut presence,
        prior,
        correlations,
        now,
    )))
}

/// Environmental support for occupancy as a 0-1 confidence
///
/// Restricts to the environmental category and scores it against a
/// neutral 0.5 prior so the result reflects environmental evidence
/// alone. Returns exactly 0.5 when no environmental sensors exist -
/// callers use this as the "nothing configured" sentinel.
pub fn environmental_confidence(
    entities: &[Entity],
    correlations: Option<&dyn CorrelationSource>,
    now: Timestamp,
) -> f32 {
    let mut environmental = entities.iter().filter(|e| e.input().is_environmental());

    if environmental.clone().next().is_none() {
        return NEUTRAL_PROBABILITY;
    }

    clamp_probability(sigmoid(weighted_log_odds(
        &mut environmental,
        NEUTRAL_PROBABILITY,
        correlations,
        now,
    )))
}

/// Blend presence and environmental signals in logit space
///
/// `z = 0.8 * logit(presence) + 0.2 * logit(environmental)`. The 80/20
/// split encodes that binary presence evidence is far more
/// discriminative than slow environmental drift.
pub fn combined_probability(presence: f32, environmental: f32) -> f32 {
    let z = PRESENCE_BLEND_WEIGHT * logit(presence)
        + ENVIRONMENTAL_BLEND_WEIGHT * logit(environmental);
    clamp_probability(sigmoid(z))
}

/// Apply an activity-driven boost in logit space
///
/// The effective boost is `boost x confidence`; non-positive boosts
/// leave the base unchanged. Boosting - never discounting - preserves
/// monotonicity: the result cannot fall below the un-boosted value.
pub fn apply_activity_boost(base: f32, boost: f32, confidence: f32) -> f32 {
    let effective = boost * confidence;
    if effective <= 0.0 {
        return clamp_probability(base);
    }
    clamp_probability(sigmoid(logit(base) + effective))
}
