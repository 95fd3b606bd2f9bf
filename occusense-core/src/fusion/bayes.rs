//! Log-Space Bayesian Combination
//!
//! An independent naive-Bayes posterior over the same entities the
//! logistic engine consumes. Likelihood selection per entity:
//!
//! ```text
//! evidence state      static sensor              continuous sensor
//! ------------------  -------------------------  ----------------------
//! active / decaying   (p_t, p_f)                 density at state
//! observed inactive   (1 - p_t, 1 - p_f)         density at state
//! unavailable         excluded                   excluded
//! ```
//!
//! While decaying, both likelihoods interpolate toward the neutral 0.5
//! proportionally to the decay factor: fading evidence is a graded
//! mixture between "fully observed" and "no observation", not a hard
//! cutoff. A continuous sensor with no parseable numeric state
//! contributes the neutral pair.
//!
//! Entities with zero weight, non-finite likelihoods, or (for static
//! sensors) likelihoods outside the open interval (0, 1) are silently
//! excluded; when exclusion empties the set the prior is returned
//! unchanged.

use crate::constants::probability::{DENSITY_FLOOR, NEUTRAL_PROBABILITY};
use crate::entity::{Entity, Evidence, Likelihood};
use crate::fusion::logistic::clamp_probability;
use crate::time::Timestamp;

fn likelihood_is_sound(likelihood: &Likelihood) -> bool {
    match likelihood {
        Likelihood::Static {
            given_true,
            given_false,
        } => {
            given_true.is_finite()
                && given_false.is_finite()
                && *given_true > 0.0
                && *given_true < 1.0
                && *given_false > 0.0
                && *given_false < 1.0
        }
        // Densities are only required to be positive, which validated
        // Gaussian parameters guarantee; check finiteness and spread.
        Likelihood::Gaussian { params, .. } => {
            params.is_finite() && params.std_occupied > 0.0 && params.std_unoccupied > 0.0
        }
    }
}

fn observed_likelihoods(entity: &Entity, effective: bool) -> (f32, f32) {
    match entity.likelihood() {
        Likelihood::Gaussian { params, .. } => match entity.state() {
            Some(value) if value.is_finite() => params.densities(value),
            // No numeric state to evaluate: neutral, not inverse -
            // complements are meaningless for densities.
            _ => (NEUTRAL_PROBABILITY, NEUTRAL_PROBABILITY),
        },
        Likelihood::Static {
            given_true,
            given_false,
        } => {
            if effective {
                (*given_true, *given_false)
            } else {
                // Observed inactive: complement probabilities.
                (1.0 - given_true, 1.0 - given_false)
            }
        }
    }
}

/// Posterior probability of occupancy given current evidence and a prior
///
/// Accumulates weighted log-likelihoods starting from `ln(prior)` /
/// `ln(1 - prior)` and normalizes with max-subtraction to avoid
/// overflow. Returns the clamped prior when no entity survives
/// filtering or when both accumulators underflow to zero.
pub fn bayesian_probability(entities: &[Entity], prior: f32, now: Timestamp) -> f32 {
    let survivors = entities
        .iter()
        .filter(|e| e.weight() > 0.0 && likelihood_is_sound(e.likelihood()))
        .count();
    if survivors == 0 {
        return clamp_probability(prior);
    }

    let prior = clamp_probability(prior);
    let mut log_true = libm::logf(prior);
    let mut log_false = libm::logf(1.0 - prior);

    for entity in entities {
        if entity.weight() <= 0.0 || !likelihood_is_sound(entity.likelihood()) {
            continue;
        }

        let evidence = entity.evidence_at(now);

        // Unavailable entities contribute nothing either way.
        if evidence == Evidence::Unavailable {
            continue;
        }

        let (is_decaying, decay_factor) = match evidence {
            Evidence::Decaying(factor) => (true, factor.clamp(0.0, 1.0)),
            _ => (false, 1.0),
        };
        let effective = matches!(evidence, Evidence::Active | Evidence::Decaying(_));

        let (mut p_t, mut p_f) = observed_likelihoods(entity, effective);

        // Fading evidence interpolates toward neutral.
        if is_decaying && decay_factor < 1.0 {
            p_t = NEUTRAL_PROBABILITY + (p_t - NEUTRAL_PROBABILITY) * decay_factor;
            p_f = NEUTRAL_PROBABILITY + (p_f - NEUTRAL_PROBABILITY) * decay_factor;
        }

        // Densities may exceed 1.0: floor only. Discrete probabilities
        // clamp to the standard band before the log.
        if entity.likelihood().is_continuous() {
            p_t = p_t.max(DENSITY_FLOOR);
            p_f = p_f.max(DENSITY_FLOOR);
        } else {
            p_t = clamp_probability(p_t);
            p_f = clamp_probability(p_f);
        }

        let effective_weight = entity.effective_weight();
        log_true += libm::logf(p_t) * effective_weight;
        log_false += libm::logf(p_f) * effective_weight;
    }

    // Normalize in log space: subtract the max before exponentiating.
    let max_log = log_true.max(log_false);
    let true_mass = libm::expf(log_true - max_log);
    let false_mass = libm::expf(log_false - max_log);

    let total = true_mass + false_mass;
    if total == 0.0 {
        return prior;
    }

    clamp_probability(true_mass / total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decay::Decay;
    use crate::entity::{GaussianParams, InputType};

    fn motion(id: &str, weight: f32) -> Entity {
        let lk = Likelihood::fixed(0.9, 0.1).unwrap();
        Entity::new(id, InputType::Motion, lk, weight, Decay::new(100.0)).unwrap()
    }

    fn humidity(id: &str) -> Entity {
        let params = GaussianParams::new(65.0, 5.0, 45.0, 5.0).unwrap();
        let lk = Likelihood::learned(0.6, 0.3, params).unwrap();
        Entity::new(id, InputType::Humidity, lk, 0.5, Decay::new(300.0)).unwrap()
    }

    #[test]
    fn empty_set_returns_prior() {
        assert_eq!(bayesian_probability(&[], 0.3, 0), 0.3);
    }

    #[test]
    fn zero_weight_entities_fall_back_to_prior() {
        let mut e = motion("m", 0.0);
        e.set_evidence(Some(true), None, 0);
        assert_eq!(bayesian_probability(core::slice::from_ref(&e), 0.3, 0), 0.3);
    }

    #[test]
    fn active_evidence_raises_posterior() {
        let mut e = motion("m", 1.0);
        e.set_evidence(Some(true), None, 0);
        let p = bayesian_probability(core::slice::from_ref(&e), 0.5, 0);
        // P = 0.9 / (0.9 + 0.1) = 0.9 at even prior.
        assert!((p - 0.9).abs() < 1e-4);
    }

    #[test]
    fn observed_inactive_lowers_posterior() {
        let mut e = motion("m", 1.0);
        e.set_evidence(Some(false), None, 0);
        let p = bayesian_probability(core::slice::from_ref(&e), 0.5, 0);
        // Complements: 0.1 / (0.1 + 0.9) = 0.1.
        assert!((p - 0.1).abs() < 1e-4);
    }

    #[test]
    fn unavailable_entities_are_skipped() {
        let e = motion("m", 1.0);
        assert_eq!(bayesian_probability(core::slice::from_ref(&e), 0.4, 0), 0.4);
    }

    #[test]
    fn decaying_evidence_interpolates_toward_neutral() {
        let mut e = motion("m", 1.0);
        e.set_evidence(Some(true), None, 0);
        e.set_evidence(Some(false), None, 0);

        // One half-life: factor 0.5, p_t = 0.5 + 0.4*0.5 = 0.7,
        // p_f = 0.5 - 0.4*0.5 = 0.3 -> posterior 0.7.
        let p = bayesian_probability(core::slice::from_ref(&e), 0.5, 100_000);
        assert!((p - 0.7).abs() < 1e-3);
    }

    #[test]
    fn fully_decayed_matches_open_question_asymmetry() {
        // A decaying entity at factor 0.0 contributes the neutral pair -
        // unlike a genuinely inactive one, which contributes complements.
        let mut fading = motion("m", 1.0);
        fading.set_evidence(Some(true), None, 0);
        fading.set_evidence(Some(false), None, 0);
        fading.set_evidence(None, None, 0);
        assert!(matches!(fading.evidence_at(10_000_000), Evidence::Decaying(f) if f == 0.0));

        let p = bayesian_probability(core::slice::from_ref(&fading), 0.5, 10_000_000);
        assert!((p - 0.5).abs() < 1e-4);
    }

    #[test]
    fn gaussian_density_discriminates() {
        let mut h = humidity("h");
        h.set_evidence(Some(true), Some(65.0), 0);
        let at_occupied_mean = bayesian_probability(core::slice::from_ref(&h), 0.5, 0);
        assert!(at_occupied_mean > 0.9);

        h.set_evidence(Some(true), Some(45.0), 0);
        let at_unoccupied_mean = bayesian_probability(core::slice::from_ref(&h), 0.5, 0);
        assert!(at_unoccupied_mean < 0.1);
    }

    #[test]
    fn gaussian_without_state_is_neutral() {
        let mut h = humidity("h");
        h.set_evidence(Some(true), None, 0);
        let p = bayesian_probability(core::slice::from_ref(&h), 0.5, 0);
        assert!((p - 0.5).abs() < 1e-4);
    }

    #[test]
    fn effective_weight_scales_contribution() {
        let mut strong = motion("m", 1.0);
        strong.set_evidence(Some(true), None, 0);

        let mut weak = motion("m", 1.0);
        weak.set_effective_weight(0.25);
        weak.set_evidence(Some(true), None, 0);

        let p_strong = bayesian_probability(core::slice::from_ref(&strong), 0.5, 0);
        let p_weak = bayesian_probability(core::slice::from_ref(&weak), 0.5, 0);
        assert!(p_strong > p_weak);
        assert!(p_weak > 0.5);
    }

    #[test]
    fn extreme_prior_is_clamped() {
        let p = bayesian_probability(&[], 1.5, 0);
        assert_eq!(p, 0.99);
    }
}
