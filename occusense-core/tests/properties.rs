//! Property-based tests for the universal invariants of the engine
//!
//! These hold for *all* inputs, not just curated scenarios: clamping
//! bands, the sigmoid/logit inverse law, decay monotonicity, and boost
//! non-regression.

use proptest::prelude::*;

use occusense_core::{
    apply_activity_boost, clamp_probability, combine_priors, logit, sigmoid, Decay,
};

proptest! {
    #[test]
    fn clamp_is_always_in_band(x in proptest::num::f32::ANY) {
        let clamped = clamp_probability(x);
        prop_assert!((0.01..=0.99).contains(&clamped));
    }

    #[test]
    fn sigmoid_logit_roundtrip(p in 0.011f32..0.989) {
        let roundtrip = sigmoid(logit(p));
        prop_assert!((roundtrip - p).abs() < 1e-4);
    }

    #[test]
    fn sigmoid_is_monotone(a in -50.0f32..50.0, b in -50.0f32..50.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(sigmoid(lo) <= sigmoid(hi));
    }

    #[test]
    fn decay_factor_is_monotone_and_bounded(
        half_life in 1.0f32..7200.0,
        age_a in 0u64..10_000_000,
        age_b in 0u64..10_000_000,
    ) {
        let mut decay = Decay::new(half_life);
        decay.start_decay(0);

        let (early, late) = if age_a <= age_b { (age_a, age_b) } else { (age_b, age_a) };
        let f_early = decay.decay_factor(early);
        let f_late = decay.decay_factor(late);

        prop_assert!((0.0..=1.0).contains(&f_early));
        prop_assert!((0.0..=1.0).contains(&f_late));
        prop_assert!(f_late <= f_early);
    }

    #[test]
    fn decay_starts_fresh(half_life in 1.0f32..7200.0) {
        let mut decay = Decay::new(half_life);
        decay.start_decay(1_000);
        prop_assert_eq!(decay.decay_factor(1_000), 1.0);
    }

    #[test]
    fn boost_never_lowers_base(
        base in 0.01f32..0.99,
        boost in 0.0f32..3.0,
        confidence in 0.0f32..1.0,
    ) {
        let boosted = apply_activity_boost(base, boost, confidence);
        prop_assert!(boosted >= base - 1e-5);
    }

    #[test]
    fn combined_prior_stays_between_inputs(
        area in 0.02f32..0.98,
        time in 0.02f32..0.98,
        weight in 0.01f32..0.99,
    ) {
        let combined = combine_priors(area, time, weight);
        let lo = area.min(time) - 1e-4;
        let hi = area.max(time) + 1e-4;
        prop_assert!(combined >= lo && combined <= hi);
    }
}
