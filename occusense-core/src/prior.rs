//! Area Baseline Prior
//!
//! P(room occupied) *before* current evidence. The model blends a
//! learned global occupancy rate with a 168-slot time-of-day table
//! (7 days x 24 hourly slots) in logit space, clamps the result to a
//! band that keeps the prior from dominating live evidence, and raises
//! it - never lowers it - to purpose and user override floors.
//!
//! The time table is loaded lazily through [`TimePriorSource`] and
//! cached until explicitly invalidated. Setting a new global prior
//! invalidates the cache; [`Prior::invalidate`] is a named, testable
//! transition rather than a side effect buried elsewhere.

use crate::constants::prior::{
    DEFAULT_TIME_PRIOR, MAX_PRIOR, MIN_PRIOR, PRIOR_FACTOR, PRIOR_IDENTITY_TOLERANCE,
    SLOTS_PER_DAY, TIME_PRIOR_MAX_BOUND, TIME_PRIOR_MIN_BOUND, TIME_PRIOR_SLOTS,
    TIME_PRIOR_WEIGHT,
};
use crate::constants::probability::{MAX_PROBABILITY, MIN_PROBABILITY};
use crate::fusion::logistic::{clamp_probability, logit, sigmoid};
use crate::time::{LocalClock, Timestamp};
use crate::traits::TimePriorSource;

/// Combine global and time priors by weighted averaging in logit space
///
/// Degenerate weights short-circuit; inputs within 1e-10 of each other
/// return the common value. Exact 0.0 / 1.0 inputs are substituted with
/// the probability band edges first - a slot that has *never* been
/// occupied is strong evidence, not absolute.
pub fn combine_priors(area_prior: f32, time_prior: f32, time_weight: f32) -> f32 {
    if time_weight == 0.0 {
        return clamp_probability(area_prior);
    }
    if time_weight == 1.0 {
        return clamp_probability(time_prior);
    }

    let time_prior = match time_prior {
        p if p == 0.0 => MIN_PROBABILITY,
        p if p == 1.0 => MAX_PROBABILITY,
        p => p,
    };
    let area_prior = match area_prior {
        p if p == 0.0 => MIN_PROBABILITY,
        p if p == 1.0 => MAX_PROBABILITY,
        p => p,
    };

    if (area_prior - time_prior).abs() < PRIOR_IDENTITY_TOLERANCE {
        return area_prior;
    }

    let area_prior = clamp_probability(area_prior);
    let time_prior = clamp_probability(time_prior);
    let time_weight = time_weight.clamp(0.0, 1.0);
    let area_weight = 1.0 - time_weight;

    let combined = area_weight * logit(area_prior) + time_weight * logit(time_prior);
    clamp_probability(sigmoid(combined))
}

/// Baseline occupancy prior for one area
#[derive(Debug, Clone)]
pub struct Prior {
    global_prior: Option<f32>,
    time_priors: Option<[f32; TIME_PRIOR_SLOTS]>,
    purpose_floor: f32,
    override_floor: f32,
    clock: LocalClock,
}

impl Prior {
    /// Create a prior with no learned data and no floors
    pub fn new(clock: LocalClock) -> Self {
        Self {
            global_prior: None,
            time_priors: None,
            purpose_floor: 0.0,
            override_floor: 0.0,
            clock,
        }
    }

    /// Set the purpose-based floor
    pub fn with_purpose_floor(mut self, floor: f32) -> Self {
        self.purpose_floor = floor;
        self
    }

    /// Set the user override floor
    pub fn with_override_floor(mut self, floor: f32) -> Self {
        self.override_floor = floor;
        self
    }

    /// The learned global prior, if any
    pub fn global_prior(&self) -> Option<f32> {
        self.global_prior
    }

    /// Whether the time table is currently cached
    pub fn is_cached(&self) -> bool {
        self.time_priors.is_some()
    }

    /// Set the learned global prior
    ///
    /// The value is clamped to the probability band; the time-prior
    /// cache is invalidated so the next read reloads alongside the new
    /// global value.
    pub fn set_global_prior(&mut self, prior: f32) {
        self.global_prior = Some(clamp_probability(prior));
        self.invalidate();
    }

    /// Drop the cached time table; the next read reloads it
    pub fn invalidate(&mut self) {
        self.time_priors = None;
    }

    /// Release all learned data (area teardown)
    pub fn clear(&mut self) {
        self.invalidate();
        self.global_prior = None;
    }

    /// Current day of week, 0 = Monday
    pub fn day_of_week(&self, now: Timestamp) -> u32 {
        self.clock.day_of_week(now)
    }

    /// Current time slot within the day
    pub fn time_slot(&self, now: Timestamp) -> usize {
        self.clock.time_slot(now)
    }

    /// Historical prior for the current time slot
    ///
    /// Loads the full table through `store` on first access and caches
    /// it; every entry is bounds-clamped on load.
    pub fn time_prior(&mut self, store: &dyn TimePriorSource, now: Timestamp) -> f32 {
        let index = self.clock.day_of_week(now) as usize * SLOTS_PER_DAY
            + self.clock.time_slot(now);
        let table = self.ensure_loaded(store);
        table[index.min(TIME_PRIOR_SLOTS - 1)]
    }

    /// The externally visible prior value
    ///
    /// `MIN_PRIOR` until a global prior has been learned; otherwise the
    /// logit-space combination of global and time priors, boosted and
    /// clamped to `[MIN_PRIOR, MAX_PRIOR]`. Purpose and override floors
    /// raise the result, never lower it, and apply on every path.
    pub fn value(&mut self, store: &dyn TimePriorSource, now: Timestamp) -> f32 {
        let mut result = match self.global_prior {
            None => MIN_PRIOR,
            Some(global) => {
                let time = self.time_prior(store, now);
                let combined = combine_priors(global, time, TIME_PRIOR_WEIGHT);
                (combined * PRIOR_FACTOR).clamp(MIN_PRIOR, MAX_PRIOR)
            }
        };

        if self.purpose_floor > 0.0 {
            result = result.max(self.purpose_floor);
        }
        if self.override_floor > 0.0 {
            result = result.max(self.override_floor);
        }

        result
    }

    fn ensure_loaded(&mut self, store: &dyn TimePriorSource) -> &[f32; TIME_PRIOR_SLOTS] {
        if self.time_priors.is_none() {
            let mut table = store.time_priors(DEFAULT_TIME_PRIOR);
            for entry in table.iter_mut() {
                *entry = entry.clamp(TIME_PRIOR_MIN_BOUND, TIME_PRIOR_MAX_BOUND);
            }
            self.time_priors = Some(table);
        }
        self.time_priors.as_ref().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::NoHistory;
    use core::cell::Cell;

    /// Store that counts loads and serves a uniform table.
    struct CountingStore {
        value: f32,
        loads: Cell<u32>,
    }

    impl CountingStore {
        fn new(value: f32) -> Self {
            Self {
                value,
                loads: Cell::new(0),
            }
        }
    }

    impl TimePriorSource for CountingStore {
        fn time_priors(&self, _default: f32) -> [f32; TIME_PRIOR_SLOTS] {
            self.loads.set(self.loads.get() + 1);
            [self.value; TIME_PRIOR_SLOTS]
        }
    }

    #[test]
    fn combine_priors_reference_scenario() {
        let combined = combine_priors(0.2, 0.6, 0.4);
        // Strictly between the inputs, closer to the area prior.
        assert!(combined > 0.2 && combined < 0.6);
        assert!((combined - 0.2).abs() < (0.6 - combined).abs());
        assert!((combined - 0.3386).abs() < 1e-3);
    }

    #[test]
    fn combine_priors_degenerate_weights() {
        assert_eq!(combine_priors(0.2, 0.6, 0.0), 0.2);
        assert_eq!(combine_priors(0.2, 0.6, 1.0), 0.6);
    }

    #[test]
    fn combine_priors_identical_inputs() {
        assert_eq!(combine_priors(0.4, 0.4, 0.4), 0.4);
    }

    #[test]
    fn combine_priors_substitutes_certainty() {
        // Exact 0/1 are strong, not absolute: band edges substitute.
        let low = combine_priors(0.5, 0.0, 0.4);
        assert!(low > 0.0 && low < 0.5);
        let high = combine_priors(0.5, 1.0, 0.4);
        assert!(high > 0.5 && high < 1.0);
    }

    #[test]
    fn unlearned_prior_reports_minimum() {
        let mut prior = Prior::new(LocalClock::utc());
        assert_eq!(prior.value(&NoHistory, 0), MIN_PRIOR);
    }

    #[test]
    fn learned_prior_combines_with_time_table() {
        let store = CountingStore::new(0.6);
        let mut prior = Prior::new(LocalClock::utc());
        prior.set_global_prior(0.2);

        let value = prior.value(&store, 0);
        let expected = combine_priors(0.2, 0.6, TIME_PRIOR_WEIGHT).clamp(MIN_PRIOR, MAX_PRIOR);
        assert!((value - expected).abs() < 1e-6);
    }

    #[test]
    fn floors_raise_never_lower() {
        let mut prior = Prior::new(LocalClock::utc())
            .with_purpose_floor(0.15)
            .with_override_floor(0.3);
        // Unlearned: MIN_PRIOR raised through both floors.
        assert_eq!(prior.value(&NoHistory, 0), 0.3);

        // A high learned prior is untouched by the floors.
        let store = CountingStore::new(0.9);
        prior.set_global_prior(0.9);
        assert!(prior.value(&store, 0) > 0.3);
    }

    #[test]
    fn table_loads_once_until_invalidated() {
        let store = CountingStore::new(0.5);
        let mut prior = Prior::new(LocalClock::utc());
        prior.set_global_prior(0.4);

        prior.value(&store, 0);
        prior.value(&store, 1_000_000);
        assert_eq!(store.loads.get(), 1);

        prior.invalidate();
        assert!(!prior.is_cached());
        prior.value(&store, 0);
        assert_eq!(store.loads.get(), 2);
    }

    #[test]
    fn set_global_prior_invalidates_cache() {
        let store = CountingStore::new(0.5);
        let mut prior = Prior::new(LocalClock::utc());
        prior.set_global_prior(0.4);
        prior.value(&store, 0);
        assert!(prior.is_cached());

        prior.set_global_prior(0.5);
        assert!(!prior.is_cached());
    }

    #[test]
    fn loaded_entries_are_bounds_clamped() {
        let store = CountingStore::new(0.999);
        let mut prior = Prior::new(LocalClock::utc());
        let time = prior.time_prior(&store, 0);
        assert_eq!(time, TIME_PRIOR_MAX_BOUND);

        let store = CountingStore::new(0.0);
        let mut prior = Prior::new(LocalClock::utc());
        assert_eq!(prior.time_prior(&store, 0), TIME_PRIOR_MIN_BOUND);
    }

    #[test]
    fn set_global_prior_clamps() {
        let mut prior = Prior::new(LocalClock::utc());
        prior.set_global_prior(1.5);
        assert_eq!(prior.global_prior(), Some(0.99));

        prior.clear();
        assert_eq!(prior.global_prior(), None);
    }
}
