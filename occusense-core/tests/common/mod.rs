//! Common test utilities and scenario builders for integration tests
//!
//! Provides ready-made areas with realistic sensor sets, a deterministic
//! clock, and a configurable history store, so scenario tests read as
//! timelines rather than setup noise.

#![allow(dead_code)]

use occusense_core::time::{FixedTime, LocalClock, Timestamp};
use occusense_core::{
    Area, AreaConfig, AreaPurpose, CorrelationSource, GaussianParams, InputType,
    Likelihood, TimePriorSource,
};

/// 2024-01-01 00:00:00 UTC, a Monday - a fixed reference origin so
/// day-of-week and time-slot assertions are stable.
pub const MONDAY_MIDNIGHT: Timestamp = 1_704_067_200_000;

/// Milliseconds per hour.
pub const HOUR_MS: u64 = 3_600_000;

/// History store with a uniform time table and uniform correlations.
#[derive(Debug, Clone, Copy)]
pub struct UniformHistory {
    pub time_prior: f32,
    pub correlation: Option<f32>,
}

impl UniformHistory {
    pub fn new(time_prior: f32) -> Self {
        Self {
            time_prior,
            correlation: None,
        }
    }
}

impl TimePriorSource for UniformHistory {
    fn time_priors(&self, _default: f32) -> [f32; 168] {
        [self.time_prior; 168]
    }
}

impl CorrelationSource for UniformHistory {
    fn correlation(&self, _entity_id: &str) -> Option<f32> {
        self.correlation
    }
}

/// A scenario area driven by a deterministic clock.
pub struct Scenario {
    pub area: Area<UniformHistory>,
    pub clock: FixedTime,
}

impl Scenario {
    /// Area of the given purpose with no entities yet.
    pub fn empty(purpose: AreaPurpose) -> Self {
        let config = AreaConfig::new(purpose);
        Self {
            area: Area::new("scenario", config, UniformHistory::new(0.5)).unwrap(),
            clock: FixedTime::new(MONDAY_MIDNIGHT),
        }
    }

    /// Add a binary sensor with the type's defaults.
    pub fn with_sensor(mut self, id: &str, input: InputType) -> Self {
        let entity = self.area.new_entity(id, input).unwrap();
        self.area.add_entity(entity).unwrap();
        self
    }

    /// Add a continuous sensor with learned Gaussian parameters.
    pub fn with_gaussian_sensor(
        mut self,
        id: &str,
        input: InputType,
        params: GaussianParams,
    ) -> Self {
        let (given_true, given_false) = input.default_likelihood();
        let likelihood = Likelihood::learned(given_true, given_false, params).unwrap();
        let mut entity = self.area.new_entity(id, input).unwrap();
        entity.set_likelihood(likelihood);
        self.area.add_entity(entity).unwrap();
        self
    }
}

/// Humidity distribution of a bathroom: dry when empty, saturated when
/// the shower runs.
pub fn bathroom_humidity_params() -> GaussianParams {
    GaussianParams::new(65.0, 5.0, 45.0, 5.0).unwrap()
}
