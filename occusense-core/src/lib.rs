//! Core inference engine for OccuSense
//!
//! Infers, in real time, the probability that a physical space is occupied
//! from noisy, heterogeneous sensor evidence: motion, door/window contacts,
//! media and appliance power draw, and slow environmental signals such as
//! temperature, humidity, CO2, sound, and illuminance.
//!
//! Key properties:
//! - No heap allocation in the inference hot path
//! - All public getters are total functions; bad inputs degrade, never panic
//! - Deterministic, single-threaded, O(entities × indicators)
//!
//! ```no_run
//! use occusense_core::{Area, AreaConfig, AreaPurpose, InputType, NoHistory};
//! use occusense_core::time::{SystemTime, TimeSource};
//!
//! let config = AreaConfig::new(AreaPurpose::Bathroom);
//! let mut area = Area::new("bathroom", config, NoHistory).unwrap();
//!
//! let motion = area.new_entity("binary_sensor.bathroom_motion", InputType::Motion).unwrap();
//! area.add_entity(motion).unwrap();
//!
//! let now = SystemTime.now();
//! area.update_entity("binary_sensor.bathroom_motion", Some(true), None, now);
//!
//! let p = area.probability(now);
//! assert!(p > 0.5);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod activity;
pub mod area;
pub mod constants;
pub mod decay;
pub mod entity;
pub mod errors;
pub mod fusion;
pub mod prior;
pub mod purpose;
pub mod time;
pub mod traits;

// Public API
pub use activity::{ActivityId, DetectedActivity, detect_activity};
pub use area::{Area, AreaConfig};
pub use decay::Decay;
pub use entity::{DeviceClass, Entity, Evidence, GaussianParams, InputType, Likelihood};
pub use errors::{ModelError, ModelResult};
pub use fusion::{
    apply_activity_boost, bayesian_probability, clamp_probability, combined_probability,
    environmental_confidence, logit, presence_probability, sigmoid, sigmoid_probability,
};
pub use prior::{Prior, combine_priors};
pub use purpose::AreaPurpose;
pub use traits::{CorrelationSource, NoHistory, TimePriorSource};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
