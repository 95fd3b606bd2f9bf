//! Constants for OccuSense Core
//!
//! This module provides centralized, well-documented constants used
//! throughout the inference engine. All numeric values are defined here
//! with clear explanations of their purpose and rationale.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Probability**: Clamping bands, blend weights, and rounding
//! - **Sensors**: Per-input-type default likelihoods and weights
//! - **Decay**: Half-life defaults and the practical decay cutoff
//! - **Prior**: Baseline prior bands and the time-of-day table geometry
//! - **Activity**: Boost tiers and classifier thresholds
//! - **Buffers**: Fixed capacities for the no-allocation hot path
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. When adding new constants, include documentation of the rationale
//! 3. Group related constants together
//! 4. Use descriptive names that include units where applicable

/// Probability clamping bands, fusion blend weights, and rounding.
pub mod probability;

/// Per-input-type sensor defaults: likelihoods, weights, multipliers.
pub mod sensors;

/// Decay half-life defaults and cutoff thresholds.
pub mod decay;

/// Baseline prior bands and time-of-day table geometry.
pub mod prior;

/// Activity classifier boost tiers and thresholds.
pub mod activity;

/// Fixed capacities for bounded collections.
pub mod buffers;

// Re-export commonly used constants for convenience
pub use probability::{
    MIN_PROBABILITY, MAX_PROBABILITY, NEUTRAL_PROBABILITY,
    PRESENCE_BLEND_WEIGHT, ENVIRONMENTAL_BLEND_WEIGHT,
};

pub use decay::{DECAY_CUTOFF, DEFAULT_HALF_LIFE_S};

pub use prior::{
    MIN_PRIOR, MAX_PRIOR, DEFAULT_TIME_PRIOR, TIME_PRIOR_SLOTS, TIME_PRIOR_WEIGHT,
};

pub use activity::{
    ACTIVITY_BOOST_MILD, ACTIVITY_BOOST_MODERATE, ACTIVITY_BOOST_STRONG,
    ACTIVITY_BOOST_HIGH,
};

pub use buffers::{MAX_AREA_ENTITIES, MAX_ENTITY_ID_LEN, MAX_MATCHED_ENTITIES};
