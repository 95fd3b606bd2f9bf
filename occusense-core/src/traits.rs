//! Collaborator Contracts
//!
//! The engine consumes already-materialized statistics from its host: a
//! learned time-of-day prior table and per-entity correlation strengths.
//! These traits are the only seams to the outside world - the engine
//! never performs storage I/O itself. Learned Gaussian parameters and
//! effective weights arrive directly at entity construction/update and
//! need no trait.

use crate::constants::prior::TIME_PRIOR_SLOTS;

/// Supplies the 168-entry historical time-of-day prior table
///
/// Entries are indexed by `day_of_week * 24 + hourly_slot` with Monday
/// as day 0. Slots without recorded history should carry `default`.
pub trait TimePriorSource {
    /// Materialize the full table
    fn time_priors(&self, default: f32) -> [f32; TIME_PRIOR_SLOTS];
}

/// Supplies learned correlation strengths per entity
///
/// A correlation below 1.0 discounts a sensor whose activity tracks a
/// neighboring area more than this one. Absent entries default to 1.0.
pub trait CorrelationSource {
    /// Correlation strength for the given entity, if learned
    fn correlation(&self, entity_id: &str) -> Option<f32>;
}

/// Null history provider for areas without learned statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl TimePriorSource for NoHistory {
    fn time_priors(&self, default: f32) -> [f32; TIME_PRIOR_SLOTS] {
        [default; TIME_PRIOR_SLOTS]
    }
}

impl CorrelationSource for NoHistory {
    fn correlation(&self, _entity_id: &str) -> Option<f32> {
        None
    }
}
