//! Error Types for Model Construction and Configuration
//!
//! ## Design Philosophy
//!
//! The inference engine itself never fails: every probability getter is a
//! total function that degrades to a conservative default (prior, neutral
//! 0.5, Idle/Unoccupied) on bad data. Errors exist only at the
//! construction and configuration seams, where rejecting an invalid
//! sensor definition early is cheaper than excluding it on every query.
//!
//! Error values follow the same constraints as the rest of the crate:
//!
//! 1. **Small Size**: all data is inline - f32 payloads and
//!    `&'static str` reasons only, no String.
//! 2. **Copy Semantics**: errors implement Copy for efficient returns.
//! 3. **Actionable Information**: each variant carries the offending
//!    value so the caller can report it without further queries.

use thiserror_no_std::Error;

/// Result type for model construction and configuration
pub type ModelResult<T> = Result<T, ModelError>;

/// Construction/configuration errors - kept small and Copy
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ModelError {
    /// Binary likelihood outside the open interval (0, 1)
    #[error("likelihood {value} outside open interval (0, 1)")]
    InvalidLikelihood {
        /// The rejected likelihood value
        value: f32,
    },

    /// Gaussian parameters are non-finite or have non-positive spread
    #[error("invalid Gaussian parameters: {reason}")]
    InvalidGaussian {
        /// What was wrong with the parameters
        reason: &'static str,
    },

    /// Entity weight is negative or non-finite
    #[error("invalid weight {value}: must be finite and non-negative")]
    InvalidWeight {
        /// The rejected weight
        value: f32,
    },

    /// Occupancy threshold outside [0, 1]
    #[error("threshold {value} outside [0, 1]")]
    InvalidThreshold {
        /// The rejected threshold
        value: f32,
    },

    /// Sleep window time string is not HH:MM:SS
    #[error("time string is not HH:MM:SS")]
    InvalidTimeFormat,

    /// A bounded collection is full
    #[error("capacity {capacity} exceeded")]
    CapacityExceeded {
        /// The fixed capacity that was exceeded
        capacity: usize,
    },

    /// Entity identifier longer than the inline capacity
    #[error("entity id longer than {max} bytes")]
    IdTooLong {
        /// Maximum identifier length in bytes
        max: usize,
    },
}
