//! Baseline Prior Constants
//!
//! The prior model blends a learned global occupancy rate with a
//! time-of-day table in logit space, then clamps to a band that keeps the
//! prior from ever dominating live evidence.

// ===== PRIOR BAND =====

/// Lower bound of the reported prior.
///
/// Also the value reported before any global prior has been learned.
pub const MIN_PRIOR: f32 = 0.1;

/// Upper bound of the reported prior.
///
/// A prior above this would pre-judge occupancy regardless of evidence.
pub const MAX_PRIOR: f32 = 0.95;

/// Boost factor applied to the combined prior before clamping.
///
/// Currently identity; retained as the single place to reward areas with
/// well-learned occupancy patterns.
pub const PRIOR_FACTOR: f32 = 1.0;

// ===== TIME-OF-DAY TABLE =====

/// Weight given to the time-of-day prior when combining with the global
/// prior in logit space. The global prior keeps the majority share.
pub const TIME_PRIOR_WEIGHT: f32 = 0.4;

/// Time prior used for slots with no recorded history.
pub const DEFAULT_TIME_PRIOR: f32 = 0.5;

/// Lower safety bound applied to every loaded time-prior entry.
pub const TIME_PRIOR_MIN_BOUND: f32 = 0.05;

/// Upper safety bound applied to every loaded time-prior entry.
pub const TIME_PRIOR_MAX_BOUND: f32 = 0.95;

/// Width of one time slot in minutes.
pub const SLOT_MINUTES: u32 = 60;

/// Slots per day at `SLOT_MINUTES` resolution.
pub const SLOTS_PER_DAY: usize = 24;

/// Days tracked by the table.
pub const DAYS_PER_WEEK: usize = 7;

/// Total table entries: 7 days x 24 hourly slots.
pub const TIME_PRIOR_SLOTS: usize = DAYS_PER_WEEK * SLOTS_PER_DAY;

/// Tolerance below which two priors are treated as identical and the
/// logit-space combination is skipped.
pub const PRIOR_IDENTITY_TOLERANCE: f32 = 1e-10;
