//! Fixed Capacities for Bounded Collections
//!
//! The inference hot path performs no heap allocation; every collection
//! has a compile-time capacity. Exceeding one is a construction-time
//! `ModelError`, never a panic.

/// Maximum sensing entities per area.
pub const MAX_AREA_ENTITIES: usize = 32;

/// Maximum byte length of an entity identifier.
pub const MAX_ENTITY_ID_LEN: usize = 64;

/// Maximum matched entity ids recorded on a detected activity.
///
/// Matches beyond this are still scored; only the reported id list is
/// truncated.
pub const MAX_MATCHED_ENTITIES: usize = 16;
