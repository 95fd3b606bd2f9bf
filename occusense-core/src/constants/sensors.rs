//! Per-Input-Type Sensor Defaults
//!
//! Default static likelihoods `P(active|occupied)` / `P(active|unoccupied)`
//! and contribution weights for each semantic input type. These are the
//! starting points used when no learned statistics are available; learned
//! Gaussian parameters and information-gain discounts replace them as
//! history accumulates.
//!
//! Likelihoods for binary sensors must lie strictly inside (0, 1).

// ===== PRESENCE SENSORS =====

/// Motion: the strongest single occupancy indicator.
pub const MOTION_PROB_TRUE: f32 = 0.95;
/// Motion false-trigger rate (pets, drafts, HVAC).
pub const MOTION_PROB_FALSE: f32 = 0.05;
/// Motion weight: near-ground-truth.
pub const MOTION_WEIGHT: f32 = 0.85;

/// Door activity correlates weakly with sustained occupancy.
pub const DOOR_PROB_TRUE: f32 = 0.2;
/// Doors rarely open with nobody around.
pub const DOOR_PROB_FALSE: f32 = 0.05;
/// Door weight.
pub const DOOR_WEIGHT: f32 = 0.3;

/// Window activity, weaker than doors.
pub const WINDOW_PROB_TRUE: f32 = 0.2;
/// Window false rate.
pub const WINDOW_PROB_FALSE: f32 = 0.05;
/// Window weight.
pub const WINDOW_WEIGHT: f32 = 0.2;

/// Cover (blinds/shades) movement.
pub const COVER_PROB_TRUE: f32 = 0.2;
/// Cover false rate (automations move covers in empty rooms).
pub const COVER_PROB_FALSE: f32 = 0.1;
/// Cover weight.
pub const COVER_WEIGHT: f32 = 0.2;

/// Media players playing strongly suggest someone is watching/listening.
pub const MEDIA_PROB_TRUE: f32 = 0.9;
/// Media left running in empty rooms.
pub const MEDIA_PROB_FALSE: f32 = 0.1;
/// Media weight.
pub const MEDIA_WEIGHT: f32 = 0.7;

/// Appliances in active use.
pub const APPLIANCE_PROB_TRUE: f32 = 0.8;
/// Unattended appliance cycles (dishwasher, dryer).
pub const APPLIANCE_PROB_FALSE: f32 = 0.1;
/// Appliance weight.
pub const APPLIANCE_WEIGHT: f32 = 0.4;

/// Power draw above threshold.
pub const POWER_PROB_TRUE: f32 = 0.8;
/// Standby/background power false rate.
pub const POWER_PROB_FALSE: f32 = 0.1;
/// Power weight.
pub const POWER_WEIGHT: f32 = 0.4;

/// Dedicated sleep sensors (bed presence).
pub const SLEEP_PROB_TRUE: f32 = 0.9;
/// Sleep sensor false rate.
pub const SLEEP_PROB_FALSE: f32 = 0.1;
/// Sleep sensor weight.
pub const SLEEP_WEIGHT: f32 = 0.8;

// ===== ENVIRONMENTAL SENSORS =====
//
// Environmental likelihoods are deliberately weak: raw threshold crossings
// carry little information until Gaussian parameters are learned.

/// Temperature elevation with occupancy.
pub const TEMPERATURE_PROB_TRUE: f32 = 0.6;
/// Temperature baseline rate.
pub const TEMPERATURE_PROB_FALSE: f32 = 0.3;
/// Temperature weight.
pub const TEMPERATURE_WEIGHT: f32 = 0.1;

/// Humidity elevation with occupancy.
pub const HUMIDITY_PROB_TRUE: f32 = 0.6;
/// Humidity baseline rate.
pub const HUMIDITY_PROB_FALSE: f32 = 0.3;
/// Humidity weight.
pub const HUMIDITY_WEIGHT: f32 = 0.1;

/// Pressure barely discriminates occupancy.
pub const PRESSURE_PROB_TRUE: f32 = 0.55;
/// Pressure baseline rate.
pub const PRESSURE_PROB_FALSE: f32 = 0.45;
/// Pressure weight.
pub const PRESSURE_WEIGHT: f32 = 0.05;

/// CO2 rises reliably with breathing occupants.
pub const CO2_PROB_TRUE: f32 = 0.65;
/// CO2 baseline rate.
pub const CO2_PROB_FALSE: f32 = 0.25;
/// CO2 weight.
pub const CO2_WEIGHT: f32 = 0.1;

/// VOC elevation (cooking, cleaning, people).
pub const VOC_PROB_TRUE: f32 = 0.6;
/// VOC baseline rate.
pub const VOC_PROB_FALSE: f32 = 0.3;
/// VOC weight.
pub const VOC_WEIGHT: f32 = 0.1;

/// Sound pressure above ambient.
pub const SOUND_PROB_TRUE: f32 = 0.7;
/// Sound baseline rate (street noise, appliances).
pub const SOUND_PROB_FALSE: f32 = 0.2;
/// Sound weight.
pub const SOUND_WEIGHT: f32 = 0.1;

/// Illuminance above ambient (lights on).
pub const ILLUMINANCE_PROB_TRUE: f32 = 0.6;
/// Illuminance baseline rate (daylight, automations).
pub const ILLUMINANCE_PROB_FALSE: f32 = 0.3;
/// Illuminance weight.
pub const ILLUMINANCE_WEIGHT: f32 = 0.1;

// ===== LOGIT-SPACE STRENGTH MULTIPLIERS =====

/// Strength multiplier for motion sensors.
///
/// Ground-truth sensors get a stronger logit-space contribution so a
/// single fresh motion edge can pull an area above threshold on its own.
pub const STRENGTH_MULTIPLIER_MOTION: f32 = 3.0;

/// Strength multiplier for every other input type.
pub const STRENGTH_MULTIPLIER_DEFAULT: f32 = 2.0;
