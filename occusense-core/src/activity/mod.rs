//! Activity Classification
//!
//! ## Overview
//!
//! Detects *what* is plausibly happening in an occupied area by scoring
//! a static catalog of activity definitions against the area's live
//! entities and learned environmental statistics. The winning activity
//! carries a logit-space occupancy boost: a humidity spike plus motion
//! in a bathroom is a far stronger presence signal than either sensor
//! alone.
//!
//! ## Algorithm
//!
//! 1. Below the occupancy threshold, return `Unoccupied` with
//!    confidence `1 - base_probability`.
//! 2. Filter the catalog to definitions eligible for the area's purpose
//!    (an empty purpose set means eligible everywhere).
//! 3. Score each indicator: missing sensor types are excluded from the
//!    matched weight but still count in the denominator, so missing
//!    sensors reduce achievable confidence instead of inflating it.
//! 4. Reject definitions whose matched weight misses their minimum,
//!    both before and after normalization.
//! 5. Confidence = matched weight / total definition weight.
//! 6. Highest confidence wins; ties break to purpose-specific
//!    definitions, then to higher raw matched weight, then to catalog
//!    order.
//! 7. With no qualifying definition, return `Idle` with confidence
//!    equal to the base probability.
//!
//! The classifier is stateless and a pure function of its inputs;
//! callers may cache results keyed on evidence and rounded probability
//! (see `Area::detected_activity`).

pub mod catalog;

pub use catalog::CATALOG;

use heapless::Vec;

use crate::constants::activity::{ENV_SEPARATION_FACTOR, ENV_SPAN_TOLERANCE};
use crate::constants::buffers::MAX_MATCHED_ENTITIES;
use crate::entity::{DeviceClass, Entity, EntityId, Evidence, InputType};
use crate::fusion::logistic::round_probability;
use crate::purpose::AreaPurpose;
use crate::time::Timestamp;

/// Detectable activities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActivityId {
    /// Taking a bath
    Bathing,
    /// Preparing food
    Cooking,
    /// Having a meal
    Eating,
    /// Occupied with no recognizable activity
    Idle,
    /// Audio playback without video
    ListeningToMusic,
    /// Taking a shower
    Showering,
    /// Asleep
    Sleeping,
    /// Area is not occupied
    Unoccupied,
    /// Watching television
    WatchingTv,
    /// Desk work
    Working,
}

impl ActivityId {
    /// Stable string form
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bathing => "bathing",
            Self::Cooking => "cooking",
            Self::Eating => "eating",
            Self::Idle => "idle",
            Self::ListeningToMusic => "listening_to_music",
            Self::Showering => "showering",
            Self::Sleeping => "sleeping",
            Self::Unoccupied => "unoccupied",
            Self::WatchingTv => "watching_tv",
            Self::Working => "working",
        }
    }
}

/// Direction an environmental reading moves under the activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EnvCondition {
    /// Reading rises toward the occupied mean
    Elevated,
    /// Reading falls below the unoccupied mean
    Suppressed,
}

/// One sensor-type rule within an activity definition
#[derive(Debug, Clone, Copy)]
pub struct Indicator {
    /// Sensor input type this indicator matches
    pub input: InputType,
    /// Weight of this indicator within the definition
    pub weight: f32,
    /// Whether active evidence is required (binary indicators)
    pub require_active: bool,
    /// Environmental match condition, if this is an environmental rule
    pub condition: Option<EnvCondition>,
    /// Device subclasses that qualify, if restricted
    pub device_classes: Option<&'static [DeviceClass]>,
}

impl Indicator {
    /// Binary indicator requiring active evidence
    pub const fn binary(input: InputType, weight: f32) -> Self {
        Self {
            input,
            weight,
            require_active: true,
            condition: None,
            device_classes: None,
        }
    }

    /// Binary indicator restricted to specific device subclasses
    pub const fn device(
        input: InputType,
        weight: f32,
        device_classes: &'static [DeviceClass],
    ) -> Self {
        Self {
            input,
            weight,
            require_active: true,
            condition: None,
            device_classes: Some(device_classes),
        }
    }

    /// Environmental indicator matching a learned signal direction
    pub const fn environmental(input: InputType, weight: f32, condition: EnvCondition) -> Self {
        Self {
            input,
            weight,
            require_active: false,
            condition: Some(condition),
            device_classes: None,
        }
    }
}

/// An activity with its indicators and constraints
#[derive(Debug, Clone, Copy)]
pub struct ActivityDefinition {
    /// Activity this definition detects
    pub id: ActivityId,
    /// Indicator set, weights summing to ~1.0
    pub indicators: &'static [Indicator],
    /// Minimum matched weight to qualify (pre- and post-normalization)
    pub min_match_weight: f32,
    /// Purposes this definition is eligible for; empty = everywhere
    pub purposes: &'static [AreaPurpose],
    /// Logit-space occupancy boost carried by a detection
    pub boost: f32,
}

impl ActivityDefinition {
    /// Sum of all indicator weights, regardless of sensor availability
    pub fn total_weight(&self) -> f32 {
        self.indicators.iter().map(|i| i.weight).sum()
    }

    /// Whether this definition applies to the given purpose
    pub fn eligible_for(&self, purpose: AreaPurpose) -> bool {
        self.purposes.is_empty() || self.purposes.contains(&purpose)
    }

    /// Whether the definition is restricted to specific purposes
    pub fn is_purpose_specific(&self) -> bool {
        !self.purposes.is_empty()
    }
}

/// Matched entity ids recorded on a detection
pub type MatchedIds = Vec<EntityId, MAX_MATCHED_ENTITIES>;

/// Result of activity detection
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedActivity {
    /// Detected activity
    pub id: ActivityId,
    /// Detection confidence in [0, 1], rounded to 4 decimals
    pub confidence: f32,
    /// Entities whose evidence matched, best-strength ties included
    pub matched: MatchedIds,
    /// Occupancy boost carried by the winning definition
    pub boost: f32,
}

impl DetectedActivity {
    fn plain(id: ActivityId, confidence: f32) -> Self {
        Self {
            id,
            confidence: round_probability(confidence),
            matched: MatchedIds::new(),
            boost: 0.0,
        }
    }
}

/// 0-1 signal strength of an environmental reading
///
/// Position of the value between the unoccupied and occupied means (for
/// elevated) or its inverse (for suppressed), clamped to [0, 1]. A span
/// below tolerance yields 0 rather than risking a vanishing divisor.
pub(crate) fn environmental_signal_strength(
    value: f32,
    mean_occupied: f32,
    mean_unoccupied: f32,
    condition: EnvCondition,
) -> f32 {
    let span = mean_occupied - mean_unoccupied;
    if span.abs() < ENV_SPAN_TOLERANCE {
        return 0.0;
    }

    let position = match condition {
        EnvCondition::Elevated => (value - mean_unoccupied) / span,
        EnvCondition::Suppressed => (mean_unoccupied - value) / span.abs(),
    };

    position.clamp(0.0, 1.0)
}

/// Record a match, replacing the set on a strictly better strength and
/// appending on ties. The id list is capacity-bounded; overflow drops
/// the extra ids but never the score.
fn record_match(best: &mut f32, matched: &mut MatchedIds, strength: f32, entity: &Entity) {
    if strength > *best {
        *best = strength;
        matched.clear();
        let _ = matched.push(entity.id_owned());
    } else if strength == *best && strength > 0.0 {
        let _ = matched.push(entity.id_owned());
    }
}

fn score_binary<'a>(
    indicator: &Indicator,
    entities: impl Iterator<Item = &'a Entity>,
    now: Timestamp,
) -> (f32, MatchedIds) {
    let mut best = 0.0;
    let mut matched = MatchedIds::new();

    for entity in entities {
        // Entities failing a device-subclass filter count as "no
        // matching device": the type-level sensor presence still feeds
        // the denominator, but nothing matches.
        if let Some(classes) = indicator.device_classes {
            match entity.device_class() {
                Some(class) if classes.contains(&class) => {}
                _ => continue,
            }
        }

        let strength = match entity.evidence_at(now) {
            Evidence::Active => 1.0,
            Evidence::Decaying(factor) => factor,
            Evidence::Inactive | Evidence::Unavailable => continue,
        };

        record_match(&mut best, &mut matched, strength, entity);
    }

    (indicator.weight * best, matched)
}

fn score_environmental<'a>(
    indicator: &Indicator,
    condition: EnvCondition,
    entities: impl Iterator<Item = &'a Entity>,
) -> (f32, MatchedIds) {
    let mut best = 0.0;
    let mut matched = MatchedIds::new();

    for entity in entities {
        let Some(params) = entity.likelihood().gaussian() else {
            continue;
        };
        let Some(value) = entity.state().filter(|v| v.is_finite()) else {
            continue;
        };

        // Means closer than half the average spread are not
        // statistically distinguishable: skip as non-discriminative.
        let average_std = params.average_std();
        if average_std > 0.0 && params.separation() < average_std * ENV_SEPARATION_FACTOR {
            continue;
        }

        let strength = environmental_signal_strength(
            value,
            params.mean_occupied,
            params.mean_unoccupied,
            condition,
        );

        record_match(&mut best, &mut matched, strength, entity);
    }

    (indicator.weight * best, matched)
}

/// Score one indicator against the area's entities
///
/// Returns `None` when no sensor of the indicator's type exists - the
/// indicator is excluded from scoring entirely, not penalized.
fn score_indicator(
    indicator: &Indicator,
    entities: &[Entity],
    now: Timestamp,
) -> Option<(f32, MatchedIds)> {
    let mut typed = entities.iter().filter(|e| e.input() == indicator.input);
    typed.clone().next()?;

    Some(match indicator.condition {
        Some(condition) => score_environmental(indicator, condition, &mut typed),
        None => score_binary(indicator, &mut typed, now),
    })
}

/// Detect the most likely activity in an area
///
/// A pure function of the entity snapshot, the area purpose, and the
/// base probability/threshold pair; repeated invocation with identical
/// inputs returns identical results.
pub fn detect_activity(
    entities: &[Entity],
    purpose: AreaPurpose,
    base_probability: f32,
    threshold: f32,
    now: Timestamp,
) -> DetectedActivity {
    if base_probability < threshold {
        return DetectedActivity::plain(ActivityId::Unoccupied, 1.0 - base_probability);
    }

    let mut best: Option<DetectedActivity> = None;
    let mut best_matched_weight = 0.0;
    let mut best_is_specific = false;

    for definition in CATALOG {
        if !definition.eligible_for(purpose) {
            continue;
        }

        let mut matched_weight = 0.0;
        let mut all_matched = MatchedIds::new();

        for indicator in definition.indicators {
            let Some((score, matched)) = score_indicator(indicator, entities, now) else {
                // No sensor of this type: contributes nothing, but the
                // total weight below still includes it.
                continue;
            };
            matched_weight += score;
            for id in matched {
                let _ = all_matched.push(id);
            }
        }

        let total_weight = definition.total_weight();
        if total_weight <= 0.0 {
            continue;
        }

        // Raw matched weight must clear the minimum to prevent
        // single-sensor false positives after normalization.
        if matched_weight < definition.min_match_weight {
            continue;
        }

        let confidence = matched_weight / total_weight;
        if confidence < definition.min_match_weight {
            continue;
        }

        // Compare at reporting precision so float-sum noise cannot
        // reorder genuine ties; residual ties keep the earlier entry.
        let confidence = round_probability(confidence);
        let matched_weight = round_probability(matched_weight);

        let is_specific = definition.is_purpose_specific();
        let wins = match &best {
            None => true,
            Some(current) => {
                confidence > current.confidence
                    || (confidence == current.confidence && is_specific && !best_is_specific)
                    || (confidence == current.confidence
                        && is_specific == best_is_specific
                        && matched_weight > best_matched_weight)
            }
        };

        if wins {
            best = Some(DetectedActivity {
                id: definition.id,
                confidence,
                matched: all_matched,
                boost: definition.boost,
            });
            best_matched_weight = matched_weight;
            best_is_specific = is_specific;
        }
    }

    best.unwrap_or_else(|| DetectedActivity::plain(ActivityId::Idle, base_probability))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decay::Decay;
    use crate::entity::{GaussianParams, Likelihood};

    fn active(id: &str, input: InputType) -> Entity {
        let mut e = Entity::with_defaults(id, input, Decay::new(300.0)).unwrap();
        e.set_evidence(Some(true), None, 0);
        e
    }

    fn humidity_at(id: &str, value: f32) -> Entity {
        let params = GaussianParams::new(65.0, 5.0, 45.0, 5.0).unwrap();
        let lk = Likelihood::learned(0.6, 0.3, params).unwrap();
        let mut e =
            Entity::new(id, InputType::Humidity, lk, 0.1, Decay::new(300.0)).unwrap();
        e.set_evidence(Some(true), Some(value), 0);
        e
    }

    #[test]
    fn below_threshold_is_unoccupied() {
        let result = detect_activity(&[], AreaPurpose::Social, 0.3, 0.5, 0);
        assert_eq!(result.id, ActivityId::Unoccupied);
        assert_eq!(result.confidence, 0.7);
    }

    #[test]
    fn occupied_without_signals_is_idle() {
        let result = detect_activity(&[], AreaPurpose::Social, 0.8, 0.5, 0);
        assert_eq!(result.id, ActivityId::Idle);
        assert_eq!(result.confidence, 0.8);
    }

    #[test]
    fn showering_scenario() {
        // Humidity at the occupied mean (elevated strength 1.0), motion
        // and door active, no temperature sensor. Matched weight:
        // 0.5 + 0.15 + 0.15 = 0.8 of a 1.0 total.
        let entities = [
            humidity_at("sensor.bath_humidity", 65.0),
            active("binary_sensor.bath_motion", InputType::Motion),
            active("binary_sensor.bath_door", InputType::Door),
        ];

        let result = detect_activity(&entities, AreaPurpose::Bathroom, 0.8, 0.5, 0);
        assert_eq!(result.id, ActivityId::Showering);
        assert_eq!(result.confidence, 0.8);
        assert!(result.boost > 0.0);
        assert!(result
            .matched
            .iter()
            .any(|id| id.as_str() == "sensor.bath_humidity"));
    }

    #[test]
    fn purpose_filter_excludes_foreign_activities() {
        // The same evidence in a working area must not read as showering.
        let entities = [
            humidity_at("h", 65.0),
            active("m", InputType::Motion),
            active("d", InputType::Door),
        ];

        let result = detect_activity(&entities, AreaPurpose::Working, 0.8, 0.5, 0);
        assert_ne!(result.id, ActivityId::Showering);
    }

    #[test]
    fn device_class_filter_applies() {
        // A speaker alone cannot carry the TV definition: its media
        // indicator requires a tv/receiver device class.
        let mut speaker = active("media_player.speaker", InputType::Media);
        speaker.set_device_class(Some(DeviceClass::Speaker));
        let entities = [speaker, active("m", InputType::Motion)];

        let result = detect_activity(&entities, AreaPurpose::Social, 0.8, 0.5, 0);
        assert_ne!(result.id, ActivityId::WatchingTv);

        let mut tv = active("media_player.tv", InputType::Media);
        tv.set_device_class(Some(DeviceClass::Tv));
        let entities = [tv, active("m", InputType::Motion)];

        let result = detect_activity(&entities, AreaPurpose::Social, 0.8, 0.5, 0);
        assert_eq!(result.id, ActivityId::WatchingTv);
    }

    #[test]
    fn non_discriminative_gaussian_is_skipped() {
        // Means 0.1 apart with std 5: statistically indistinguishable.
        let params = GaussianParams::new(50.1, 5.0, 50.0, 5.0).unwrap();
        let lk = Likelihood::learned(0.6, 0.3, params).unwrap();
        let mut h = Entity::new("h", InputType::Humidity, lk, 0.1, Decay::new(300.0)).unwrap();
        h.set_evidence(Some(true), Some(50.1), 0);

        let entities = [h, active("m", InputType::Motion), active("d", InputType::Door)];
        let result = detect_activity(&entities, AreaPurpose::Bathroom, 0.8, 0.5, 0);

        // Humidity contributes nothing, so bathing wins on door+motion
        // alone (0.4) instead of showering at full humidity strength.
        assert_eq!(result.id, ActivityId::Bathing);
        assert_eq!(result.confidence, 0.4);
        assert!(!result.matched.iter().any(|id| id.as_str() == "h"));
    }

    #[test]
    fn suppressed_condition_inverts_strength() {
        let strength = environmental_signal_strength(35.0, 65.0, 45.0, EnvCondition::Suppressed);
        assert!((strength - 0.5).abs() < 1e-6);

        let none = environmental_signal_strength(45.0, 65.0, 45.0, EnvCondition::Suppressed);
        assert_eq!(none, 0.0);
    }

    #[test]
    fn elevated_strength_is_position_between_means() {
        assert_eq!(
            environmental_signal_strength(45.0, 65.0, 45.0, EnvCondition::Elevated),
            0.0
        );
        assert!(
            (environmental_signal_strength(55.0, 65.0, 45.0, EnvCondition::Elevated) - 0.5)
                .abs()
                < 1e-6
        );
        assert_eq!(
            environmental_signal_strength(80.0, 65.0, 45.0, EnvCondition::Elevated),
            1.0
        );
    }

    #[test]
    fn vanishing_span_yields_zero_strength() {
        assert_eq!(
            environmental_signal_strength(1.0, 50.0, 50.0, EnvCondition::Elevated),
            0.0
        );
    }

    #[test]
    fn detection_is_deterministic() {
        let entities = [
            humidity_at("h", 65.0),
            active("m", InputType::Motion),
            active("d", InputType::Door),
        ];

        let first = detect_activity(&entities, AreaPurpose::Bathroom, 0.8, 0.5, 0);
        let second = detect_activity(&entities, AreaPurpose::Bathroom, 0.8, 0.5, 0);
        assert_eq!(first, second);
    }

    #[test]
    fn decaying_motion_counts_partially() {
        let mut m = active("m", InputType::Motion);
        m.set_evidence(Some(false), None, 0);

        // Music needs media; with only fading motion the working
        // definition cannot clear its minimum either - idle.
        let entities = [m];
        let result = detect_activity(&entities, AreaPurpose::Working, 0.8, 0.5, 150_000);
        assert_eq!(result.id, ActivityId::Idle);
    }
}
