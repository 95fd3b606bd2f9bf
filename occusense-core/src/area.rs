//! Area Aggregate
//!
//! One `Area` owns everything the engine knows about a physical space:
//! its configuration, its bounded entity set, its baseline prior, and a
//! small memoization cache for activity detection. The area is the
//! single logical owner of all mutation - evidence updates, decay ticks,
//! prior invalidation - and is expected to be driven by one external
//! scheduling loop.
//!
//! ## Probability pipeline
//!
//! ```text
//! entities -> presence_probability ---\
//!                                      +-> base_probability -> activity -> probability
//! entities -> environmental_confidence/
//! ```
//!
//! The two-phase split exists to break a cycle: activity detection
//! consumes the base probability, and the final probability applies the
//! detected activity's boost on top of it.

use heapless::Vec;

use crate::activity::{detect_activity, ActivityId, DetectedActivity};
use crate::constants::buffers::MAX_AREA_ENTITIES;
use crate::constants::probability::{MIN_PROBABILITY, NEUTRAL_PROBABILITY};
use crate::decay::Decay;
use crate::entity::{Entity, EntityId, InputType};
use crate::errors::{ModelError, ModelResult};
use crate::fusion::logistic::{
    self, apply_activity_boost, combined_probability, round_probability,
};
use crate::prior::Prior;
use crate::purpose::AreaPurpose;
use crate::time::{LocalClock, SleepWindow, Timestamp};
use crate::traits::{CorrelationSource, TimePriorSource};

/// Static configuration of an area
#[derive(Debug, Clone)]
pub struct AreaConfig {
    /// Occupancy decision threshold in [0, 1]
    pub threshold: f32,
    /// Categorical purpose, parameterizing decay and activity
    /// eligibility
    pub purpose: AreaPurpose,
    /// User override floor for the prior; 0.0 disables
    pub min_prior_override: f32,
    /// Sleep window for purposes with an awake half-life
    pub sleep_window: Option<SleepWindow>,
    /// Local wall-clock projection for this area
    pub clock: LocalClock,
}

impl AreaConfig {
    /// Configuration with defaults for the given purpose
    pub fn new(purpose: AreaPurpose) -> Self {
        Self {
            threshold: 0.5,
            purpose,
            min_prior_override: 0.0,
            sleep_window: None,
            clock: LocalClock::utc(),
        }
    }

    /// Set the occupancy threshold
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the sleep window
    pub fn with_sleep_window(mut self, window: SleepWindow) -> Self {
        self.sleep_window = Some(window);
        self
    }

    fn validate(&self) -> ModelResult<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(ModelError::InvalidThreshold {
                value: self.threshold,
            });
        }
        Ok(())
    }
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self::new(AreaPurpose::Social)
    }
}

/// Explicit memoization key for activity detection
///
/// Detection is recomputed only when the set of actively evidenced
/// entities or the rounded base probability changes.
#[derive(Debug, Clone, PartialEq)]
struct ActivityCacheKey {
    active: Vec<EntityId, MAX_AREA_ENTITIES>,
    base: f32,
}

/// A physical space under occupancy inference
#[derive(Debug, Clone)]
pub struct Area<H> {
    name: EntityId,
    config: AreaConfig,
    entities: Vec<Entity, MAX_AREA_ENTITIES>,
    prior: Prior,
    history: H,
    activity_cache: Option<(ActivityCacheKey, DetectedActivity)>,
}

impl<H> Area<H>
where
    H: TimePriorSource + CorrelationSource,
{
    /// Create an area with the given configuration and history provider
    pub fn new(name: &str, config: AreaConfig, history: H) -> ModelResult<Self> {
        config.validate()?;
        let prior = Prior::new(config.clock)
            .with_purpose_floor(config.purpose.min_prior())
            .with_override_floor(config.min_prior_override);
        Ok(Self {
            name: crate::entity::entity_id(name)?,
            config,
            entities: Vec::new(),
            prior,
            history,
            activity_cache: None,
        })
    }

    /// Area name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configured occupancy threshold
    pub fn threshold(&self) -> f32 {
        self.config.threshold
    }

    /// Configured purpose
    pub fn purpose(&self) -> AreaPurpose {
        self.config.purpose
    }

    /// The area's entities
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Look up an entity by id
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    /// Build an entity preconfigured for this area
    ///
    /// Uses the input type's default likelihood and weight, and a decay
    /// model parameterized by the area's purpose and sleep window.
    pub fn new_entity(&self, id: &str, input: InputType) -> ModelResult<Entity> {
        let purpose = self.config.purpose;
        let decay = match (purpose.awake_half_life(), self.config.sleep_window) {
            (Some(awake), Some(window)) => {
                Decay::with_schedule(purpose.half_life(), awake, window, self.config.clock)
            }
            _ => Decay::new(purpose.half_life()),
        };
        Entity::with_defaults(id, input, decay)
    }

    /// Add an entity to the area
    pub fn add_entity(&mut self, entity: Entity) -> ModelResult<()> {
        self.entities.push(entity).map_err(|_| {
            ModelError::CapacityExceeded {
                capacity: MAX_AREA_ENTITIES,
            }
        })?;
        self.invalidate_activity_cache();
        Ok(())
    }

    /// Apply an observed state change to an entity
    ///
    /// Returns false when the id is unknown. Evidence changes invalidate
    /// the activity cache.
    pub fn update_entity(
        &mut self,
        id: &str,
        evidence: Option<bool>,
        state: Option<f32>,
        now: Timestamp,
    ) -> bool {
        let Some(entity) = self.entities.iter_mut().find(|e| e.id() == id) else {
            return false;
        };
        entity.set_evidence(evidence, state, now);
        self.invalidate_activity_cache();
        true
    }

    /// Mutable access to the prior model
    pub fn prior_mut(&mut self) -> &mut Prior {
        &mut self.prior
    }

    /// Set the learned global occupancy prior
    pub fn set_global_prior(&mut self, prior: f32) {
        self.prior.set_global_prior(prior);
    }

    /// The area's baseline occupancy prior from historical data
    pub fn area_prior(&mut self, now: Timestamp) -> f32 {
        self.prior.value(&self.history, now)
    }

    /// Presence probability from the strong binary indicator category
    pub fn presence_probability(&mut self, now: Timestamp) -> f32 {
        if self.entities.is_empty() {
            return MIN_PROBABILITY;
        }
        let prior = self.prior.value(&self.history, now);
        logistic::presence_probability(
            &self.entities,
            prior,
            Some(&self.history as &dyn CorrelationSource),
            now,
        )
    }

    /// Environmental support confidence, 0.5 when neutral or unequipped
    pub fn environmental_confidence(&self, now: Timestamp) -> f32 {
        if self.entities.is_empty() {
            return NEUTRAL_PROBABILITY;
        }
        logistic::environmental_confidence(
            &self.entities,
            Some(&self.history as &dyn CorrelationSource),
            now,
        )
    }

    /// Sensor-only occupancy probability, before any activity boost
    ///
    /// The 80/20 blend is skipped when `environmental_confidence`
    /// returns the exact 0.5 sentinel: blending presence with a neutral
    /// channel would only compress it toward 0.5.
    pub fn base_probability(&mut self, now: Timestamp) -> f32 {
        if self.entities.is_empty() {
            return MIN_PROBABILITY;
        }

        let presence = self.presence_probability(now);
        let environmental = self.environmental_confidence(now);

        if environmental == NEUTRAL_PROBABILITY {
            return presence;
        }

        combined_probability(presence, environmental)
    }

    /// Occupancy probability with activity-based boost
    ///
    /// Detects the current activity against the base probability and,
    /// for recognized activities, boosts the base in logit space by the
    /// definition's magnitude scaled by detection confidence.
    pub fn probability(&mut self, now: Timestamp) -> f32 {
        let base = self.base_probability(now);
        let activity = self.detect_with_cache(base, now);

        match activity.id {
            ActivityId::Unoccupied | ActivityId::Idle => base,
            _ => apply_activity_boost(base, activity.boost, activity.confidence),
        }
    }

    /// Current occupancy decision
    pub fn occupied(&mut self, now: Timestamp) -> bool {
        self.probability(now) >= self.config.threshold
    }

    /// Mean freshness of entity evidence, 1.0 for an empty area
    pub fn decay(&self, now: Timestamp) -> f32 {
        if self.entities.is_empty() {
            return 1.0;
        }
        let sum: f32 = self
            .entities
            .iter()
            .map(|e| e.decay().decay_factor(now))
            .sum();
        sum / self.entities.len() as f32
    }

    /// Tick all entity decays, transitioning fully decayed ones
    pub fn tick_decay(&mut self, now: Timestamp) {
        for entity in self.entities.iter_mut() {
            entity.decay_mut().tick(now);
        }
    }

    /// Detect the current activity, memoized
    ///
    /// Recomputed only when the set of actively evidenced entity ids or
    /// the rounded base probability changes.
    pub fn detected_activity(&mut self, now: Timestamp) -> DetectedActivity {
        let base = self.base_probability(now);
        self.detect_with_cache(base, now)
    }

    /// Drop the cached activity result
    ///
    /// Called automatically on evidence updates; exposed for callers
    /// that mutate entities through `prior_mut`-style side channels.
    pub fn invalidate_activity_cache(&mut self) {
        self.activity_cache = None;
    }

    fn detect_with_cache(&mut self, base: f32, now: Timestamp) -> DetectedActivity {
        let key = ActivityCacheKey {
            active: self
                .entities
                .iter()
                .filter(|e| e.raw_evidence() == Some(true))
                .map(|e| e.id_owned())
                .collect(),
            base: round_probability(base),
        };

        if let Some((cached_key, cached)) = &self.activity_cache {
            if *cached_key == key {
                return cached.clone();
            }
        }

        let result = detect_activity(
            &self.entities,
            self.config.purpose,
            base,
            self.config.threshold,
            now,
        );
        self.activity_cache = Some((key, result.clone()));
        result
    }
}
