//! Entity Evidence Model
//!
//! ## Overview
//!
//! An entity is one sensor's contribution to occupancy inference: its
//! semantic input type, its current evidence, its likelihood model, a
//! contribution weight, and an owned [`Decay`] tracking how fresh its
//! last evidence is.
//!
//! ## Evidence
//!
//! Raw evidence is tri-state (`Some(true)` active, `Some(false)`
//! inactive, `None` unavailable). Consumers never read the raw state;
//! they take an [`Evidence`] snapshot that folds in the decay model:
//!
//! ```text
//! Active          evidence is on right now
//! Decaying(f)     evidence ceased, freshness factor f remains
//! Inactive        evidence is off and fully faded
//! Unavailable     the sensor is not reporting
//! ```
//!
//! Each consumer maps the snapshot once: the fusion engine to an
//! evidence contribution in [0, 1], the Bayesian engine to a likelihood
//! pair.
//!
//! ## Likelihoods
//!
//! A sensor is one of two variants, resolved at construction: static
//! conditional probabilities for binary sensors, or learned Gaussian
//! densities for continuous sensors (which keep a static pair for
//! fusion strength scaling). Binary likelihoods must lie strictly inside
//! (0, 1); densities are only bounded below by a small positive epsilon.

use heapless::String;

use crate::constants::buffers::MAX_ENTITY_ID_LEN;
use crate::constants::sensors as defaults;
use crate::decay::Decay;
use crate::errors::{ModelError, ModelResult};
use crate::time::Timestamp;

/// Inline entity identifier
pub type EntityId = String<MAX_ENTITY_ID_LEN>;

pub(crate) fn entity_id(id: &str) -> ModelResult<EntityId> {
    let mut out = EntityId::new();
    out.push_str(id).map_err(|()| ModelError::IdTooLong {
        max: MAX_ENTITY_ID_LEN,
    })?;
    Ok(out)
}

/// Semantic input type of a sensing entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InputType {
    /// PIR/radar motion sensors
    Motion,
    /// Door contact sensors
    Door,
    /// Window contact sensors
    Window,
    /// Blinds and shades
    Cover,
    /// Media players (TVs, speakers, receivers)
    Media,
    /// Appliances with an on/off activity state
    Appliance,
    /// Power draw above a configured threshold
    Power,
    /// Air temperature
    Temperature,
    /// Relative humidity
    Humidity,
    /// Barometric pressure
    Pressure,
    /// CO2 concentration
    Co2,
    /// Volatile organic compounds
    Voc,
    /// Sound pressure level
    Sound,
    /// Ambient light level
    Illuminance,
    /// Dedicated sleep/bed-presence sensors
    Sleep,
}

impl InputType {
    /// Whether this type belongs to the presence category
    ///
    /// Presence sensors are strong binary indicators: they directly
    /// witness people or their immediate actions.
    pub fn is_presence(self) -> bool {
        matches!(
            self,
            Self::Motion
                | Self::Door
                | Self::Window
                | Self::Cover
                | Self::Media
                | Self::Appliance
                | Self::Power
        )
    }

    /// Whether this type belongs to the environmental category
    ///
    /// Environmental sensors witness slow secondary effects of
    /// occupancy.
    pub fn is_environmental(self) -> bool {
        matches!(
            self,
            Self::Temperature
                | Self::Humidity
                | Self::Pressure
                | Self::Co2
                | Self::Voc
                | Self::Sound
                | Self::Illuminance
        )
    }

    /// Logit-space strength multiplier for this type
    pub fn strength_multiplier(self) -> f32 {
        match self {
            Self::Motion => defaults::STRENGTH_MULTIPLIER_MOTION,
            _ => defaults::STRENGTH_MULTIPLIER_DEFAULT,
        }
    }

    /// Default static likelihood pair `(P(active|occupied),
    /// P(active|unoccupied))` for this type
    pub fn default_likelihood(self) -> (f32, f32) {
        match self {
            Self::Motion => (defaults::MOTION_PROB_TRUE, defaults::MOTION_PROB_FALSE),
            Self::Door => (defaults::DOOR_PROB_TRUE, defaults::DOOR_PROB_FALSE),
            Self::Window => (defaults::WINDOW_PROB_TRUE, defaults::WINDOW_PROB_FALSE),
            Self::Cover => (defaults::COVER_PROB_TRUE, defaults::COVER_PROB_FALSE),
            Self::Media => (defaults::MEDIA_PROB_TRUE, defaults::MEDIA_PROB_FALSE),
            Self::Appliance => {
                (defaults::APPLIANCE_PROB_TRUE, defaults::APPLIANCE_PROB_FALSE)
            }
            Self::Power => (defaults::POWER_PROB_TRUE, defaults::POWER_PROB_FALSE),
            Self::Temperature => (
                defaults::TEMPERATURE_PROB_TRUE,
                defaults::TEMPERATURE_PROB_FALSE,
            ),
            Self::Humidity => {
                (defaults::HUMIDITY_PROB_TRUE, defaults::HUMIDITY_PROB_FALSE)
            }
            Self::Pressure => {
                (defaults::PRESSURE_PROB_TRUE, defaults::PRESSURE_PROB_FALSE)
            }
            Self::Co2 => (defaults::CO2_PROB_TRUE, defaults::CO2_PROB_FALSE),
            Self::Voc => (defaults::VOC_PROB_TRUE, defaults::VOC_PROB_FALSE),
            Self::Sound => (defaults::SOUND_PROB_TRUE, defaults::SOUND_PROB_FALSE),
            Self::Illuminance => (
                defaults::ILLUMINANCE_PROB_TRUE,
                defaults::ILLUMINANCE_PROB_FALSE,
            ),
            Self::Sleep => (defaults::SLEEP_PROB_TRUE, defaults::SLEEP_PROB_FALSE),
        }
    }

    /// Default contribution weight for this type
    pub fn default_weight(self) -> f32 {
        match self {
            Self::Motion => defaults::MOTION_WEIGHT,
            Self::Door => defaults::DOOR_WEIGHT,
            Self::Window => defaults::WINDOW_WEIGHT,
            Self::Cover => defaults::COVER_WEIGHT,
            Self::Media => defaults::MEDIA_WEIGHT,
            Self::Appliance => defaults::APPLIANCE_WEIGHT,
            Self::Power => defaults::POWER_WEIGHT,
            Self::Temperature => defaults::TEMPERATURE_WEIGHT,
            Self::Humidity => defaults::HUMIDITY_WEIGHT,
            Self::Pressure => defaults::PRESSURE_WEIGHT,
            Self::Co2 => defaults::CO2_WEIGHT,
            Self::Voc => defaults::VOC_WEIGHT,
            Self::Sound => defaults::SOUND_WEIGHT,
            Self::Illuminance => defaults::ILLUMINANCE_WEIGHT,
            Self::Sleep => defaults::SLEEP_WEIGHT,
        }
    }
}

/// Device subclass of a media entity, used by activity indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DeviceClass {
    /// Television
    Tv,
    /// AV receiver
    Receiver,
    /// Standalone speaker
    Speaker,
}

/// Learned Gaussian distribution parameters for a continuous sensor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaussianParams {
    /// Mean reading while the area is occupied
    pub mean_occupied: f32,
    /// Standard deviation while occupied
    pub std_occupied: f32,
    /// Mean reading while the area is unoccupied
    pub mean_unoccupied: f32,
    /// Standard deviation while unoccupied
    pub std_unoccupied: f32,
}

impl GaussianParams {
    /// Validate and construct parameters
    pub fn new(
        mean_occupied: f32,
        std_occupied: f32,
        mean_unoccupied: f32,
        std_unoccupied: f32,
    ) -> ModelResult<Self> {
        let params = Self {
            mean_occupied,
            std_occupied,
            mean_unoccupied,
            std_unoccupied,
        };
        if !params.is_finite() {
            return Err(ModelError::InvalidGaussian {
                reason: "non-finite parameter",
            });
        }
        if std_occupied <= 0.0 || std_unoccupied <= 0.0 {
            return Err(ModelError::InvalidGaussian {
                reason: "non-positive standard deviation",
            });
        }
        Ok(params)
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.mean_occupied.is_finite()
            && self.std_occupied.is_finite()
            && self.mean_unoccupied.is_finite()
            && self.std_unoccupied.is_finite()
    }

    /// Normal density of `value` under the occupied and unoccupied
    /// distributions
    ///
    /// Densities may exceed 1.0 for tight distributions.
    pub fn densities(&self, value: f32) -> (f32, f32) {
        (
            normal_pdf(value, self.mean_occupied, self.std_occupied),
            normal_pdf(value, self.mean_unoccupied, self.std_unoccupied),
        )
    }

    /// Absolute separation between the two means
    pub fn separation(&self) -> f32 {
        (self.mean_occupied - self.mean_unoccupied).abs()
    }

    /// Average of the two standard deviations
    pub fn average_std(&self) -> f32 {
        (self.std_occupied + self.std_unoccupied) / 2.0
    }
}

fn normal_pdf(x: f32, mean: f32, std: f32) -> f32 {
    const SQRT_TWO_PI: f32 = 2.506_628_3;
    let z = (x - mean) / std;
    libm::expf(-0.5 * z * z) / (std * SQRT_TWO_PI)
}

/// Likelihood model of a sensing entity, resolved at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Likelihood {
    /// Fixed conditional probabilities for binary evidence
    Static {
        /// P(active | occupied), strictly inside (0, 1)
        given_true: f32,
        /// P(active | unoccupied), strictly inside (0, 1)
        given_false: f32,
    },
    /// Learned Gaussian densities for a continuous sensor
    ///
    /// The static pair is retained for fusion strength scaling and
    /// reporting; the Bayesian engine always evaluates the densities.
    Gaussian {
        /// P(active | occupied) used for fusion strength
        given_true: f32,
        /// P(active | unoccupied) counterpart
        given_false: f32,
        /// Learned distribution parameters
        params: GaussianParams,
    },
}

impl Likelihood {
    /// Validate and construct a static likelihood pair
    pub fn fixed(given_true: f32, given_false: f32) -> ModelResult<Self> {
        validate_probability(given_true)?;
        validate_probability(given_false)?;
        Ok(Self::Static {
            given_true,
            given_false,
        })
    }

    /// Validate and construct a Gaussian likelihood with its static pair
    pub fn learned(
        given_true: f32,
        given_false: f32,
        params: GaussianParams,
    ) -> ModelResult<Self> {
        validate_probability(given_true)?;
        validate_probability(given_false)?;
        // Re-run the Gaussian invariants: params may predate this call.
        GaussianParams::new(
            params.mean_occupied,
            params.std_occupied,
            params.mean_unoccupied,
            params.std_unoccupied,
        )?;
        Ok(Self::Gaussian {
            given_true,
            given_false,
            params,
        })
    }

    /// P(active | occupied)
    pub fn given_true(&self) -> f32 {
        match self {
            Self::Static { given_true, .. } | Self::Gaussian { given_true, .. } => {
                *given_true
            }
        }
    }

    /// P(active | unoccupied)
    pub fn given_false(&self) -> f32 {
        match self {
            Self::Static { given_false, .. } | Self::Gaussian { given_false, .. } => {
                *given_false
            }
        }
    }

    /// Whether this sensor carries continuous (density) likelihoods
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::Gaussian { .. })
    }

    /// Learned Gaussian parameters, if any
    pub fn gaussian(&self) -> Option<&GaussianParams> {
        match self {
            Self::Gaussian { params, .. } => Some(params),
            Self::Static { .. } => None,
        }
    }
}

fn validate_probability(value: f32) -> ModelResult<()> {
    if !value.is_finite() || value <= 0.0 || value >= 1.0 {
        return Err(ModelError::InvalidLikelihood { value });
    }
    Ok(())
}

/// Snapshot of an entity's evidence at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evidence {
    /// The sensor is actively reporting right now
    Active,
    /// Evidence ceased; the given freshness factor remains
    Decaying(f32),
    /// The sensor reports inactive and nothing is fading
    Inactive,
    /// The sensor is not reporting at all
    Unavailable,
}

/// One sensor's contribution to occupancy inference
#[derive(Debug, Clone)]
pub struct Entity {
    id: EntityId,
    input: InputType,
    likelihood: Likelihood,
    weight: f32,
    effective_weight: f32,
    evidence: Option<bool>,
    state: Option<f32>,
    device_class: Option<DeviceClass>,
    decay: Decay,
}

impl Entity {
    /// Construct an entity, validating weight and identifier
    pub fn new(
        id: &str,
        input: InputType,
        likelihood: Likelihood,
        weight: f32,
        decay: Decay,
    ) -> ModelResult<Self> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(ModelError::InvalidWeight { value: weight });
        }
        Ok(Self {
            id: entity_id(id)?,
            input,
            likelihood,
            weight,
            effective_weight: weight,
            evidence: None,
            state: None,
            device_class: None,
            decay,
        })
    }

    /// Construct with the input type's default likelihood and weight
    pub fn with_defaults(id: &str, input: InputType, decay: Decay) -> ModelResult<Self> {
        let (given_true, given_false) = input.default_likelihood();
        Self::new(
            id,
            input,
            Likelihood::fixed(given_true, given_false)?,
            input.default_weight(),
            decay,
        )
    }

    /// Entity identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn id_owned(&self) -> EntityId {
        self.id.clone()
    }

    /// Semantic input type
    pub fn input(&self) -> InputType {
        self.input
    }

    /// Likelihood model
    pub fn likelihood(&self) -> &Likelihood {
        &self.likelihood
    }

    /// Replace the likelihood model (e.g. when Gaussian parameters are
    /// learned)
    pub fn set_likelihood(&mut self, likelihood: Likelihood) {
        self.likelihood = likelihood;
    }

    /// Configured contribution weight
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Effective weight: configured weight discounted by learned
    /// information gain
    pub fn effective_weight(&self) -> f32 {
        self.effective_weight
    }

    /// Set the externally learned effective weight
    ///
    /// Non-finite or negative values are ignored in favor of the
    /// configured weight.
    pub fn set_effective_weight(&mut self, effective_weight: f32) {
        if effective_weight.is_finite() && effective_weight >= 0.0 {
            self.effective_weight = effective_weight;
        } else {
            self.effective_weight = self.weight;
        }
    }

    /// Device subclass, if known
    pub fn device_class(&self) -> Option<DeviceClass> {
        self.device_class
    }

    /// Set the device subclass
    pub fn set_device_class(&mut self, device_class: Option<DeviceClass>) {
        self.device_class = device_class;
    }

    /// Current raw numeric state, for continuous sensors
    pub fn state(&self) -> Option<f32> {
        self.state
    }

    /// Raw tri-state evidence
    pub fn raw_evidence(&self) -> Option<bool> {
        self.evidence
    }

    /// Owned decay model
    pub fn decay(&self) -> &Decay {
        &self.decay
    }

    /// Mutable access to the decay model, for the area tick loop
    pub fn decay_mut(&mut self) -> &mut Decay {
        &mut self.decay
    }

    /// Apply an observed state change
    ///
    /// Drives the decay transitions: an active edge stops any running
    /// decay; an active-to-inactive edge starts it.
    pub fn set_evidence(
        &mut self,
        evidence: Option<bool>,
        state: Option<f32>,
        now: Timestamp,
    ) {
        match (self.evidence, evidence) {
            (_, Some(true)) => self.decay.stop_decay(),
            (Some(true), Some(false)) => self.decay.start_decay(now),
            _ => {}
        }
        self.evidence = evidence;
        self.state = state;
    }

    /// Evidence snapshot at the given instant
    pub fn evidence_at(&self, now: Timestamp) -> Evidence {
        match self.evidence {
            Some(true) => Evidence::Active,
            _ if self.decay.is_decaying() => Evidence::Decaying(self.decay.decay_factor(now)),
            Some(false) => Evidence::Inactive,
            None => Evidence::Unavailable,
        }
    }

    /// Current freshness factor, 1.0 while actively evidenced
    pub fn decay_factor(&self, now: Timestamp) -> f32 {
        if self.evidence == Some(true) {
            1.0
        } else {
            self.decay.decay_factor(now)
        }
    }
}
