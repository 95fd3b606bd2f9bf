//! Static Activity Catalog
//!
//! Indicator weights within a definition sum to approximately 1.0 so
//! normalized confidences are comparable across activities. Catalog
//! order is significant: residual ties after the confidence /
//! purpose-specificity / matched-weight comparison keep the earlier
//! entry.

use crate::constants::activity::{
    ACTIVITY_BOOST_HIGH, ACTIVITY_BOOST_MILD, ACTIVITY_BOOST_MODERATE,
    ACTIVITY_BOOST_STRONG, DEFAULT_MIN_MATCH_WEIGHT,
};
use crate::entity::{DeviceClass, InputType};
use crate::purpose::AreaPurpose;

use super::{ActivityDefinition, ActivityId, EnvCondition, Indicator};

/// All detectable activity definitions
pub static CATALOG: &[ActivityDefinition] = &[
    ActivityDefinition {
        id: ActivityId::Showering,
        indicators: &[
            Indicator::environmental(InputType::Humidity, 0.5, EnvCondition::Elevated),
            Indicator::environmental(InputType::Temperature, 0.2, EnvCondition::Elevated),
            Indicator::binary(InputType::Motion, 0.15),
            Indicator::binary(InputType::Door, 0.15),
        ],
        min_match_weight: DEFAULT_MIN_MATCH_WEIGHT,
        purposes: &[AreaPurpose::Bathroom],
        boost: ACTIVITY_BOOST_HIGH,
    },
    ActivityDefinition {
        id: ActivityId::Bathing,
        indicators: &[
            Indicator::environmental(InputType::Humidity, 0.4, EnvCondition::Elevated),
            Indicator::binary(InputType::Door, 0.3),
            Indicator::environmental(InputType::Temperature, 0.2, EnvCondition::Elevated),
            Indicator::binary(InputType::Motion, 0.1),
        ],
        min_match_weight: DEFAULT_MIN_MATCH_WEIGHT,
        purposes: &[AreaPurpose::Bathroom],
        boost: ACTIVITY_BOOST_HIGH,
    },
    ActivityDefinition {
        id: ActivityId::Cooking,
        indicators: &[
            Indicator::binary(InputType::Appliance, 0.35),
            Indicator::environmental(InputType::Temperature, 0.2, EnvCondition::Elevated),
            Indicator::environmental(InputType::Humidity, 0.15, EnvCondition::Elevated),
            Indicator::environmental(InputType::Co2, 0.1, EnvCondition::Elevated),
            Indicator::environmental(InputType::Voc, 0.1, EnvCondition::Elevated),
            Indicator::binary(InputType::Motion, 0.1),
        ],
        min_match_weight: DEFAULT_MIN_MATCH_WEIGHT,
        purposes: &[AreaPurpose::FoodPrep],
        boost: ACTIVITY_BOOST_MODERATE,
    },
    ActivityDefinition {
        id: ActivityId::WatchingTv,
        indicators: &[
            Indicator::device(
                InputType::Media,
                0.6,
                &[DeviceClass::Tv, DeviceClass::Receiver],
            ),
            Indicator::environmental(InputType::Illuminance, 0.15, EnvCondition::Suppressed),
            Indicator::binary(InputType::Motion, 0.1),
            Indicator::environmental(InputType::Sound, 0.15, EnvCondition::Elevated),
        ],
        min_match_weight: DEFAULT_MIN_MATCH_WEIGHT,
        purposes: &[AreaPurpose::Social, AreaPurpose::Relaxing, AreaPurpose::Sleeping],
        boost: ACTIVITY_BOOST_STRONG,
    },
    ActivityDefinition {
        id: ActivityId::ListeningToMusic,
        indicators: &[
            Indicator::device(
                InputType::Media,
                0.5,
                &[DeviceClass::Speaker, DeviceClass::Receiver],
            ),
            Indicator::environmental(InputType::Sound, 0.3, EnvCondition::Elevated),
            Indicator::binary(InputType::Motion, 0.2),
        ],
        min_match_weight: DEFAULT_MIN_MATCH_WEIGHT,
        purposes: &[AreaPurpose::Social, AreaPurpose::Relaxing, AreaPurpose::Working],
        boost: ACTIVITY_BOOST_MILD,
    },
    ActivityDefinition {
        id: ActivityId::Working,
        indicators: &[
            Indicator::binary(InputType::Appliance, 0.4),
            Indicator::binary(InputType::Power, 0.25),
            Indicator::binary(InputType::Motion, 0.15),
            Indicator::environmental(InputType::Co2, 0.1, EnvCondition::Elevated),
            Indicator::environmental(InputType::Illuminance, 0.1, EnvCondition::Elevated),
        ],
        min_match_weight: DEFAULT_MIN_MATCH_WEIGHT,
        purposes: &[AreaPurpose::Working],
        boost: ACTIVITY_BOOST_MODERATE,
    },
    ActivityDefinition {
        id: ActivityId::Sleeping,
        indicators: &[
            Indicator::binary(InputType::Sleep, 0.5),
            Indicator::environmental(InputType::Illuminance, 0.2, EnvCondition::Suppressed),
            Indicator::environmental(InputType::Co2, 0.15, EnvCondition::Elevated),
            Indicator::environmental(InputType::Sound, 0.15, EnvCondition::Suppressed),
        ],
        min_match_weight: DEFAULT_MIN_MATCH_WEIGHT,
        purposes: &[AreaPurpose::Sleeping],
        boost: ACTIVITY_BOOST_HIGH,
    },
    ActivityDefinition {
        id: ActivityId::Eating,
        indicators: &[
            Indicator::binary(InputType::Motion, 0.3),
            Indicator::environmental(InputType::Illuminance, 0.25, EnvCondition::Elevated),
            Indicator::environmental(InputType::Co2, 0.2, EnvCondition::Elevated),
            Indicator::environmental(InputType::Temperature, 0.15, EnvCondition::Elevated),
            Indicator::binary(InputType::Media, 0.1),
        ],
        min_match_weight: DEFAULT_MIN_MATCH_WEIGHT,
        purposes: &[AreaPurpose::Eating],
        boost: ACTIVITY_BOOST_MILD,
    },
];
