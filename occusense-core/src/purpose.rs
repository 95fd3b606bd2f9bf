//! Area purposes
//!
//! A purpose is a categorical label for an area (bathroom, sleeping,
//! working, ...) that parameterizes two things: how quickly motion
//! evidence should fade (half-life), and which activity definitions are
//! eligible. Sleeping areas additionally carry a distinct "awake"
//! half-life used outside the configured sleep window, so a motionless
//! sleeper does not read as an empty room at 3 AM but the same stillness
//! fades quickly at 3 PM.

/// Categorical purpose of an area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AreaPurpose {
    /// Hallways, landings, entryways - traversed, not lingered in
    Passageway,
    /// Laundry, storage, garages
    Utility,
    /// Kitchens and other food preparation areas
    FoodPrep,
    /// Dining areas
    Eating,
    /// Offices and studies
    Working,
    /// Living rooms and shared social areas
    Social,
    /// Reading corners, lounges, media rooms
    Relaxing,
    /// Bedrooms
    Sleeping,
    /// Bathrooms
    Bathroom,
}

impl AreaPurpose {
    /// Evidence half-life for this purpose, in seconds
    ///
    /// Tuned to the typical stillness of each space: a passageway clears
    /// in a minute, a sleeping area holds evidence for half an hour.
    pub fn half_life(self) -> f32 {
        match self {
            Self::Passageway => 60.0,
            Self::Utility => 120.0,
            Self::FoodPrep => 300.0,
            Self::Bathroom => 300.0,
            Self::Eating => 600.0,
            Self::Working => 600.0,
            Self::Social => 720.0,
            Self::Relaxing => 900.0,
            Self::Sleeping => 1800.0,
        }
    }

    /// Half-life to use outside the sleep window, if distinct
    ///
    /// Only sleeping areas have one: the long base half-life is for the
    /// sleep window itself.
    pub fn awake_half_life(self) -> Option<f32> {
        match self {
            Self::Sleeping => Some(600.0),
            _ => None,
        }
    }

    /// Minimum prior floor for this purpose
    ///
    /// Transit spaces have duration-biased learned priors that come out
    /// unrealistically low because people never linger; the floor keeps
    /// the baseline honest.
    pub fn min_prior(self) -> f32 {
        match self {
            Self::Passageway => 0.15,
            _ => 0.0,
        }
    }

    /// Stable string form of the purpose
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Passageway => "passageway",
            Self::Utility => "utility",
            Self::FoodPrep => "food_prep",
            Self::Eating => "eating",
            Self::Working => "working",
            Self::Social => "social",
            Self::Relaxing => "relaxing",
            Self::Sleeping => "sleeping",
            Self::Bathroom => "bathroom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_lives_are_positive() {
        for p in [
            AreaPurpose::Passageway,
            AreaPurpose::Utility,
            AreaPurpose::FoodPrep,
            AreaPurpose::Eating,
            AreaPurpose::Working,
            AreaPurpose::Social,
            AreaPurpose::Relaxing,
            AreaPurpose::Sleeping,
            AreaPurpose::Bathroom,
        ] {
            assert!(p.half_life() > 0.0, "{} half-life", p.as_str());
            if let Some(awake) = p.awake_half_life() {
                assert!(awake > 0.0);
                assert!(awake < p.half_life());
            }
        }
    }

    #[test]
    fn only_sleeping_has_awake_half_life() {
        assert!(AreaPurpose::Sleeping.awake_half_life().is_some());
        assert!(AreaPurpose::Bathroom.awake_half_life().is_none());
        assert!(AreaPurpose::Social.awake_half_life().is_none());
    }

    #[test]
    fn transit_floor_applies() {
        assert!(AreaPurpose::Passageway.min_prior() > 0.0);
        assert_eq!(AreaPurpose::Working.min_prior(), 0.0);
    }
}
