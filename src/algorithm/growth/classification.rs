//! Status classification from z-scores
//!
//! Thresholds follow the WHO child growth standards cut-offs. Every
//! classifier takes an optional score and returns `None` for `None`.
//! Comparisons are strict: a score of exactly -2 is not below -2.

use std::fmt;

use serde::Serialize;

/// Common behaviour of the per-indicator status labels
pub trait GrowthStatus: Copy + fmt::Debug + fmt::Display {
    /// Short label for tables and prompts
    fn label(self) -> &'static str;

    /// Full text shown to the caregiver
    fn description(self) -> &'static str {
        self.label()
    }

    /// Whether the status is within the normal range
    fn is_normal(self) -> bool;
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.description())
            }
        })*
    };
}

/// Overall stunting status derived from height-for-age
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum StuntingStatus {
    Normal,
    /// -3 <= HAZ < -2
    AtRisk,
    /// HAZ < -3
    SevereAtRisk,
}

impl GrowthStatus for StuntingStatus {
    fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::AtRisk => "Stunting risk",
            Self::SevereAtRisk => "Severe stunting risk",
        }
    }

    fn is_normal(self) -> bool {
        self == Self::Normal
    }
}

/// Weight-for-age status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WeightForAgeStatus {
    SeverelyUnderweight,
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl GrowthStatus for WeightForAgeStatus {
    fn label(self) -> &'static str {
        match self {
            Self::SeverelyUnderweight => "Severely underweight",
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    fn is_normal(self) -> bool {
        self == Self::Normal
    }
}

/// Length/height-for-age status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeightForAgeStatus {
    SeverelyStunted,
    Stunted,
    Normal,
    Tall,
}

impl GrowthStatus for HeightForAgeStatus {
    fn label(self) -> &'static str {
        match self {
            Self::SeverelyStunted => "Severely stunted",
            Self::Stunted => "Stunted",
            Self::Normal => "Normal height",
            Self::Tall => "Tall",
        }
    }

    fn is_normal(self) -> bool {
        self == Self::Normal
    }
}

/// Weight-for-length/height status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WeightForHeightStatus {
    SevereAcuteMalnutrition,
    ModerateAcuteMalnutrition,
    NormalGoodNutrition,
    Overweight,
    Obese,
}

impl GrowthStatus for WeightForHeightStatus {
    fn label(self) -> &'static str {
        match self {
            Self::SevereAcuteMalnutrition => "Severe acute malnutrition",
            Self::ModerateAcuteMalnutrition => "Moderate acute malnutrition",
            Self::NormalGoodNutrition => "Good/normal nutrition",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    fn is_normal(self) -> bool {
        self == Self::NormalGoodNutrition
    }
}

/// Head-circumference-for-age status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeadCircumferenceStatus {
    MicrocephalyIndicated,
    Normal,
    MacrocephalyIndicated,
}

impl GrowthStatus for HeadCircumferenceStatus {
    fn label(self) -> &'static str {
        match self {
            Self::MicrocephalyIndicated => "Microcephaly indicated",
            Self::Normal => "Normal head circumference",
            Self::MacrocephalyIndicated => "Macrocephaly indicated",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::MicrocephalyIndicated => {
                "Microcephaly indicated. Risk of long-term cognitive, motor and learning delays, \
                 and of neurological disorders"
            }
            Self::Normal => "Normal head circumference",
            Self::MacrocephalyIndicated => {
                "Macrocephaly indicated. May point to hydrocephalus or a genetic condition; \
                 early screening is needed"
            }
        }
    }

    fn is_normal(self) -> bool {
        self == Self::Normal
    }
}

impl_display!(
    StuntingStatus,
    WeightForAgeStatus,
    HeightForAgeStatus,
    WeightForHeightStatus,
    HeadCircumferenceStatus
);

/// Stunting status from height-for-age
#[must_use]
pub fn stunting_status(haz: Option<f64>) -> Option<StuntingStatus> {
    let z = haz?;
    Some(if z < -3.0 {
        StuntingStatus::SevereAtRisk
    } else if z < -2.0 {
        StuntingStatus::AtRisk
    } else {
        StuntingStatus::Normal
    })
}

#[must_use]
pub fn weight_for_age_status(waz: Option<f64>) -> Option<WeightForAgeStatus> {
    let z = waz?;
    Some(if z < -3.0 {
        WeightForAgeStatus::SeverelyUnderweight
    } else if z < -2.0 {
        WeightForAgeStatus::Underweight
    } else if z > 3.0 {
        WeightForAgeStatus::Obese
    } else if z > 2.0 {
        WeightForAgeStatus::Overweight
    } else {
        WeightForAgeStatus::Normal
    })
}

#[must_use]
pub fn height_for_age_status(haz: Option<f64>) -> Option<HeightForAgeStatus> {
    let z = haz?;
    Some(if z < -3.0 {
        HeightForAgeStatus::SeverelyStunted
    } else if z < -2.0 {
        HeightForAgeStatus::Stunted
    } else if z > 3.0 {
        HeightForAgeStatus::Tall
    } else {
        HeightForAgeStatus::Normal
    })
}

#[must_use]
pub fn weight_for_height_status(whz: Option<f64>) -> Option<WeightForHeightStatus> {
    let z = whz?;
    Some(if z < -3.0 {
        WeightForHeightStatus::SevereAcuteMalnutrition
    } else if z < -2.0 {
        WeightForHeightStatus::ModerateAcuteMalnutrition
    } else if z > 3.0 {
        WeightForHeightStatus::Obese
    } else if z > 2.0 {
        WeightForHeightStatus::Overweight
    } else {
        WeightForHeightStatus::NormalGoodNutrition
    })
}

#[must_use]
pub fn head_circumference_status(hcz: Option<f64>) -> Option<HeadCircumferenceStatus> {
    let z = hcz?;
    Some(if z < -2.0 {
        HeadCircumferenceStatus::MicrocephalyIndicated
    } else if z > 2.0 {
        HeadCircumferenceStatus::MacrocephalyIndicated
    } else {
        HeadCircumferenceStatus::Normal
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_for_age_boundaries() {
        use WeightForAgeStatus::*;
        assert_eq!(weight_for_age_status(Some(-3.0)), Some(Underweight));
        assert_eq!(weight_for_age_status(Some(-3.001)), Some(SeverelyUnderweight));
        assert_eq!(weight_for_age_status(Some(-2.999)), Some(Underweight));
        assert_eq!(weight_for_age_status(Some(-2.0)), Some(Normal));
        assert_eq!(weight_for_age_status(Some(2.0)), Some(Normal));
        assert_eq!(weight_for_age_status(Some(2.01)), Some(Overweight));
        assert_eq!(weight_for_age_status(Some(3.0)), Some(Overweight));
        assert_eq!(weight_for_age_status(Some(3.5)), Some(Obese));
        assert_eq!(weight_for_age_status(None), None);
    }

    #[test]
    fn test_height_for_age() {
        use HeightForAgeStatus::*;
        assert_eq!(height_for_age_status(Some(-3.2)), Some(SeverelyStunted));
        assert_eq!(height_for_age_status(Some(-2.5)), Some(Stunted));
        assert_eq!(height_for_age_status(Some(2.9)), Some(Normal));
        assert_eq!(height_for_age_status(Some(3.1)), Some(Tall));
        assert_eq!(height_for_age_status(None), None);
    }

    #[test]
    fn test_weight_for_height() {
        use WeightForHeightStatus::*;
        assert_eq!(weight_for_height_status(Some(-3.1)), Some(SevereAcuteMalnutrition));
        assert_eq!(weight_for_height_status(Some(-2.1)), Some(ModerateAcuteMalnutrition));
        assert_eq!(weight_for_height_status(Some(0.0)), Some(NormalGoodNutrition));
        assert_eq!(weight_for_height_status(Some(2.5)), Some(Overweight));
        assert_eq!(weight_for_height_status(Some(3.01)), Some(Obese));
    }

    #[test]
    fn test_head_circumference_carries_caution_text() {
        let micro = head_circumference_status(Some(-2.3)).unwrap();
        assert_eq!(micro, HeadCircumferenceStatus::MicrocephalyIndicated);
        assert!(micro.description().contains("neurological"));
        assert_eq!(micro.label(), "Microcephaly indicated");

        let macro_ = head_circumference_status(Some(2.3)).unwrap();
        assert!(macro_.description().contains("hydrocephalus"));
        assert_eq!(head_circumference_status(Some(2.0)), Some(HeadCircumferenceStatus::Normal));
        assert_eq!(head_circumference_status(None), None);
    }

    #[test]
    fn test_stunting_status() {
        assert_eq!(stunting_status(Some(-3.5)), Some(StuntingStatus::SevereAtRisk));
        assert_eq!(stunting_status(Some(-2.5)), Some(StuntingStatus::AtRisk));
        assert_eq!(stunting_status(Some(-2.0)), Some(StuntingStatus::Normal));
        assert_eq!(stunting_status(None), None);
        assert!(StuntingStatus::Normal.is_normal());
        assert!(!StuntingStatus::AtRisk.is_normal());
    }
}
