//! Common domain type definitions
//!
//! Enum types shared by the reference tables, the measurement input and the
//! screening outcome.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GrowthError;

/// Sex of a child, as tabulated by the WHO references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sex {
    /// Boys' reference
    Male,
    /// Girls' reference
    Female,
}

impl Sex {
    /// Parse a sex code as it appears in reference files or form input.
    ///
    /// Accepts `L`/`P` (laki-laki/perempuan), `M`/`F`, full words and the
    /// numeric register codes `1`/`2`.
    #[must_use]
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "l" | "m" | "male" | "boy" | "1" => Some(Self::Male),
            "p" | "f" | "female" | "girl" | "2" => Some(Self::Female),
            _ => None,
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl FromStr for Sex {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| GrowthError::invalid_input(format!("unknown sex code '{s}'")))
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// How body length was taken: recumbent length or standing height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MeasurementKind {
    /// Recumbent length, used below 24 months
    Length,
    /// Standing height, used from 24 months
    Height,
}

/// Age in months from which standing height replaces recumbent length
pub const STANDING_HEIGHT_FROM_MONTHS: u32 = 24;

impl MeasurementKind {
    /// Measurement kind the WHO standards assume for a given age
    #[must_use]
    pub const fn for_age(age_months: u32) -> Self {
        if age_months < STANDING_HEIGHT_FROM_MONTHS {
            Self::Length
        } else {
            Self::Height
        }
    }

    #[must_use]
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "length" | "l" | "panjang" => Some(Self::Length),
            "height" | "h" | "tinggi" => Some(Self::Height),
            _ => None,
        }
    }
}

/// The four WHO growth indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Indicator {
    WeightForAge,
    HeightForAge,
    WeightForHeight,
    HeadCircumferenceForAge,
}

impl Indicator {
    pub const ALL: [Self; 4] = [
        Self::WeightForAge,
        Self::HeightForAge,
        Self::WeightForHeight,
        Self::HeadCircumferenceForAge,
    ];

    /// Short WHO abbreviation
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::WeightForAge => "WFA",
            Self::HeightForAge => "HFA",
            Self::WeightForHeight => "WFH",
            Self::HeadCircumferenceForAge => "HCFA",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::WeightForAge => "Weight-for-age",
            Self::HeightForAge => "Length/height-for-age",
            Self::WeightForHeight => "Weight-for-length/height",
            Self::HeadCircumferenceForAge => "Head-circumference-for-age",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
