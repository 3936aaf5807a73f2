//! Screening: one submitted measurement in, all scores and labels out.

use rayon::prelude::*;
use serde::Serialize;

use super::classification::{
    GrowthStatus, HeadCircumferenceStatus, HeightForAgeStatus, StuntingStatus, WeightForAgeStatus,
    WeightForHeightStatus, head_circumference_status, height_for_age_status, stunting_status,
    weight_for_age_status, weight_for_height_status,
};
use super::indicators::{head_circumference_for_age, height_for_age, weight_for_age, weight_for_height};
use super::risk::stunting_risk_score;
use crate::models::measurement::MeasurementInput;
use crate::reference::ReferenceTables;

/// Decimal places shown for z-scores
pub const DISPLAY_DECIMALS: i32 = 2;

/// Round a z-score for display, half-up to two decimals.
///
/// Classification always uses the unrounded value.
#[must_use]
pub fn round_z(z: f64) -> f64 {
    let scale = 10f64.powi(DISPLAY_DECIMALS);
    let rounded = (z * scale + 0.5).floor() / scale;
    // -0.0 displays as "-0.00"
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Score and label for one indicator; each independently absent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndicatorResult<S> {
    /// Unrounded z-score
    pub z_score: Option<f64>,
    pub status: Option<S>,
}

impl<S: GrowthStatus> IndicatorResult<S> {
    /// Classify an unrounded score
    #[must_use]
    pub fn classify(z_score: Option<f64>, classifier: fn(Option<f64>) -> Option<S>) -> Self {
        Self {
            z_score,
            status: classifier(z_score),
        }
    }

    /// Z-score rounded for display
    #[must_use]
    pub fn display_z(&self) -> Option<f64> {
        self.z_score.map(round_z)
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.z_score.is_some()
    }
}

/// Everything computed for one submission
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScreeningOutcome {
    pub weight_for_age: IndicatorResult<WeightForAgeStatus>,
    pub height_for_age: IndicatorResult<HeightForAgeStatus>,
    pub weight_for_height: IndicatorResult<WeightForHeightStatus>,
    pub head_circumference_for_age: IndicatorResult<HeadCircumferenceStatus>,
    /// 0-100; absent unless both height- and weight-for-age are known
    pub stunting_risk_percent: Option<u8>,
    /// Absent under the same condition as the risk percentage
    pub stunting_status: Option<StuntingStatus>,
}

impl ScreeningOutcome {
    /// Whether any of the four indicators produced a score
    #[must_use]
    pub const fn has_any_score(&self) -> bool {
        self.weight_for_age.is_available()
            || self.height_for_age.is_available()
            || self.weight_for_height.is_available()
            || self.head_circumference_for_age.is_available()
    }
}

/// Screen one measurement against the reference tables.
///
/// Never fails: missing reference rows and unusable measurements show up
/// as absent fields in the outcome.
#[must_use]
pub fn screen(tables: &ReferenceTables, input: &MeasurementInput) -> ScreeningOutcome {
    let MeasurementInput {
        age_months,
        sex,
        weight_kg,
        height_cm,
        head_circumference_cm,
        ..
    } = *input;

    let waz = weight_for_age(tables, age_months, sex, weight_kg);
    let haz = height_for_age(tables, age_months, sex, height_cm);
    let whz = weight_for_height(tables, age_months, sex, weight_kg, height_cm);
    let hcz = head_circumference_for_age(tables, age_months, sex, head_circumference_cm);

    let (stunting_risk_percent, stunting_status) = match (haz, waz) {
        (Some(haz), Some(waz)) => (Some(stunting_risk_score(haz, waz)), stunting_status(Some(haz))),
        _ => (None, None),
    };

    let outcome = ScreeningOutcome {
        weight_for_age: IndicatorResult::classify(waz, weight_for_age_status),
        height_for_age: IndicatorResult::classify(haz, height_for_age_status),
        weight_for_height: IndicatorResult::classify(whz, weight_for_height_status),
        head_circumference_for_age: IndicatorResult::classify(hcz, head_circumference_status),
        stunting_risk_percent,
        stunting_status,
    };

    if !outcome.has_any_score() {
        log::debug!("No reference match for age {age_months} months, {sex}");
    }
    outcome
}

/// Screen many submissions in parallel over the same read-only tables
#[must_use]
pub fn screen_all(tables: &ReferenceTables, inputs: &[MeasurementInput]) -> Vec<ScreeningOutcome> {
    inputs.par_iter().map(|input| screen(tables, input)).collect()
}
