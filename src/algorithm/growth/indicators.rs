//! Indicator resolvers
//!
//! Each resolver finds the LMS row for a child and scores one measurement
//! against it. `None` means "no result": either the key is not tabulated or
//! the measurement is unusable. It is never a stand-in for a zero score.

use super::lms::lms_zscore;
use crate::models::types::{Indicator, MeasurementKind, Sex};
use crate::reference::ReferenceTables;

fn resolve_by_age(
    tables: &ReferenceTables,
    indicator: Indicator,
    age_months: u32,
    sex: Sex,
    measurement: f64,
) -> Option<f64> {
    let Some(params) = tables.lookup_by_age(indicator, age_months, sex) else {
        log::debug!("{indicator}: no reference row for age {age_months} months, {sex}");
        return None;
    };
    lms_zscore(measurement, params)
}

/// Weight-for-age z-score
#[must_use]
pub fn weight_for_age(tables: &ReferenceTables, age_months: u32, sex: Sex, weight_kg: f64) -> Option<f64> {
    resolve_by_age(tables, Indicator::WeightForAge, age_months, sex, weight_kg)
}

/// Length/height-for-age z-score
#[must_use]
pub fn height_for_age(tables: &ReferenceTables, age_months: u32, sex: Sex, height_cm: f64) -> Option<f64> {
    resolve_by_age(tables, Indicator::HeightForAge, age_months, sex, height_cm)
}

/// Weight-for-length/height z-score.
///
/// Children under 24 months are looked up in the length rows, older
/// children in the height rows. The body length is rounded to 0.1 cm to
/// meet the table grid.
#[must_use]
pub fn weight_for_height(
    tables: &ReferenceTables,
    age_months: u32,
    sex: Sex,
    weight_kg: f64,
    height_cm: f64,
) -> Option<f64> {
    let kind = MeasurementKind::for_age(age_months);
    let Some(params) = tables.lookup_by_height(sex, kind, height_cm) else {
        log::debug!(
            "{}: no reference row for {kind:?} {height_cm} cm, {sex}",
            Indicator::WeightForHeight
        );
        return None;
    };
    lms_zscore(weight_kg, params)
}

/// Head-circumference-for-age z-score
#[must_use]
pub fn head_circumference_for_age(
    tables: &ReferenceTables,
    age_months: u32,
    sex: Sex,
    head_circumference_cm: f64,
) -> Option<f64> {
    resolve_by_age(
        tables,
        Indicator::HeadCircumferenceForAge,
        age_months,
        sex,
        head_circumference_cm,
    )
}
