//! LMS parameters and reference table keys

use serde::Serialize;

use crate::models::types::{MeasurementKind, Sex};

/// WHO LMS triple: Box-Cox power, median and coefficient of variation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LmsParams {
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

impl LmsParams {
    /// Build a parameter triple, rejecting values no reference row can hold
    /// (non-finite numbers, `M <= 0`, `S <= 0`).
    #[must_use]
    pub fn new(l: f64, m: f64, s: f64) -> Option<Self> {
        let valid = l.is_finite() && m.is_finite() && s.is_finite() && m > 0.0 && s > 0.0;
        valid.then_some(Self { l, m, s })
    }
}

/// Key for the age-indexed tables (weight-, height-, head-circumference-for-age)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgeKey {
    pub age_months: u32,
    pub sex: Sex,
}

impl AgeKey {
    #[must_use]
    pub const fn new(age_months: u32, sex: Sex) -> Self {
        Self { age_months, sex }
    }
}

/// Key for the weight-for-length/height table.
///
/// Heights are held as whole tenths of a centimetre so that a lookup of
/// `78.04` and a table row of `78.0` meet on the same integer. Ties round
/// to the even tenth, so `85.25` is keyed as `85.2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeightKey {
    pub sex: Sex,
    pub kind: MeasurementKind,
    pub height_tenths: i64,
}

impl HeightKey {
    /// Round `height_cm` to one decimal place and build the key.
    ///
    /// Returns `None` for non-finite or non-positive heights.
    #[must_use]
    pub fn new(sex: Sex, kind: MeasurementKind, height_cm: f64) -> Option<Self> {
        height_tenths(height_cm).map(|height_tenths| Self {
            sex,
            kind,
            height_tenths,
        })
    }

    /// Height in centimetres this key stands for
    #[must_use]
    pub fn height_cm(&self) -> f64 {
        self.height_tenths as f64 / 10.0
    }
}

#[allow(clippy::cast_possible_truncation)]
fn height_tenths(height_cm: f64) -> Option<i64> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return None;
    }
    Some((height_cm * 10.0).round_ties_even() as i64)
}
