//! Measurement input model
//!
//! A `MeasurementInput` is one child's submitted anthropometric observation.
//! It lives for a single screening and is never persisted.

use chrono::NaiveDate;
use serde::Serialize;

use super::types::Sex;
use crate::error::{GrowthError, Result};

/// Who the measurement belongs to, as shown in reports and narratives
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChildIdentity {
    /// Child's name as entered on the form
    pub name: String,
    /// Age in completed months
    pub age_months: u32,
    pub sex: Sex,
}

/// One child's submitted observation
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementInput {
    /// Age in completed months
    pub age_months: u32,
    pub sex: Sex,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Recumbent length or standing height in centimetres
    pub height_cm: f64,
    /// Head circumference in centimetres
    pub head_circumference_cm: f64,
    /// Date the measurement was taken
    pub measurement_date: Option<NaiveDate>,
}

impl MeasurementInput {
    /// Create an input without a measurement date
    #[must_use]
    pub const fn new(
        age_months: u32,
        sex: Sex,
        weight_kg: f64,
        height_cm: f64,
        head_circumference_cm: f64,
    ) -> Self {
        Self {
            age_months,
            sex,
            weight_kg,
            height_cm,
            head_circumference_cm,
            measurement_date: None,
        }
    }

    #[must_use]
    pub const fn with_measurement_date(mut self, date: Option<NaiveDate>) -> Self {
        self.measurement_date = date;
        self
    }

    /// Form-level validation performed by the presentation layer.
    ///
    /// Screening never requires this to have run: invalid values simply
    /// produce absent scores. It exists so a form can reject bad input
    /// with a message instead of showing empty results.
    pub fn validate(&self) -> Result<()> {
        if self.age_months < 1 {
            return Err(GrowthError::invalid_input("age must be at least 1 month"));
        }

        let measurements = [
            ("weight", self.weight_kg),
            ("height", self.height_cm),
            ("head circumference", self.head_circumference_cm),
        ];
        for (name, value) in measurements {
            if !value.is_finite() || value <= 0.0 {
                return Err(GrowthError::invalid_input(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        Ok(())
    }

    /// Identity block for this measurement
    #[must_use]
    pub fn identity(&self, name: impl Into<String>) -> ChildIdentity {
        ChildIdentity {
            name: name.into(),
            age_months: self.age_months,
            sex: self.sex,
        }
    }
}
