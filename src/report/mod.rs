//! Screening report: the display-ready view of a screening outcome.
//!
//! Scores here are rounded for display. The same snapshot feeds the text
//! report, JSON output and the narrative prompt.

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::Serialize;

use crate::algorithm::growth::{GrowthStatus, IndicatorResult, ScreeningOutcome};
use crate::models::measurement::ChildIdentity;
use crate::models::types::Indicator;

/// Rounded score and label for one indicator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorLine {
    pub indicator: Indicator,
    /// Z-score rounded to two decimals
    pub z_score: Option<f64>,
    /// Short label
    pub label: Option<String>,
    /// Full caregiver-facing text
    pub description: Option<String>,
    pub is_normal: Option<bool>,
}

impl IndicatorLine {
    fn new<S: GrowthStatus>(indicator: Indicator, result: &IndicatorResult<S>) -> Self {
        Self {
            indicator,
            z_score: result.display_z(),
            label: result.status.map(|s| s.label().to_string()),
            description: result.status.map(|s| s.description().to_string()),
            is_normal: result.status.map(GrowthStatus::is_normal),
        }
    }
}

/// Read-only snapshot of one screening, as shown to people
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreeningReport {
    pub child: ChildIdentity,
    pub measurement_date: Option<NaiveDate>,
    /// In `Indicator::ALL` order
    pub indicators: Vec<IndicatorLine>,
    pub stunting_risk_percent: Option<u8>,
    pub stunting_status: Option<String>,
    pub stunted: Option<bool>,
}

impl ScreeningReport {
    #[must_use]
    pub fn new(
        child: ChildIdentity,
        measurement_date: Option<NaiveDate>,
        outcome: &ScreeningOutcome,
    ) -> Self {
        let indicators = vec![
            IndicatorLine::new(Indicator::WeightForAge, &outcome.weight_for_age),
            IndicatorLine::new(Indicator::HeightForAge, &outcome.height_for_age),
            IndicatorLine::new(Indicator::WeightForHeight, &outcome.weight_for_height),
            IndicatorLine::new(
                Indicator::HeadCircumferenceForAge,
                &outcome.head_circumference_for_age,
            ),
        ];

        Self {
            child,
            measurement_date,
            indicators,
            stunting_risk_percent: outcome.stunting_risk_percent,
            stunting_status: outcome.stunting_status.map(|s| s.label().to_string()),
            stunted: outcome.stunting_status.map(|s| !s.is_normal()),
        }
    }

    /// Line for `indicator`
    #[must_use]
    pub fn line(&self, indicator: Indicator) -> Option<&IndicatorLine> {
        self.indicators.iter().find(|line| line.indicator == indicator)
    }

    /// Plain-text rendering for a terminal
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Screening result: {}", self.child.name);
        let _ = writeln!(
            out,
            "Age: {} months ({})",
            self.child.age_months, self.child.sex
        );
        let date = self
            .measurement_date
            .map_or_else(|| "not recorded".to_string(), |d| d.format("%Y-%m-%d").to_string());
        let _ = writeln!(out, "Measurement date: {date}");
        out.push('\n');

        out.push_str("Anthropometry\n");
        for line in &self.indicators {
            let score = line
                .z_score
                .map_or_else(|| "no result".to_string(), |z| format!("{z:.2}"));
            let _ = writeln!(
                out,
                "  {} z-score ({}): {}",
                line.indicator.description(),
                line.indicator.code(),
                score
            );
            if let Some(description) = &line.description {
                let _ = writeln!(out, "    {description}");
            }
        }
        out.push('\n');

        out.push_str("Interpretation\n");
        let risk = self
            .stunting_risk_percent
            .map_or_else(|| "not available".to_string(), |r| format!("{r}%"));
        let _ = writeln!(out, "  Stunting risk: {risk}");
        let status = match (self.stunted, &self.stunting_status) {
            (Some(true), Some(label)) => format!("{label} (needs attention)"),
            (Some(false), _) => "Not stunted".to_string(),
            _ => "not available".to_string(),
        };
        let _ = writeln!(out, "  Stunting status: {status}");

        out
    }
}
