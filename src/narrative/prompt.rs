//! Prompt construction for the narrative service

use std::fmt::Write as _;

use crate::report::ScreeningReport;

/// Build the advisory prompt for one screening report.
///
/// The prompt only carries rounded scores and labels, never raw LMS values.
#[must_use]
pub fn build_prompt(report: &ScreeningReport, max_words: usize) -> String {
    let mut prompt = String::from(
        "You are a pediatric nutrition expert working to WHO standards. \
         Give an in-depth analysis based on the following data:\n",
    );

    let child = &report.child;
    let _ = writeln!(prompt, "- Name: {}", child.name);
    let _ = writeln!(prompt, "- Age: {} months ({})", child.age_months, child.sex);
    for line in &report.indicators {
        let score = line
            .z_score
            .map_or_else(|| "no result".to_string(), |z| format!("{z:.2}"));
        let label = line.label.as_deref().unwrap_or("no result");
        let _ = writeln!(
            prompt,
            "- {} score: {} ({})",
            line.indicator.description(),
            score,
            label
        );
    }
    if let Some(risk) = report.stunting_risk_percent {
        let _ = writeln!(prompt, "- Stunting risk: {risk}%");
    }

    let _ = write!(
        prompt,
        "\nInstructions:\n\
         The reader is village health post staff and the child's parents.\n\
         1. Explain what these numbers mean for the child's parents.\n\
         2. If there is any sign of stunting risk or malnutrition, give specific nutrition advice \
            for the child's needs and age.\n\
         3. Besides general advice, suggest low-budget nutrition alternatives available to \
            families in tropical villages.\n\
         4. Use an empathetic, friendly and warm but professional tone.\n\
         5. Base everything on current WHO standards; do not guess.\n\
         6. Suggest interventions on a timeline over the next few months.\n\
         7. At most {max_words} words, formatted as bullet points so it is easy to read.\n"
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::growth::classification::{
        head_circumference_status, height_for_age_status, weight_for_age_status,
        weight_for_height_status,
    };
    use crate::algorithm::growth::{IndicatorResult, ScreeningOutcome};
    use crate::models::measurement::ChildIdentity;
    use crate::models::types::Sex;

    #[test]
    fn test_prompt_contains_scores_and_limits() {
        let outcome = ScreeningOutcome {
            weight_for_age: IndicatorResult::classify(Some(-2.456), weight_for_age_status),
            height_for_age: IndicatorResult::classify(None, height_for_age_status),
            weight_for_height: IndicatorResult::classify(Some(0.1), weight_for_height_status),
            head_circumference_for_age: IndicatorResult::classify(Some(0.0), head_circumference_status),
            stunting_risk_percent: None,
            stunting_status: None,
        };
        let child = ChildIdentity {
            name: "Budi".to_string(),
            age_months: 18,
            sex: Sex::Male,
        };
        let report = ScreeningReport::new(child, None, &outcome);
        let prompt = build_prompt(&report, 200);

        assert!(prompt.contains("- Name: Budi"));
        assert!(prompt.contains("- Age: 18 months (Male)"));
        assert!(prompt.contains("- Weight-for-age score: -2.46 (Underweight)"));
        assert!(prompt.contains("- Length/height-for-age score: no result (no result)"));
        assert!(!prompt.contains("Stunting risk:"));
        assert!(prompt.contains("At most 200 words"));
    }
}
