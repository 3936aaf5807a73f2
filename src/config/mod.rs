//! Configuration for growth screening.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::models::types::Indicator;

/// Top-level configuration for a screening session
#[derive(Debug, Clone, Default)]
pub struct ScreeningConfig {
    /// Where the WHO reference tables live
    pub reference: ReferenceSource,
    /// Settings for the optional narrative service
    pub narrative: NarrativeConfig,
}

impl ScreeningConfig {
    #[must_use]
    pub fn with_reference_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.reference.directory = dir.into();
        self
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.narrative.api_key = api_key.filter(|k| !k.trim().is_empty());
        self
    }
}

/// Location and layout of the four reference tables
#[derive(Debug, Clone)]
pub struct ReferenceSource {
    /// Directory containing the table files
    pub directory: PathBuf,
    /// Weight-for-age file name
    pub weight_for_age: String,
    /// Length/height-for-age file name
    pub height_for_age: String,
    /// Weight-for-length/height file name
    pub weight_for_height: String,
    /// Head-circumference-for-age file name
    pub head_circumference_for_age: String,
    /// Header names used to find each logical column
    pub columns: ColumnMapping,
}

impl Default for ReferenceSource {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("data"),
            weight_for_age: "wfa-all.csv".to_string(),
            height_for_age: "lhfa-all.csv".to_string(),
            weight_for_height: "wfh-all.csv".to_string(),
            head_circumference_for_age: "hcfa-all.csv".to_string(),
            columns: ColumnMapping::default(),
        }
    }
}

impl ReferenceSource {
    /// Full path of the file backing `indicator`
    #[must_use]
    pub fn path_for(&self, indicator: Indicator) -> PathBuf {
        let file = match indicator {
            Indicator::WeightForAge => &self.weight_for_age,
            Indicator::HeightForAge => &self.height_for_age,
            Indicator::WeightForHeight => &self.weight_for_height,
            Indicator::HeadCircumferenceForAge => &self.head_circumference_for_age,
        };
        self.directory.join(file)
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

/// Candidate header names for each logical reference column.
///
/// The first header present in a file wins. Matching ignores ASCII case.
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    pub age_months: Vec<String>,
    pub sex: Vec<String>,
    pub measurement_kind: Vec<String>,
    pub height_cm: Vec<String>,
    pub l: Vec<String>,
    pub m: Vec<String>,
    pub s: Vec<String>,
}

fn names(candidates: &[&str]) -> Vec<String> {
    candidates.iter().map(|c| (*c).to_string()).collect()
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            age_months: names(&["Usia", "age_months", "Month", "age"]),
            sex: names(&["Gender", "sex"]),
            measurement_kind: names(&["Pengukuran", "measurement_kind", "measurement"]),
            height_cm: names(&["Tinggi", "height_cm", "Length", "Height"]),
            l: names(&["L"]),
            m: names(&["M"]),
            s: names(&["S"]),
        }
    }
}

/// Settings for the hosted text-generation service
#[derive(Debug, Clone)]
pub struct NarrativeConfig {
    /// Base URL of the generative language API
    pub endpoint: String,
    /// Model identifier
    pub model: String,
    /// API key; no key means narratives are skipped
    pub api_key: Option<String>,
    /// Upper bound on one narrative request
    pub timeout: Duration,
    /// Word limit requested in the prompt
    pub max_words: usize,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.5-flash".to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
            max_words: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let source = ReferenceSource::default();
        assert_eq!(
            source.path_for(Indicator::WeightForHeight),
            PathBuf::from("data").join("wfh-all.csv")
        );
        assert_eq!(
            source.path_for(Indicator::HeightForAge),
            PathBuf::from("data").join("lhfa-all.csv")
        );
    }

    #[test]
    fn test_blank_api_key_is_dropped() {
        let config = ScreeningConfig::default().with_api_key(Some("   ".to_string()));
        assert!(config.narrative.api_key.is_none());

        let config = ScreeningConfig::default().with_api_key(Some("secret".to_string()));
        assert_eq!(config.narrative.api_key.as_deref(), Some("secret"));
    }
}
