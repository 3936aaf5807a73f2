//! WHO child-growth screening.
//!
//! Computes weight-for-age, length/height-for-age, weight-for-length/height
//! and head-circumference-for-age z-scores with the WHO LMS method,
//! classifies nutritional and stunting status, and optionally asks a hosted
//! model for caregiver-facing advice.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod narrative;
pub mod reference;
pub mod report;
pub mod utils;

// Re-export the most common types for easier use
pub use config::{ColumnMapping, NarrativeConfig, ReferenceSource, ScreeningConfig};
pub use error::{GrowthError, Result};
pub use models::{ChildIdentity, Indicator, MeasurementInput, MeasurementKind, Sex};
pub use reference::{LmsParams, ReferenceTables, load_reference_tables};
pub use report::ScreeningReport;

// Screening pipeline
pub use algorithm::growth::{
    GrowthStatus, IndicatorResult, ScreeningOutcome, lms_zscore, screen, screen_all,
    stunting_risk_percent,
};

// Narrative enrichment
pub use narrative::{GeminiGenerator, Narrative, NarrativeGenerator, narrate};
