//! WHO child growth z-scores and nutritional status
//!
//! The pipeline is pure and stateless given the reference tables:
//! measurement -> LMS row -> z-score -> status label. Absence of a
//! reference row or an unusable measurement propagates as `None`
//! through every stage.

pub mod classification;
pub mod indicators;
pub mod lms;
pub mod risk;
pub mod screening;

pub use classification::{
    GrowthStatus, HeadCircumferenceStatus, HeightForAgeStatus, StuntingStatus, WeightForAgeStatus,
    WeightForHeightStatus,
};
pub use lms::lms_zscore;
pub use risk::stunting_risk_percent;
pub use screening::{IndicatorResult, ScreeningOutcome, round_z, screen, screen_all};
