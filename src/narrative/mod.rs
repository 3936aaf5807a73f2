//! Narrative advice from a hosted text-generation service
//!
//! Narratives are an optional enrichment produced after screening has
//! finished. Any failure here is recovered at this boundary and reported
//! as an unavailable narrative; it never affects the numeric results.

pub mod gemini;
pub mod prompt;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;
use crate::report::ScreeningReport;

pub use gemini::GeminiGenerator;
pub use prompt::build_prompt;

/// Something that can turn a screening report into advice text
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn generate(&self, report: &ScreeningReport) -> Result<String>;
}

/// Result of asking for a narrative
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Narrative {
    /// Advice text from the service
    Generated(String),
    /// Why no advice is available
    Unavailable(String),
}

impl Narrative {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Generated(text) | Self::Unavailable(text) => text,
        }
    }

    #[must_use]
    pub const fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }
}

impl fmt::Display for Narrative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generated(text) => write!(f, "{text}"),
            Self::Unavailable(reason) => write!(f, "Narrative advice unavailable: {reason}"),
        }
    }
}

/// Ask `generator` for a narrative, bounded by `timeout`.
///
/// Never fails. A missing generator, a service error or a timeout all
/// produce `Narrative::Unavailable` with the reason.
pub async fn narrate(
    generator: Option<&dyn NarrativeGenerator>,
    report: &ScreeningReport,
    timeout: Duration,
) -> Narrative {
    let Some(generator) = generator else {
        return Narrative::Unavailable("narrative service is not configured".to_string());
    };

    match tokio::time::timeout(timeout, generator.generate(report)).await {
        Ok(Ok(text)) => Narrative::Generated(text),
        Ok(Err(e)) => {
            log::warn!("Narrative generation failed: {e}");
            Narrative::Unavailable(e.to_string())
        }
        Err(_) => {
            log::warn!("Narrative generation timed out after {timeout:?}");
            Narrative::Unavailable(format!("no response within {} seconds", timeout.as_secs()))
        }
    }
}
