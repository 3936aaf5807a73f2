//! Gemini generative language API client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::NarrativeGenerator;
use super::prompt::build_prompt;
use crate::config::NarrativeConfig;
use crate::error::{GrowthError, Result};
use crate::report::ScreeningReport;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Narrative generator backed by a hosted Gemini model
pub struct GeminiGenerator {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
    max_words: usize,
}

impl GeminiGenerator {
    /// Build a client from configuration.
    ///
    /// Returns `Ok(None)` when no API key is configured.
    pub fn from_config(config: &NarrativeConfig) -> Result<Option<Self>> {
        let Some(api_key) = config.api_key.clone() else {
            return Ok(None);
        };

        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Some(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            max_words: config.max_words,
        }))
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

/// Join the text parts of the first candidate
fn extract_text(response: GenerateResponse) -> Result<String> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(GrowthError::Narrative("response contained no text".to_string()));
    }
    Ok(text)
}

#[async_trait]
impl NarrativeGenerator for GeminiGenerator {
    async fn generate(&self, report: &ScreeningReport) -> Result<String> {
        let prompt = build_prompt(report, self.max_words);
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: &prompt }],
            }],
        };

        log::debug!("Requesting narrative from {} ({})", self.model, self.endpoint);
        let response: GenerateResponse = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        extract_text(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"- Eat "},{"text":"eggs"}],"role":"model"}}]}"#,
        );
        assert_eq!(extract_text(response).unwrap(), "- Eat eggs");
    }

    #[test]
    fn test_extract_text_rejects_empty() {
        assert!(extract_text(parse(r#"{"candidates":[]}"#)).is_err());
        assert!(extract_text(parse(r#"{}"#)).is_err());
        assert!(extract_text(parse(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#)).is_err());
    }

    #[test]
    fn test_from_config_without_key() {
        let config = NarrativeConfig::default();
        assert!(GeminiGenerator::from_config(&config).unwrap().is_none());
    }

    #[test]
    fn test_url() {
        let config = NarrativeConfig {
            endpoint: "https://example.test/v1beta/".to_string(),
            api_key: Some("key".to_string()),
            ..NarrativeConfig::default()
        };
        let generator = GeminiGenerator::from_config(&config).unwrap().unwrap();
        assert_eq!(
            generator.url(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
