use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{config::GeminiConfig, error::AppError, generation::ports::TextGenerator};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    response_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig, client: Client) -> Self {
        Self {
            api_key: config.api_key.clone(),
            model_name: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<Option<String>, AppError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model_name);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("Gemini API request failed: {}", e);
                AppError::Upstream(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(AppError::Upstream(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to parse Gemini response: {}", e);
            AppError::Upstream(format!("Failed to parse LLM response: {}", e))
        })?;

        // Responses may be split over several parts.
        let text: String = gemini_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        Ok((!text.is_empty()).then_some(text))
    }
}

impl TextGenerator for GeminiClient {
    async fn generate_text(&self, prompt: String) -> Result<Option<String>, AppError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.4,
                response_mime_type: "application/json".to_string(),
            },
        };

        self.call_gemini_api(request).await
    }
}
