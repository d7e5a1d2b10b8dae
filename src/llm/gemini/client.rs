// src/llm/gemini/client.rs
// Google Gemini generateContent client (non-streaming, single text part)
// Authenticates with the `key` query parameter, not a Bearer header

use async_trait::async_trait;
use std::time::Instant;
use tracing::{Span, debug, error, info, instrument};
use uuid::Uuid;

use crate::config::GeminiConfig;
use crate::error::{ResearchError, Result};
use crate::http::create_shared_client;
use crate::llm::gemini::extraction::extract_text;
use crate::llm::gemini::types::GeminiRequest;
use crate::llm::provider::TextGenerator;

/// Google Gemini API client
pub struct GeminiClient {
    config: GeminiConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    /// Create a client with its own pooled HTTP client
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let http = create_shared_client(config.request_timeout)?;
        Ok(Self::with_http_client(config, http))
    }

    /// Create a client on top of an existing HTTP client
    pub fn with_http_client(config: GeminiConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &str {
        "Gemini"
    }

    #[instrument(skip(self, prompt), fields(request_id, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request_id = Uuid::new_v4().to_string();
        Span::current().record("request_id", &request_id);

        let Some(api_key) = self.config.api_key.as_deref() else {
            error!("Gemini API key is not configured. Please set GEMINI_KEY environment variable.");
            return Err(ResearchError::Config("missing Gemini API key".to_string()));
        };

        let endpoint = self.config.endpoint();
        let request = GeminiRequest::from_prompt(prompt);
        let start_time = Instant::now();

        info!(request_id = %request_id, "Making request to Gemini API: {}?key=***", endpoint);

        let response = self
            .http
            .post(&endpoint)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(request_id = %request_id, timeout = e.is_timeout(), error = %e, "Gemini request failed");
                ResearchError::Transport(e)
            })?;

        let status = response.status();
        let body = response.text().await?;
        let duration_ms = start_time.elapsed().as_millis() as u64;

        if !status.is_success() {
            error!(
                request_id = %request_id,
                status = %status,
                duration_ms,
                response = %body,
                "Gemini API returned an error status"
            );
            return Err(ResearchError::Upstream { status, body });
        }

        debug!(request_id = %request_id, duration_ms, "Received response from Gemini API");

        let text = extract_text(&body).inspect_err(|e| {
            error!(request_id = %request_id, error = %e, "Failed to parse Gemini response");
        })?;

        info!(
            request_id = %request_id,
            duration_ms,
            content_len = text.len(),
            "Gemini request complete"
        );

        Ok(text)
    }
}
