//! HTTP client for the generative-language API

use super::error::{GeminiError, Result};
use super::protocol::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, error_message,
};
use crate::config::{FileGeminiConfig, FileGenerationConfig};
use reqwest::Client;
use std::time::Duration;
use studio_domain::Model;
use tracing::debug;

/// Public endpoint of the generative-language API
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Stateless client for `models/{model}:generateContent`
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: Option<String>,
    base_url: String,
    temperature: f32,
    max_output_tokens: u32,
    request_timeout: Option<Duration>,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: 0.7,
            max_output_tokens: 8192,
            request_timeout: None,
        }
    }

    /// Client for `[providers.gemini]`, with the key resolved from the environment
    ///
    /// Each HTTP request is bounded by the `[generation]` stage timeout.
    pub fn from_config(config: &FileGeminiConfig, generation: &FileGenerationConfig) -> Self {
        let client = Self::new(config.resolve_api_key())
            .with_base_url(config.base_url.clone())
            .with_temperature(config.temperature)
            .with_max_output_tokens(config.max_output_tokens);
        match generation.to_behavior().0.stage_timeout {
            Some(timeout) => client.with_request_timeout(timeout),
            None => client,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self, model: &Model) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model.as_str()
        )
    }

    /// Generate a reply for the conversation in `contents`
    pub async fn generate(
        &self,
        model: &Model,
        system_prompt: Option<&str>,
        contents: Vec<Content>,
    ) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or(GeminiError::MissingApiKey)?;

        let request = GenerateContentRequest {
            system_instruction: system_prompt.map(Content::system),
            contents,
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        };

        debug!("POST generateContent model={} turns={}", model, request.contents.len());

        let mut builder = self
            .http
            .post(self.endpoint(model))
            .query(&[("key", api_key)])
            .json(&request);
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status,
                message: error_message(&body),
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        body.into_text().map_err(GeminiError::EmptyResponse)
    }
}
