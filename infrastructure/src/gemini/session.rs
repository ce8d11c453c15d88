//! Gemini session implementation

use super::client::GeminiClient;
use super::protocol::Content;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use studio_application::{GatewayError, LlmSession};
use studio_domain::Model;
use tracing::debug;

/// A conversation with one model under one system prompt
///
/// The API is stateless, so the session keeps the turn history and resends
/// it with every request.
pub struct GeminiSession {
    client: Arc<GeminiClient>,
    model: Model,
    system_prompt: Option<String>,
    history: Mutex<Vec<Content>>,
}

impl GeminiSession {
    pub fn new(client: Arc<GeminiClient>, model: Model, system_prompt: Option<String>) -> Self {
        Self {
            client,
            model,
            system_prompt,
            history: Mutex::new(Vec::new()),
        }
    }

    fn with_history<T>(&self, f: impl FnOnce(&mut Vec<Content>) -> T) -> T {
        let mut history = self.history.lock().unwrap_or_else(|p| p.into_inner());
        f(&mut history)
    }
}

#[async_trait]
impl LlmSession for GeminiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let contents = self.with_history(|h| {
            h.push(Content::user(content));
            h.clone()
        });

        match self
            .client
            .generate(&self.model, self.system_prompt.as_deref(), contents)
            .await
        {
            Ok(text) => {
                debug!("{} replied with {} bytes", self.model, text.len());
                self.with_history(|h| h.push(Content::model(text.clone())));
                Ok(text)
            }
            Err(e) => {
                self.with_history(|h| h.pop());
                Err(e.into())
            }
        }
    }
}
