//! Gemini LLM Gateway implementation

use super::client::GeminiClient;
use super::error::GeminiError;
use super::session::GeminiSession;
use async_trait::async_trait;
use std::sync::Arc;
use studio_application::{GatewayError, LlmGateway, LlmSession};
use studio_domain::Model;
use tracing::info;

/// LLM Gateway implementation for the generative-language API
pub struct GeminiLlmGateway {
    client: Arc<GeminiClient>,
}

impl GeminiLlmGateway {
    pub fn new(client: GeminiClient) -> Self {
        info!(
            "GeminiLlmGateway initialized (api key {})",
            if client.has_api_key() { "set" } else { "missing" }
        );
        Self {
            client: Arc::new(client),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.client.has_api_key()
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        if !self.client.has_api_key() {
            return Err(GeminiError::MissingApiKey.into());
        }

        Ok(Box::new(GeminiSession::new(
            Arc::clone(&self.client),
            model.clone(),
            Some(system_prompt.to_string()),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Path, Query};
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{Value, json};
    use std::collections::HashMap;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// Echoes what it received so tests can assert on the request shape
    async fn echo(
        Path(call): Path<String>,
        Query(query): Query<HashMap<String, String>>,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        let text = format!(
            "{}|{}|{}|{}",
            call,
            query.get("key").cloned().unwrap_or_default(),
            body["systemInstruction"]["parts"][0]["text"]
                .as_str()
                .unwrap_or_default(),
            body["contents"].as_array().map(|c| c.len()).unwrap_or(0),
        );
        Json(json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]
        }))
    }

    async fn rate_limited() -> (StatusCode, Json<Value>) {
        (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({"error": {"code": 429, "message": "Resource has been exhausted"}})),
        )
    }

    fn gateway(base_url: &str, key: Option<&str>) -> GeminiLlmGateway {
        GeminiLlmGateway::new(
            GeminiClient::new(key.map(String::from)).with_base_url(base_url.to_string()),
        )
    }

    #[tokio::test]
    async fn test_send_posts_generate_content() {
        let base = serve(Router::new().route("/v1beta/models/{call}", post(echo))).await;
        let gateway = gateway(&base, Some("test-key"));

        let session = gateway
            .create_session_with_system_prompt(&Model::Gemini20FlashExp, "You are a writer.")
            .await
            .unwrap();
        let reply = session.send("Write something").await.unwrap();

        assert_eq!(
            reply,
            "gemini-2.0-flash-exp:generateContent|test-key|You are a writer.|1"
        );
    }

    #[tokio::test]
    async fn test_session_resends_history() {
        let base = serve(Router::new().route("/v1beta/models/{call}", post(echo))).await;
        let gateway = gateway(&base, Some("test-key"));

        let session = gateway
            .create_session_with_system_prompt(&Model::Gemini25Flash, "sys")
            .await
            .unwrap();
        session.send("first").await.unwrap();
        let reply = session.send("second").await.unwrap();

        // user, model, user
        assert!(reply.ends_with("|3"));
    }

    #[tokio::test]
    async fn test_rate_limit_is_reported() {
        let base = serve(Router::new().route("/v1beta/models/{call}", post(rate_limited))).await;
        let gateway = gateway(&base, Some("test-key"));

        let session = gateway
            .create_session_with_system_prompt(&Model::default(), "sys")
            .await
            .unwrap();
        let error = session.send("hello").await.unwrap_err();

        assert_eq!(
            error,
            GatewayError::RateLimited("Resource has been exhausted".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_request() {
        let gateway = gateway("http://127.0.0.1:9", None);
        let result = gateway
            .create_session_with_system_prompt(&Model::default(), "sys")
            .await;
        assert!(matches!(result, Err(GatewayError::MissingApiKey(_))));
    }
}
