//! LLM Gateway port
//!
//! Defines the interface for communicating with the generative-language API.

use async_trait::async_trait;
use studio_domain::Model;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("API key missing or rejected: {0}")]
    MissingApiKey(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, GatewayError::RateLimited(_))
    }

    /// User-facing hint for resolving the error
    pub fn troubleshooting(&self) -> &'static str {
        match self {
            GatewayError::MissingApiKey(_) => {
                "Set GOOGLE_API_KEY (or providers.gemini.api_key) to a valid key."
            }
            GatewayError::RateLimited(_) => {
                "The API is rate limiting requests. Wait a minute and retry, or use a lighter model."
            }
            GatewayError::Timeout => {
                "The model took too long. Increase generation.timeout_seconds or lower the word count."
            }
            GatewayError::ConnectionError(_) => {
                "Check network connectivity to the generative-language API."
            }
            GatewayError::ModelNotAvailable(_) => {
                "Choose another model in the [models] section."
            }
            GatewayError::RequestFailed(_)
            | GatewayError::InvalidResponse(_)
            | GatewayError::Other(_) => {
                "Retry the request; if it keeps failing, run with -vv for details."
            }
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with LLM providers.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a new session with a system prompt
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// An active LLM session
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send a message and get a response
    async fn send(&self, content: &str) -> Result<String, GatewayError>;
}
