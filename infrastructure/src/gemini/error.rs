//! Error types for the Gemini adapter

use studio_application::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when calling the generative-language API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("GOOGLE_API_KEY is not set")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Response contained no text: {0}")]
    EmptyResponse(String),
}

impl GeminiError {
    fn mentions_api_key(message: &str) -> bool {
        let lower = message.to_lowercase();
        lower.contains("api key") || lower.contains("api_key")
    }
}

impl From<GeminiError> for GatewayError {
    fn from(error: GeminiError) -> Self {
        match error {
            GeminiError::MissingApiKey => {
                GatewayError::MissingApiKey("GOOGLE_API_KEY is not set".to_string())
            }
            GeminiError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            GeminiError::Http(e) if e.is_connect() => GatewayError::ConnectionError(e.to_string()),
            GeminiError::Http(e) => GatewayError::RequestFailed(e.to_string()),
            GeminiError::Api { status, message } => match status {
                429 => GatewayError::RateLimited(message),
                400 | 401 | 403 if GeminiError::mentions_api_key(&message) => {
                    GatewayError::MissingApiKey(message)
                }
                404 => GatewayError::ModelNotAvailable(message),
                408 | 504 => GatewayError::Timeout,
                _ => GatewayError::RequestFailed(format!("{}: {}", status, message)),
            },
            GeminiError::EmptyResponse(reason) => GatewayError::InvalidResponse(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, message: &str) -> GatewayError {
        GeminiError::Api {
            status,
            message: message.to_string(),
        }
        .into()
    }

    #[test]
    fn test_rate_limit_mapping() {
        assert!(api(429, "Resource has been exhausted").is_rate_limit());
    }

    #[test]
    fn test_key_errors_map_to_missing_key() {
        assert!(matches!(
            api(400, "API key not valid. Please pass a valid API key."),
            GatewayError::MissingApiKey(_)
        ));
        assert!(matches!(
            api(403, "Method doesn't allow unregistered callers (API_KEY missing)"),
            GatewayError::MissingApiKey(_)
        ));
    }

    #[test]
    fn test_other_bad_request_is_request_failed() {
        assert_eq!(
            api(400, "Invalid JSON payload"),
            GatewayError::RequestFailed("400: Invalid JSON payload".to_string())
        );
    }

    #[test]
    fn test_not_found_is_model_not_available() {
        assert!(matches!(
            api(404, "models/gemini-9 is not found"),
            GatewayError::ModelNotAvailable(_)
        ));
    }

    #[test]
    fn test_missing_key_message() {
        let error: GatewayError = GeminiError::MissingApiKey.into();
        assert_eq!(
            error,
            GatewayError::MissingApiKey("GOOGLE_API_KEY is not set".to_string())
        );
    }
}
