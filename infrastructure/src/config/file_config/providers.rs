//! Provider configuration from TOML (`[providers]` section)
//!
//! API keys are read from the environment variable named by `api_key_env`
//! first; the inline `api_key` is only a fallback.

use serde::{Deserialize, Serialize};

fn resolve_key(env_name: &str, inline: Option<&String>) -> Option<String> {
    std::env::var(env_name)
        .ok()
        .or_else(|| inline.cloned())
        .filter(|k| !k.trim().is_empty())
}

/// Generative-language API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key (default: "GOOGLE_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    pub base_url: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GOOGLE_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            temperature: 0.7,
            max_output_tokens: 8192,
        }
    }
}

impl FileGeminiConfig {
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_key(&self.api_key_env, self.api_key.as_ref())
    }
}

/// Serper search API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSerperConfig {
    /// Environment variable name for the API key (default: "SERPER_API_KEY").
    pub api_key_env: String,
    pub api_key: Option<String>,
    pub url: String,
}

impl Default for FileSerperConfig {
    fn default() -> Self {
        Self {
            api_key_env: "SERPER_API_KEY".to_string(),
            api_key: None,
            url: "https://google.serper.dev/search".to_string(),
        }
    }
}

impl FileSerperConfig {
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_key(&self.api_key_env, self.api_key.as_ref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    pub gemini: FileGeminiConfig,
    pub serper: FileSerperConfig,
}
