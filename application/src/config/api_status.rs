//! Credential status for the external APIs.

use serde::{Deserialize, Serialize};

/// Which API keys are present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiStatus {
    /// Generative-language API key (`GOOGLE_API_KEY`)
    pub gemini: bool,
    /// Search API key (`SERPER_API_KEY`)
    pub serper: bool,
}

impl ApiStatus {
    pub fn new(gemini: bool, serper: bool) -> Self {
        Self { gemini, serper }
    }

    pub fn all_configured(&self) -> bool {
        self.gemini && self.serper
    }

    /// Environment variables that still need to be set
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.gemini {
            missing.push("GOOGLE_API_KEY");
        }
        if !self.serper {
            missing.push("SERPER_API_KEY");
        }
        missing
    }
}
