//! Web search configuration from TOML (`[search]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// Give the writer and SEO agents web research
    pub enabled: bool,
    /// Request timeout for a single search
    pub timeout_seconds: u64,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_seconds: 30,
        }
    }
}
