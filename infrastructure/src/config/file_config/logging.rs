//! Log file configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for the daily-rotated diagnostic log (disabled when unset)
    pub dir: Option<PathBuf>,
    /// JSONL transcript of prompts, outputs and fallbacks (disabled when unset)
    pub generation_log: Option<PathBuf>,
}
