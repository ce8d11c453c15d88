//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for content results
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Metadata, every stage's output, final content and SEO block
    Full,
    /// Only the final content (default)
    #[default]
    Content,
    /// JSON output
    Json,
}
