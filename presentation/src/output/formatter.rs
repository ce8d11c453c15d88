//! Output formatter trait

use studio_domain::{ContentResult, OutputFormat};

/// Trait for formatting content results
pub trait OutputFormatter {
    /// Metadata, every stage, final content and SEO block
    fn format(&self, result: &ContentResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &ContentResult) -> String;

    /// Only the final content
    fn format_content_only(&self, result: &ContentResult) -> String;

    fn render(&self, result: &ContentResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(result),
            OutputFormat::Content => self.format_content_only(result),
            OutputFormat::Json => self.format_json(result),
        }
    }
}
