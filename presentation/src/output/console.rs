//! Console output formatter for content results

use super::formatter::OutputFormatter;
use super::html_text::display_text;
use colored::Colorize;
use studio_application::{ApiStatus, GenerationSettings, SystemCheck};
use studio_domain::{AgentRole, ContentResult, GenerationStatus, SeoMetadata};

/// Formats content results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete result
    pub fn format(result: &ContentResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("AI Content Creation Studio"));
        output.push('\n');

        match result.status {
            GenerationStatus::Success => {
                output.push_str(&format!("{}\n\n", result.message.green().bold()));
            }
            GenerationStatus::Simulation => {
                output.push_str(&format!("{}\n", result.message.yellow().bold()));
                if let Some(reason) = &result.fallback_reason {
                    output.push_str(&format!("{} {}\n", "Reason:".yellow(), reason));
                }
                output.push('\n');
            }
        }

        let request = &result.request;
        output.push_str(&format!("{} {}\n", "Topic:".cyan().bold(), request.topic));
        output.push_str(&format!("{} {}\n", "Audience:".cyan().bold(), request.audience));
        output.push_str(&format!("{} {}\n", "Type:".cyan().bold(), request.content_type));
        output.push_str(&format!(
            "{} {}\n",
            "Word Count:".cyan().bold(),
            request.word_count
        ));
        output.push_str(&format!(
            "{} {}, {} research, {} SEO focus\n",
            "Options:".cyan().bold(),
            request.options.tone,
            request.options.research_depth,
            request.options.seo_focus
        ));
        if !result.apis_used.is_empty() {
            output.push_str(&format!(
                "{} {}\n",
                "APIs:".cyan().bold(),
                result.apis_used.join(", ")
            ));
        }

        if !result.workflow.is_empty() {
            output.push_str(&Self::section_header("Workflow"));
            for line in &result.workflow {
                output.push_str(&format!("  * {}\n", line));
            }
        }

        // Intermediate stages; the last one is shown as the final content
        let intermediate = result.stages.len().saturating_sub(1);
        for stage in &result.stages[..intermediate] {
            output.push_str(&Self::section_header(&format!(
                "{} ({}, {:.1}s{})",
                stage.role.title(),
                stage.model,
                stage.duration_ms as f64 / 1000.0,
                if stage.researched { ", researched" } else { "" }
            )));
            output.push_str(&Self::indent(&display_text(&stage.content), "  "));
            output.push('\n');
        }

        output.push_str(&Self::section_header(&format!(
            "Final Content ({} words)",
            result.body_word_count()
        )));
        output.push_str(&display_text(&result.body));
        output.push('\n');

        if let Some(seo) = result.seo.as_ref().filter(|s| !s.is_empty()) {
            output.push_str(&Self::section_header("SEO"));
            output.push_str(&Self::format_seo(seo));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(result: &ContentResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Only the final content (concise output)
    pub fn format_content_only(result: &ContentResult) -> String {
        let mut output = String::new();
        if result.status == GenerationStatus::Simulation {
            output.push_str(&format!(
                "{}\n\n",
                "[simulation mode: content is a placeholder]".yellow()
            ));
        }
        output.push_str(&display_text(&result.body));
        output.push('\n');
        output
    }

    fn format_seo(seo: &SeoMetadata) -> String {
        let mut output = String::new();
        let mut field = |label: &str, value: Option<&String>| {
            if let Some(value) = value {
                output.push_str(&format!("{} {}\n", format!("{}:", label).bold(), value));
            }
        };
        field("Title", seo.title.as_ref());
        field("Meta Description", seo.meta_description.as_ref());
        field("Twitter", seo.social.twitter.as_ref());
        field("LinkedIn", seo.social.linkedin.as_ref());
        field("Facebook", seo.social.facebook.as_ref());
        if !seo.keywords.is_empty() {
            output.push_str(&format!("{} {}\n", "Keywords:".bold(), seo.keywords.join(", ")));
        }
        output
    }

    /// API key and agent overview for `status`
    pub fn format_status(status: &ApiStatus, settings: &GenerationSettings) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("System Status"));
        output.push('\n');

        let active = |on: bool| {
            if on {
                "Active".green().to_string()
            } else {
                "Inactive".red().to_string()
            }
        };
        output.push_str(&format!("{} {}\n", "Gemini API:".cyan().bold(), active(status.gemini)));
        output.push_str(&format!("{} {}\n", "Serper API:".cyan().bold(), active(status.serper)));

        if status.all_configured() {
            output.push_str(&format!("\n{}\n", "All APIs configured".green()));
        } else {
            output.push_str(&format!(
                "\n{} set {}\n",
                "API keys missing:".red().bold(),
                status.missing().join(", ")
            ));
        }

        output.push_str(&Self::section_header("Agents"));
        for &role in settings.workflow.stages() {
            let profile = role.profile();
            output.push_str(&format!(
                "{} ({})\n",
                format!("{} Agent", Self::short_name(role)).yellow().bold(),
                settings.models.for_role(role)
            ));
            for highlight in profile.highlights {
                output.push_str(&format!("  - {}\n", highlight));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// One-line outcome of `check`
    pub fn format_check(check: &SystemCheck) -> String {
        match check {
            SystemCheck::Healthy => format!("{}", "System test successful!".green().bold()),
            SystemCheck::Degraded(reason) => format!(
                "{}\n  {}",
                "System test completed in simulation mode".yellow().bold(),
                reason
            ),
            SystemCheck::Failed(reason) => {
                format!("{}\n  {}", "System test failed".red().bold(), reason)
            }
        }
    }

    fn short_name(role: AgentRole) -> &'static str {
        match role {
            AgentRole::Writer => "Writer",
            AgentRole::Editor => "Editor",
            AgentRole::SeoSpecialist => "SEO",
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &ContentResult) -> String {
        Self::format(result)
    }

    fn format_json(&self, result: &ContentResult) -> String {
        Self::format_json(result)
    }

    fn format_content_only(&self, result: &ContentResult) -> String {
        Self::format_content_only(result)
    }
}
