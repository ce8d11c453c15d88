//! Per-agent model configuration from TOML (`[models]` section)

use serde::{Deserialize, Serialize};
use studio_application::AgentModels;
use studio_domain::{ConfigIssue, ConfigIssueCode, Model, Severity};

/// Per-agent model configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// default = "gemini-2.0-flash-exp"   # Used by every agent without an override
/// writer = "gemini-2.5-pro"
/// seo = "gemini-2.5-flash"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub default: Option<String>,
    pub writer: Option<String>,
    pub editor: Option<String>,
    pub seo: Option<String>,
}

impl FileModelsConfig {
    fn parse_single_model(field: &str, value: Option<&String>) -> (Option<Model>, Vec<ConfigIssue>) {
        match value {
            None => (None, Vec::new()),
            Some(s) if s.trim().is_empty() => (
                None,
                vec![ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::EmptyModelName {
                        field: format!("models.{}", field),
                    },
                    message: format!("models.{}: model name cannot be empty", field),
                }],
            ),
            Some(s) => {
                // Unknown names become Model::Custom
                let Ok(model) = s.trim().parse::<Model>();
                (Some(model), Vec::new())
            }
        }
    }

    /// Resolve the model of every agent, falling back to `default`
    pub fn to_agent_models(&self) -> (AgentModels, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let (default, default_issues) = Self::parse_single_model("default", self.default.as_ref());
        issues.extend(default_issues);
        let default = default.unwrap_or_default();

        let mut resolve = |field: &str, value: Option<&String>| {
            let (model, field_issues) = Self::parse_single_model(field, value);
            issues.extend(field_issues);
            model.unwrap_or_else(|| default.clone())
        };

        let models = AgentModels {
            writer: resolve("writer", self.writer.as_ref()),
            editor: resolve("editor", self.editor.as_ref()),
            seo: resolve("seo", self.seo.as_ref()),
        };
        (models, issues)
    }
}
