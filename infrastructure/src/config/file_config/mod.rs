//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod generation;
mod logging;
mod models;
mod output;
mod providers;
mod search;
mod server;

pub use generation::FileGenerationConfig;
pub use logging::FileLoggingConfig;
pub use models::FileModelsConfig;
pub use output::FileOutputConfig;
pub use providers::{FileGeminiConfig, FileProvidersConfig, FileSerperConfig};
pub use search::FileSearchConfig;
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};
use studio_application::{ApiStatus, BehaviorConfig, GenerationSettings};
use studio_domain::{ConfigIssue, ConfigIssueCode, Severity};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Per-agent model selection
    pub models: FileModelsConfig,
    /// Timeouts, fallback and stage order
    pub generation: FileGenerationConfig,
    /// Web research settings
    pub search: FileSearchConfig,
    /// Web UI bind address
    pub server: FileServerConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log files
    pub logging: FileLoggingConfig,
    /// API credentials and endpoints
    pub providers: FileProvidersConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Credentials are checked separately by [`FileConfig::credential_issues`]
    /// because simulation mode works without them.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.models.to_agent_models().1);
        issues.extend(self.generation.to_behavior().1);
        issues.extend(self.generation.to_workflow().1);

        let zero_fields = [
            ("server.port", self.server.port == 0),
            ("server.max_stored_results", self.server.max_stored_results == 0),
            ("search.timeout_seconds", self.search.timeout_seconds == 0),
            (
                "providers.gemini.max_output_tokens",
                self.providers.gemini.max_output_tokens == 0,
            ),
        ];
        for (field, is_zero) in zero_fields {
            if is_zero {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::ZeroValue {
                        field: field.to_string(),
                    },
                    message: format!("{}: must be greater than 0", field),
                });
            }
        }

        issues
    }

    /// Warnings for API keys that are not configured
    pub fn credential_issues(&self) -> Vec<ConfigIssue> {
        let status = self.api_status();
        let mut issues = Vec::new();
        if !status.gemini {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::MissingApiKey {
                    provider: "gemini".to_string(),
                },
                message: format!(
                    "{} is not set; content will be simulated",
                    self.providers.gemini.api_key_env
                ),
            });
        }
        if !status.serper && self.search.enabled {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::MissingApiKey {
                    provider: "serper".to_string(),
                },
                message: format!(
                    "{} is not set; agents will work without web research",
                    self.providers.serper.api_key_env
                ),
            });
        }
        issues
    }

    pub fn api_status(&self) -> ApiStatus {
        ApiStatus::new(
            self.providers.gemini.resolve_api_key().is_some(),
            self.providers.serper.resolve_api_key().is_some(),
        )
    }

    /// Models and stage order for the content workflow
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings::new(
            self.models.to_agent_models().0,
            self.generation.to_workflow().0,
        )
    }

    pub fn behavior(&self) -> BehaviorConfig {
        self.generation.to_behavior().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_domain::{AgentRole, Model, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[models]
default = "gemini-2.5-flash"
writer = "gemini-2.5-pro"

[generation]
timeout_seconds = 60
fallback_to_simulation = false
workflow = ["writer", "seo"]

[search]
enabled = false

[server]
host = "0.0.0.0"
port = 9000

[output]
format = "full"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let settings = config.generation_settings();
        assert_eq!(settings.models.writer, Model::Gemini25Pro);
        assert_eq!(settings.models.editor, Model::Gemini25Flash);
        assert_eq!(
            settings.workflow.stages(),
            &[AgentRole::Writer, AgentRole::SeoSpecialist]
        );
        assert!(!config.behavior().fallback_to_simulation);
        assert!(!config.search.enabled);
        assert_eq!(config.server.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(!config.output.color);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.models.writer.is_none());
        assert_eq!(config.generation.timeout_seconds, Some(180));
        assert!(config.generation.fallback_to_simulation);
        assert!(config.search.enabled);
        assert!(config.output.color);
        assert!(config.logging.generation_log.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_zero_port() {
        let config: FileConfig = toml::from_str("[server]\nport = 0\n").unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::ZeroValue {
                field: "server.port".to_string()
            }
        );
    }

    #[test]
    fn test_credential_issues_without_keys() {
        let mut config = FileConfig::default();
        config.providers.gemini.api_key_env = "STUDIO_TEST_NO_GEMINI".to_string();
        config.providers.serper.api_key_env = "STUDIO_TEST_NO_SERPER".to_string();

        let issues = config.credential_issues();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| !i.is_error()));

        config.search.enabled = false;
        assert_eq!(config.credential_issues().len(), 1);
    }
}
