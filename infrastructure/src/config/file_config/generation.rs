//! Workflow configuration from TOML (`[generation]` section)

use serde::{Deserialize, Serialize};
use studio_application::BehaviorConfig;
use studio_domain::{AgentRole, ConfigIssue, ConfigIssueCode, Severity, Workflow};

/// Raw generation configuration from TOML
///
/// # Example
///
/// ```toml
/// [generation]
/// timeout_seconds = 240
/// fallback_to_simulation = true
/// workflow = ["writer", "editor", "seo_specialist"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Per-stage timeout; absent means no limit
    pub timeout_seconds: Option<u64>,
    /// Return simulated content when a run fails
    pub fallback_to_simulation: bool,
    /// Stage order
    pub workflow: Vec<String>,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: Some(180),
            fallback_to_simulation: true,
            workflow: AgentRole::all()
                .iter()
                .map(|r| r.as_str().to_string())
                .collect(),
        }
    }
}

impl FileGenerationConfig {
    pub fn to_behavior(&self) -> (BehaviorConfig, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let timeout = match self.timeout_seconds {
            Some(0) => {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::ZeroValue {
                        field: "generation.timeout_seconds".to_string(),
                    },
                    message: "generation.timeout_seconds: must be greater than 0, using 180".to_string(),
                });
                Some(180)
            }
            other => other,
        };
        let behavior = BehaviorConfig::from_timeout_seconds(timeout)
            .with_fallback(self.fallback_to_simulation);
        (behavior, issues)
    }

    /// Parse the stage list; invalid lists fall back to the full workflow
    pub fn to_workflow(&self) -> (Workflow, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut roles = Vec::new();

        for name in &self.workflow {
            match name.parse::<AgentRole>() {
                Ok(role) => roles.push(role),
                Err(_) => issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "generation.workflow".to_string(),
                        value: name.clone(),
                        valid_values: AgentRole::all()
                            .iter()
                            .map(|r| r.as_str().to_string())
                            .collect(),
                    },
                    message: format!("generation.workflow: unknown agent '{}'", name),
                }),
            }
        }

        match Workflow::new(roles) {
            Ok(workflow) => (workflow, issues),
            Err(e) => {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "generation.workflow".to_string(),
                        value: self.workflow.join(","),
                        valid_values: vec!["writer, editor, seo_specialist".to_string()],
                    },
                    message: format!("generation.workflow: {}, using the default order", e),
                });
                (Workflow::default(), issues)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_workflow_roundtrips() {
        let (workflow, issues) = FileGenerationConfig::default().to_workflow();
        assert!(issues.is_empty());
        assert_eq!(workflow, Workflow::default());
    }

    #[test]
    fn test_unknown_agent_is_reported() {
        let config = FileGenerationConfig {
            workflow: vec!["writer".to_string(), "poet".to_string()],
            ..Default::default()
        };
        let (workflow, issues) = config.to_workflow();
        assert_eq!(workflow.stages(), &[AgentRole::Writer]);
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_empty_workflow_falls_back() {
        let config = FileGenerationConfig {
            workflow: vec![],
            ..Default::default()
        };
        let (workflow, issues) = config.to_workflow();
        assert_eq!(workflow.len(), 3);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_zero_timeout_warns() {
        let config = FileGenerationConfig {
            timeout_seconds: Some(0),
            fallback_to_simulation: false,
            ..Default::default()
        };
        let (behavior, issues) = config.to_behavior();
        assert_eq!(behavior.stage_timeout, Some(Duration::from_secs(180)));
        assert!(!behavior.fallback_to_simulation);
        assert!(!issues[0].is_error());
    }
}
