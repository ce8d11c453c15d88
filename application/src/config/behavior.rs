//! Runtime behavior of the content workflow.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use studio_domain::{AgentRole, Model};

/// Application behavior configuration.
///
/// Controls per-stage timeouts and whether failures degrade to the
/// simulated document instead of surfacing an error.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Maximum time a single stage may take (research + model call).
    pub stage_timeout: Option<Duration>,
    /// Return a simulation result when the workflow fails.
    pub fallback_to_simulation: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            stage_timeout: Some(Duration::from_secs(180)),
            fallback_to_simulation: true,
        }
    }
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig from an optional timeout in seconds.
    ///
    /// If `seconds` is `None`, no timeout is applied.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            stage_timeout: seconds.map(Duration::from_secs),
            ..Default::default()
        }
    }

    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.fallback_to_simulation = enabled;
        self
    }
}

/// Model assignment per agent
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgentModels {
    pub writer: Model,
    pub editor: Model,
    pub seo: Model,
}

impl AgentModels {
    /// Same model for every agent
    pub fn uniform(model: Model) -> Self {
        Self {
            writer: model.clone(),
            editor: model.clone(),
            seo: model,
        }
    }

    pub fn for_role(&self, role: AgentRole) -> &Model {
        match role {
            AgentRole::Writer => &self.writer,
            AgentRole::Editor => &self.editor,
            AgentRole::SeoSpecialist => &self.seo,
        }
    }

    /// Distinct models in writer → editor → seo order
    pub fn distinct(&self) -> Vec<&Model> {
        let mut models: Vec<&Model> = Vec::new();
        for model in [&self.writer, &self.editor, &self.seo] {
            if !models.contains(&model) {
                models.push(model);
            }
        }
        models
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_behavior() {
        let config = BehaviorConfig::default();
        assert_eq!(config.stage_timeout, Some(Duration::from_secs(180)));
        assert!(config.fallback_to_simulation);
    }

    #[test]
    fn test_from_timeout_seconds_none() {
        let config = BehaviorConfig::from_timeout_seconds(None).with_fallback(false);
        assert!(config.stage_timeout.is_none());
        assert!(!config.fallback_to_simulation);
    }

    #[test]
    fn test_models_for_role() {
        let models = AgentModels {
            writer: Model::Gemini25Pro,
            editor: Model::Gemini25Flash,
            seo: Model::Gemini25Flash,
        };
        assert_eq!(models.for_role(AgentRole::Writer), &Model::Gemini25Pro);
        assert_eq!(models.for_role(AgentRole::SeoSpecialist), &Model::Gemini25Flash);
        assert_eq!(models.distinct().len(), 2);
    }

    #[test]
    fn test_uniform() {
        let models = AgentModels::uniform(Model::Gemini20Flash);
        assert_eq!(models.distinct(), vec![&Model::Gemini20Flash]);
    }
}
