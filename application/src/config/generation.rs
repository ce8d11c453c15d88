//! What the content team runs with: models per agent and stage order.

use super::behavior::AgentModels;
use serde::{Deserialize, Serialize};
use studio_domain::Workflow;

/// Model assignment and workflow shared by every run of a process
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub models: AgentModels,
    pub workflow: Workflow,
}

impl GenerationSettings {
    pub fn new(models: AgentModels, workflow: Workflow) -> Self {
        Self { models, workflow }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_domain::{AgentRole, Model};

    #[test]
    fn test_default_runs_all_agents() {
        let settings = GenerationSettings::default();
        assert_eq!(settings.workflow.len(), 3);
        assert_eq!(settings.models.writer, Model::default());
    }

    #[test]
    fn test_deserialize_partial() {
        let settings: GenerationSettings =
            serde_json::from_str(r#"{"workflow": ["writer", "editor"]}"#).unwrap();
        assert_eq!(
            settings.workflow.stages(),
            &[AgentRole::Writer, AgentRole::Editor]
        );
    }
}
