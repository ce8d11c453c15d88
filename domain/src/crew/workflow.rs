//! Sequential workflow over agent stages

use super::agent::AgentRole;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Ordered list of stages; each stage consumes the previous stage's output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AgentRole>", into = "Vec<AgentRole>")]
pub struct Workflow {
    stages: Vec<AgentRole>,
}

impl Workflow {
    /// Build a workflow from explicit stages.
    ///
    /// Rejects empty stage lists and duplicate roles.
    pub fn new(stages: Vec<AgentRole>) -> Result<Self, DomainError> {
        if stages.is_empty() {
            return Err(DomainError::EmptyWorkflow);
        }
        for (i, role) in stages.iter().enumerate() {
            if stages[..i].contains(role) {
                return Err(DomainError::InvalidOption {
                    field: "workflow",
                    value: format!("duplicate stage {}", role.as_str()),
                });
            }
        }
        Ok(Self { stages })
    }

    pub fn stages(&self) -> &[AgentRole] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// The stage whose output becomes the final content
    pub fn final_stage(&self) -> AgentRole {
        // non-empty by construction
        self.stages[self.stages.len() - 1]
    }

    /// One line per stage, as shown in the simulation panel
    pub fn describe(&self, llm_name: &str, search_name: &str) -> Vec<String> {
        self.stages
            .iter()
            .map(|role| {
                let action = match role {
                    AgentRole::Writer => "creates content",
                    AgentRole::Editor => "reviews and improves",
                    AgentRole::SeoSpecialist => "optimizes for search engines",
                };
                let apis = if role.profile().uses_search {
                    format!("{} + {}", llm_name, search_name)
                } else {
                    llm_name.to_string()
                };
                format!("{} Agent {} ({})", short_name(*role), action, apis)
            })
            .collect()
    }
}

fn short_name(role: AgentRole) -> &'static str {
    match role {
        AgentRole::Writer => "Writer",
        AgentRole::Editor => "Editor",
        AgentRole::SeoSpecialist => "SEO",
    }
}

impl Default for Workflow {
    fn default() -> Self {
        Self {
            stages: AgentRole::all().to_vec(),
        }
    }
}

impl TryFrom<Vec<AgentRole>> for Workflow {
    type Error = DomainError;

    fn try_from(value: Vec<AgentRole>) -> Result<Self, Self::Error> {
        Workflow::new(value)
    }
}

impl From<Workflow> for Vec<AgentRole> {
    fn from(value: Workflow) -> Self {
        value.stages
    }
}
