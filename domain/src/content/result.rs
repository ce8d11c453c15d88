//! Content result value objects - the output of a generation run.
//!
//! - [`StageOutput`] - One agent's contribution
//! - [`ContentResult`] - The complete result handed to the presentation layer

use super::request::ContentRequest;
use crate::crew::agent::AgentRole;
use crate::seo::SeoMetadata;
use serde::{Deserialize, Serialize};

/// Whether the content came from the models or the offline fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    Success,
    Simulation,
}

impl GenerationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStatus::Success => "success",
            GenerationStatus::Simulation => "simulation",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GenerationStatus::Success)
    }
}

impl std::fmt::Display for GenerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output of a single workflow stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageOutput {
    pub role: AgentRole,
    pub model: String,
    pub content: String,
    /// Whether search results were included in the prompt
    pub researched: bool,
    pub duration_ms: u64,
}

impl StageOutput {
    pub fn new(role: AgentRole, model: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role,
            model: model.into(),
            content: content.into(),
            researched: false,
            duration_ms: 0,
        }
    }

    pub fn with_research(mut self, researched: bool) -> Self {
        self.researched = researched;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// Complete result of a content run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentResult {
    pub status: GenerationStatus,
    pub message: String,
    pub request: ContentRequest,
    /// Final content body
    pub body: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stages: Vec<StageOutput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoMetadata>,
    #[serde(default)]
    pub apis_used: Vec<String>,
    /// Human-readable workflow description (filled for simulations)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workflow: Vec<String>,
    /// Error that caused the fallback, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

impl ContentResult {
    /// A successful run; the body is the last stage's output
    pub fn success(
        request: ContentRequest,
        stages: Vec<StageOutput>,
        seo: Option<SeoMetadata>,
        apis_used: Vec<String>,
    ) -> Self {
        let body = stages
            .last()
            .map(|s| s.content.clone())
            .unwrap_or_default();
        Self {
            status: GenerationStatus::Success,
            message: "Content created successfully!".to_string(),
            request,
            body,
            stages,
            seo,
            apis_used,
            workflow: Vec::new(),
            fallback_reason: None,
        }
    }

    /// A fallback run with simulated body text
    pub fn simulation(
        request: ContentRequest,
        body: String,
        workflow: Vec<String>,
        apis_used: Vec<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            status: GenerationStatus::Simulation,
            message: "Multi-agent system working in simulation mode".to_string(),
            request,
            body,
            stages: Vec::new(),
            seo: None,
            apis_used,
            workflow,
            fallback_reason: Some(reason.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Output of a particular stage, if it ran
    pub fn stage(&self, role: AgentRole) -> Option<&StageOutput> {
        self.stages.iter().find(|s| s.role == role)
    }

    /// Approximate word count of the body
    pub fn body_word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }
}
