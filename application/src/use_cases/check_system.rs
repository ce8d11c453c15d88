//! Check System use case
//!
//! Runs the full workflow once with a fixed small request to verify that the
//! configured APIs actually answer.

use super::create_content::{CreateContentInput, CreateContentUseCase};
use crate::config::{ApiStatus, GenerationSettings};
use crate::ports::llm_gateway::LlmGateway;
use serde::Serialize;
use studio_domain::{ContentRequest, ContentType, DomainError, GenerationStatus, WordCount};
use tracing::info;

/// Outcome of a system check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "lowercase")]
pub enum SystemCheck {
    /// The workflow produced real content
    Healthy,
    /// The workflow ran but fell back to simulation
    Degraded(String),
    /// The workflow could not run at all
    Failed(String),
}

impl SystemCheck {
    pub fn is_healthy(&self) -> bool {
        matches!(self, SystemCheck::Healthy)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SystemCheck::Healthy => "healthy",
            SystemCheck::Degraded(_) => "degraded",
            SystemCheck::Failed(_) => "failed",
        }
    }
}

/// The request every system check generates
pub fn check_request() -> Result<ContentRequest, DomainError> {
    ContentRequest::builder("Test Topic")
        .audience("test audience")
        .content_type(ContentType::BlogPost)
        .word_count(WordCount::range(500, 600)?)
        .build()
}

/// Use case for the end-to-end health check
pub struct CheckSystemUseCase<'a, G: LlmGateway + 'static> {
    create: &'a CreateContentUseCase<G>,
}

impl<'a, G: LlmGateway + 'static> CheckSystemUseCase<'a, G> {
    pub fn new(create: &'a CreateContentUseCase<G>) -> Self {
        Self { create }
    }

    /// Run the check request through the configured models and workflow
    pub async fn execute(&self, settings: GenerationSettings, api_status: &ApiStatus) -> SystemCheck {
        let request = match check_request() {
            Ok(request) => request,
            Err(e) => return SystemCheck::Failed(e.to_string()),
        };

        info!("Running system check");
        let input = CreateContentInput::new(request).with_settings(settings);
        match self.create.execute(input).await {
            Ok(result) if result.status == GenerationStatus::Success => SystemCheck::Healthy,
            Ok(result) => {
                let mut reason = result
                    .fallback_reason
                    .unwrap_or_else(|| "workflow fell back to simulation".to_string());
                let missing = api_status.missing();
                if !missing.is_empty() {
                    reason = format!("{} (missing: {})", reason, missing.join(", "));
                }
                SystemCheck::Degraded(reason)
            }
            Err(e) => SystemCheck::Failed(e.to_string()),
        }
    }
}
