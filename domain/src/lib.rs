//! Domain layer for content-studio
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Content Team
//!
//! Three agents work on every request, one after another:
//!
//! - **Writer**: researches the topic and drafts the piece
//! - **Editor**: reviews the draft for quality and consistency
//! - **SEO Specialist**: optimizes the edited piece and adds metadata
//!
//! ## Simulation Mode
//!
//! When the external services are unavailable, a deterministic placeholder
//! document is produced so the user still sees the shape of the output.

pub mod config;
pub mod content;
pub mod core;
pub mod crew;
pub mod prompt;
pub mod research;
pub mod seo;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use content::{
    options::{ContentOptions, ContentType, ResearchDepth, SeoFocus, Tone},
    request::{ContentRequest, ContentRequestBuilder, DEFAULT_AUDIENCE, Topic},
    result::{ContentResult, GenerationStatus, StageOutput},
    simulation::simulated_content,
    stats::GenerationStats,
    word_count::WordCount,
};
pub use core::{error::DomainError, model::Model};
pub use crew::{
    agent::{AgentProfile, AgentRole},
    task::{TaskSpec, research_query},
    workflow::Workflow,
};
pub use prompt::PromptTemplate;
pub use research::{Research, SearchHit};
pub use seo::{SeoMetadata, SocialSnippets, parse_seo_metadata};
