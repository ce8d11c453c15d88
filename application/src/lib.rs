//! Application layer for content-studio
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{AgentModels, ApiStatus, BehaviorConfig, GenerationSettings};
pub use ports::{
    generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{NoProgress, ProgressNotifier},
    search_gateway::{SearchError, SearchGateway},
};
pub use use_cases::check_system::{CheckSystemUseCase, SystemCheck, check_request};
pub use use_cases::create_content::{
    CreateContentError, CreateContentInput, CreateContentUseCase,
};
