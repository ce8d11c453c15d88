//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`BehaviorConfig`]: timeouts and the simulation fallback
//! - [`AgentModels`]: which model backs each agent
//! - [`GenerationSettings`]: models and workflow for every run
//! - [`ApiStatus`]: which external APIs have credentials

pub mod api_status;
pub mod behavior;
pub mod generation;

pub use api_status::ApiStatus;
pub use behavior::{AgentModels, BehaviorConfig};
pub use generation::GenerationSettings;
