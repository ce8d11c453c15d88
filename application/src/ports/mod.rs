//! Port definitions (interfaces implemented by infrastructure/presentation).

pub mod generation_logger;
pub mod llm_gateway;
pub mod progress;
pub mod search_gateway;
