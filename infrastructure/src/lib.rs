//! Infrastructure layer for content-studio
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod logging;
pub mod serper;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use gemini::{
    client::GeminiClient,
    error::{GeminiError, Result},
    gateway::GeminiLlmGateway,
    session::GeminiSession,
};
pub use logging::JsonlGenerationLogger;
pub use serper::SerperSearch;
