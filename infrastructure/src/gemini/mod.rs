//! Gemini adapter
//!
//! Implements LlmGateway over the generative-language REST API.

pub mod client;
pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;
