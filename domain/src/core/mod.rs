//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: generative-language models that back the agents
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
