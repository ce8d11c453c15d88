//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Topic cannot be empty")]
    EmptyTopic,

    #[error("Invalid word count: {0}")]
    InvalidWordCount(String),

    #[error("Invalid option value for {field}: {value}")]
    InvalidOption { field: &'static str, value: String },

    #[error("Workflow has no stages")]
    EmptyWorkflow,

    #[error("Operation cancelled")]
    Cancelled,
}

impl DomainError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DomainError::Cancelled)
    }
}
