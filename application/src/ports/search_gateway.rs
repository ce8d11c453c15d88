//! Search gateway port
//!
//! Research is optional context for the agents: a failing search never
//! fails the workflow, it only removes the research block from the prompt.

use async_trait::async_trait;
use studio_domain::Research;
use thiserror::Error;

/// Errors that can occur during a web search
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search API key missing or rejected")]
    MissingApiKey,

    #[error("Search rate limited")]
    RateLimited,

    #[error("Search request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid search response: {0}")]
    InvalidResponse(String),
}

/// Web search used by research-enabled agents
#[async_trait]
pub trait SearchGateway: Send + Sync {
    /// Display name for "APIs used" listings
    fn name(&self) -> &str;

    /// Run a query and return at most `limit` results
    async fn search(&self, query: &str, limit: usize) -> Result<Research, SearchError>;
}
