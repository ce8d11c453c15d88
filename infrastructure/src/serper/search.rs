//! Web search through `google.serper.dev`
//!
//! Serper returns Google results as JSON. Three parts of the response are
//! used:
//!
//! - **organic**: ranked results (title, link, snippet)
//! - **answerBox**: a direct answer, used as the research summary
//! - **knowledgeGraph**: entity description, appended to the summary

use crate::config::{FileSearchConfig, FileSerperConfig};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use studio_application::{SearchError, SearchGateway};
use studio_domain::{Research, SearchHit};
use tracing::debug;

/// Serper search endpoint
pub const DEFAULT_SERPER_URL: &str = "https://google.serper.dev/search";

/// Search gateway backed by the Serper API
#[derive(Debug, Clone)]
pub struct SerperSearch {
    http: Client,
    api_key: Option<String>,
    url: String,
    timeout: Duration,
}

impl SerperSearch {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            url: DEFAULT_SERPER_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn from_config(serper: &FileSerperConfig, search: &FileSearchConfig) -> Self {
        Self::new(serper.resolve_api_key())
            .with_url(serper.url.clone())
            .with_timeout(Duration::from_secs(search.timeout_seconds.max(1)))
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl SearchGateway for SerperSearch {
    fn name(&self) -> &str {
        "Serper API"
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Research, SearchError> {
        let api_key = self.api_key.as_deref().ok_or(SearchError::MissingApiKey)?;

        debug!("Serper search: '{}' (limit {})", query, limit);
        let response = self
            .http
            .post(&self.url)
            .header("X-API-KEY", api_key)
            .timeout(self.timeout)
            .json(&json!({ "q": query, "num": limit }))
            .send()
            .await
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(SearchError::RateLimited);
        }
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(SearchError::MissingApiKey);
        }
        if !status.is_success() {
            return Err(SearchError::RequestFailed(format!(
                "Search API returned error: {}",
                status
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))?;

        Ok(parse_research(query, &body, limit))
    }
}

/// Convert a Serper response body into [`Research`], keeping at most `limit` hits
pub fn parse_research(query: &str, data: &Value, limit: usize) -> Research {
    let mut research = Research::new(query);

    if let Some(organic) = data.get("organic").and_then(|v| v.as_array()) {
        research.hits = organic
            .iter()
            .filter_map(|item| {
                let title = item.get("title").and_then(|v| v.as_str())?;
                let link = item.get("link").and_then(|v| v.as_str())?;
                let snippet = item.get("snippet").and_then(|v| v.as_str()).unwrap_or("");
                Some(SearchHit::new(title, link, snippet))
            })
            .take(limit)
            .collect();
    }

    let mut summary: Vec<String> = Vec::new();

    if let Some(answer_box) = data.get("answerBox") {
        let answer = ["answer", "snippet", "title"]
            .iter()
            .find_map(|key| answer_box.get(*key).and_then(|v| v.as_str()))
            .filter(|s| !s.is_empty());
        if let Some(answer) = answer {
            summary.push(answer.to_string());
        }
    }

    if let Some(graph) = data.get("knowledgeGraph") {
        let title = graph.get("title").and_then(|v| v.as_str());
        let description = graph.get("description").and_then(|v| v.as_str());
        match (title, description) {
            (Some(t), Some(d)) if !d.is_empty() => summary.push(format!("{}: {}", t, d)),
            (None, Some(d)) if !d.is_empty() => summary.push(d.to_string()),
            _ => {}
        }
    }

    if !summary.is_empty() {
        research.summary = Some(summary.join("\n\n"));
    }

    research
}
