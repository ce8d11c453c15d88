//! Web research results handed to search-enabled agents

use serde::{Deserialize, Serialize};

/// A single search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub snippet: String,
}

impl SearchHit {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            snippet: snippet.into(),
        }
    }
}

/// Research gathered for one query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Research {
    pub query: String,
    /// Direct answer or knowledge-graph summary, when the search API has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

impl Research {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            summary: None,
            hits: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_none() && self.hits.is_empty()
    }

    /// Markdown block included in the agent prompt
    pub fn to_markdown(&self) -> String {
        let mut out = format!("## Web research for: {}\n", self.query);
        if let Some(summary) = &self.summary {
            out.push_str(&format!("\n### Summary\n{}\n", summary));
        }
        if !self.hits.is_empty() {
            out.push_str("\n### Sources\n");
            for (i, hit) in self.hits.iter().enumerate() {
                out.push_str(&format!("{}. {} ({})\n", i + 1, hit.title, hit.link));
                if !hit.snippet.is_empty() {
                    out.push_str(&format!("   {}\n", hit.snippet));
                }
            }
        }
        out
    }
}
