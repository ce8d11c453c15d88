//! Content request value objects

use super::options::{ContentOptions, ContentType};
use super::word_count::WordCount;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Audience used when the request leaves it blank
pub const DEFAULT_AUDIENCE: &str = "general audience";

/// Subject of a content request (Value Object)
///
/// Never empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Topic(String);

impl Topic {
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyTopic);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Topic {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Topic::try_new(value)
    }
}

impl From<Topic> for String {
    fn from(value: Topic) -> Self {
        value.0
    }
}

/// Everything needed to drive a single generation run
///
/// Deserialization goes through [`ContentRequestBuilder`], so JSON input is
/// validated and normalized the same way as builder input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawContentRequest")]
pub struct ContentRequest {
    pub topic: Topic,
    pub audience: String,
    pub content_type: ContentType,
    pub word_count: WordCount,
    pub options: ContentOptions,
}

fn default_audience() -> String {
    DEFAULT_AUDIENCE.to_string()
}

/// Wire form of [`ContentRequest`] before validation
#[derive(Debug, Deserialize)]
struct RawContentRequest {
    topic: String,
    #[serde(default)]
    audience: Option<String>,
    #[serde(default)]
    content_type: ContentType,
    #[serde(default)]
    word_count: WordCount,
    #[serde(default)]
    options: ContentOptions,
}

impl TryFrom<RawContentRequest> for ContentRequest {
    type Error = DomainError;

    fn try_from(raw: RawContentRequest) -> Result<Self, Self::Error> {
        let mut builder = ContentRequest::builder(raw.topic)
            .content_type(raw.content_type)
            .word_count(raw.word_count)
            .options(raw.options);
        if let Some(audience) = raw.audience {
            builder = builder.audience(audience);
        }
        builder.build()
    }
}

impl ContentRequest {
    /// Start building a request for the given topic
    pub fn builder(topic: impl Into<String>) -> ContentRequestBuilder {
        ContentRequestBuilder {
            topic: topic.into(),
            audience: None,
            content_type: ContentType::default(),
            word_count: WordCount::default(),
            options: ContentOptions::default(),
        }
    }

    /// Shortcut for a request with all defaults
    pub fn new(topic: impl Into<String>) -> Result<Self, DomainError> {
        Self::builder(topic).build()
    }
}

/// Builder for [`ContentRequest`]
#[derive(Debug, Clone)]
pub struct ContentRequestBuilder {
    topic: String,
    audience: Option<String>,
    content_type: ContentType,
    word_count: WordCount,
    options: ContentOptions,
}

impl ContentRequestBuilder {
    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn word_count(mut self, word_count: WordCount) -> Self {
        self.word_count = word_count;
        self
    }

    pub fn options(mut self, options: ContentOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Result<ContentRequest, DomainError> {
        let topic = Topic::try_new(self.topic)?;
        let audience = self
            .audience
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(default_audience);

        Ok(ContentRequest {
            topic,
            audience,
            content_type: self.content_type,
            word_count: self.word_count,
            options: self.options,
        })
    }
}
