//! Content type and advanced generation options

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Kind of content to produce
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ContentType {
    #[default]
    BlogPost,
    Article,
    Report,
    Whitepaper,
    SocialMediaPost,
    EmailNewsletter,
    Custom(String),
}

impl ContentType {
    pub fn as_str(&self) -> &str {
        match self {
            ContentType::BlogPost => "blog post",
            ContentType::Article => "article",
            ContentType::Report => "report",
            ContentType::Whitepaper => "whitepaper",
            ContentType::SocialMediaPost => "social media post",
            ContentType::EmailNewsletter => "email newsletter",
            ContentType::Custom(s) => s,
        }
    }

    /// Choices offered by the web form
    pub fn presets() -> Vec<ContentType> {
        vec![
            ContentType::BlogPost,
            ContentType::Article,
            ContentType::Report,
            ContentType::Whitepaper,
            ContentType::SocialMediaPost,
            ContentType::EmailNewsletter,
        ]
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ContentType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        Ok(match normalized.as_str() {
            "" | "blog" | "blog post" => ContentType::BlogPost,
            "article" => ContentType::Article,
            "report" => ContentType::Report,
            "whitepaper" | "white paper" => ContentType::Whitepaper,
            "social" | "social media post" => ContentType::SocialMediaPost,
            "newsletter" | "email newsletter" => ContentType::EmailNewsletter,
            _ => ContentType::Custom(s.trim().to_string()),
        })
    }
}

impl Serialize for ContentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContentType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let Ok(content_type) = s.parse::<ContentType>();
        Ok(content_type)
    }
}

/// Writing tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Academic,
    Conversational,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Academic => "academic",
            Tone::Conversational => "conversational",
        }
    }

    pub fn all() -> [Tone; 4] {
        [
            Tone::Professional,
            Tone::Casual,
            Tone::Academic,
            Tone::Conversational,
        ]
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Tone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "professional" => Ok(Tone::Professional),
            "casual" => Ok(Tone::Casual),
            "academic" => Ok(Tone::Academic),
            "conversational" => Ok(Tone::Conversational),
            _ => Err(DomainError::InvalidOption {
                field: "tone",
                value: s.to_string(),
            }),
        }
    }
}

/// How much web research the search-enabled agents perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResearchDepth {
    Basic,
    #[default]
    Comprehensive,
    InDepth,
}

impl ResearchDepth {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResearchDepth::Basic => "basic",
            ResearchDepth::Comprehensive => "comprehensive",
            ResearchDepth::InDepth => "in-depth",
        }
    }

    /// Number of search results fetched per query
    pub fn result_count(&self) -> usize {
        match self {
            ResearchDepth::Basic => 3,
            ResearchDepth::Comprehensive => 5,
            ResearchDepth::InDepth => 10,
        }
    }

    pub fn all() -> [ResearchDepth; 3] {
        [
            ResearchDepth::Basic,
            ResearchDepth::Comprehensive,
            ResearchDepth::InDepth,
        ]
    }
}

impl std::fmt::Display for ResearchDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ResearchDepth {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '_'], "-").as_str() {
            "basic" => Ok(ResearchDepth::Basic),
            "comprehensive" => Ok(ResearchDepth::Comprehensive),
            "in-depth" | "indepth" | "deep" => Ok(ResearchDepth::InDepth),
            _ => Err(DomainError::InvalidOption {
                field: "research_depth",
                value: s.to_string(),
            }),
        }
    }
}

/// How aggressively the SEO specialist optimizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeoFocus {
    Low,
    #[default]
    Medium,
    High,
}

impl SeoFocus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeoFocus::Low => "low",
            SeoFocus::Medium => "medium",
            SeoFocus::High => "high",
        }
    }

    /// Guidance line appended to the SEO task
    pub fn guidance(&self) -> &'static str {
        match self {
            SeoFocus::Low => {
                "Keep SEO changes light: preserve the editor's wording and only add metadata."
            }
            SeoFocus::Medium => {
                "Balance readability and discoverability: integrate keywords where they read naturally."
            }
            SeoFocus::High => {
                "Optimize aggressively for search: prioritize keyword coverage, headings, and snippets."
            }
        }
    }

    pub fn all() -> [SeoFocus; 3] {
        [SeoFocus::Low, SeoFocus::Medium, SeoFocus::High]
    }
}

impl std::fmt::Display for SeoFocus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SeoFocus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(SeoFocus::Low),
            "medium" => Ok(SeoFocus::Medium),
            "high" => Ok(SeoFocus::High),
            _ => Err(DomainError::InvalidOption {
                field: "seo_focus",
                value: s.to_string(),
            }),
        }
    }
}

/// Advanced options shown in the collapsed section of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentOptions {
    pub tone: Tone,
    pub research_depth: ResearchDepth,
    pub seo_focus: SeoFocus,
}
