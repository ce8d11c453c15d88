//! Agent roles and their profiles

use serde::{Deserialize, Serialize};

/// The three specialists of the content team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    Writer,
    Editor,
    SeoSpecialist,
}

impl AgentRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentRole::Writer => "writer",
            AgentRole::Editor => "editor",
            AgentRole::SeoSpecialist => "seo_specialist",
        }
    }

    /// Role title as presented to the model and in the UI
    pub fn title(&self) -> &'static str {
        match self {
            AgentRole::Writer => "Content Writer",
            AgentRole::Editor => "Content Editor",
            AgentRole::SeoSpecialist => "SEO Specialist",
        }
    }

    pub fn profile(&self) -> AgentProfile {
        AgentProfile::for_role(*self)
    }

    pub fn all() -> [AgentRole; 3] {
        [AgentRole::Writer, AgentRole::Editor, AgentRole::SeoSpecialist]
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl std::str::FromStr for AgentRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "writer" => Ok(AgentRole::Writer),
            "editor" => Ok(AgentRole::Editor),
            "seo" | "seo_specialist" => Ok(AgentRole::SeoSpecialist),
            other => Err(format!("unknown agent role: {}", other)),
        }
    }
}

/// Static description of an agent: who it is and what it may use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentProfile {
    pub role: AgentRole,
    pub goal: &'static str,
    pub backstory: &'static str,
    /// Whether the agent gets web search results as context
    pub uses_search: bool,
    /// One-line capabilities shown in the UI sidebar
    pub highlights: [&'static str; 3],
}

impl AgentProfile {
    pub fn for_role(role: AgentRole) -> Self {
        match role {
            AgentRole::Writer => Self {
                role,
                goal: "Create engaging, well-structured, and original content based on given topics and requirements",
                backstory: "You are an experienced content writer with 10+ years of experience in creating \
compelling blog posts, articles, and social media content. You have a talent for making \
complex topics accessible and engaging for various audiences. You excel at research, \
storytelling, and adapting your writing style to different brands and purposes.",
                uses_search: true,
                highlights: [
                    "Creates engaging content",
                    "Researches topics",
                    "Structures information",
                ],
            },
            AgentRole::Editor => Self {
                role,
                goal: "Review, edit, and improve content quality, ensuring clarity, accuracy, and brand consistency",
                backstory: "You are a meticulous content editor with extensive experience in proofreading, \
fact-checking, and improving content quality. You have an eye for detail and ensure all \
content meets high standards for grammar, style, clarity, and factual accuracy. You work \
with various content types and maintain brand voice consistency.",
                uses_search: false,
                highlights: [
                    "Reviews quality",
                    "Improves readability",
                    "Ensures consistency",
                ],
            },
            AgentRole::SeoSpecialist => Self {
                role,
                goal: "Optimize content for search engines and social media, ensuring maximum visibility and engagement",
                backstory: "You are a digital marketing expert specializing in SEO and social media optimization. \
You have deep knowledge of search algorithms, keyword research, and social media best practices. \
You excel at making content discoverable while maintaining readability and user experience.",
                uses_search: true,
                highlights: [
                    "Optimizes for search",
                    "Adds keywords",
                    "Creates social snippets",
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_access() {
        assert!(AgentRole::Writer.profile().uses_search);
        assert!(!AgentRole::Editor.profile().uses_search);
        assert!(AgentRole::SeoSpecialist.profile().uses_search);
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("SEO".parse::<AgentRole>().unwrap(), AgentRole::SeoSpecialist);
        assert_eq!(
            "seo-specialist".parse::<AgentRole>().unwrap(),
            AgentRole::SeoSpecialist
        );
        assert!("publisher".parse::<AgentRole>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&AgentRole::SeoSpecialist).unwrap();
        assert_eq!(json, "\"seo_specialist\"");
    }
}
