//! Task definitions for each stage of the workflow

use super::agent::AgentRole;
use crate::content::request::ContentRequest;

/// A task assigned to one agent, rendered for a specific request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSpec {
    pub role: AgentRole,
    pub description: String,
    pub expected_output: &'static str,
}

impl TaskSpec {
    /// Render the task for `role` against `request`
    pub fn for_role(role: AgentRole, request: &ContentRequest) -> Self {
        match role {
            AgentRole::Writer => Self::writing(request),
            AgentRole::Editor => Self::editing(request),
            AgentRole::SeoSpecialist => Self::seo(request),
        }
    }

    fn writing(request: &ContentRequest) -> Self {
        let description = format!(
            r#"Create original, engaging content on the given topic. The content should be:
- Well-researched and informative
- Engaging and easy to read
- Structured with clear headings and sections
- Tailored to the target audience
- Original and plagiarism-free

Topic: {}
Target Audience: {}
Content Type: {}
Word Count: {}
Tone: {}

Provide the complete content with proper formatting."#,
            request.topic,
            request.audience,
            request.content_type,
            request.word_count,
            request.options.tone,
        );

        Self {
            role: AgentRole::Writer,
            description,
            expected_output: "A complete, well-structured piece of content ready for editing",
        }
    }

    fn editing(request: &ContentRequest) -> Self {
        let description = format!(
            r#"Review and edit the content provided by the writer. Focus on:
- Grammar, spelling, and punctuation
- Sentence structure and flow
- Clarity and readability
- Fact-checking and accuracy
- Brand voice consistency ({} tone)
- Overall content quality

Keep the piece within {} words.

Provide the edited version with explanations of major changes made."#,
            request.options.tone, request.word_count,
        );

        Self {
            role: AgentRole::Editor,
            description,
            expected_output: "A polished, error-free version of the content with editing notes",
        }
    }

    fn seo(request: &ContentRequest) -> Self {
        let description = format!(
            r#"Optimize the edited content for search engines and social media. Include:
- Relevant keywords naturally integrated
- SEO-friendly title and meta description
- Social media snippets (Twitter, LinkedIn, Facebook)
- Internal linking suggestions
- Call-to-action optimization
- Readability improvements

{}

Start your answer with these labelled lines:
Title: <SEO title>
Meta Description: <meta description>
Keywords: <comma separated keywords>
Twitter: <tweet>
LinkedIn: <post>
Facebook: <post>

Then provide the final optimized content with SEO recommendations."#,
            request.options.seo_focus.guidance(),
        );

        Self {
            role: AgentRole::SeoSpecialist,
            description,
            expected_output:
                "SEO-optimized content with social media versions and optimization recommendations",
        }
    }
}

/// Search query an agent runs before its task, if it has search access
pub fn research_query(role: AgentRole, request: &ContentRequest) -> Option<String> {
    if !role.profile().uses_search {
        return None;
    }
    match role {
        AgentRole::Writer => Some(request.topic.to_string()),
        AgentRole::SeoSpecialist => Some(format!("{} keywords", request.topic)),
        AgentRole::Editor => None,
    }
}
