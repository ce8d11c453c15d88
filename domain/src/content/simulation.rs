//! Deterministic placeholder content used when the external APIs fail

use super::request::ContentRequest;

/// Render the simulated document for a request
pub fn simulated_content(request: &ContentRequest) -> String {
    format!(
        r#"# {topic}

## Introduction

This is a simulated content piece about {topic}, designed for {audience}.
The content would be structured as a {content_type} with approximately {words} words.

## Key Points

- **Point 1**: The writer agent researches {topic} and drafts a structured piece
- **Point 2**: The editor agent reviews the draft for clarity and accuracy
- **Point 3**: The SEO specialist adds keywords, metadata, and social snippets
- **Point 4**: The final text is tailored to {audience}

## Conclusion

Once the generation services are reachable, this placeholder will be replaced by a
{content_type} on {topic} written for {audience}.

---

*This is simulated content. For real content generation, ensure your API keys are properly configured.*
"#,
        topic = request.topic,
        audience = request.audience,
        content_type = request.content_type,
        words = request.word_count,
    )
}
