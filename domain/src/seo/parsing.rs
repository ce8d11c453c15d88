//! SEO metadata extraction from the SEO specialist's answer.
//!
//! Pure text scanning: the SEO task asks for labelled lines such as
//! `Title: ...` and `Keywords: a, b, c`. Models decorate them freely
//! (`**Title:**`, `### Meta Description`, `- Twitter:`), so labels are
//! matched after stripping markdown noise. A label on its own line takes the
//! next non-empty line as its value.

use serde::{Deserialize, Serialize};

/// Search and social metadata for a finished piece
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "SocialSnippets::is_empty")]
    pub social: SocialSnippets,
}

impl SeoMetadata {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.meta_description.is_none()
            && self.keywords.is_empty()
            && self.social.is_empty()
    }
}

/// Per-network promotional snippets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSnippets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
}

impl SocialSnippets {
    pub fn is_empty(&self) -> bool {
        self.twitter.is_none() && self.linkedin.is_none() && self.facebook.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    Title,
    MetaDescription,
    Keywords,
    Twitter,
    LinkedIn,
    Facebook,
}

impl Label {
    fn from_key(key: &str) -> Option<Self> {
        let key = key.to_lowercase();
        let key = key.trim();
        match key {
            "title" | "seo title" | "seo-friendly title" | "seo friendly title" => {
                Some(Label::Title)
            }
            "meta description" | "meta" => Some(Label::MetaDescription),
            "keywords" | "focus keywords" | "target keywords" => Some(Label::Keywords),
            "twitter" | "x" | "twitter/x" | "x/twitter" => Some(Label::Twitter),
            "linkedin" => Some(Label::LinkedIn),
            "facebook" => Some(Label::Facebook),
            _ => None,
        }
    }
}

/// Strip bullets, heading markers and emphasis from the label side of a line
fn clean_label(text: &str) -> String {
    text.trim()
        .trim_start_matches(['#', '-', '*', '>', ' '])
        .replace("**", "")
        .replace("__", "")
        .trim()
        .to_string()
}

/// Trim whitespace, bold markers and surrounding quotes from a value.
///
/// Leading `#`, `-` and `*` stay: hashtags and signed numbers are content.
fn clean_value(text: &str) -> String {
    text.replace("**", "")
        .trim()
        .trim_matches(|c| c == '"' || c == '\u{201c}' || c == '\u{201d}')
        .trim()
        .to_string()
}

/// Drop a list bullet (`- `, `* `, `> `) from a value on its own line
fn strip_bullet(line: &str) -> &str {
    let trimmed = line.trim_start();
    for bullet in ["- ", "* ", "> "] {
        if let Some(rest) = trimmed.strip_prefix(bullet) {
            return rest;
        }
    }
    trimmed
}

/// Split a line into `(label, value)` when it starts with a known label
fn split_label(line: &str) -> Option<(Label, String)> {
    match line.split_once(':') {
        Some((key, value)) => Label::from_key(&clean_label(key).replace(['(', ')'], ""))
            .map(|l| (l, clean_value(value))),
        None => Label::from_key(&clean_label(line)).map(|l| (l, String::new())),
    }
}

fn parse_keywords(value: &str) -> Vec<String> {
    value
        .split([',', ';'])
        .map(clean_value)
        .filter(|k| !k.is_empty())
        .collect()
}

fn assign(metadata: &mut SeoMetadata, label: Label, value: String) {
    let slot = match label {
        Label::Title => &mut metadata.title,
        Label::MetaDescription => &mut metadata.meta_description,
        Label::Twitter => &mut metadata.social.twitter,
        Label::LinkedIn => &mut metadata.social.linkedin,
        Label::Facebook => &mut metadata.social.facebook,
        Label::Keywords => {
            if metadata.keywords.is_empty() {
                metadata.keywords = parse_keywords(&value);
            }
            return;
        }
    };
    // First occurrence wins
    if slot.is_none() {
        *slot = Some(value);
    }
}

/// Extract SEO metadata from free-form model output.
///
/// Returns `None` when no labelled line was found.
pub fn parse_seo_metadata(text: &str) -> Option<SeoMetadata> {
    let mut metadata = SeoMetadata::default();
    let mut pending: Option<Label> = None;

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }

        if let Some((label, value)) = split_label(line) {
            if value.is_empty() {
                pending = Some(label);
            } else {
                assign(&mut metadata, label, value);
                pending = None;
            }
            continue;
        }

        if let Some(label) = pending.take() {
            let value = clean_value(strip_bullet(line));
            if !value.is_empty() {
                assign(&mut metadata, label, value);
            }
        }
    }

    if metadata.is_empty() {
        None
    } else {
        Some(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_labels() {
        let text = "Title: AI in Healthcare: 2030 Outlook\n\
                    Meta Description: How AI changes diagnosis.\n\
                    Keywords: ai, healthcare, diagnostics\n\
                    Twitter: AI is reshaping care #AI\n\
                    LinkedIn: A deep dive.\n\
                    Facebook: Read more!\n\n# Body";
        let meta = parse_seo_metadata(text).unwrap();
        assert_eq!(meta.title.as_deref(), Some("AI in Healthcare: 2030 Outlook"));
        assert_eq!(
            meta.meta_description.as_deref(),
            Some("How AI changes diagnosis.")
        );
        assert_eq!(meta.keywords, vec!["ai", "healthcare", "diagnostics"]);
        assert_eq!(meta.social.twitter.as_deref(), Some("AI is reshaping care #AI"));
        assert_eq!(meta.social.linkedin.as_deref(), Some("A deep dive."));
        assert_eq!(meta.social.facebook.as_deref(), Some("Read more!"));
    }

    #[test]
    fn test_markdown_decorated_labels() {
        let text = "**SEO Title:** \"Rust for Backends\"\n- **Meta Description**: Fast and safe.\n";
        let meta = parse_seo_metadata(text).unwrap();
        assert_eq!(meta.title.as_deref(), Some("Rust for Backends"));
        assert_eq!(meta.meta_description.as_deref(), Some("Fast and safe."));
    }

    #[test]
    fn test_heading_label_takes_next_line() {
        let text = "### Meta Description\n\nA concise summary.\n\n### Keywords\nrust; async";
        let meta = parse_seo_metadata(text).unwrap();
        assert_eq!(meta.meta_description.as_deref(), Some("A concise summary."));
        assert_eq!(meta.keywords, vec!["rust", "async"]);
    }

    #[test]
    fn test_value_keeps_leading_hashtag() {
        let text = "- **Twitter:** #AI is reshaping care\nKeywords: #rust, -O3 builds";
        let meta = parse_seo_metadata(text).unwrap();
        assert_eq!(meta.social.twitter.as_deref(), Some("#AI is reshaping care"));
        assert_eq!(meta.keywords, vec!["#rust", "-O3 builds"]);
    }

    #[test]
    fn test_bulleted_value_under_heading() {
        let text = "## Twitter\n- #Rust ships fast binaries";
        let meta = parse_seo_metadata(text).unwrap();
        assert_eq!(meta.social.twitter.as_deref(), Some("#Rust ships fast binaries"));
    }

    #[test]
    fn test_first_title_wins() {
        let text = "Title: First\nTitle: Second";
        let meta = parse_seo_metadata(text).unwrap();
        assert_eq!(meta.title.as_deref(), Some("First"));
    }

    #[test]
    fn test_no_metadata() {
        assert!(parse_seo_metadata("Just a plain article with no labels.").is_none());
        assert!(parse_seo_metadata("").is_none());
    }
}
