//! Plain-text view of model output that came back as a full HTML document

use scraper::{Html, Selector};

fn is_html_document(content: &str) -> bool {
    let lower = content.to_ascii_lowercase();
    lower.contains("<!doctype html") || lower.contains("<html")
}

/// Text to display for generated content
///
/// Full HTML documents are reduced to the text of their `<body>`. Anything
/// else, including documents without a body, is returned unchanged.
pub fn display_text(content: &str) -> String {
    if !is_html_document(content) || !content.to_ascii_lowercase().contains("<body") {
        return content.to_string();
    }

    let document = Html::parse_document(content);
    let Ok(selector) = Selector::parse("body") else {
        return content.to_string();
    };

    match document.select(&selector).next() {
        Some(body) => {
            let text: String = body.text().collect();
            collapse_blank_lines(&text)
        }
        None => content.to_string(),
    }
}

fn collapse_blank_lines(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim_end) {
        if line.trim().is_empty() && lines.last().is_none_or(|l| l.trim().is_empty()) {
            continue;
        }
        lines.push(line);
    }
    lines.join("\n").trim().to_string()
}
