//! Server-rendered HTML pages

use crate::output::html_text::display_text;
use ammonia::clean_text;
use studio_application::{ApiStatus, GenerationSettings};
use studio_domain::{
    ContentResult, ContentType, GenerationStatus, ResearchDepth, SeoFocus,
    SeoMetadata, Tone,
    content::word_count::{MAX_TARGET, MIN_TARGET, TARGET_STEP},
};

const DEFAULT_TOPIC: &str = "The Future of Artificial Intelligence in Healthcare";
const DEFAULT_AUDIENCE: &str = "healthcare professionals and technology enthusiasts";
const DEFAULT_TARGET: u32 = 1000;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2933; background: #f5f7fa; }
header { background: linear-gradient(90deg, #667eea, #764ba2); color: white; padding: 1.5rem 2rem; }
header p { margin: 0.25rem 0 0; opacity: 0.9; }
.layout { display: flex; gap: 2rem; padding: 2rem; }
main { flex: 3; }
aside { flex: 1; background: white; border-radius: 8px; padding: 1rem 1.5rem; }
form label { display: block; margin-top: 1rem; font-weight: 600; }
form input[type=text], form select { width: 100%; padding: 0.5rem; }
.card { background: white; border-radius: 8px; padding: 1rem 1.5rem; margin-bottom: 1rem; }
.success { border-left: 4px solid #2f9e44; }
.warning { border-left: 4px solid #f08c00; }
.error { border-left: 4px solid #e03131; }
.active { color: #2f9e44; }
.inactive { color: #e03131; }
pre.content { white-space: pre-wrap; font-family: inherit; }
button { margin-top: 1.5rem; padding: 0.6rem 1.2rem; background: #667eea; color: white; border: 0; border-radius: 4px; }
"#;

fn layout(title: &str, main: &str, sidebar: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<header>
<h1>AI Content Creation Studio</h1>
<p>A writer, an editor and an SEO specialist working on your topic</p>
</header>
<div class="layout">
<main>
{main}
</main>
<aside>
{sidebar}
</aside>
</div>
</body>
</html>
"#,
        title = clean_text(title),
    )
}

fn sidebar(status: &ApiStatus, settings: &GenerationSettings) -> String {
    let active = |on: bool| {
        if on {
            r#"<span class="active">Active</span>"#
        } else {
            r#"<span class="inactive">Inactive</span>"#
        }
    };

    let mut html = String::from("<h2>API Status</h2>\n<ul>\n");
    html.push_str(&format!("<li>Gemini API: {}</li>\n", active(status.gemini)));
    html.push_str(&format!("<li>Serper API: {}</li>\n", active(status.serper)));
    html.push_str("</ul>\n");
    if !status.all_configured() {
        html.push_str(&format!(
            "<p class=\"inactive\">Set {} to enable generation.</p>\n",
            clean_text(&status.missing().join(", "))
        ));
    }

    html.push_str("<h2>Agents</h2>\n");
    for &role in settings.workflow.stages() {
        html.push_str(&format!(
            "<h3>{} <small>({})</small></h3>\n<ul>\n",
            clean_text(role.title()),
            clean_text(settings.models.for_role(role).as_str())
        ));
        for highlight in role.profile().highlights {
            html.push_str(&format!("<li>{}</li>\n", clean_text(highlight)));
        }
        html.push_str("</ul>\n");
    }

    html.push_str(
        r#"<h2>Actions</h2>
<form method="post" action="/api/check"><button type="submit">Test System</button></form>
<p><a href="/api/stats">Statistics</a></p>
"#,
    );
    html
}

fn options<T: std::fmt::Display + PartialEq>(values: &[T], selected: &T) -> String {
    values
        .iter()
        .map(|v| {
            let text = clean_text(&v.to_string());
            if v == selected {
                format!("<option value=\"{text}\" selected>{text}</option>")
            } else {
                format!("<option value=\"{text}\">{text}</option>")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The generation form
pub fn index(status: &ApiStatus, settings: &GenerationSettings) -> String {
    let main = format!(
        r#"<h2>Create Content</h2>
<form method="post" action="/generate">
<label for="topic">Topic</label>
<input type="text" id="topic" name="topic" value="{topic}" required>
<label for="audience">Target Audience</label>
<input type="text" id="audience" name="audience" value="{audience}">
<label for="content_type">Content Type</label>
<select id="content_type" name="content_type">
{content_types}
</select>
<label for="word_count">Word Count: <output id="word_count_value">{target}</output></label>
<input type="range" id="word_count" name="word_count" min="{min}" max="{max}" step="{step}" value="{target}"
 oninput="document.getElementById('word_count_value').value = this.value">
<details>
<summary>Advanced Options</summary>
<label for="tone">Tone</label>
<select id="tone" name="tone">
{tones}
</select>
<label for="research_depth">Research Depth</label>
<select id="research_depth" name="research_depth">
{depths}
</select>
<label for="seo_focus">SEO Focus</label>
<select id="seo_focus" name="seo_focus">
{seo}
</select>
</details>
<button type="submit">Generate Content</button>
</form>
"#,
        topic = clean_text(DEFAULT_TOPIC),
        audience = clean_text(DEFAULT_AUDIENCE),
        content_types = options(&ContentType::presets(), &ContentType::default()),
        target = DEFAULT_TARGET,
        min = MIN_TARGET,
        max = MAX_TARGET,
        step = TARGET_STEP,
        tones = options(&Tone::all(), &Tone::default()),
        depths = options(&ResearchDepth::all(), &ResearchDepth::default()),
        seo = options(&SeoFocus::all(), &SeoFocus::default()),
    );
    layout("Content Studio", &main, &sidebar(status, settings))
}

fn seo_block(seo: &SeoMetadata) -> String {
    let mut rows = String::new();
    let mut row = |label: &str, value: Option<&String>| {
        if let Some(value) = value {
            rows.push_str(&format!(
                "<tr><th>{}</th><td>{}</td></tr>\n",
                label,
                clean_text(value)
            ));
        }
    };
    row("Title", seo.title.as_ref());
    row("Meta Description", seo.meta_description.as_ref());
    row("Twitter", seo.social.twitter.as_ref());
    row("LinkedIn", seo.social.linkedin.as_ref());
    row("Facebook", seo.social.facebook.as_ref());
    if !seo.keywords.is_empty() {
        rows.push_str(&format!(
            "<tr><th>Keywords</th><td>{}</td></tr>\n",
            clean_text(&seo.keywords.join(", "))
        ));
    }
    format!("<div class=\"card\">\n<h3>SEO</h3>\n<table>\n{rows}</table>\n</div>\n")
}

/// A finished run, real or simulated
pub fn result(
    result: &ContentResult,
    download_id: u64,
    status: &ApiStatus,
    settings: &GenerationSettings,
) -> String {
    let request = &result.request;
    let mut main = String::new();

    match result.status {
        GenerationStatus::Success => {
            main.push_str(&format!(
                "<div class=\"card success\"><strong>{}</strong></div>\n",
                clean_text(&result.message)
            ));
        }
        GenerationStatus::Simulation => {
            main.push_str(&format!(
                "<div class=\"card warning\"><strong>{}</strong>",
                clean_text(&result.message)
            ));
            if let Some(reason) = &result.fallback_reason {
                main.push_str(&format!("<p>Reason: {}</p>", clean_text(reason)));
            }
            main.push_str("</div>\n");
        }
    }

    main.push_str(&format!(
        r#"<div class="card">
<h3>Request</h3>
<ul>
<li>Topic: {}</li>
<li>Audience: {}</li>
<li>Type: {}</li>
<li>Word Count: {}</li>
<li>Options: {}, {} research, {} SEO focus</li>
</ul>
"#,
        clean_text(request.topic.as_str()),
        clean_text(&request.audience),
        clean_text(request.content_type.as_str()),
        request.word_count,
        request.options.tone,
        request.options.research_depth,
        request.options.seo_focus,
    ));
    if !result.apis_used.is_empty() {
        main.push_str(&format!(
            "<p>APIs used: {}</p>\n",
            clean_text(&result.apis_used.join(", "))
        ));
    }
    if !result.workflow.is_empty() {
        main.push_str("<h4>Workflow</h4>\n<ol>\n");
        for step in &result.workflow {
            main.push_str(&format!("<li>{}</li>\n", clean_text(step)));
        }
        main.push_str("</ol>\n");
    }
    main.push_str("</div>\n");

    main.push_str(&format!(
        r#"<div class="card">
<h3>Generated Content ({} words)</h3>
<pre class="content">{}</pre>
<p><a href="/download/{}">Download</a></p>
</div>
"#,
        result.body_word_count(),
        clean_text(&display_text(&result.body)),
        download_id
    ));

    if let Some(seo) = result.seo.as_ref().filter(|s| !s.is_empty()) {
        main.push_str(&seo_block(seo));
    }

    let intermediate = result.stages.len().saturating_sub(1);
    if intermediate > 0 {
        main.push_str("<details class=\"card\">\n<summary>Agent outputs</summary>\n");
        for stage in &result.stages[..intermediate] {
            main.push_str(&format!(
                "<h4>{} ({})</h4>\n<pre class=\"content\">{}</pre>\n",
                clean_text(stage.role.title()),
                clean_text(&stage.model),
                clean_text(&display_text(&stage.content))
            ));
        }
        main.push_str("</details>\n");
    }

    main.push_str("<p><a href=\"/\">Create another</a></p>\n");
    layout(request.topic.as_str(), &main, &sidebar(status, settings))
}

/// A run that could not start or failed without fallback
pub fn error(
    title: &str,
    message: &str,
    hint: Option<&str>,
    status: &ApiStatus,
    settings: &GenerationSettings,
) -> String {
    let mut main = format!(
        "<div class=\"card error\">\n<h3>{}</h3>\n<p>{}</p>\n",
        clean_text(title),
        clean_text(message)
    );
    if let Some(hint) = hint {
        main.push_str(&format!("<p><em>{}</em></p>\n", clean_text(hint)));
    }
    main.push_str("</div>\n<p><a href=\"/\">Back</a></p>\n");
    layout(title, &main, &sidebar(status, settings))
}
