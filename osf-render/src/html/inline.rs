//! Inline rendering: text runs and inline markdown.

use super::escape::escape;
use crate::model::{StyledRun, TextRun};
use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.+?)`").unwrap());
static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,3})\s+(.*)$").unwrap());

/// Render runs in order, without separators.
pub fn render_runs(runs: &[TextRun]) -> String {
    runs.iter().map(render_run).collect()
}

fn render_run(run: &TextRun) -> String {
    match run {
        TextRun::Plain(text) => escape(text),
        TextRun::Link(link) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            escape(&link.url),
            escape(&link.text)
        ),
        TextRun::Image(image) => format!(
            r#"<img src="{}" alt="{}" />"#,
            escape(&image.url),
            escape(&image.alt)
        ),
        TextRun::Styled(styled) => render_styled(styled),
    }
}

// Wrapping order is fixed, innermost first: strong, em, underline, strike.
fn render_styled(run: &StyledRun) -> String {
    let mut html = escape(&run.text);
    if run.bold {
        html = format!("<strong>{html}</strong>");
    }
    if run.italic {
        html = format!("<em>{html}</em>");
    }
    if run.underline {
        html = format!(r#"<span style="text-decoration: underline">{html}</span>"#);
    }
    if run.strike {
        html = format!(r#"<span style="text-decoration: line-through">{html}</span>"#);
    }
    html
}

/// Reduce runs to unstyled text. Links keep their text, images their alt text.
pub fn plain_text(runs: &[TextRun]) -> String {
    runs.iter()
        .map(|run| match run {
            TextRun::Plain(text) => text.as_str(),
            TextRun::Styled(styled) => styled.text.as_str(),
            TextRun::Link(link) => link.text.as_str(),
            TextRun::Image(image) => image.alt.as_str(),
        })
        .collect()
}

/// Escape `text`, then apply `**bold**`, `*italic*` and `` `code` `` markup.
pub fn inline_markdown(text: &str) -> String {
    let escaped = escape(text);
    let html = BOLD.replace_all(&escaped, "<strong>$1</strong>");
    let html = ITALIC.replace_all(&html, "<em>$1</em>");
    CODE.replace_all(&html, "<code>$1</code>").into_owned()
}

/// Split a `# Heading` line into its level (1 to 3) and text.
pub fn heading(line: &str) -> Option<(usize, &str)> {
    let caps = HEADING.captures(line)?;
    let level = caps.get(1)?.as_str().len();
    let text = caps.get(2)?.as_str();
    Some((level, text))
}

/// Render a heading element with inline markdown applied to its text.
pub fn render_heading(level: usize, text: &str) -> String {
    format!("<h{level}>{}</h{level}>", inline_markdown(text))
}
