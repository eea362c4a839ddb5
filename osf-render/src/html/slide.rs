//! Slides and their structured content.

use super::escape::escape;
use super::inline::{heading, inline_markdown, plain_text, render_heading, render_runs};
use crate::model::{ContentBlock, RunSequence, SlideBlock};
use crate::notice::{NoticeSink, RenderNotice};

pub(crate) fn render_slide(slide: &SlideBlock, sink: &dyn NoticeSink) -> String {
    let body = if !slide.content.is_empty() {
        render_content(&slide.content, &slide.title, sink)
    } else if !slide.bullets.is_empty() {
        render_bullets(&slide.bullets)
    } else {
        String::new()
    };

    format!(
        r#"<section class="osf-slide {}"><h2>{}</h2><div class="osf-slide-body">{body}</div></section>"#,
        slide.layout.class_name(),
        escape(&slide.title),
    )
}

fn render_bullets(bullets: &[String]) -> String {
    let items: String = bullets
        .iter()
        .map(|bullet| format!("<li>{}</li>", inline_markdown(bullet)))
        .collect();
    format!("<ul>{items}</ul>")
}

/// Render structured slide content. Unsupported blocks are skipped.
pub fn render_content(blocks: &[ContentBlock], slide: &str, sink: &dyn NoticeSink) -> String {
    let mut html = String::new();
    for block in blocks {
        match block {
            ContentBlock::Paragraph { content } => {
                let text = plain_text(content);
                match heading(text.trim()) {
                    Some((level, title)) => html.push_str(&render_heading(level, title)),
                    None => html.push_str(&format!("<p>{}</p>", render_runs(content))),
                }
            }
            ContentBlock::UnorderedList { items } => html.push_str(&render_list("ul", items)),
            ContentBlock::OrderedList { items } => html.push_str(&render_list("ol", items)),
            ContentBlock::Blockquote { content } => {
                html.push_str("<blockquote>");
                for paragraph in content {
                    html.push_str(&format!("<p>{}</p>", render_runs(&paragraph.runs)));
                }
                html.push_str("</blockquote>");
            }
            ContentBlock::Code { content } => {
                html.push_str(&format!("<pre><code>{}</code></pre>", escape(content)));
            }
            ContentBlock::Image { url, alt } => {
                html.push_str(&format!(
                    r#"<img src="{}" alt="{}" />"#,
                    escape(url),
                    escape(alt)
                ));
            }
            ContentBlock::Unsupported => sink.notice(RenderNotice::SkippedContent {
                slide: slide.to_string(),
            }),
        }
    }
    html
}

fn render_list(tag: &str, items: &[RunSequence]) -> String {
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", render_runs(&item.runs)))
        .collect();
    format!("<{tag}>{items}</{tag}>")
}
