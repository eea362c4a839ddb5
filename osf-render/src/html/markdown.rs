//! Block-level conversion of `doc` prose.
//!
//! Lines are classified one at a time and fed to [`ProseWriter`], which keeps
//! three accumulators (paragraph, list, blockquote). At most one of them holds
//! content at any point; a flush turns the held lines into HTML and clears it.
//!
//! | line              | effect                                             |
//! |-------------------|----------------------------------------------------|
//! | blank             | flush all                                          |
//! | `#`..`###` + text | flush all, emit heading                            |
//! | `-`/`*` + text    | flush paragraph and quote, append to list          |
//! | `>` text          | flush paragraph and list, append to quote          |
//! | anything else     | flush list and quote, append to paragraph          |

use super::inline::{heading, inline_markdown, render_heading};
use once_cell::sync::Lazy;
use regex::Regex;

static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*]\s+(.*)$").unwrap());
static QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^> ?(.*)$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Heading { level: usize, text: &'a str },
    Bullet(&'a str),
    Quote(&'a str),
    Text(&'a str),
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        if line.is_empty() {
            return Line::Blank;
        }
        if let Some((level, text)) = heading(line) {
            return Line::Heading { level, text };
        }
        if let Some(caps) = BULLET.captures(line) {
            return Line::Bullet(caps.get(1).map_or("", |m| m.as_str()));
        }
        if let Some(caps) = QUOTE.captures(line) {
            return Line::Quote(caps.get(1).map_or("", |m| m.as_str()));
        }
        Line::Text(line)
    }
}

#[derive(Debug, Default)]
struct ProseWriter<'a> {
    html: String,
    paragraph: Vec<&'a str>,
    list: Vec<&'a str>,
    quote: Vec<&'a str>,
}

impl<'a> ProseWriter<'a> {
    fn feed(&mut self, line: Line<'a>) {
        match line {
            Line::Blank => self.flush_all(),
            Line::Heading { level, text } => {
                self.flush_all();
                self.html.push_str(&render_heading(level, text));
            }
            Line::Bullet(item) => {
                self.flush_paragraph();
                self.flush_quote();
                self.list.push(item);
            }
            Line::Quote(text) => {
                self.flush_paragraph();
                self.flush_list();
                self.quote.push(text);
            }
            Line::Text(text) => {
                self.flush_list();
                self.flush_quote();
                self.paragraph.push(text);
            }
        }
    }

    fn flush_all(&mut self) {
        self.flush_paragraph();
        self.flush_list();
        self.flush_quote();
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = self.paragraph.join(" ");
        self.html
            .push_str(&format!("<p>{}</p>", inline_markdown(&text)));
        self.paragraph.clear();
    }

    fn flush_list(&mut self) {
        if self.list.is_empty() {
            return;
        }
        self.html.push_str("<ul>");
        for item in self.list.drain(..) {
            self.html
                .push_str(&format!("<li>{}</li>", inline_markdown(item)));
        }
        self.html.push_str("</ul>");
    }

    fn flush_quote(&mut self) {
        if self.quote.is_empty() {
            return;
        }
        self.html.push_str("<blockquote>");
        for line in self.quote.drain(..) {
            self.html
                .push_str(&format!("<p>{}</p>", inline_markdown(line)));
        }
        self.html.push_str("</blockquote>");
    }

    fn finish(mut self) -> String {
        self.flush_all();
        self.html
    }
}

/// Convert prose to block-level HTML.
pub fn markdown_to_html(source: &str) -> String {
    let mut writer = ProseWriter::default();
    for line in source.lines() {
        writer.feed(Line::classify(line.trim()));
    }
    writer.finish()
}
