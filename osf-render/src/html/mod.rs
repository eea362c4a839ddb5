//! HTML preview rendering
//!
//! Turns a parsed [`Document`] into one self-contained HTML page.
//!
//!     Document ──► BlockRenderer ──► per-block fragments ──► page shell
//!
//! | Block     | HTML                                                      |
//! |-----------|-----------------------------------------------------------|
//! | meta      | not rendered; feeds title, author and date of the header  |
//! | doc       | `<div class="osf-doc">` with converted prose              |
//! | slide     | `<section class="osf-slide layout-*">`                    |
//! | sheet     | `<div class="osf-sheet">` with a dense `<table>`          |
//! | table     | `<table class="osf-table osf-table-<style>">`             |
//! | chart     | `<div class="osf-chart">` summary placeholder             |
//! | diagram   | `<div class="osf-diagram">` with the source in `<pre>`    |
//! | osfcode   | `<figure class="osf-code">` with `<pre><code>`            |
//! | other     | `<div class="osf-unknown">` naming the type               |
//!
//! Rendering is a pure function of the document and [`RenderOptions`]: no
//! clock, no randomness, no I/O. The nonce comes in through [`Csp`].
//!
//! Every piece of user text goes through [`escape`] exactly once. Tags and
//! attributes built by the renderer itself are emitted as-is.

mod blocks;
mod escape;
mod inline;
mod markdown;
mod page;
mod sheet;
mod slide;
mod table;

pub use blocks::BlockRenderer;
pub use escape::escape;
pub use inline::{inline_markdown, plain_text, render_runs};
pub use markdown::markdown_to_html;
pub use page::{render_error, Csp};
pub use sheet::{parse_cell_key, SheetLimits};
pub use slide::render_content;

use crate::error::ParseError;
use crate::model::Document;
use crate::notice::{NoticeSink, NullSink};
use crate::theme::Theme;

/// Inputs of a render besides the document itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub theme: Theme,
    pub csp: Option<Csp>,
    pub sheet_limits: SheetLimits,
}

impl RenderOptions {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    pub fn with_csp(mut self, csp: Csp) -> Self {
        self.csp = Some(csp);
        self
    }

    pub fn with_sheet_limits(mut self, limits: SheetLimits) -> Self {
        self.sheet_limits = limits;
        self
    }
}

/// Render a document to a complete HTML page.
pub fn render(doc: &Document, options: &RenderOptions) -> String {
    render_with_sink(doc, options, &NullSink)
}

/// Like [`render`], reporting render notices to `sink`.
pub fn render_with_sink(doc: &Document, options: &RenderOptions, sink: &dyn NoticeSink) -> String {
    let content = BlockRenderer::new(options.sheet_limits, sink).render_blocks(&doc.blocks);
    page::assemble(doc, options.theme, options.csp.as_ref(), &content)
}

/// Render the outcome of a parse: the preview on success, the error page otherwise.
pub fn preview(
    parsed: Result<Document, ParseError>,
    options: &RenderOptions,
    sink: &dyn NoticeSink,
) -> String {
    match parsed {
        Ok(doc) => render_with_sink(&doc, options, sink),
        Err(err) => render_error(&err.message, options.csp.as_ref()),
    }
}
