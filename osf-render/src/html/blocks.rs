//! Top-level block dispatch.

use super::escape::escape;
use super::markdown::markdown_to_html;
use super::sheet::{render_sheet, SheetLimits};
use super::slide::render_slide;
use super::table::render_table;
use crate::model::{Block, ChartBlock, CodeBlock, DiagramBlock};
use crate::notice::{NoticeSink, RenderNotice};

/// Renders blocks to HTML fragments, in document order.
pub struct BlockRenderer<'a> {
    limits: SheetLimits,
    sink: &'a dyn NoticeSink,
}

impl<'a> BlockRenderer<'a> {
    pub fn new(limits: SheetLimits, sink: &'a dyn NoticeSink) -> Self {
        Self { limits, sink }
    }

    /// Concatenate the fragments of all content blocks. `meta` is skipped.
    pub fn render_blocks(&self, blocks: &[Block]) -> String {
        blocks.iter().map(|block| self.render_block(block)).collect()
    }

    pub fn render_block(&self, block: &Block) -> String {
        match block {
            Block::Meta(_) => String::new(),
            Block::Doc(doc) => format!(
                r#"<div class="osf-doc">{}</div>"#,
                markdown_to_html(&doc.content)
            ),
            Block::Slide(slide) => render_slide(slide, self.sink),
            Block::Sheet(sheet) => render_sheet(sheet, self.limits, self.sink),
            Block::Table(table) => render_table(table),
            Block::Chart(chart) => render_chart(chart),
            Block::Diagram(diagram) => render_diagram(diagram),
            Block::Code(code) => render_code(code),
            Block::Unknown(unknown) => {
                self.sink.notice(RenderNotice::UnknownBlock {
                    kind: unknown.kind.clone(),
                });
                format!(
                    r#"<div class="osf-unknown"><p>Unknown block type: <code>{}</code></p></div>"#,
                    escape(&unknown.kind)
                )
            }
        }
    }
}

fn render_chart(chart: &ChartBlock) -> String {
    format!(
        r#"<div class="osf-chart"><h3>{}</h3><p>Chart type: {}</p><p>{} data series</p></div>"#,
        escape(&chart.title),
        escape(&chart.chart_type),
        chart.data.len()
    )
}

fn render_diagram(diagram: &DiagramBlock) -> String {
    let mut html = String::from(r#"<div class="osf-diagram">"#);
    if let Some(title) = &diagram.title {
        html.push_str(&format!("<h3>{}</h3>", escape(title)));
    }
    if let Some(engine) = &diagram.engine {
        html.push_str(&format!(
            r#"<p class="osf-diagram-engine">{}</p>"#,
            escape(engine)
        ));
    }
    html.push_str(&format!("<pre>{}</pre></div>", escape(&diagram.code)));
    html
}

fn render_code(code: &CodeBlock) -> String {
    let mut html = String::from(r#"<figure class="osf-code">"#);
    if let Some(caption) = &code.caption {
        html.push_str(&format!(
            r#"<figcaption class="osf-code-caption">{}</figcaption>"#,
            escape(caption)
        ));
    }
    if code.lang.is_empty() {
        html.push_str("<pre><code>");
    } else {
        html.push_str(&format!(
            r#"<pre><code class="language-{}">"#,
            escape(&code.lang)
        ));
    }
    html.push_str(&escape(&code.code));
    html.push_str("</code></pre></figure>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocBlock, MetaBlock, UnknownBlock};
    use crate::notice::{CollectingSink, NullSink};
    use insta::assert_snapshot;

    fn renderer(sink: &dyn NoticeSink) -> BlockRenderer<'_> {
        BlockRenderer::new(SheetLimits::default(), sink)
    }

    #[test]
    fn meta_is_not_content() {
        let blocks = vec![Block::Meta(MetaBlock::default().with_prop("title", "T"))];
        assert_eq!(renderer(&NullSink).render_blocks(&blocks), "");
    }

    #[test]
    fn unknown_blocks_do_not_stop_rendering() {
        let sink = CollectingSink::new();
        let blocks = vec![
            Block::Unknown(UnknownBlock::new("futuretype")),
            Block::Doc(DocBlock {
                content: "after".to_string(),
            }),
        ];
        let html = renderer(&sink).render_blocks(&blocks);
        assert_eq!(
            html,
            r#"<div class="osf-unknown"><p>Unknown block type: <code>futuretype</code></p></div><div class="osf-doc"><p>after</p></div>"#
        );
        assert_eq!(
            sink.into_notices(),
            vec![RenderNotice::UnknownBlock {
                kind: "futuretype".to_string()
            }]
        );
    }

    #[test]
    fn unknown_kind_is_escaped() {
        let html = renderer(&NullSink).render_block(&Block::Unknown(UnknownBlock::new("<x>")));
        assert!(html.contains("<code>&lt;x&gt;</code>"));
    }

    #[test]
    fn chart_is_summarized() {
        let chart = ChartBlock {
            title: "Revenue".to_string(),
            chart_type: "line".to_string(),
            data: vec![serde_json::json!({"name": "a"}), serde_json::json!({"name": "b"})],
        };
        assert_snapshot!(
            render_chart(&chart),
            @r#"<div class="osf-chart"><h3>Revenue</h3><p>Chart type: line</p><p>2 data series</p></div>"#
        );
    }

    #[test]
    fn diagram_shows_source() {
        let diagram = DiagramBlock {
            title: Some("Flow".to_string()),
            engine: Some("mermaid".to_string()),
            code: "A --> B".to_string(),
        };
        assert_eq!(
            render_diagram(&diagram),
            r#"<div class="osf-diagram"><h3>Flow</h3><p class="osf-diagram-engine">mermaid</p><pre>A --&gt; B</pre></div>"#
        );
    }

    #[test]
    fn code_carries_language_and_caption() {
        let code = CodeBlock {
            lang: "rust".to_string(),
            caption: Some("main.rs".to_string()),
            code: "fn main() { let _ = 1 < 2; }".to_string(),
        };
        assert_eq!(
            render_code(&code),
            r#"<figure class="osf-code"><figcaption class="osf-code-caption">main.rs</figcaption><pre><code class="language-rust">fn main() { let _ = 1 &lt; 2; }</code></pre></figure>"#
        );
    }

    #[test]
    fn code_without_language_has_no_class() {
        let html = render_code(&CodeBlock {
            code: "x".to_string(),
            ..Default::default()
        });
        assert_eq!(html, r#"<figure class="osf-code"><pre><code>x</code></pre></figure>"#);
    }
}
