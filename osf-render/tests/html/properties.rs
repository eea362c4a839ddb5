//! Behavioral guarantees of the preview renderer, checked end to end.

use crate::common::parse;
use osf_render::model::{Block, DocBlock, StyledRun, TextRun};
use osf_render::html::render_runs;
use osf_render::{preview, render, Csp, Document, NullSink, ParseError, RenderOptions, Theme};
use proptest::prelude::*;

fn content_of(html: &str) -> &str {
    let start = html.find("<main class=\"osf-content\">").unwrap();
    let end = html.find("</main>").unwrap();
    &html[start..end]
}

fn doc(content: &str) -> Document {
    Document {
        blocks: vec![Block::Doc(DocBlock {
            content: content.to_string(),
        })],
    }
}

#[test]
fn heading_then_paragraph() {
    let html = render(&doc("# Title\n\nBody text"), &RenderOptions::default());
    assert!(content_of(&html).contains("<h1>Title</h1><p>Body text</p>"));
}

#[test]
fn contiguous_bullets_form_one_list() {
    let html = render(&doc("- a\n- b\n- c"), &RenderOptions::default());
    let content = content_of(&html);
    assert_eq!(content.matches("<ul>").count(), 1);
    assert_eq!(content.matches("<li>").count(), 3);
    assert!(content.contains("<ul><li>a</li><li>b</li><li>c</li></ul>"));
}

#[test]
fn windows_line_endings_are_accepted() {
    let html = render(&doc("# Title\r\n\r\nBody\r\ntext"), &RenderOptions::default());
    assert!(content_of(&html).contains("<h1>Title</h1><p>Body text</p>"));
}

#[test]
fn sparse_sheet_is_densified() {
    let document = parse(
        r#"[{"type":"sheet","name":"S","cols":["A","B"],"data":{"1,1":"x","2,2":"y"}}]"#,
    );
    let html = render(&document, &RenderOptions::default());
    assert!(content_of(&html).contains(
        "<tbody><tr><td>x</td><td></td></tr><tr><td></td><td>y</td></tr></tbody>"
    ));
}

#[test]
fn empty_sheet_spans_declared_columns() {
    let document = parse(r#"[{"type":"sheet","name":"S","cols":["A","B","C"],"data":{}}]"#);
    let html = render(&document, &RenderOptions::default());
    let content = content_of(&html);
    assert_eq!(content.matches("<tbody><tr>").count(), 1);
    assert!(content.contains(r#"<td colspan="3" class="osf-sheet-empty">No data</td>"#));
}

#[test]
fn unknown_block_does_not_stop_rendering() {
    let document = parse(
        r#"[{"type":"futuretype","x":1},{"type":"doc","content":"still here"}]"#,
    );
    let html = render(&document, &RenderOptions::default());
    let content = content_of(&html);
    assert!(content.contains("<code>futuretype</code>"));
    assert!(content.contains("<p>still here</p>"));
}

#[test]
fn unknown_block_type_is_escaped() {
    let document = parse(r#"[{"type":"<script>"}]"#);
    let html = render(&document, &RenderOptions::default());
    assert!(content_of(&html).contains("<code>&lt;script&gt;</code>"));
}

#[test]
fn meta_with_list_property_still_renders() {
    let document = parse(
        r#"[{"type":"meta","props":{"title":"T","tags":["a","b"]}},{"type":"doc","content":"x"}]"#,
    );
    let html = render(&document, &RenderOptions::default());
    assert!(html.contains("<title>T</title>"));
    assert!(content_of(&html).contains("<p>x</p>"));
}

#[test]
fn bold_italic_nests_in_one_order() {
    let bold_first = StyledRun::new("x").bold().italic();
    let italic_first = StyledRun::new("x").italic().bold();
    let expected = "<em><strong>x</strong></em>";
    assert_eq!(render_runs(&[TextRun::Styled(bold_first)]), expected);
    assert_eq!(render_runs(&[TextRun::Styled(italic_first)]), expected);

    let from_json = parse(
        r#"[{"type":"slide","title":"t","content":[{"type":"paragraph","content":[{"italic":true,"bold":true,"text":"x"}]}]}]"#,
    );
    let html = render(&from_json, &RenderOptions::default());
    assert!(content_of(&html).contains(expected));
}

#[test]
fn parse_failure_renders_error_page_only() {
    let csp = Csp::new("abc", "vscode-webview:");
    let options = RenderOptions::default().with_csp(csp);
    let html = preview(
        Err(ParseError::new("Unexpected token at line 4")),
        &options,
        &NullSink,
    );

    assert!(html.contains("Unexpected token at line 4"));
    assert!(html.contains("Line 4"));
    assert!(html.contains("Content-Security-Policy"));
    assert!(!html.contains("osf-content"));
    assert!(!html.contains("osf-refresh"));
}

#[test]
fn error_message_is_escaped() {
    let html = preview(
        Err(ParseError::new("bad <tag> & \"quote\"")),
        &RenderOptions::default(),
        &NullSink,
    );
    assert!(html.contains("bad &lt;tag&gt; &amp; &quot;quote&quot;"));
    assert!(!html.contains("<tag>"));
}

#[test]
fn rendering_is_deterministic() {
    let document = parse(&crate::common::load_fixture("kitchensink.json"));
    let options = RenderOptions::new(Theme::Retro).with_csp(Csp::new("n", "https://host"));
    assert_eq!(render(&document, &options), render(&document, &options));
}

proptest! {
    #[test]
    fn user_text_is_escaped_exactly_once(text in "[a-z &<>\"']{1,40}") {
        // Surrounding whitespace is trimmed and a leading `>` opens a quote.
        prop_assume!(text.trim() == text && !text.starts_with('>'));
        let document = Document {
            blocks: vec![Block::Doc(DocBlock { content: text.clone() })],
        };
        let html = render(&document, &RenderOptions::default());
        let content = content_of(&html);
        let body = content
            .trim_start_matches("<main class=\"osf-content\">")
            .trim_start_matches('\n');

        let inner = body
            .strip_prefix("<div class=\"osf-doc\">")
            .and_then(|rest| rest.trim_end().strip_suffix("</div>"))
            .unwrap_or("");

        let expected = osf_render::html::escape(&text);
        prop_assert_eq!(inner, format!("<p>{expected}</p>"));
        prop_assert!(!inner.contains("&amp;amp;"));
    }
}
