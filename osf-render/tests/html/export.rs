//! Export tests for full preview pages (JSON tree → HTML)
//!
//! These render the kitchensink fixture and check the resulting page
//! structure block by block.

use crate::common::{load_fixture, parse};
use osf_render::{render, render_with_sink, CollectingSink, Csp, RenderNotice, RenderOptions, Theme};

fn kitchensink_html(options: &RenderOptions) -> String {
    render(&parse(&load_fixture("kitchensink.json")), options)
}

// ============================================================================
// PAGE SHELL
// ============================================================================

#[test]
fn test_page_header_from_meta() {
    let html = kitchensink_html(&RenderOptions::default());

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Quarterly &lt;Review&gt;</title>"));
    assert!(html.contains("<h1>Quarterly &lt;Review&gt;</h1>"));
    assert!(html.contains(r#"<p class="osf-author">By Ops &amp; Finance</p>"#));
    assert!(html.contains(r#"<p class="osf-date">2024-07-01</p>"#));
    assert!(html.contains(r#"id="osf-refresh""#));
}

#[test]
fn test_theme_selects_body_class() {
    let html = kitchensink_html(&RenderOptions::new(Theme::from_name("Corporate")));
    assert!(html.contains(r#"<body class="osf-theme-corporate">"#));

    let fallback = kitchensink_html(&RenderOptions::new(Theme::from_name("neon")));
    assert!(fallback.contains(r#"<body class="osf-theme-default">"#));
}

#[test]
fn test_csp_meta_and_nonce() {
    let options = RenderOptions::default().with_csp(Csp::new("r4nd0m", "vscode-webview:"));
    let html = kitchensink_html(&options);

    assert!(html.contains(r#"<meta http-equiv="Content-Security-Policy""#));
    assert!(html.contains("script-src &#39;nonce-r4nd0m&#39;"));
    assert!(html.contains("img-src vscode-webview: https: data:"));
    assert!(html.contains(r#"<script nonce="r4nd0m">"#));
}

#[test]
fn test_no_csp_without_nonce() {
    let html = kitchensink_html(&RenderOptions::default());
    assert!(!html.contains("Content-Security-Policy"));
    assert!(html.contains("<script>"));
}

// ============================================================================
// BLOCKS
// ============================================================================

#[test]
fn test_doc_block_prose() {
    let html = kitchensink_html(&RenderOptions::default());

    assert!(html.contains(
        r#"<div class="osf-doc"><h1>Overview</h1><p>Revenue grew <strong>12%</strong> this quarter. Costs stayed flat.</p>"#
    ));
    assert!(html.contains("<ul><li>North</li><li>South</li><li><em>East</em></li></ul>"));
    assert!(html.contains(
        "<blockquote><p>Keep it simple</p><p>and <code>measurable</code></p></blockquote>"
    ));
}

#[test]
fn test_structured_slide() {
    let html = kitchensink_html(&RenderOptions::default());

    assert!(html.contains(r#"<section class="osf-slide layout-two-column"><h2>Highlights</h2>"#));
    assert!(html.contains("<h2>Wins</h2>"));
    assert!(html.contains("<li>Launched <strong>v2</strong></li>"));
    assert!(html.contains(
        r#"<a href="https://example.com/docs" target="_blank" rel="noopener noreferrer">Docs</a>"#
    ));
    assert!(html.contains("<ol><li>First</li><li>Second</li></ol>"));
    assert!(html.contains("<blockquote><p>Stay <em>focused</em></p></blockquote>"));
    assert!(html.contains("<pre><code>let x = 1 &lt; 2;</code></pre>"));
    assert!(html.contains(r#"<img src="chart.png" alt="Growth" />"#));
    assert!(!html.contains("skipped"));
}

#[test]
fn test_bullet_slide() {
    let html = kitchensink_html(&RenderOptions::default());
    assert!(html.contains(r#"<section class="osf-slide layout-title-and-content"><h2>Next steps</h2>"#));
    assert!(html.contains("<li>Hire <strong>two</strong> engineers</li><li>Ship v3</li>"));
}

#[test]
fn test_sheet_table_and_placeholders() {
    let html = kitchensink_html(&RenderOptions::default());

    assert!(html.contains(
        "<tbody><tr><td>Servers</td><td>1200</td></tr><tr><td>Licenses</td><td></td></tr><tr><td></td><td>80.5</td></tr></tbody>"
    ));
    assert!(html.contains(r#"<table class="osf-table osf-table-striped"><caption>Headcount</caption>"#));
    assert!(html.contains(r#"<td style="text-align: right">3</td>"#));
    assert!(html.contains("<p>Chart type: line</p><p>2 data series</p>"));
    assert!(html.contains("graph TD; A--&gt;B"));
    assert!(html.contains(r#"<figcaption class="osf-code-caption">Entry point</figcaption><pre><code class="language-rust">fn main() {}</code></pre>"#));
    assert!(html.contains("Unknown block type: <code>timeline</code>"));
}

#[test]
fn test_block_order_is_preserved() {
    let html = kitchensink_html(&RenderOptions::default());
    let main = &html[html.find("<main").unwrap()..];
    let markers = [
        "osf-doc",
        "Highlights",
        "Next steps",
        "osf-sheet",
        "osf-table",
        "osf-chart",
        "osf-diagram",
        "osf-code",
        "osf-unknown",
    ];
    let positions: Vec<usize> = markers
        .iter()
        .map(|m| main.find(m).unwrap_or_else(|| panic!("missing {m}")))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[test]
fn test_lossy_rendering_is_reported() {
    let sink = CollectingSink::new();
    render_with_sink(
        &parse(&load_fixture("kitchensink.json")),
        &RenderOptions::default(),
        &sink,
    );
    let notices = sink.into_notices();

    assert!(notices.contains(&RenderNotice::UnknownBlock {
        kind: "timeline".to_string()
    }));
    assert!(notices.contains(&RenderNotice::SkippedContent {
        slide: "Highlights".to_string()
    }));
}
