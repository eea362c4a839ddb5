//! Include resolution against on-disk fixtures.

use crate::common::fixture_path;
use osf_render::{render, Block, JsonTreeParser, RenderOptions};

#[test]
fn test_nested_includes_are_spliced() {
    let doc = JsonTreeParser
        .parse_file(&fixture_path("deck.json"), true)
        .unwrap();

    let kinds: Vec<_> = doc.blocks.iter().map(Block::kind).collect();
    assert_eq!(kinds, vec!["meta", "slide", "doc", "slide"]);

    let html = render(&doc, &RenderOptions::default());
    assert!(html.contains("<title>Team Offsite</title>"));
    assert!(html.contains("<li>Goals</li><li>Roadmap</li>"));
    assert!(html.contains("<p>Bring <strong>laptops</strong>.</p>"));
}

#[test]
fn test_includes_left_alone_when_disabled() {
    let doc = JsonTreeParser
        .parse_file(&fixture_path("deck.json"), false)
        .unwrap();
    assert_eq!(doc.blocks[1].kind(), "include");

    let html = render(&doc, &RenderOptions::default());
    assert!(html.contains("Unknown block type: <code>include</code>"));
}

#[test]
fn test_include_cycle_is_an_error() {
    let err = JsonTreeParser
        .parse_file(&fixture_path("cycle_a.json"), true)
        .unwrap_err();
    assert!(err.message.contains("include cycle detected"));
    assert!(err.message.contains("cycle_a.json"));
}

#[test]
fn test_missing_file_is_an_error() {
    let err = JsonTreeParser
        .parse_file(&fixture_path("nope.json"), true)
        .unwrap_err();
    assert!(err.message.starts_with("failed to read"));
}
