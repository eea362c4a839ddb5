//! Source diagnostics and formatting over a realistic, badly indented file.

use crate::common::load_fixture;
use insta::assert_snapshot;
use osf_render::lint::has_errors;
use osf_render::{check, format_source, CheckOptions, IndentRules, Severity};

#[test]
fn test_messy_source_diagnostics() {
    let source = load_fixture("messy.osf");
    let diagnostics = check(&source, &CheckOptions::default());

    let rendered: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["18:1: warning: Unknown block type '@chrat'"]);
    assert!(!has_errors(&diagnostics));
}

#[test]
fn test_messy_source_formats() {
    let formatted = format_source(&load_fixture("messy.osf"), &IndentRules::default());
    assert_snapshot!(formatted, @r#"
    @meta {
      title: "Launch {plan}";
      author: "Ops";
    }

    @slide {
      title: "Intro";
      content {
        - one
        // stray } in a comment
        - two
      }
    }
    @chrat {
    }
    "#);
}

#[test]
fn test_formatting_is_stable() {
    let rules = IndentRules::default();
    let once = format_source(&load_fixture("messy.osf"), &rules);
    assert_eq!(format_source(&once, &rules), once);
}

#[test]
fn test_broken_source_reports_errors() {
    let source = "@doc {\n  text\n\n@slide {\n}\n";
    let diagnostics = check(source, &CheckOptions::default());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert_eq!((diagnostics[0].line, diagnostics[0].column), (1, 6));
}
