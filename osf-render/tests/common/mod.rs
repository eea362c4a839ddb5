//! Shared helpers for the integration tests.

use osf_render::{Document, DocumentParser, JsonTreeParser, ParseOptions};
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).unwrap()
}

/// Parse a JSON block tree without include resolution.
pub fn parse(json: &str) -> Document {
    JsonTreeParser.parse(json, &ParseOptions::default()).unwrap()
}
