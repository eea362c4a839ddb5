//! Error types for parsing and publishing

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;
use thiserror::Error;

static LINE_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bline (\d+)").unwrap());

/// Failure reported by the document parser.
///
/// Parsers only promise a human-readable message. Many of them mention the
/// offending line as `line <N>` somewhere in that message, which is lifted
/// into [`ParseError::line`] so callers can position the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let line = line_from_message(&message);
        Self { message, line }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::new(err.to_string())
    }
}

/// Extract the first `line <N>` reference from a parser message.
pub fn line_from_message(message: &str) -> Option<usize> {
    LINE_REF
        .captures(message)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Errors raised while writing a rendered preview.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to write preview to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
