//! Source diagnostics: brace matching and block keyword checks.

use crate::scan::{braces, Brace};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static BLOCK_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)@([A-Za-z_][A-Za-z0-9_-]*)").unwrap());

/// Block keywords the OSF parser accepts.
pub const KNOWN_BLOCKS: &[&str] = &[
    "meta", "doc", "slide", "sheet", "table", "chart", "diagram", "code", "include",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// A finding in the source. Positions are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl Diagnostic {
    fn error(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            line: line + 1,
            column: column + 1,
            message: message.into(),
        }
    }

    fn warning(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            line: line + 1,
            column: column + 1,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}: {}",
            self.line, self.column, self.severity, self.message
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    pub warn_unknown_blocks: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            warn_unknown_blocks: true,
        }
    }
}

/// Check raw OSF source. Diagnostics come back ordered by position.
pub fn check(source: &str, options: &CheckOptions) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut open: Vec<(usize, usize)> = Vec::new();

    for (line_index, line) in source.lines().enumerate() {
        if options.warn_unknown_blocks {
            if let Some(caps) = BLOCK_KEYWORD.captures(line) {
                let indent = caps.get(1).map_or(0, |m| m.as_str().chars().count());
                let keyword = caps.get(2).map_or("", |m| m.as_str());
                if !KNOWN_BLOCKS.contains(&keyword) {
                    diagnostics.push(Diagnostic::warning(
                        line_index,
                        indent,
                        format!("Unknown block type '@{keyword}'"),
                    ));
                }
            }
        }

        for (column, brace) in braces(line) {
            match brace {
                Brace::Open => open.push((line_index, column)),
                Brace::Close => {
                    if open.pop().is_none() {
                        diagnostics.push(Diagnostic::error(
                            line_index,
                            column,
                            "Unexpected closing brace",
                        ));
                    }
                }
            }
        }
    }

    for (line_index, column) in open {
        diagnostics.push(Diagnostic::error(line_index, column, "Unclosed block"));
    }

    diagnostics.sort_by_key(|d| (d.line, d.column));
    diagnostics
}

/// Whether any diagnostic is an error.
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(|d| d.severity == Severity::Error)
}
