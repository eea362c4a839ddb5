//! Indentation formatter for raw OSF source.
//!
//! Re-indents every line by its brace depth. It does not reflow text or touch
//! anything inside a line beyond trailing whitespace.

use crate::scan::{braces, Brace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentRules {
    pub indent_string: String,
    pub max_blank_lines: usize,
}

impl Default for IndentRules {
    fn default() -> Self {
        Self {
            indent_string: "  ".to_string(),
            max_blank_lines: 1,
        }
    }
}

/// Format `source` according to `rules`.
pub fn format_source(source: &str, rules: &IndentRules) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut depth: usize = 0;
    let mut blank_run = 0;

    for raw in source.lines() {
        let line = raw.trim();
        if line.is_empty() {
            blank_run += 1;
            if !lines.is_empty() && blank_run <= rules.max_blank_lines {
                lines.push(String::new());
            }
            continue;
        }
        blank_run = 0;

        let found = braces(line);
        let leading_closers = found
            .iter()
            .enumerate()
            .take_while(|(i, (column, brace))| *brace == Brace::Close && column == i)
            .count();
        let level = depth.saturating_sub(leading_closers);
        lines.push(format!("{}{line}", rules.indent_string.repeat(level)));

        for (_, brace) in found {
            depth = match brace {
                Brace::Open => depth + 1,
                Brace::Close => depth.saturating_sub(1),
            };
        }
    }

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return String::new();
    }
    let mut formatted = lines.join("\n");
    formatted.push('\n');
    formatted
}
