//! Brace scanning over raw OSF source lines.
//!
//! Shared by the diagnostics and the indentation formatter. Braces inside
//! double-quoted strings (which never span lines) and on `//` comment lines
//! do not count.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Brace {
    Open,
    Close,
}

/// Structural braces of one line, with their 0-based character columns.
pub(crate) fn braces(line: &str) -> Vec<(usize, Brace)> {
    if line.trim_start().starts_with("//") {
        return Vec::new();
    }

    let mut found = Vec::new();
    let mut in_string = false;
    let mut escaped = false;
    for (column, ch) in line.chars().enumerate() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => found.push((column, Brace::Open)),
            '}' => found.push((column, Brace::Close)),
            _ => {}
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_braces_with_columns() {
        assert_eq!(
            braces("@doc { x }"),
            vec![(5, Brace::Open), (9, Brace::Close)]
        );
    }

    #[test]
    fn ignores_strings_and_comments() {
        assert_eq!(braces(r#"title: "a { \" }";"#), vec![]);
        assert_eq!(braces("  // }"), vec![]);
    }
}
