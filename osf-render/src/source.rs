//! The parser seam.
//!
//! The OSF grammar itself lives in an external parser. What reaches this crate
//! is its output: a typed block tree. [`DocumentParser`] is the contract for
//! anything that can produce that tree; [`JsonTreeParser`] reads the tree from
//! the JSON the external parser emits and resolves `include` blocks.

use crate::error::ParseError;
use crate::model::{Block, Document};
use std::fs;
use std::path::{Path, PathBuf};

/// Includes nested deeper than this are rejected.
pub const MAX_INCLUDE_DEPTH: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Replace `include` blocks with the blocks of the file they reference.
    pub resolve_includes: bool,
    /// Directory relative includes are resolved against. Defaults to the
    /// current directory.
    pub base_path: Option<PathBuf>,
}

impl ParseOptions {
    pub fn with_includes(base_path: impl Into<PathBuf>) -> Self {
        Self {
            resolve_includes: true,
            base_path: Some(base_path.into()),
        }
    }
}

/// Turns source text into a document tree.
pub trait DocumentParser {
    fn parse(&self, source: &str, options: &ParseOptions) -> Result<Document, ParseError>;
}

/// Reads the JSON block tree produced by the OSF parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTreeParser;

impl DocumentParser for JsonTreeParser {
    fn parse(&self, source: &str, options: &ParseOptions) -> Result<Document, ParseError> {
        let doc: Document = serde_json::from_str(source)?;
        if !options.resolve_includes {
            return Ok(doc);
        }
        let base = options
            .base_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let blocks = IncludeResolver::default().expand(doc.blocks, &base)?;
        Ok(Document::new(blocks))
    }
}

impl JsonTreeParser {
    /// Read and parse a file. Relative includes resolve against the file's
    /// directory, and the file itself takes part in cycle detection.
    pub fn parse_file(&self, path: &Path, resolve_includes: bool) -> Result<Document, ParseError> {
        let source = fs::read_to_string(path).map_err(|err| {
            ParseError::new(format!("failed to read '{}': {err}", path.display()))
        })?;
        let doc: Document = serde_json::from_str(&source)?;
        if !resolve_includes {
            return Ok(doc);
        }

        let mut resolver = IncludeResolver::default();
        if let Ok(canonical) = fs::canonicalize(path) {
            resolver.stack.push(canonical);
        }
        let dir = parent_dir(path);
        let blocks = resolver.expand(doc.blocks, &dir)?;
        Ok(Document::new(blocks))
    }
}

/// The file an `include` block points at, if `block` is one.
pub fn include_target(block: &Block) -> Option<&str> {
    match block {
        Block::Unknown(unknown) if unknown.kind == "include" => unknown
            .attributes
            .get("src")
            .or_else(|| unknown.attributes.get("path"))
            .and_then(|value| value.as_str()),
        _ => None,
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[derive(Debug, Default)]
struct IncludeResolver {
    /// Files being expanded, root included, for cycle detection.
    stack: Vec<PathBuf>,
    /// Include levels currently open. The root document is level 0.
    depth: usize,
}

impl IncludeResolver {
    fn expand(&mut self, blocks: Vec<Block>, dir: &Path) -> Result<Vec<Block>, ParseError> {
        let mut expanded = Vec::with_capacity(blocks.len());
        for block in blocks {
            match include_target(&block) {
                Some(target) => {
                    let included = self.load(&dir.join(target))?;
                    expanded.extend(included);
                }
                None => expanded.push(block),
            }
        }
        Ok(expanded)
    }

    fn load(&mut self, path: &Path) -> Result<Vec<Block>, ParseError> {
        if self.depth >= MAX_INCLUDE_DEPTH {
            return Err(ParseError::new(format!(
                "includes nested deeper than {MAX_INCLUDE_DEPTH} levels at '{}'",
                path.display()
            )));
        }
        let canonical = fs::canonicalize(path).map_err(|err| {
            ParseError::new(format!("cannot include '{}': {err}", path.display()))
        })?;
        if self.stack.contains(&canonical) {
            return Err(ParseError::new(format!(
                "include cycle detected at '{}'",
                path.display()
            )));
        }

        log::debug!("including {}", canonical.display());
        let source = fs::read_to_string(&canonical).map_err(|err| {
            ParseError::new(format!("cannot include '{}': {err}", path.display()))
        })?;
        let doc: Document = serde_json::from_str(&source).map_err(|err| {
            ParseError::new(format!("in included file '{}': {err}", path.display()))
        })?;

        let dir = parent_dir(&canonical);
        self.stack.push(canonical);
        self.depth += 1;
        let blocks = self.expand(doc.blocks, &dir);
        self.depth -= 1;
        self.stack.pop();
        blocks
    }
}
