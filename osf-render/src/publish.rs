//! Preview publishing.
//!
//! One call that renders a parse outcome and either hands the page back or
//! writes it to disk. Editor hosts use the in-memory form; the CLI writes
//! files when `-o` is given.

use crate::error::{ParseError, PublishError};
use crate::html::{self, RenderOptions};
use crate::model::Document;
use crate::notice::{NoticeSink, NullSink};
use std::fs;
use std::path::{Path, PathBuf};

/// Describes one preview to publish.
///
/// ```ignore
/// let spec = PreviewSpec::new(parser.parse(source, &opts))
///     .with_options(RenderOptions::new(Theme::Elegant))
///     .with_output_path("preview.html");
/// ```
pub struct PreviewSpec<'a> {
    /// Outcome of parsing the source. A failure publishes the error page.
    pub parsed: Result<Document, ParseError>,
    pub options: RenderOptions,
    /// Write the page here instead of returning it.
    pub output: Option<PathBuf>,
    pub sink: &'a dyn NoticeSink,
}

impl<'a> PreviewSpec<'a> {
    pub fn new(parsed: Result<Document, ParseError>) -> Self {
        Self {
            parsed,
            options: RenderOptions::default(),
            output: None,
            sink: &NullSink,
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_sink(mut self, sink: &'a dyn NoticeSink) -> Self {
        self.sink = sink;
        self
    }
}

/// Where a published preview ended up.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    InMemory(String),
    File(PathBuf),
}

/// Render the parse outcome held by `spec` and deliver it.
///
/// Parse failures are not errors here: they publish the error page, like
/// any other preview. Only writing the output can fail.
pub fn publish(spec: PreviewSpec<'_>) -> Result<PublishArtifact, PublishError> {
    let page = html::preview(spec.parsed, &spec.options, spec.sink);
    match spec.output {
        Some(path) => fs::write(&path, page)
            .map(|_| PublishArtifact::File(path.clone()))
            .map_err(|source| PublishError::Write { path, source }),
        None => Ok(PublishArtifact::InMemory(page)),
    }
}
