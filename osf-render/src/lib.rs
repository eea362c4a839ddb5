//! Preview rendering for OSF documents
//!
//!     This crate turns an OSF document (meta, doc, slide, sheet, table, chart, diagram and code
//!     blocks) into one self-contained HTML page for an editor webview or a browser tab.
//!
//!     It is a pure lib: it never prints, reads env vars or assumes a shell. The only I/O is
//!     reading include files during parsing and writing the page in [`publish`]. The CLI lives
//!     in osf-cli, configuration in osf-config.
//!
//! Architecture
//!
//!     source text ──► DocumentParser ──► Document ──► html::render ──► page
//!                                           │
//!                                           └──► RenderNotice ──► NoticeSink
//!
//!     The file structure :
//!     .
//!     ├── error.rs            # ParseError, PublishError
//!     ├── defaults.rs         # fallback titles, styles, placeholder text
//!     ├── model               # Document, Block and inline content types
//!     ├── source.rs           # DocumentParser seam, JSON tree parser, includes
//!     ├── html                # escaping, inline/markdown conversion, per-block renderers, page shell
//!     ├── theme.rs            # named themes and the baseline stylesheet
//!     ├── notice.rs           # render notices and their sinks
//!     ├── scan.rs             # brace scanner shared by lint and indent
//!     ├── lint.rs             # source diagnostics
//!     ├── indent.rs           # source re-indentation
//!     └── publish.rs          # render and deliver in one call
//!
//! Leniency
//!
//!     Rendering never fails. Unknown block types render a placeholder, unknown slide content is
//!     skipped, malformed sheet coordinates are dropped. Each of those emits a [`RenderNotice`] so
//!     hosts can surface the loss. A document that does not parse renders the error page instead.
//!
//! Testing
//!     tests
//!     ├── html
//!     ├── source
//!     └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories, so they are included
//!     from tests/lib.rs.

pub mod defaults;
pub mod error;
pub mod html;
pub mod indent;
pub mod lint;
pub mod model;
pub mod notice;
pub mod publish;
mod scan;
pub mod source;
pub mod theme;

pub use error::{ParseError, PublishError};
pub use html::{preview, render, render_error, render_with_sink, Csp, RenderOptions, SheetLimits};
pub use indent::{format_source, IndentRules};
pub use lint::{check, CheckOptions, Diagnostic, Severity};
pub use model::{Block, Document};
pub use notice::{CollectingSink, LogSink, NoticeSink, NullSink, RenderNotice};
pub use publish::{publish, PreviewSpec, PublishArtifact};
pub use source::{DocumentParser, JsonTreeParser, ParseOptions};
pub use theme::Theme;
