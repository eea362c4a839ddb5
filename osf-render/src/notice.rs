//! Render notices and the sinks that receive them.
//!
//! Rendering never fails, but it does make silent decisions (skipping an
//! unknown content block, truncating a huge sheet). Those decisions are
//! reported as [`RenderNotice`] values to a caller-supplied [`NoticeSink`]
//! instead of a global logger, which keeps the render functions pure.

use std::fmt;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderNotice {
    /// A top-level block with an unrecognized type tag was shown as a placeholder.
    UnknownBlock { kind: String },
    /// A slide content block of an unsupported type was skipped.
    SkippedContent { slide: String },
    /// A sheet cell key that is not a `row,col` pair was ignored.
    MalformedCellKey { sheet: String, key: String },
    /// A sheet grid exceeded the configured limits and was cut down.
    SheetTruncated {
        sheet: String,
        rows: usize,
        cols: usize,
        shown_rows: usize,
        shown_cols: usize,
    },
}

impl RenderNotice {
    /// Whether this notice points at content the reader will not see.
    pub fn is_lossy(&self) -> bool {
        matches!(
            self,
            RenderNotice::SkippedContent { .. } | RenderNotice::SheetTruncated { .. }
        )
    }
}

impl fmt::Display for RenderNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderNotice::UnknownBlock { kind } => {
                write!(f, "unknown block type '{kind}' rendered as placeholder")
            }
            RenderNotice::SkippedContent { slide } => {
                write!(f, "skipped unsupported content block in slide '{slide}'")
            }
            RenderNotice::MalformedCellKey { sheet, key } => {
                write!(f, "ignored malformed cell key '{key}' in sheet '{sheet}'")
            }
            RenderNotice::SheetTruncated {
                sheet,
                rows,
                cols,
                shown_rows,
                shown_cols,
            } => write!(
                f,
                "sheet '{sheet}' truncated from {rows}x{cols} to {shown_rows}x{shown_cols}"
            ),
        }
    }
}

/// Receiver for render notices.
pub trait NoticeSink {
    fn notice(&self, notice: RenderNotice);
}

/// Discards every notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NoticeSink for NullSink {
    fn notice(&self, _notice: RenderNotice) {}
}

/// Forwards notices to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl NoticeSink for LogSink {
    fn notice(&self, notice: RenderNotice) {
        if notice.is_lossy() {
            log::warn!("{notice}");
        } else {
            log::debug!("{notice}");
        }
    }
}

/// Keeps notices in memory for later inspection.
#[derive(Debug, Default)]
pub struct CollectingSink {
    notices: Mutex<Vec<RenderNotice>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_notices(self) -> Vec<RenderNotice> {
        self.notices
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl NoticeSink for CollectingSink {
    fn notice(&self, notice: RenderNotice) {
        let mut notices = self
            .notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        notices.push(notice);
    }
}
