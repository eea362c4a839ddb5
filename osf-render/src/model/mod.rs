//! Typed OSF document tree
//!
//!     The tree is produced by the external OSF parser and consumed read-only
//!     by the renderer. Three families of nodes exist:
//!
//!     - [`Block`]: top-level units. This family is open: unknown `type` tags
//!       deserialize to [`Block::Unknown`] instead of failing, since new block
//!       types are added to the format over time.
//!     - [`ContentBlock`]: structured slide content. Closed.
//!     - [`TextRun`]: inline runs inside content blocks. Closed.
//!
//!     Optional fields are resolved against [`crate::defaults`] during
//!     deserialization, so a deserialized tree is always fully populated.

mod content;
mod document;
mod scalar;

pub use content::{ContentBlock, ImageRun, LinkRun, RunSequence, StyledRun, TextRun};
pub use document::{
    Alignment, Block, ChartBlock, CodeBlock, DiagramBlock, DocBlock, Document, MetaBlock,
    SheetBlock, SlideBlock, SlideLayout, TableBlock, TableCell, TableRow, UnknownBlock,
};
pub use scalar::Scalar;
