//! Default values for optional document fields.
//!
//! Every optional field in the document model resolves to one of these when
//! the tree is deserialized (or when a block is built in code through its
//! `Default` impl), so renderers never deal with missing values.

/// Header title used when the document has no `meta.title`.
pub const DOCUMENT_TITLE: &str = "Untitled Document";

/// `<title>` used when the document has no `meta.title`.
pub const PAGE_TITLE: &str = "OSF Preview";

/// Target for links that carry no url.
pub const LINK_URL: &str = "#";

/// Table style class when the block does not name one.
pub const TABLE_STYLE: &str = "bordered";

/// Chart type when the block does not name one.
pub const CHART_TYPE: &str = "bar";

/// Chart heading when the block has no title.
pub const CHART_TITLE: &str = "Chart";

/// Sheet heading when the block has no name.
pub const SHEET_NAME: &str = "Sheet";

/// Placeholder shown in a sheet without any cell data.
pub const SHEET_EMPTY: &str = "No data";

pub(crate) fn table_style() -> String {
    TABLE_STYLE.to_string()
}

pub(crate) fn chart_type() -> String {
    CHART_TYPE.to_string()
}

pub(crate) fn chart_title() -> String {
    CHART_TITLE.to_string()
}

pub(crate) fn sheet_name() -> String {
    SHEET_NAME.to_string()
}
