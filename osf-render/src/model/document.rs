use super::{ContentBlock, Scalar};
use crate::defaults;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// The parsed root: an ordered sequence of blocks.
///
/// Deserializes from either `{"blocks": [...]}` or a bare array of blocks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// The first `meta` block, if any.
    pub fn meta(&self) -> Option<&MetaBlock> {
        self.blocks.iter().find_map(|block| match block {
            Block::Meta(meta) => Some(meta),
            _ => None,
        })
    }
}

/// A top-level document block, discriminated by its `type` tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Meta(MetaBlock),
    Doc(DocBlock),
    Slide(SlideBlock),
    Sheet(SheetBlock),
    Table(TableBlock),
    Chart(ChartBlock),
    Diagram(DiagramBlock),
    Code(CodeBlock),
    Unknown(UnknownBlock),
}

impl Block {
    /// The `type` tag this block was (or would be) written with.
    pub fn kind(&self) -> &str {
        match self {
            Block::Meta(_) => "meta",
            Block::Doc(_) => "doc",
            Block::Slide(_) => "slide",
            Block::Sheet(_) => "sheet",
            Block::Table(_) => "table",
            Block::Chart(_) => "chart",
            Block::Diagram(_) => "diagram",
            Block::Code(_) => "osfcode",
            Block::Unknown(unknown) => &unknown.kind,
        }
    }

    fn from_tagged(kind: &str, value: Value) -> Result<Self, serde_json::Error> {
        let block = match kind {
            "meta" => Block::Meta(serde_json::from_value(value)?),
            "doc" => Block::Doc(serde_json::from_value(value)?),
            "slide" => Block::Slide(serde_json::from_value(value)?),
            "sheet" => Block::Sheet(serde_json::from_value(value)?),
            "table" => Block::Table(serde_json::from_value(value)?),
            "chart" => Block::Chart(serde_json::from_value(value)?),
            "diagram" => Block::Diagram(serde_json::from_value(value)?),
            "osfcode" | "code" => Block::Code(serde_json::from_value(value)?),
            _ => {
                let attributes = match value {
                    Value::Object(map) => map,
                    _ => Map::new(),
                };
                Block::Unknown(UnknownBlock {
                    kind: kind.to_string(),
                    attributes,
                })
            }
        };
        Ok(block)
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut value = Value::deserialize(deserializer)?;
        let kind = match value.as_object_mut().and_then(|map| map.remove("type")) {
            Some(Value::String(kind)) => kind,
            Some(_) => return Err(de::Error::custom("block `type` must be a string")),
            None => return Err(de::Error::missing_field("type")),
        };
        Block::from_tagged(&kind, value)
            .map_err(|err| de::Error::custom(format!("invalid `{kind}` block: {err}")))
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = Document;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an array of blocks or an object with a `blocks` array")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Document, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut blocks = Vec::new();
        while let Some(block) = seq.next_element()? {
            blocks.push(block);
        }
        Ok(Document { blocks })
    }

    fn visit_map<A>(self, mut map: A) -> Result<Document, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut blocks = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == "blocks" {
                blocks = Some(map.next_value()?);
            } else {
                map.next_value::<de::IgnoredAny>()?;
            }
        }
        Ok(Document {
            blocks: blocks.unwrap_or_default(),
        })
    }
}

/// Document metadata. Never rendered as content; feeds the page header.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MetaBlock {
    #[serde(default)]
    pub props: BTreeMap<String, Scalar>,
}

impl MetaBlock {
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// A property rendered as text; empty values count as absent.
    pub fn text(&self, key: &str) -> Option<String> {
        self.props
            .get(key)
            .map(|value| value.to_string())
            .filter(|value| !value.trim().is_empty())
    }

    pub fn title(&self) -> Option<String> {
        self.text("title")
    }

    pub fn author(&self) -> Option<String> {
        self.text("author")
    }

    pub fn date(&self) -> Option<String> {
        self.text("date")
    }
}

/// Free-form prose in a markdown-like syntax.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DocBlock {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum SlideLayout {
    TitleOnly,
    #[default]
    TitleAndContent,
    TwoColumn,
    ThreeColumn,
}

impl SlideLayout {
    /// Parse a layout name; unknown names fall back to the default layout.
    pub fn from_name(name: &str) -> Self {
        match name {
            "TitleOnly" => SlideLayout::TitleOnly,
            "TwoColumn" => SlideLayout::TwoColumn,
            "ThreeColumn" => SlideLayout::ThreeColumn,
            _ => SlideLayout::TitleAndContent,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            SlideLayout::TitleOnly => "layout-title-only",
            SlideLayout::TitleAndContent => "layout-title-and-content",
            SlideLayout::TwoColumn => "layout-two-column",
            SlideLayout::ThreeColumn => "layout-three-column",
        }
    }
}

impl From<String> for SlideLayout {
    fn from(name: String) -> Self {
        SlideLayout::from_name(&name)
    }
}

/// A presentation slide. Structured `content` wins over legacy `bullets`
/// whenever it is non-empty.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SlideBlock {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub layout: SlideLayout,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// A spreadsheet with sparse cells keyed by `"row,col"` (1-indexed).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SheetBlock {
    #[serde(default = "defaults::sheet_name")]
    pub name: String,
    #[serde(default)]
    pub cols: Vec<String>,
    #[serde(default)]
    pub data: BTreeMap<String, Scalar>,
}

impl Default for SheetBlock {
    fn default() -> Self {
        Self {
            name: defaults::sheet_name(),
            cols: Vec::new(),
            data: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

impl From<String> for Alignment {
    fn from(name: String) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "center" => Alignment::Center,
            "right" => Alignment::Right,
            _ => Alignment::Left,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableBlock {
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default = "defaults::table_style")]
    pub style: String,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub alignment: Vec<Alignment>,
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

impl TableBlock {
    /// Alignment of a column; columns without an entry are left aligned.
    pub fn alignment_of(&self, column: usize) -> Alignment {
        self.alignment.get(column).copied().unwrap_or_default()
    }
}

impl Default for TableBlock {
    fn default() -> Self {
        Self {
            caption: None,
            style: defaults::table_style(),
            headers: Vec::new(),
            alignment: Vec::new(),
            rows: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TableRow {
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "CellRepr")]
pub struct TableCell {
    pub text: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CellRepr {
    Bare(String),
    Wrapped {
        #[serde(default)]
        text: String,
    },
}

impl From<CellRepr> for TableCell {
    fn from(repr: CellRepr) -> Self {
        match repr {
            CellRepr::Bare(text) | CellRepr::Wrapped { text } => TableCell { text },
        }
    }
}

impl From<&str> for TableCell {
    fn from(text: &str) -> Self {
        TableCell {
            text: text.to_string(),
        }
    }
}

/// A chart. Only summarized in the preview.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartBlock {
    #[serde(default = "defaults::chart_title")]
    pub title: String,
    #[serde(default = "defaults::chart_type", alias = "chartType")]
    pub chart_type: String,
    #[serde(default)]
    pub data: Vec<Value>,
}

impl Default for ChartBlock {
    fn default() -> Self {
        Self {
            title: defaults::chart_title(),
            chart_type: defaults::chart_type(),
            data: Vec::new(),
        }
    }
}

/// A diagram. Shown as its source text only.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DiagramBlock {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(default)]
    pub code: String,
}

/// A code listing (`osfcode`).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CodeBlock {
    #[serde(default, alias = "language")]
    pub lang: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub code: String,
}

/// A block whose `type` this renderer does not know.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnknownBlock {
    pub kind: String,
    /// Remaining fields of the block, kept for callers that interpret them.
    pub attributes: Map<String, Value>,
}

impl UnknownBlock {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attributes: Map::new(),
        }
    }
}
