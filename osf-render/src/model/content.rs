use crate::defaults;
use serde::Deserialize;

/// Structured content inside a slide.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Paragraph {
        #[serde(default)]
        content: Vec<TextRun>,
    },
    UnorderedList {
        #[serde(default)]
        items: Vec<RunSequence>,
    },
    OrderedList {
        #[serde(default)]
        items: Vec<RunSequence>,
    },
    Blockquote {
        #[serde(default)]
        content: Vec<RunSequence>,
    },
    Code {
        #[serde(default)]
        content: String,
    },
    Image {
        #[serde(default)]
        url: String,
        #[serde(default)]
        alt: String,
    },
    /// A content block of a type this renderer does not know. Skipped on output.
    #[serde(other)]
    Unsupported,
}

/// An ordered run sequence: a list item or a paragraph nested in a blockquote.
///
/// Accepts either a bare array of runs or an object with a `content` array.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "SequenceRepr")]
pub struct RunSequence {
    pub runs: Vec<TextRun>,
}

impl RunSequence {
    pub fn new(runs: Vec<TextRun>) -> Self {
        Self { runs }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SequenceRepr {
    Bare(Vec<TextRun>),
    Wrapped {
        #[serde(default)]
        content: Vec<TextRun>,
    },
}

impl From<SequenceRepr> for RunSequence {
    fn from(repr: SequenceRepr) -> Self {
        match repr {
            SequenceRepr::Bare(runs) | SequenceRepr::Wrapped { content: runs } => Self { runs },
        }
    }
}

/// An inline run of text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RunRepr")]
pub enum TextRun {
    Plain(String),
    Styled(StyledRun),
    Link(LinkRun),
    Image(ImageRun),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkRun {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageRun {
    pub url: String,
    pub alt: String,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        TextRun::Plain(text.into())
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        TextRun::Link(LinkRun {
            text: text.into(),
            url: url.into(),
        })
    }

    pub fn image(url: impl Into<String>, alt: impl Into<String>) -> Self {
        TextRun::Image(ImageRun {
            url: url.into(),
            alt: alt.into(),
        })
    }
}

impl StyledRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn strike(mut self) -> Self {
        self.strike = true;
        self
    }
}

impl From<StyledRun> for TextRun {
    fn from(run: StyledRun) -> Self {
        TextRun::Styled(run)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RunRepr {
    Plain(String),
    Object(RunObject),
}

#[derive(Deserialize)]
struct RunObject {
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    text: String,
    url: Option<String>,
    #[serde(default)]
    alt: String,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underline: bool,
    #[serde(default)]
    strike: bool,
}

impl From<RunRepr> for TextRun {
    fn from(repr: RunRepr) -> Self {
        let object = match repr {
            RunRepr::Plain(text) => return TextRun::Plain(text),
            RunRepr::Object(object) => object,
        };

        match object.kind.as_deref() {
            Some("link") => TextRun::Link(LinkRun {
                text: object.text,
                url: object.url.unwrap_or_else(|| defaults::LINK_URL.to_string()),
            }),
            Some("image") => TextRun::Image(ImageRun {
                url: object.url.unwrap_or_default(),
                alt: object.alt,
            }),
            _ => TextRun::Styled(StyledRun {
                text: object.text,
                bold: object.bold,
                italic: object.italic,
                underline: object.underline,
                strike: object.strike,
            }),
        }
    }
}
