//! Preview themes
//!
//! The preview ships one baseline stylesheet (`css/baseline.css`). Each theme
//! only overrides a handful of CSS custom properties on top of it, so adding
//! per-theme styling later never touches the renderer. Theme lookup is total:
//! names that are not recognized fall back to [`Theme::Default`].

const BASELINE_CSS: &str = include_str!("../css/baseline.css");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Default,
    Minimal,
    Corporate,
    Academic,
    Creative,
    Technical,
    Retro,
    Modern,
    Elegant,
    Bold,
}

impl Theme {
    pub const ALL: [Theme; 10] = [
        Theme::Default,
        Theme::Minimal,
        Theme::Corporate,
        Theme::Academic,
        Theme::Creative,
        Theme::Technical,
        Theme::Retro,
        Theme::Modern,
        Theme::Elegant,
        Theme::Bold,
    ];

    /// Look up a theme by name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Theme {
        let name = name.trim();
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Minimal => "minimal",
            Theme::Corporate => "corporate",
            Theme::Academic => "academic",
            Theme::Creative => "creative",
            Theme::Technical => "technical",
            Theme::Retro => "retro",
            Theme::Modern => "modern",
            Theme::Elegant => "elegant",
            Theme::Bold => "bold",
        }
    }

    /// Class placed on `<body>`.
    pub fn body_class(self) -> String {
        format!("osf-theme-{}", self.name())
    }

    /// Baseline stylesheet followed by this theme's variable overrides.
    pub fn stylesheet(self) -> String {
        let (accent, font) = self.palette();
        format!(
            "{BASELINE_CSS}\n.{class} {{\n  --osf-accent: {accent};\n  --osf-font: {font};\n}}\n",
            class = self.body_class()
        )
    }

    fn palette(self) -> (&'static str, &'static str) {
        const SANS: &str = "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Helvetica, Arial, sans-serif";
        const SERIF: &str = "Georgia, \"Times New Roman\", serif";
        const MONO: &str = "\"SFMono-Regular\", Consolas, \"Liberation Mono\", monospace";
        match self {
            Theme::Default => ("#0066cc", SANS),
            Theme::Minimal => ("#333333", SANS),
            Theme::Corporate => ("#1f3a5f", SANS),
            Theme::Academic => ("#7a1f1f", SERIF),
            Theme::Creative => ("#d6336c", SANS),
            Theme::Technical => ("#2b8a3e", MONO),
            Theme::Retro => ("#b35c00", MONO),
            Theme::Modern => ("#5f3dc4", SANS),
            Theme::Elegant => ("#5c4b37", SERIF),
            Theme::Bold => ("#e03131", SANS),
        }
    }
}

/// The stylesheet every theme builds on.
pub fn baseline_css() -> &'static str {
    BASELINE_CSS
}
