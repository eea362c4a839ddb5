//! Configuration for the osf command and any other host of `osf-render`.
//!
//! `defaults/osf.default.toml` is compiled in and documents every key. A user
//! `osf.toml` only lists what it changes; [`Loader`] stacks it on the defaults
//! and the CLI's `--extra-*` overrides go last.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use osf_render::{CheckOptions, IndentRules, SheetLimits, Theme};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/osf.default.toml");

/// Top-level configuration consumed by osf applications.
#[derive(Debug, Clone, Deserialize)]
pub struct OsfConfig {
    pub preview: PreviewConfig,
    pub format: FormatConfig,
    pub check: CheckConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreviewConfig {
    pub theme: String,
    pub resolve_includes: bool,
    pub csp_source: String,
    pub sheet: SheetConfig,
}

impl PreviewConfig {
    pub fn theme(&self) -> Theme {
        Theme::from_name(&self.theme)
    }
}

/// Upper bounds on the rendered sheet grid.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetConfig {
    pub max_rows: usize,
    pub max_cols: usize,
}

impl From<&SheetConfig> for SheetLimits {
    fn from(config: &SheetConfig) -> Self {
        SheetLimits {
            max_rows: config.max_rows,
            max_cols: config.max_cols,
        }
    }
}

/// Mirrors the knobs exposed by the indentation formatter.
#[derive(Debug, Clone, Deserialize)]
pub struct FormatConfig {
    pub indent_string: String,
    pub max_blank_lines: usize,
}

impl From<FormatConfig> for IndentRules {
    fn from(config: FormatConfig) -> Self {
        IndentRules {
            indent_string: config.indent_string,
            max_blank_lines: config.max_blank_lines,
        }
    }
}

impl From<&FormatConfig> for IndentRules {
    fn from(config: &FormatConfig) -> Self {
        IndentRules {
            indent_string: config.indent_string.clone(),
            max_blank_lines: config.max_blank_lines,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckConfig {
    pub warn_unknown_blocks: bool,
}

impl From<&CheckConfig> for CheckOptions {
    fn from(config: &CheckConfig) -> Self {
        CheckOptions {
            warn_unknown_blocks: config.warn_unknown_blocks,
        }
    }
}

/// Builds an [`OsfConfig`] from `osf.default.toml` plus whatever the caller layers on top.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Seed with `defaults/osf.default.toml`, so every key has a value.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer an `osf.toml` the user named explicitly. It must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an `osf.toml` that may be absent, such as one in the working directory.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one dotted key, e.g. `preview.sheet.max_rows`. Applied after all files.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers and deserialize them into an [`OsfConfig`].
    pub fn build(self) -> Result<OsfConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in configuration with no user files or overrides.
pub fn load_defaults() -> Result<OsfConfig, ConfigError> {
    Loader::new().build()
}
