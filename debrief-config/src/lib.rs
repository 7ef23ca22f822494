//! Shared configuration loader for the debrief toolchain.
//!
//! `defaults/debrief.default.toml` is embedded into every binary so that docs and runtime
//! behavior stay in sync. [`Loader`] layers the per-user file and any explicit `--config` file
//! on top of those defaults before deserializing into [`DebriefConfig`].
//!
//! Tables merge key by key, arrays do not: a user file that defines `[[highlight.rules]]`
//! replaces the whole standard rule list. Without one, the parser's built-in vocabulary is used.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use debrief_parser::{Category, FeedbackParser, HighlightRule, Highlighter, RuleError};
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/debrief.default.toml");

/// Top-level configuration consumed by debrief applications.
#[derive(Debug, Clone, Deserialize)]
pub struct DebriefConfig {
    pub feedback: FeedbackConfig,
    #[serde(default)]
    pub highlight: HighlightConfig,
}

/// Mirrors the knobs exposed by [`FeedbackParser`].
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackConfig {
    pub strip_event_annotations: bool,
}

/// `None` keeps the standard rules from `debrief_parser`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HighlightConfig {
    #[serde(default)]
    pub rules: Option<Vec<RuleConfig>>,
}

/// One highlight rule. `pattern` takes precedence over `words` when both are given.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    pub category: Category,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub words: Vec<String>,
}

impl RuleConfig {
    pub fn compile(&self) -> Result<HighlightRule, RuleError> {
        match &self.pattern {
            Some(pattern) => HighlightRule::pattern(self.category, pattern),
            None => HighlightRule::words(self.category, &self.words),
        }
    }
}

impl DebriefConfig {
    pub fn feedback_parser(&self) -> FeedbackParser {
        FeedbackParser::new().strip_event_annotations(self.feedback.strip_event_annotations)
    }

    /// Compile the configured rules, in order, or fall back to the standard ones.
    pub fn highlighter(&self) -> Result<Highlighter, RuleError> {
        let Some(configured) = &self.highlight.rules else {
            return Ok(Highlighter::default());
        };
        let rules = configured
            .iter()
            .map(RuleConfig::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Highlighter::new(rules))
    }
}

/// Where the per-user file lives: `$XDG_CONFIG_HOME/debrief/config.toml`, else
/// `$HOME/.config/debrief/config.toml`.
pub fn user_config_path() -> Option<PathBuf> {
    resolve_user_config_path(
        std::env::var_os("XDG_CONFIG_HOME"),
        std::env::var_os("HOME"),
    )
}

fn resolve_user_config_path(
    xdg_config_home: Option<OsString>,
    home: Option<OsString>,
) -> Option<PathBuf> {
    let base = match xdg_config_home.filter(|dir| !dir.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(home.filter(|dir| !dir.is_empty())?).join(".config"),
    };
    Some(base.join("debrief").join("config.toml"))
}

/// Layers configuration sources over the embedded defaults. Later sources win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start from the embedded defaults only.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add the per-user file if one exists. Nothing is layered when no location resolves.
    pub fn with_user_config(self) -> Self {
        match user_config_path() {
            Some(path) => self.with_toml(&path, false),
            None => self,
        }
    }

    /// Add a file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        tracing::debug!(path = %path.display(), required, "layering config file");
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one dotted key, e.g. from a CLI flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<DebriefConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

/// The embedded defaults, with no user layers.
pub fn load_defaults() -> Result<DebriefConfig, ConfigError> {
    Loader::new().build()
}
