//! Engine configuration
//!
//! `defaults/engine.default.toml` is embedded into the crate so that docs and runtime
//! behavior stay in sync. Callers layer their own files on top of those defaults via
//! [`Loader`] before deserializing into [`EngineConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/engine.default.toml");

/// Knobs consumed by [`crate::grammar::Grammar`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub repetition: RepetitionConfig,
    #[serde(default)]
    pub parse: ParseConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RepetitionConfig {
    /// Iteration cap for grammar repetitions; `None` means unbounded.
    #[serde(default)]
    pub max: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParseConfig {
    /// Require the start rule to consume the whole input.
    pub require_complete: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            require_complete: true,
        }
    }
}

/// Builds an [`EngineConfig`]: embedded engine defaults first, then each layered source
/// in the order it was added, later sources winning key by key.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// A loader holding only `engine.default.toml`.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file of engine settings. `build` fails if the file does not exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a TOML file that may be absent, such as a per-project grammar override.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one dotted key, e.g. `repetition.max`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers and deserialize them into an [`EngineConfig`].
    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The engine settings shipped with the crate, with nothing layered on top.
pub fn load_defaults() -> Result<EngineConfig, ConfigError> {
    Loader::new().build()
}
