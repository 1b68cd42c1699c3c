//! Shared configuration loader for the translatable toolchain.
//!
//! `defaults/translatable.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`TranslatableConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use translatable_core::{FilterError, FilterList, FilterRule, Segmentation, StringTable};

const DEFAULT_TOML: &str = include_str!("../defaults/translatable.default.toml");

/// Top-level configuration consumed by translatable applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslatableConfig {
    pub editor: EditorConfig,
    pub filters: FiltersConfig,
    pub locale: LocaleConfig,
    /// UI strings, keyed by locale then by string id
    pub strings: HashMap<String, HashMap<String, String>>,
}

impl TranslatableConfig {
    /// String table built from the configured strings and default locale.
    pub fn string_table(&self) -> StringTable {
        let mut table = StringTable::new(self.locale.default.clone());
        table.extend(self.strings.clone());
        table
    }
}

/// Editor surface switches.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EditorConfig {
    pub blockable: bool,
    pub preview: bool,
    pub editable: bool,
}

impl EditorConfig {
    pub fn segmentation(&self) -> Segmentation {
        Segmentation::from_blockable(self.blockable)
    }
}

/// Find/replace rules applied around conversions.
#[derive(Debug, Clone, Deserialize)]
pub struct FiltersConfig {
    #[serde(default)]
    pub input: Vec<FilterRule>,
    #[serde(default)]
    pub output: Vec<FilterRule>,
}

impl FiltersConfig {
    /// Compile the input rules. Invalid rules are reported with their position.
    pub fn input_filters(&self) -> Result<FilterList, FilterError> {
        FilterList::try_from(self.input.as_slice())
    }

    /// Compile the output rules.
    pub fn output_filters(&self) -> Result<FilterList, FilterError> {
        FilterList::try_from(self.output.as_slice())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocaleConfig {
    pub default: String,
    #[serde(default)]
    pub requested: Option<String>,
}

impl LocaleConfig {
    /// The requested locale, or the default one when none was requested.
    pub fn effective(&self) -> &str {
        self.requested.as_deref().unwrap_or(&self.default)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        log::debug!("Layering configuration file {}", path.as_ref().display());
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer TOML held in memory.
    pub fn with_toml_str(mut self, toml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(toml, FileFormat::Toml));
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TranslatableConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TranslatableConfig, ConfigError> {
    Loader::new().build()
}
