//! Shared configuration loader for the tgmd toolchain.
//!
//! `defaults/tgmd.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`TgmdConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tgmd_babel::common::code::DefaultCodeFormatter;
use tgmd_babel::common::links::StandardResolver;
use tgmd_babel::formats::telegram::{EscapeConfig, TelegramFormat, TelegramOptions};

const DEFAULT_TOML: &str = include_str!("../defaults/tgmd.default.toml");

/// Top-level configuration consumed by tgmd applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TgmdConfig {
    pub export: ExportConfig,
    pub links: LinksConfig,
    pub code: CodeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub escape: bool,
}

/// Link handling: which types are network links and where internal ones point.
#[derive(Debug, Clone, Deserialize)]
pub struct LinksConfig {
    pub network_schemes: Vec<String>,
    #[serde(default)]
    pub targets: Vec<LinkTarget>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkTarget {
    pub key: String,
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CodeConfig {
    pub preserve_indentation: bool,
}

impl From<&TgmdConfig> for TelegramOptions {
    fn from(config: &TgmdConfig) -> Self {
        TelegramOptions {
            escape: EscapeConfig {
                enabled: config.export.escape,
            },
            network_schemes: config.links.network_schemes.clone(),
        }
    }
}

impl From<&LinksConfig> for StandardResolver {
    fn from(config: &LinksConfig) -> Self {
        StandardResolver::new().with_targets(
            config
                .targets
                .iter()
                .map(|target| (target.key.clone(), target.path.clone())),
        )
    }
}

impl From<&CodeConfig> for DefaultCodeFormatter {
    fn from(config: &CodeConfig) -> Self {
        DefaultCodeFormatter {
            preserve_indentation: config.preserve_indentation,
        }
    }
}

impl TgmdConfig {
    /// A telegram format carrying every configured knob.
    pub fn telegram_format(&self) -> TelegramFormat {
        TelegramFormat::new(self.into())
            .with_resolver((&self.links).into())
            .with_formatter((&self.code).into())
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TgmdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TgmdConfig, ConfigError> {
    Loader::new().build()
}
