//! Tool configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.  It
//! only covers how the tool behaves (output, where the project record
//! lives); the project record itself is read through `FileConfigStore`.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables `CLEAN_<SECTION>__<KEY>`, e.g. `CLEAN_PROJECT__RECORD`
//! 3. Config file (`--config`, else the platform config directory)
//! 4. Built-in defaults

use std::path::PathBuf;

use anyhow::Context;
use clean_adapters::FileConfigStore;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Project record settings.
    pub project: ProjectSection,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSection {
    /// Location of the project record; `~/.clean/cleanrc` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    pub const ENV_PREFIX: &'static str = "CLEAN";

    /// Load configuration from defaults, file and environment.
    ///
    /// A file passed explicitly must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        let defaults = Self::default();

        let settings = ::config::Config::builder()
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", defaults.output.format)?
            .add_source(
                ::config::File::from(path.as_path())
                    .format(::config::FileFormat::Toml)
                    .required(config_file.is_some()),
            )
            .add_source(
                ::config::Environment::with_prefix(Self::ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.clean.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "clean", "clean")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".clean.toml"))
    }

    /// Where the project record is read and written.
    pub fn record_path(&self) -> Option<PathBuf> {
        self.project
            .record
            .clone()
            .or_else(FileConfigStore::default_path)
    }

    /// Value of a dotted key, as printed by `clean config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "project.record" => Some(
                self.record_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.format" => Some(self.output.format.clone()),
            _ => None,
        }
    }
}
