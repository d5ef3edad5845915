//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `PAYROLL__STORAGE__DATA_FILE`, ...
//! 3. Config file (`--config`, or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::ListFormat;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where employee records live.
    pub storage: StorageConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub list_format: ListFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                data_file: Self::default_data_file(),
            },
            output: OutputConfig {
                no_color: false,
                list_format: ListFormat::Table,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the file, then the environment.
    ///
    /// An explicit `config_file` must exist when `require_explicit` is set;
    /// the default location is always optional.
    pub fn load(config_file: Option<&PathBuf>, require_explicit: bool) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), require_explicit),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        let defaults = Config::try_from(&Self::default())
            .context("Failed to encode built-in defaults")?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(File::from(path.as_path()).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix("PAYROLL")
                    .prefix_separator("__")
                    .separator("__"),
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
    /// falling back to `.payroll.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "payroll", "payroll")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".payroll.toml"))
    }

    /// Default employee data file, in the platform data dir.
    pub fn default_data_file() -> PathBuf {
        directories::ProjectDirs::from("org", "payroll", "payroll")
            .map(|d| d.data_dir().join("employees.json"))
            .unwrap_or_else(|| PathBuf::from("employees.json"))
    }

    /// Look up a dotted key, rendered as text.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage.data_file" => Some(self.storage.data_file.display().to_string()),
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.list_format" => Some(
                match self.output.list_format {
                    ListFormat::Table => "table",
                    ListFormat::Json => "json",
                    ListFormat::Csv => "csv",
                }
                .to_owned(),
            ),
            _ => None,
        }
    }

    /// Every key accepted by [`AppConfig::get`].
    pub const KEYS: [&'static str; 3] =
        ["storage.data_file", "output.no_color", "output.list_format"];

    /// Serialise as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn write_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let toml = self.to_toml().context("Failed to serialise configuration")?;
        std::fs::write(path, toml).with_context(|| format!("Failed to write {}", path.display()))
    }
}
