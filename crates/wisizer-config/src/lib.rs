//! Configuration for the wisizer CLI.
//!
//! One TOML file holding output defaults, sizing-constant overrides, an
//! optional external catalogue and the calculation journal settings.
//! Layered with `WISIZER_*` environment variables via figment.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use wisizer_core::{CoreError, Generation, SizingConstants};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Overrides for individual sizing constants.
    #[serde(default)]
    pub sizing: SizingConstants,

    /// Catalogue TOML replacing the built-in data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    #[serde(default)]
    pub journal: JournalSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Scenario used when `--scenario` is omitted.
    #[serde(default = "default_scenario")]
    pub scenario: String,

    /// Generation used when `--generation` is omitted.
    #[serde(default = "default_generation")]
    pub generation: Generation,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            scenario: default_scenario(),
            generation: default_generation(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_scenario() -> String {
    "open-office-minimal-walls".into()
}
fn default_generation() -> Generation {
    Generation::WiFi6
}

/// Append-only log of `size` runs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct JournalSettings {
    #[serde(default)]
    pub enabled: bool,

    /// Defaults to `calculations.jsonl` in the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Reject sizing overrides the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sizing.validate().map_err(|err| match err {
            CoreError::InvalidConstants { field, reason } => ConfigError::Validation {
                field: format!("sizing.{field}"),
                reason,
            },
            other => ConfigError::Validation {
                field: "sizing".into(),
                reason: other.to_string(),
            },
        })
    }

    /// Where journal records go, configured or platform default.
    pub fn journal_path(&self) -> PathBuf {
        self.journal
            .path
            .clone()
            .unwrap_or_else(default_journal_path)
    }
}

// ── Paths ───────────────────────────────────────────────────────────

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "wisizer", "wisizer")
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("wisizer");
    p
}

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    project_dirs().map_or_else(
        || dirs_fallback().join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn default_journal_path() -> PathBuf {
    project_dirs().map_or_else(
        || dirs_fallback().join("calculations.jsonl"),
        |dirs| dirs.data_local_dir().join("calculations.jsonl"),
    )
}

// ── Config loading ──────────────────────────────────────────────────

fn figment_for(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("WISIZER_").split("__"))
}

/// Load config from a specific file plus environment. A missing file
/// contributes nothing.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = figment_for(path).extract()?;
    config.validate()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
