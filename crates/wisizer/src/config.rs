//! CLI configuration: thin wrapper around `wisizer_config`.
//!
//! Resolves the config file, output settings and active catalogue from
//! `GlobalOpts` flags layered over the config file.

use std::path::PathBuf;

use clap::ValueEnum;
use tracing::debug;

use wisizer_core::{Catalog, Sizer, StaticCatalog};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

// ── Re-exports from shared crate ────────────────────────────────────

pub use wisizer_config::{Config, config_path, load_config_from, save_config_to};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Config file in effect: `--config` or the platform default.
pub fn active_config_path(global: &GlobalOpts) -> PathBuf {
    global.config.clone().unwrap_or_else(config_path)
}

/// Load config honouring `--config`. An explicit path must exist.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    let path = active_config_path(global);
    if global.config.is_some() && !path.exists() {
        return Err(CliError::NoConfig { path });
    }
    Ok(load_config_from(&path)?)
}

/// Flag value, else config value, else the built-in default.
fn resolve_enum<T: ValueEnum>(flag: Option<T>, configured: &str, field: &str) -> Result<T, CliError> {
    match flag {
        Some(value) => Ok(value),
        None => T::from_str(configured, true).map_err(|_| CliError::Validation {
            field: field.into(),
            reason: format!("unsupported value '{configured}'"),
        }),
    }
}

// ── Command context ─────────────────────────────────────────────────

/// Everything a command handler needs, resolved once per invocation.
pub struct Context {
    pub config: Config,
    pub catalog: StaticCatalog,
    pub output: OutputFormat,
    pub color: bool,
    pub quiet: bool,
}

impl Context {
    pub fn resolve(global: &GlobalOpts) -> Result<Self, CliError> {
        let config = load(global)?;
        let output = resolve_enum(global.output, &config.defaults.output, "defaults.output")?;
        let color_mode: ColorMode =
            resolve_enum(global.color, &config.defaults.color, "defaults.color")?;

        let catalog_path = global.catalog.clone().or_else(|| config.catalog_path.clone());
        let catalog = match catalog_path {
            Some(path) => StaticCatalog::load(&path)
                .map_err(|source| CliError::Catalog { path, source })?,
            None => StaticCatalog::builtin().clone(),
        };
        debug!(version = catalog.version(), ?output, "context resolved");

        Ok(Self {
            config,
            catalog,
            output,
            color: output::should_color(color_mode),
            quiet: global.quiet,
        })
    }

    pub fn sizer(&self) -> Sizer<'_> {
        Sizer::new(&self.catalog, &self.config.sizing)
    }
}
