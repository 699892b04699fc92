//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use wisizer_config::ConfigError;
use wisizer_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFIG: i32 = 6;
    pub const CATALOG: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Input ────────────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(wisizer::validation))]
    Validation { field: String, reason: String },

    // ── Lookups ──────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(wisizer::not_found),
        help("Run: wisizer {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Configuration file not found: {}", path.display())]
    #[diagnostic(
        code(wisizer::no_config),
        help("Create one with: wisizer config init\nOr drop --config to use defaults.")
    )]
    NoConfig { path: PathBuf },

    #[error("Configuration file already exists: {}", path.display())]
    #[diagnostic(
        code(wisizer::config_exists),
        help("Use --force to overwrite it.")
    )]
    ConfigExists { path: PathBuf },

    #[error(transparent)]
    #[diagnostic(
        code(wisizer::config),
        help("Check the config file and WISIZER_* environment variables.")
    )]
    Config(#[from] ConfigError),

    // ── Catalogue ────────────────────────────────────────────────────

    #[error("Could not load catalogue {}", path.display())]
    #[diagnostic(
        code(wisizer::catalog),
        help("Start from the built-in data with: wisizer catalog export > catalog.toml")
    )]
    Catalog {
        path: PathBuf,
        #[source]
        source: CoreError,
    },

    // ── Engine ───────────────────────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(code(wisizer::sizing))]
    Sizing(CoreError),

    // ── Output ───────────────────────────────────────────────────────

    #[error("Failed to render output: {0}")]
    #[diagnostic(code(wisizer::render))]
    Render(String),
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidRequest { field, reason }
            | CoreError::InvalidConstants { field, reason } => Self::Validation { field, reason },
            CoreError::ApModelNotFound { model_id } => Self::NotFound {
                resource_type: "access point".into(),
                identifier: model_id,
                list_command: "catalog aps".into(),
            },
            CoreError::SwitchModelNotFound { model_id } => Self::NotFound {
                resource_type: "switch".into(),
                identifier: model_id,
                list_command: "catalog switches".into(),
            },
            other => Self::Sizing(other),
        }
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } => exit_code::USAGE,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::NoConfig { .. } | Self::ConfigExists { .. } | Self::Config(_) => {
                exit_code::CONFIG
            }
            Self::Catalog { .. } => exit_code::CATALOG,
            Self::Sizing(_) | Self::Render(_) => exit_code::GENERAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_is_a_usage_error() {
        let err = CliError::from(CoreError::InvalidRequest {
            field: "area_m2".into(),
            reason: "must be a positive number, got 0".into(),
        });
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }

    #[test]
    fn unknown_model_is_not_found() {
        let err = CliError::from(CoreError::ApModelNotFound {
            model_id: "MR99".into(),
        });
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
        assert!(err.to_string().contains("MR99"));
    }
}
