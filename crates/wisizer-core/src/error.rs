// ── Core error types ──
//
// Only hard failures live here. "No good candidate" outcomes (no AP meets
// the density target, no switch fits) are advisories on the result, not
// errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::Generation;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input errors ─────────────────────────────────────────────────
    #[error("Invalid request: {field} {reason}")]
    InvalidRequest { field: String, reason: String },

    #[error("Invalid sizing constant {field}: {reason}")]
    InvalidConstants { field: String, reason: String },

    // ── Catalogue lookups ────────────────────────────────────────────
    #[error("No access point models are catalogued for {generation}")]
    NoApModels { generation: Generation },

    #[error("Access point model not found: {model_id}")]
    ApModelNotFound { model_id: String },

    #[error("Switch model not found: {model_id}")]
    SwitchModelNotFound { model_id: String },

    // ── Provisioning preconditions ───────────────────────────────────
    #[error("Access point {model_id} has no valid PoE draw (got {watts} W)")]
    InvalidPoeDraw { model_id: String, watts: f64 },

    #[error("Access point {model_id} does not describe any wired ports")]
    MissingPorts { model_id: String },

    // ── Catalogue data ───────────────────────────────────────────────
    #[error("Invalid catalogue: {message}")]
    Catalog { message: String },

    #[error("Failed to parse catalogue: {0}")]
    CatalogParse(Box<toml::de::Error>),

    // ── IO / serialization ───────────────────────────────────────────
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        Self::CatalogParse(Box::new(err))
    }
}

impl CoreError {
    pub(crate) fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }
}
