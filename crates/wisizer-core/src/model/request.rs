// ── Sizing request ──

use serde::{Deserialize, Serialize};

use super::generation::Generation;
use crate::error::CoreError;

/// Ceiling height assumed when the caller does not supply one.
pub const DEFAULT_CEILING_HEIGHT_M: f64 = 3.0;

/// Everything that determines a sizing result.
///
/// Built once per invocation and never mutated; the result is a pure
/// function of this value and the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingRequest {
    pub area_m2: f64,
    pub total_users: u32,
    pub ceiling_height_m: f64,
    pub scenario_key: String,
    pub generation: Generation,
    pub include_switches: bool,
}

impl SizingRequest {
    pub fn new(
        area_m2: f64,
        total_users: u32,
        scenario_key: impl Into<String>,
        generation: Generation,
    ) -> Self {
        Self {
            area_m2,
            total_users,
            ceiling_height_m: DEFAULT_CEILING_HEIGHT_M,
            scenario_key: scenario_key.into(),
            generation,
            include_switches: true,
        }
    }

    pub fn with_ceiling_height(mut self, ceiling_height_m: f64) -> Self {
        self.ceiling_height_m = ceiling_height_m;
        self
    }

    pub fn with_switches(mut self, include_switches: bool) -> Self {
        self.include_switches = include_switches;
        self
    }

    /// Reject non-positive or non-finite inputs before they reach the engine.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(self.area_m2.is_finite() && self.area_m2 > 0.0) {
            return Err(CoreError::InvalidRequest {
                field: "area_m2".into(),
                reason: format!("must be a positive number, got {}", self.area_m2),
            });
        }
        if self.total_users == 0 {
            return Err(CoreError::InvalidRequest {
                field: "total_users".into(),
                reason: "must be at least 1".into(),
            });
        }
        if !(self.ceiling_height_m.is_finite() && self.ceiling_height_m > 0.0) {
            return Err(CoreError::InvalidRequest {
                field: "ceiling_height_m".into(),
                reason: format!("must be a positive number, got {}", self.ceiling_height_m),
            });
        }
        Ok(())
    }
}
