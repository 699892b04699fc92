// ── Shared catalogue attributes ──

use serde::{Deserialize, Serialize};

/// A licence tier offered for a hardware SKU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseOption {
    /// Tier name, e.g. "Enterprise" or "Advanced".
    pub tier: String,
    /// Licence part number. `x` marks the term-length placeholder.
    pub sku: String,
}

impl LicenseOption {
    pub fn new(tier: impl Into<String>, sku: impl Into<String>) -> Self {
        Self {
            tier: tier.into(),
            sku: sku.into(),
        }
    }
}

/// Vendor documentation for a catalogue entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocLinks {
    pub datasheet: Option<String>,
    pub installation_guide: Option<String>,
}
