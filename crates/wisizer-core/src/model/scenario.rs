// ── Deployment scenario archetypes ──

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Stable identifier, e.g. `"open-office-minimal-walls"`.
    pub key: String,
    /// Short display name.
    pub name: String,
    pub description: String,
    /// Floor area one AP is assumed to cover, in square metres.
    pub coverage_area_per_ap_m2: f64,
    /// Auditorium-like rooms: one device per person, no background devices.
    #[serde(default)]
    pub high_density: bool,
}
