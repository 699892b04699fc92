// ── PoE access switch domain types ──

use serde::{Deserialize, Serialize};
use strum::Display;

use super::common::{DocLinks, LicenseOption};
use super::ports::{PortGroup, total_ports};

/// Forwarding layer of a switch model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Layer {
    L2,
    L3,
}

/// Stacking capability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum Stacking {
    #[default]
    None,
    Physical,
}

/// A PoE access switch model from the equipment catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchModel {
    /// Product family, e.g. "Meraki MS130".
    pub family: String,
    pub model_id: String,
    pub layer: Layer,
    pub access_port_groups: Vec<PortGroup>,
    pub poe_budget_watts: f64,
    pub poe_type: String,
    #[serde(default)]
    pub uplink_port_groups: Vec<PortGroup>,
    pub switching_capacity_gbps: f64,
    #[serde(default)]
    pub stacking: Stacking,
    pub sku: String,
    #[serde(default)]
    pub license_options: Vec<LicenseOption>,
    #[serde(default)]
    pub doc_links: DocLinks,
}

impl SwitchModel {
    /// Nominal access ports regardless of speed.
    pub fn access_port_count(&self) -> u32 {
        total_ports(&self.access_port_groups)
    }

    /// Access ports able to run at `required_gbps` or faster.
    pub fn ports_supporting(&self, required_gbps: f64) -> u32 {
        self.access_port_groups
            .iter()
            .filter(|g| g.supports(required_gbps))
            .map(|g| g.port_count)
            .sum()
    }
}
