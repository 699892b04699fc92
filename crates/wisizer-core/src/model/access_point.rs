// ── Access point domain types ──

use serde::{Deserialize, Serialize};

use super::common::{DocLinks, LicenseOption};
use super::generation::Generation;
use super::ports::PortGroup;

/// Theoretical PHY capacity per radio band, in Mbps. Absent bands are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BandCapacity {
    #[serde(rename = "2.4ghz", default, skip_serializing_if = "Option::is_none")]
    pub ghz_2_4: Option<f64>,
    #[serde(rename = "5ghz", default, skip_serializing_if = "Option::is_none")]
    pub ghz_5: Option<f64>,
    #[serde(rename = "6ghz", default, skip_serializing_if = "Option::is_none")]
    pub ghz_6: Option<f64>,
}

impl BandCapacity {
    /// Capacity available to the high bands, where sizing assumes clients land.
    ///
    /// 5 GHz plus 6 GHz when the radio has a 6 GHz band, 5 GHz alone otherwise.
    pub fn effective_mbps(&self) -> f64 {
        let five = self.ghz_5.unwrap_or(0.0);
        match self.ghz_6 {
            Some(six) => five + six,
            None => five,
        }
    }

    /// Sum across every band the radio has.
    pub fn total_mbps(&self) -> f64 {
        [self.ghz_2_4, self.ghz_5, self.ghz_6]
            .into_iter()
            .flatten()
            .sum()
    }
}

/// An access point model from the equipment catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApModel {
    pub generation: Generation,
    pub model_id: String,
    pub wifi_standard: String,
    /// Radio chain layout, e.g. `"4 x 4 : 4"`.
    pub spatial_streams: String,
    pub port_groups: Vec<PortGroup>,
    pub poe_type: String,
    pub poe_draw_watts: f64,
    pub band_capacity_mbps: BandCapacity,
    /// Clients one unit can reasonably serve.
    pub max_users: u32,
    pub sku: String,
    #[serde(default)]
    pub license_options: Vec<LicenseOption>,
    #[serde(default)]
    pub doc_links: DocLinks,
    /// Cheapest model of its generation; dropped once a deployment needs
    /// more than a handful of units.
    #[serde(default)]
    pub entry_level: bool,
}

/// Where a selected AP will be mounted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    #[default]
    Indoor,
}

impl Environment {
    pub fn antenna_type(self) -> &'static str {
        match self {
            Self::Indoor => "Omnidirectional indoor antenna",
        }
    }
}

/// The AP chosen for a request: the catalogue entry plus deployment context.
///
/// Wraps the catalogue value instead of patching a copy of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedAp {
    pub base: ApModel,
    pub environment: Environment,
}

impl SelectedAp {
    pub fn indoor(base: ApModel) -> Self {
        Self {
            base,
            environment: Environment::Indoor,
        }
    }

    pub fn model_id(&self) -> &str {
        &self.base.model_id
    }
}
