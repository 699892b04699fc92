// ── Port groups ──
//
// One shape for every port description in the catalogue: APs list their
// uplink ports this way, switches list access and uplink ports this way.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A run of identical physical ports and the speed tiers each one negotiates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortGroup {
    pub port_count: u32,
    /// Speed tiers in Gbps, e.g. `[1.0, 2.5, 5.0]` for a multigigabit port.
    pub speeds_gbps: Vec<f64>,
}

impl PortGroup {
    pub fn new(port_count: u32, speeds_gbps: &[f64]) -> Self {
        Self {
            port_count,
            speeds_gbps: speeds_gbps.to_vec(),
        }
    }

    /// Fastest tier the group supports, `None` when no speeds are listed.
    pub fn max_speed_gbps(&self) -> Option<f64> {
        self.speeds_gbps.iter().copied().reduce(f64::max)
    }

    /// Whether a port in this group can run at `required_gbps`.
    pub fn supports(&self, required_gbps: f64) -> bool {
        self.max_speed_gbps()
            .is_some_and(|max| max >= required_gbps)
    }
}

impl fmt::Display for PortGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let speeds = self
            .speeds_gbps
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("/");
        write!(f, "{} x {speeds} Gbps", self.port_count)
    }
}

/// Total physical ports across a set of groups.
pub fn total_ports(groups: &[PortGroup]) -> u32 {
    groups.iter().map(|g| g.port_count).sum()
}

/// Human-readable port layout, e.g. `"8 x 1/2.5/5/10 Gbps + 16 x 1 Gbps"`.
pub fn describe_ports(groups: &[PortGroup]) -> String {
    if groups.is_empty() {
        return "N/A".into();
    }
    groups
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" + ")
}
