// ── Sizing constants ──
//
// One canonical set of engineering factors. Configuration may override
// individual values, but the engine only ever sees a single coherent set.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Engineering factors used by the estimator and the switch search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingConstants {
    /// Share of users associated at the same time.
    pub occupancy_factor: f64,
    /// Secondary devices (phones, tablets) per concurrent user.
    pub background_device_multiplier: f64,
    /// Sustained throughput per active user, Mbps.
    pub per_user_throughput_mbps: f64,
    /// Sync and keep-alive traffic per background device, Mbps.
    pub background_sync_mbps: f64,
    /// Share of devices expected on 5 GHz / 6 GHz.
    pub band_split_factor: f64,
    /// Achievable share of theoretical PHY rate.
    pub real_world_efficiency: f64,
    /// Coverage-driven AP count above which entry-level models are excluded.
    pub entry_level_ap_limit: u32,
    /// Usable share of switch ports and PoE budget; the rest is growth headroom.
    pub growth_margin: f64,
    /// AP uplinks must run faster than this when the AP offers such a tier, Gbps.
    pub reference_uplink_gbps: f64,
    /// Multiplier from per-AP bandwidth to the reported wire-speed estimate.
    pub wire_speed_multiplier: f64,
}

impl Default for SizingConstants {
    fn default() -> Self {
        Self {
            occupancy_factor: 0.7,
            background_device_multiplier: 2.0,
            per_user_throughput_mbps: 4.0,
            background_sync_mbps: 0.5,
            band_split_factor: 0.7,
            real_world_efficiency: 0.35,
            entry_level_ap_limit: 5,
            growth_margin: 0.7,
            reference_uplink_gbps: 1.0,
            wire_speed_multiplier: 1.5,
        }
    }
}

impl SizingConstants {
    /// Check every factor is finite and inside its meaningful range.
    pub fn validate(&self) -> Result<(), CoreError> {
        let fractions = [
            ("occupancy_factor", self.occupancy_factor),
            ("band_split_factor", self.band_split_factor),
            ("real_world_efficiency", self.real_world_efficiency),
            ("growth_margin", self.growth_margin),
        ];
        for (field, value) in fractions {
            if !(value.is_finite() && value > 0.0 && value <= 1.0) {
                return Err(CoreError::InvalidConstants {
                    field: field.into(),
                    reason: format!("must be in (0, 1], got {value}"),
                });
            }
        }

        let non_negative = [
            ("background_device_multiplier", self.background_device_multiplier),
            ("per_user_throughput_mbps", self.per_user_throughput_mbps),
            ("background_sync_mbps", self.background_sync_mbps),
            ("reference_uplink_gbps", self.reference_uplink_gbps),
            ("wire_speed_multiplier", self.wire_speed_multiplier),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(CoreError::InvalidConstants {
                    field: field.into(),
                    reason: format!("must be a non-negative number, got {value}"),
                });
            }
        }
        Ok(())
    }
}
