// ── Switch provisioning search ──
//
// Greedy scan over every switch model: the one needing the fewest units
// to wire and power all APs wins.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::SizingConstants;
use crate::error::CoreError;
use crate::model::{ApModel, SwitchModel, total_ports};

/// Switch allocation for a set of APs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchPlan {
    pub switch: SwitchModel,
    pub switches_needed: u32,
    /// Slowest access-port speed the APs need, Gbps.
    pub required_port_speed_gbps: f64,
    /// AP cable runs to terminate (units × ports per AP).
    pub total_connections: u32,
    /// Connections one unit takes after the growth margin, bounded by ports
    /// and PoE budget.
    pub available_per_switch: u32,
    pub unused_ports: u32,
    pub unused_power_watts: f64,
}

/// Port speed the AP should be patched at.
///
/// The smallest tier strictly above `reference_gbps`, otherwise the fastest
/// tier the AP offers. `None` when the AP lists no speeds at all.
pub fn required_port_speed(ap: &ApModel, reference_gbps: f64) -> Option<f64> {
    let speeds = || ap.port_groups.iter().flat_map(|g| g.speeds_gbps.iter().copied());
    speeds()
        .filter(|s| *s > reference_gbps)
        .reduce(f64::min)
        .or_else(|| speeds().reduce(f64::max))
}

/// Connections one switch unit can take after the growth margin: the
/// lower of usable fast-enough ports and PoE slots. Zero means unusable.
#[allow(
    clippy::as_conversions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn usable_slots(
    switch: &SwitchModel,
    constants: &SizingConstants,
    required_speed_gbps: f64,
    poe_draw_watts: f64,
) -> u32 {
    let effective_ports = switch.ports_supporting(required_speed_gbps);
    if effective_ports == 0 {
        return 0;
    }
    let port_slots = (f64::from(effective_ports) * constants.growth_margin).floor();
    let power_slots = (switch.poe_budget_watts * constants.growth_margin / poe_draw_watts).floor();
    port_slots.min(power_slots).max(0.0) as u32
}

struct Candidate<'a> {
    switch: &'a SwitchModel,
    available: u32,
    switches_needed: u32,
}

impl Candidate<'_> {
    /// Fewest units, then fewest nominal access ports, then smallest PoE
    /// budget. Equal candidates keep declaration order.
    fn rank(&self, other: &Self) -> Ordering {
        self.switches_needed
            .cmp(&other.switches_needed)
            .then_with(|| {
                self.switch
                    .access_port_count()
                    .cmp(&other.switch.access_port_count())
            })
            .then_with(|| {
                self.switch
                    .poe_budget_watts
                    .total_cmp(&other.switch.poe_budget_watts)
            })
    }
}

/// Pick the switch model and unit count for `ap_count` units of `ap`.
///
/// `Ok(None)` when no switch can take the APs at all; errors are reserved
/// for APs that cannot be provisioned in principle.
pub fn provision_switches(
    switches: &[SwitchModel],
    constants: &SizingConstants,
    ap_count: u32,
    ap: &ApModel,
) -> Result<Option<SwitchPlan>, CoreError> {
    if ap_count == 0 {
        return Err(CoreError::InvalidRequest {
            field: "ap_count".into(),
            reason: "must be at least 1".into(),
        });
    }
    let draw = ap.poe_draw_watts;
    if !(draw.is_finite() && draw > 0.0) {
        return Err(CoreError::InvalidPoeDraw {
            model_id: ap.model_id.clone(),
            watts: draw,
        });
    }
    let ports_per_ap = total_ports(&ap.port_groups);
    let required_speed = required_port_speed(ap, constants.reference_uplink_gbps)
        .filter(|_| ports_per_ap > 0)
        .ok_or_else(|| CoreError::MissingPorts {
            model_id: ap.model_id.clone(),
        })?;
    let total_connections = ap_count.checked_mul(ports_per_ap).ok_or_else(|| {
        CoreError::InvalidRequest {
            field: "ap_count".into(),
            reason: format!("is too large to wire ({ap_count} APs x {ports_per_ap} ports)"),
        }
    })?;

    let mut best: Option<Candidate<'_>> = None;
    for switch in switches {
        let available = usable_slots(switch, constants, required_speed, draw);
        if available == 0 {
            continue;
        }
        let candidate = Candidate {
            switch,
            available,
            switches_needed: total_connections.div_ceil(available),
        };
        if best
            .as_ref()
            .is_none_or(|b| candidate.rank(b) == Ordering::Less)
        {
            best = Some(candidate);
        }
    }

    let Some(best) = best else {
        debug!(
            ap = %ap.model_id,
            ap_count,
            required_speed,
            "no switch satisfies port and PoE constraints"
        );
        return Ok(None);
    };

    let switches_needed = best.switches_needed;
    let unused_ports = (best.available - total_connections % best.available) % best.available;
    let unused_power_watts = f64::from(switches_needed)
        * best.switch.poe_budget_watts
        * constants.growth_margin
        - f64::from(ap_count) * draw;

    debug!(
        switch = %best.switch.model_id,
        switches_needed,
        available = best.available,
        required_speed,
        "switch selected"
    );

    Ok(Some(SwitchPlan {
        switch: best.switch.clone(),
        switches_needed,
        required_port_speed_gbps: required_speed,
        total_connections,
        available_per_switch: best.available,
        unused_ports,
        unused_power_watts,
    }))
}

/// Unit count a single model would need; `None` when it cannot be used or
/// the connection count overflows.
pub fn switches_needed_for(
    switch: &SwitchModel,
    constants: &SizingConstants,
    ap_count: u32,
    ap: &ApModel,
) -> Option<u32> {
    let speed = required_port_speed(ap, constants.reference_uplink_gbps)?;
    let available = usable_slots(switch, constants, speed, ap.poe_draw_watts);
    if available == 0 {
        return None;
    }
    ap_count
        .checked_mul(total_ports(&ap.port_groups))
        .map(|connections| connections.div_ceil(available))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, StaticCatalog};
    use crate::model::{BandCapacity, DocLinks, Generation, PortGroup};
    use crate::testing;

    fn ap(model_id: &str, ports: Vec<PortGroup>, draw: f64) -> ApModel {
        ApModel {
            generation: Generation::WiFi6,
            model_id: model_id.into(),
            wifi_standard: "802.11ax (Wi-Fi 6)".into(),
            spatial_streams: "2 x 2 : 2".into(),
            port_groups: ports,
            poe_type: "PoE+".into(),
            poe_draw_watts: draw,
            band_capacity_mbps: BandCapacity::default(),
            max_users: 40,
            sku: format!("{model_id}-HW"),
            license_options: Vec::new(),
            doc_links: DocLinks::default(),
            entry_level: false,
        }
    }

    fn gigabit_ap(draw: f64) -> ApModel {
        ap("GIG-AP", vec![PortGroup::new(1, &[1.0])], draw)
    }

    #[test]
    fn thirty_watt_aps_on_370w_budget() {
        let catalog = testing::switch_catalog();
        let constants = SizingConstants::default();
        let gigabit_only = &catalog.switch_models()[..2];

        let plan = provision_switches(gigabit_only, &constants, 10, &gigabit_ap(30.0))
            .unwrap()
            .unwrap();

        // floor(370 × 0.7 / 30) = 8 power slots, 16 usable ports
        assert_eq!(plan.available_per_switch, 8);
        assert_eq!(plan.switches_needed, 2);
        assert_eq!(plan.switch.model_id, "GIG-24-A");
        assert_eq!(plan.total_connections, 10);
        assert_eq!(plan.unused_ports, 6);
        assert!((plan.unused_power_watts - 218.0).abs() < 1e-9);
    }

    #[test]
    fn multigig_ap_needs_multigig_ports() {
        let catalog = testing::switch_catalog();
        let ap = ap("MG-AP", vec![PortGroup::new(1, &[1.0, 2.5])], 30.0);

        let plan = provision_switches(catalog.switch_models(), &SizingConstants::default(), 10, &ap)
            .unwrap()
            .unwrap();

        assert!((plan.required_port_speed_gbps - 2.5).abs() < f64::EPSILON);
        // MGIG-48 (8 slots) and MGIG-24 (5 slots) both need 2 units;
        // the smaller switch wins.
        assert_eq!(plan.switches_needed, 2);
        assert_eq!(plan.switch.model_id, "MGIG-24");
    }

    #[test]
    fn dual_port_aps_wire_both_ports() {
        let catalog = testing::switch_catalog();
        let ap = ap("DUAL", vec![PortGroup::new(2, &[1.0])], 15.0);
        let plan = provision_switches(catalog.switch_models(), &SizingConstants::default(), 6, &ap)
            .unwrap()
            .unwrap();
        assert_eq!(plan.total_connections, 12);
    }

    #[test]
    fn allocation_covers_ports_and_power() {
        let constants = SizingConstants::default();
        let catalog = StaticCatalog::builtin();
        for generation in [Generation::WiFi6, Generation::WiFi6E, Generation::WiFi7] {
            for ap in catalog.ap_models(generation) {
                for ap_count in [1, 3, 10, 37, 120] {
                    let plan = provision_switches(catalog.switch_models(), &constants, ap_count, ap)
                        .unwrap()
                        .unwrap();
                    let n = f64::from(plan.switches_needed);
                    assert!(plan.available_per_switch * plan.switches_needed >= plan.total_connections);
                    assert!(
                        n * plan.switch.poe_budget_watts * constants.growth_margin
                            >= f64::from(ap_count) * ap.poe_draw_watts
                    );
                    assert!(plan.unused_power_watts >= 0.0);

                    for other in catalog.switch_models() {
                        if let Some(needed) = switches_needed_for(other, &constants, ap_count, ap) {
                            assert!(
                                needed >= plan.switches_needed,
                                "{} needs {needed}, chosen {} needs {}",
                                other.model_id,
                                plan.switch.model_id,
                                plan.switches_needed
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn equal_candidates_keep_declaration_order() {
        let catalog = testing::switch_catalog();
        let reversed: Vec<SwitchModel> = catalog.switch_models()[..2].iter().rev().cloned().collect();
        let plan = provision_switches(&reversed, &SizingConstants::default(), 4, &gigabit_ap(30.0))
            .unwrap()
            .unwrap();
        assert_eq!(plan.switch.model_id, "GIG-24-B");
    }

    #[test]
    fn largest_countable_deployment_keeps_port_arithmetic_in_range() {
        let catalog = testing::switch_catalog();
        let plan = provision_switches(
            catalog.switch_models(),
            &SizingConstants::default(),
            u32::MAX,
            &gigabit_ap(15.0),
        )
        .unwrap()
        .unwrap();
        assert_eq!(plan.total_connections, u32::MAX);
        assert!(plan.unused_ports < plan.available_per_switch);
        assert_eq!(
            u64::from(plan.available_per_switch) * u64::from(plan.switches_needed),
            u64::from(plan.total_connections) + u64::from(plan.unused_ports)
        );
    }

    #[test]
    fn connection_count_overflow_is_rejected() {
        let catalog = testing::switch_catalog();
        let dual = ap("DUAL", vec![PortGroup::new(2, &[1.0])], 15.0);
        let err =
            provision_switches(catalog.switch_models(), &SizingConstants::default(), u32::MAX, &dual)
                .unwrap_err();
        assert!(matches!(err, CoreError::InvalidRequest { ref field, .. } if field == "ap_count"));
        assert!(
            switches_needed_for(&catalog.switch_models()[0], &SizingConstants::default(), u32::MAX, &dual)
                .is_none()
        );
    }

    #[test]
    fn power_hungry_ap_has_no_solution() {
        let catalog = testing::switch_catalog();
        let result = provision_switches(
            catalog.switch_models(),
            &SizingConstants::default(),
            4,
            &gigabit_ap(1000.0),
        )
        .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn empty_switch_list_has_no_solution() {
        let result =
            provision_switches(&[], &SizingConstants::default(), 4, &gigabit_ap(15.0)).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn invalid_draw_is_a_precondition_error() {
        let catalog = testing::switch_catalog();
        let constants = SizingConstants::default();
        for draw in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = provision_switches(catalog.switch_models(), &constants, 4, &gigabit_ap(draw))
                .unwrap_err();
            assert!(matches!(err, CoreError::InvalidPoeDraw { .. }), "{draw}: {err:?}");
        }
    }

    #[test]
    fn missing_ports_is_a_precondition_error() {
        let catalog = testing::switch_catalog();
        let constants = SizingConstants::default();
        for ports in [vec![], vec![PortGroup::new(1, &[])], vec![PortGroup::new(0, &[1.0])]] {
            let err = provision_switches(catalog.switch_models(), &constants, 4, &ap("X", ports, 15.0))
                .unwrap_err();
            assert!(matches!(err, CoreError::MissingPorts { .. }));
        }
    }

    #[test]
    fn zero_aps_is_rejected() {
        let err = provision_switches(&[], &SizingConstants::default(), 0, &gigabit_ap(15.0))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidRequest { .. }));
    }

    #[test]
    fn required_speed_prefers_smallest_tier_above_gigabit() {
        let multigig = ap("A", vec![PortGroup::new(1, &[1.0, 2.5, 5.0, 10.0])], 30.0);
        assert_eq!(required_port_speed(&multigig, 1.0), Some(2.5));
        assert_eq!(required_port_speed(&gigabit_ap(15.0), 1.0), Some(1.0));
        assert_eq!(required_port_speed(&ap("B", vec![], 15.0), 1.0), None);
    }
}
