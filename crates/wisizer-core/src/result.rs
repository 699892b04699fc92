// ── Sizing result aggregator ──
//
// Runs the estimator and, when asked, the switch search, then merges both
// into one immutable result with its advisories.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::advisory::{Advisory, SurveyAdvice};
use crate::catalog::Catalog;
use crate::constants::SizingConstants;
use crate::error::CoreError;
use crate::estimate::{DemandEstimate, ceil_count, estimate_demand};
use crate::model::{ApModel, Scenario, SelectedAp, SizingRequest, SwitchModel};
use crate::provision::{SwitchPlan, provision_switches};

/// What happened to the switch half of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SwitchOutcome {
    Provisioned(SwitchPlan),
    NoSuitableSwitch,
    /// The AP cannot be provisioned (bad PoE draw, no ports).
    Unavailable { reason: String },
    NotRequested,
}

/// Line category in a bill of materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum BomItem {
    #[strum(to_string = "Access Point")]
    AccessPoint,
    #[strum(to_string = "PoE Access Switch")]
    PoeSwitch,
    #[strum(to_string = "Licence")]
    License,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomLine {
    pub item: BomItem,
    pub description: String,
    pub quantity: u32,
    pub part_number: String,
}

/// Everything known about one sizing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingResult {
    pub request: SizingRequest,
    pub catalog_version: String,
    /// Scenario actually used.
    pub scenario: Scenario,
    pub demand: DemandEstimate,
    /// Bandwidth per AP with the safety multiplier applied, for display.
    pub wire_speed_mbps: u32,
    pub switches: SwitchOutcome,
    pub survey: SurveyAdvice,
    pub advisories: Vec<Advisory>,
}

impl SizingResult {
    pub fn recommended_ap_count(&self) -> u32 {
        self.demand.recommended_ap_count
    }

    pub fn selected_ap(&self) -> &SelectedAp {
        &self.demand.selected_ap
    }

    pub fn users_per_ap(&self) -> u32 {
        self.demand.users_per_ap
    }

    pub fn bandwidth_per_ap_mbps(&self) -> u32 {
        self.demand.bandwidth_per_ap_mbps
    }

    pub fn switch_plan(&self) -> Option<&SwitchPlan> {
        match &self.switches {
            SwitchOutcome::Provisioned(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn selected_switch(&self) -> Option<&SwitchModel> {
        self.switch_plan().map(|p| &p.switch)
    }

    pub fn switches_needed(&self) -> Option<u32> {
        self.switch_plan().map(|p| p.switches_needed)
    }

    pub fn unused_ports(&self) -> Option<u32> {
        self.switch_plan().map(|p| p.unused_ports)
    }

    pub fn unused_power_watts(&self) -> Option<f64> {
        self.switch_plan().map(|p| p.unused_power_watts)
    }

    /// Hardware lines followed by the base licence tier for each.
    pub fn bill_of_materials(&self) -> Vec<BomLine> {
        let ap = &self.selected_ap().base;
        let ap_count = self.recommended_ap_count();

        let mut hardware = vec![BomLine {
            item: BomItem::AccessPoint,
            description: format!("{} {}", ap.model_id, ap.wifi_standard),
            quantity: ap_count,
            part_number: ap.sku.clone(),
        }];
        let mut licences: Vec<BomLine> = ap
            .license_options
            .first()
            .map(|lic| BomLine {
                item: BomItem::License,
                description: format!("{} licence for {}", lic.tier, ap.model_id),
                quantity: ap_count,
                part_number: lic.sku.clone(),
            })
            .into_iter()
            .collect();

        if let Some(plan) = self.switch_plan() {
            let switch = &plan.switch;
            hardware.push(BomLine {
                item: BomItem::PoeSwitch,
                description: format!("{} {}", switch.family, switch.model_id),
                quantity: plan.switches_needed,
                part_number: switch.sku.clone(),
            });
            licences.extend(switch.license_options.first().map(|lic| BomLine {
                item: BomItem::License,
                description: format!("{} licence for {}", lic.tier, switch.model_id),
                quantity: plan.switches_needed,
                part_number: lic.sku.clone(),
            }));
        }

        hardware.extend(licences);
        hardware
    }
}

// ── Sizer ───────────────────────────────────────────────────────────

/// Entry point tying a catalogue to one set of sizing constants.
///
/// Holds no mutable state; one `Sizer` may serve any number of threads.
#[derive(Clone, Copy)]
pub struct Sizer<'a> {
    catalog: &'a dyn Catalog,
    constants: &'a SizingConstants,
}

impl<'a> Sizer<'a> {
    pub fn new(catalog: &'a dyn Catalog, constants: &'a SizingConstants) -> Self {
        Self { catalog, constants }
    }

    pub fn catalog(&self) -> &'a dyn Catalog {
        self.catalog
    }

    pub fn constants(&self) -> &'a SizingConstants {
        self.constants
    }

    /// AP half only.
    pub fn estimate(&self, request: &SizingRequest) -> Result<DemandEstimate, CoreError> {
        estimate_demand(self.catalog, self.constants, request)
    }

    /// Switch half only, for a caller-chosen AP model and count.
    pub fn provision(&self, ap_count: u32, ap: &ApModel) -> Result<Option<SwitchPlan>, CoreError> {
        provision_switches(self.catalog.switch_models(), self.constants, ap_count, ap)
    }

    /// Full sizing: APs, switches when requested, advisories.
    pub fn size(&self, request: &SizingRequest) -> Result<SizingResult, CoreError> {
        let demand = self.estimate(request)?;
        let scenario = self.catalog.scenario(&demand.scenario_key).clone();
        let mut advisories = Vec::new();

        if self.catalog.find_scenario(&request.scenario_key).is_none() {
            advisories.push(Advisory::ScenarioDefaulted {
                requested: request.scenario_key.clone(),
                used: scenario.key.clone(),
            });
        }

        let model = demand.ap_model();
        if demand.used_fallback && model.max_users < demand.provisional_users_per_ap {
            advisories.push(Advisory::CapacityExceeded {
                model_id: model.model_id.clone(),
                max_users: model.max_users,
                required: demand.provisional_users_per_ap,
            });
        }

        let switches = if request.include_switches {
            self.switch_outcome(&demand, &mut advisories)?
        } else {
            SwitchOutcome::NotRequested
        };

        for advisory in &advisories {
            warn!(%advisory, "sizing advisory");
        }

        let wire_speed_mbps = ceil_count(
            f64::from(demand.bandwidth_per_ap_mbps) * self.constants.wire_speed_multiplier,
            "total_users",
        )?;
        let survey = SurveyAdvice::assess(request, scenario.high_density, demand.recommended_ap_count);

        Ok(SizingResult {
            request: request.clone(),
            catalog_version: self.catalog.version().to_owned(),
            scenario,
            demand,
            wire_speed_mbps,
            switches,
            survey,
            advisories,
        })
    }

    fn switch_outcome(
        &self,
        demand: &DemandEstimate,
        advisories: &mut Vec<Advisory>,
    ) -> Result<SwitchOutcome, CoreError> {
        match self.provision(demand.recommended_ap_count, demand.ap_model()) {
            Ok(Some(plan)) => Ok(SwitchOutcome::Provisioned(plan)),
            Ok(None) => {
                advisories.push(Advisory::NoSuitableSwitch);
                Ok(SwitchOutcome::NoSuitableSwitch)
            }
            Err(err @ (CoreError::InvalidPoeDraw { .. } | CoreError::MissingPorts { .. })) => {
                let reason = err.to_string();
                advisories.push(Advisory::SwitchProvisioningUnavailable {
                    reason: reason.clone(),
                });
                Ok(SwitchOutcome::Unavailable { reason })
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::model::Generation;
    use crate::testing;

    fn office(area_m2: f64, users: u32) -> SizingRequest {
        SizingRequest::new(area_m2, users, "open-office-minimal-walls", Generation::WiFi6)
    }

    fn size(request: &SizingRequest) -> SizingResult {
        let constants = SizingConstants::default();
        Sizer::new(StaticCatalog::builtin(), &constants)
            .size(request)
            .unwrap()
    }

    /// Single-AP test catalogue with the AP's PoE draw replaced.
    fn catalog_with_draw(watts: f64) -> StaticCatalog {
        let mut doc = testing::single_ap_catalog().to_document();
        for ap in &mut doc.access_points {
            ap.poe_draw_watts = watts;
        }
        StaticCatalog::from_document(doc).unwrap()
    }

    #[test]
    fn small_office_full_result() {
        let result = size(&office(100.0, 50));

        assert_eq!(result.recommended_ap_count(), 3);
        assert_eq!(result.selected_ap().model_id(), "MR36");
        assert_eq!(result.users_per_ap(), 17);
        assert_eq!(result.bandwidth_per_ap_mbps(), 58);
        assert_eq!(result.wire_speed_mbps, 87);
        assert_eq!(result.scenario.key, "open-office-minimal-walls");
        assert!(result.advisories.is_empty());
        assert!(!result.survey.survey_recommended());

        // Three 15 W APs: every switch fits them in one unit, the smallest wins.
        assert_eq!(result.selected_switch().unwrap().model_id, "MS130-8P");
        assert_eq!(result.switches_needed(), Some(1));
        assert_eq!(result.unused_ports(), Some(2));
        assert!((result.unused_power_watts().unwrap() - 39.0).abs() < 1e-9);
    }

    #[test]
    fn bill_of_materials_lists_hardware_then_licences() {
        let bom = size(&office(100.0, 50)).bill_of_materials();
        let parts: Vec<(BomItem, u32, &str)> = bom
            .iter()
            .map(|l| (l.item, l.quantity, l.part_number.as_str()))
            .collect();
        assert_eq!(
            parts,
            vec![
                (BomItem::AccessPoint, 3, "MR36-HW"),
                (BomItem::PoeSwitch, 1, "MS130-8P-HW"),
                (BomItem::License, 3, "LIC-ENT-xYR"),
                (BomItem::License, 1, "LIC-MS130-CMPT-xY"),
            ]
        );
    }

    #[test]
    fn switches_can_be_skipped() {
        let result = size(&office(100.0, 50).with_switches(false));
        assert_eq!(result.switches, SwitchOutcome::NotRequested);
        assert!(result.selected_switch().is_none());
        assert_eq!(result.switches_needed(), None);
        assert_eq!(result.bill_of_materials().len(), 2);
    }

    #[test]
    fn unknown_scenario_is_flagged_but_sized_as_default() {
        let result = size(&SizingRequest::new(100.0, 50, "warehouse", Generation::WiFi6));
        assert_eq!(result.recommended_ap_count(), 3);
        assert_eq!(
            result.advisories,
            vec![Advisory::ScenarioDefaulted {
                requested: "warehouse".into(),
                used: "open-office-minimal-walls".into(),
            }]
        );
    }

    #[test]
    fn capacity_exceeded_is_an_advisory() {
        let result = size(&office(200.0, 2000));
        assert!(result.advisories.iter().any(|a| matches!(
            a,
            Advisory::CapacityExceeded { model_id, max_users: 60, required: 1400 } if model_id == "MR46"
        )));
        assert!(result.survey.survey_recommended());
    }

    #[test]
    fn no_suitable_switch_keeps_ap_numbers() {
        let catalog = catalog_with_draw(1000.0);
        let constants = SizingConstants::default();
        let req = SizingRequest::new(300.0, 60, "office", Generation::WiFi6);
        let result = Sizer::new(&catalog, &constants).size(&req).unwrap();

        assert_eq!(result.switches, SwitchOutcome::NoSuitableSwitch);
        assert_eq!(result.advisories, vec![Advisory::NoSuitableSwitch]);
        assert!(result.recommended_ap_count() >= 2);
    }

    #[test]
    fn invalid_draw_marks_switches_unavailable() {
        let catalog = catalog_with_draw(0.0);
        let constants = SizingConstants::default();
        let req = SizingRequest::new(300.0, 60, "office", Generation::WiFi6);
        let result = Sizer::new(&catalog, &constants).size(&req).unwrap();

        assert!(matches!(result.switches, SwitchOutcome::Unavailable { .. }));
        assert!(matches!(
            result.advisories.as_slice(),
            [Advisory::SwitchProvisioningUnavailable { .. }]
        ));
        assert_eq!(result.selected_ap().model_id(), "AP-30");
    }

    #[test]
    fn result_serializes_switch_status() {
        let result = size(&office(100.0, 50).with_switches(false));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["switches"]["status"], "not_requested");
        assert_eq!(json["demand"]["recommended_ap_count"], 3);

        let back: SizingResult = serde_json::from_value(json).unwrap();
        assert_eq!(back.switches, SwitchOutcome::NotRequested);
        assert_eq!(back.selected_ap().model_id(), "MR36");
    }

    #[test]
    fn oversized_area_is_an_invalid_request() {
        let constants = SizingConstants::default();
        let err = Sizer::new(StaticCatalog::builtin(), &constants)
            .size(&office(1.0e13, 50))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidRequest { ref field, .. } if field == "area_m2"));
    }

    #[test]
    fn parallel_requests_match_sequential_ones() {
        let constants = SizingConstants::default();
        let sizer = Sizer::new(StaticCatalog::builtin(), &constants);
        let requests: Vec<SizingRequest> = (1..=16)
            .map(|i| office(f64::from(i) * 150.0, i * 37))
            .collect();
        let sequential: Vec<SizingResult> =
            requests.iter().map(|r| sizer.size(r).unwrap()).collect();

        let parallel: Vec<SizingResult> = std::thread::scope(|scope| {
            let handles: Vec<_> = requests
                .iter()
                .map(|r| scope.spawn(move || sizer.size(r).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(sequential, parallel);
    }
}
