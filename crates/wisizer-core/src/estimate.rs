// ── Demand estimator ──
//
// Request in, AP count and AP model out. Three independent sub-counts
// (coverage, capacity, density) are computed and the largest wins.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::constants::SizingConstants;
use crate::error::CoreError;
use crate::model::{ApModel, Generation, Scenario, SelectedAp, SizingRequest};

/// Round a non-negative quantity up to a whole unit count.
///
/// Counts past `u32::MAX` are rejected against the request `field` that
/// drove them rather than saturated.
pub(crate) fn ceil_count(value: f64, field: &str) -> Result<u32, CoreError> {
    to_count(value.ceil(), field)
}

fn round_count(value: f64, field: &str) -> Result<u32, CoreError> {
    to_count(value.round(), field)
}

#[allow(
    clippy::as_conversions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn to_count(whole: f64, field: &str) -> Result<u32, CoreError> {
    if whole > f64::from(u32::MAX) {
        return Err(CoreError::InvalidRequest {
            field: field.into(),
            reason: format!("is too large to size ({whole:.0} units needed)"),
        });
    }
    Ok(whole.max(0.0) as u32)
}

// ── Client load ─────────────────────────────────────────────────────

/// Expected simultaneous load derived from the head count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClientLoad {
    pub concurrent_users: f64,
    /// Phones, tablets and other secondary devices. Zero in high-density rooms.
    pub background_devices: f64,
    pub total_bandwidth_mbps: f64,
    pub devices_on_5ghz: u32,
}

impl ClientLoad {
    pub fn new(
        total_users: u32,
        scenario: &Scenario,
        constants: &SizingConstants,
    ) -> Result<Self, CoreError> {
        let concurrent_users = f64::from(total_users) * constants.occupancy_factor;
        let background_devices = if scenario.high_density {
            0.0
        } else {
            concurrent_users * constants.background_device_multiplier
        };
        let total_bandwidth_mbps = concurrent_users * constants.per_user_throughput_mbps
            + background_devices * constants.background_sync_mbps;
        let devices_on_5ghz = ceil_count(
            (concurrent_users + background_devices) * constants.band_split_factor,
            "total_users",
        )?;

        Ok(Self {
            concurrent_users,
            background_devices,
            total_bandwidth_mbps,
            devices_on_5ghz,
        })
    }
}

// ── Model selection policy ──────────────────────────────────────────

/// Outcome of the AP selection policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApChoice<'a> {
    pub model: &'a ApModel,
    /// No candidate reached the per-AP user target; the most capable model
    /// was taken instead.
    pub used_fallback: bool,
}

/// Pick the AP model for a generation.
///
/// Entry-level models are excluded once coverage alone needs more than
/// `entry_level_limit` units. Among the remaining candidates the one with the
/// smallest `max_users` still covering `users_per_ap` wins, first declared on
/// ties. When none qualifies, the largest non-entry-level model is returned
/// with `used_fallback` set. `None` only for an empty model list.
pub fn select_ap_model(
    models: &[ApModel],
    users_per_ap: u32,
    aps_by_coverage: u32,
    entry_level_limit: u32,
) -> Option<ApChoice<'_>> {
    let exclude_entry_level = aps_by_coverage > entry_level_limit;

    let best_fit = models
        .iter()
        .filter(|m| !(exclude_entry_level && m.entry_level))
        .filter(|m| m.max_users >= users_per_ap)
        .min_by_key(|m| m.max_users);
    if let Some(model) = best_fit {
        return Some(ApChoice {
            model,
            used_fallback: false,
        });
    }

    most_capable(models.iter().filter(|m| !m.entry_level))
        .or_else(|| most_capable(models.iter()))
        .map(|model| ApChoice {
            model,
            used_fallback: true,
        })
}

/// Largest `max_users`, first declared on ties.
fn most_capable<'a>(models: impl Iterator<Item = &'a ApModel>) -> Option<&'a ApModel> {
    models.reduce(|best, m| if m.max_users > best.max_users { m } else { best })
}

// ── Estimate ────────────────────────────────────────────────────────

/// The three sub-counts the recommendation is the maximum of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApCountBreakdown {
    pub by_coverage: u32,
    /// `None` when the selected model reports no 5/6 GHz capacity.
    pub by_capacity: Option<u32>,
    pub by_density: u32,
}

/// Which sub-count set the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ApCountDriver {
    Coverage,
    Capacity,
    Density,
}

impl ApCountBreakdown {
    pub fn recommended(&self) -> u32 {
        self.by_coverage
            .max(self.by_density)
            .max(self.by_capacity.unwrap_or(0))
            .max(1)
    }

    /// The binding constraint. Coverage wins ties, then density.
    pub fn driver(&self) -> ApCountDriver {
        let recommended = self.recommended();
        if self.by_coverage >= recommended {
            ApCountDriver::Coverage
        } else if self.by_density >= recommended {
            ApCountDriver::Density
        } else {
            ApCountDriver::Capacity
        }
    }
}

/// Output of [`estimate_demand`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandEstimate {
    /// Scenario actually used, after default fallback.
    pub scenario_key: String,
    pub generation: Generation,
    pub load: ClientLoad,
    /// Users each AP must carry under coverage alone; the selection target.
    pub provisional_users_per_ap: u32,
    pub selected_ap: SelectedAp,
    pub used_fallback: bool,
    pub effective_capacity_mbps: f64,
    pub breakdown: ApCountBreakdown,
    pub recommended_ap_count: u32,
    pub users_per_ap: u32,
    /// Rounded share of the total bandwidth per AP. Reporting only.
    pub bandwidth_per_ap_mbps: u32,
}

impl DemandEstimate {
    pub fn ap_model(&self) -> &ApModel {
        &self.selected_ap.base
    }
}

/// Size the AP deployment for one request.
pub fn estimate_demand(
    catalog: &dyn Catalog,
    constants: &SizingConstants,
    request: &SizingRequest,
) -> Result<DemandEstimate, CoreError> {
    request.validate()?;
    constants.validate()?;

    let scenario = catalog.scenario(&request.scenario_key);
    let load = ClientLoad::new(request.total_users, scenario, constants)?;

    let by_coverage =
        ceil_count(request.area_m2 / scenario.coverage_area_per_ap_m2, "area_m2")?.max(1);
    let provisional_users_per_ap =
        ceil_count(load.concurrent_users / f64::from(by_coverage), "total_users")?;

    let choice = select_ap_model(
        catalog.ap_models(request.generation),
        provisional_users_per_ap,
        by_coverage,
        constants.entry_level_ap_limit,
    )
    .ok_or(CoreError::NoApModels {
        generation: request.generation,
    })?;
    let model = choice.model;

    let effective_capacity_mbps = model.band_capacity_mbps.effective_mbps();
    let by_capacity = (effective_capacity_mbps > 0.0)
        .then(|| {
            ceil_count(
                load.total_bandwidth_mbps
                    / (effective_capacity_mbps * constants.real_world_efficiency),
                "total_users",
            )
        })
        .transpose()?;
    let by_density = ceil_count(
        f64::from(load.devices_on_5ghz) / f64::from(model.max_users.max(1)),
        "total_users",
    )?;

    let breakdown = ApCountBreakdown {
        by_coverage,
        by_capacity,
        by_density,
    };
    let recommended_ap_count = breakdown.recommended();
    let users_per_ap = request.total_users.div_ceil(recommended_ap_count);
    let bandwidth_per_ap_mbps = round_count(
        load.total_bandwidth_mbps / f64::from(recommended_ap_count),
        "total_users",
    )?;

    debug!(
        scenario = %scenario.key,
        model = %model.model_id,
        fallback = choice.used_fallback,
        coverage = by_coverage,
        capacity = ?by_capacity,
        density = by_density,
        recommended = recommended_ap_count,
        "demand estimated"
    );

    Ok(DemandEstimate {
        scenario_key: scenario.key.clone(),
        generation: request.generation,
        load,
        provisional_users_per_ap,
        selected_ap: SelectedAp::indoor(model.clone()),
        used_fallback: choice.used_fallback,
        effective_capacity_mbps,
        breakdown,
        recommended_ap_count,
        users_per_ap,
        bandwidth_per_ap_mbps,
    })
}
