// ── Narrative explanations ──
//
// Free-form prose about a result. Producers are fallible and never touch
// the numbers; a failure degrades to a fixed message.

use std::fmt::Write as _;

use thiserror::Error;
use tracing::warn;

use crate::catalog::Catalog;
use crate::estimate::ApCountDriver;
use crate::result::{SizingResult, SwitchOutcome};

/// Shown in place of an explanation when the narrator fails.
pub const FALLBACK_EXPLANATION: &str = "Could not generate an explanation for this sizing.";

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("narrative service unavailable: {0}")]
    Unavailable(String),

    #[error("narrative service returned no text")]
    Empty,
}

/// Turns a result into explanatory text.
pub trait Narrator: Send + Sync {
    fn explain(&self, result: &SizingResult, catalog: &dyn Catalog) -> Result<String, NarrativeError>;
}

/// Run a narrator, replacing any failure or blank output with
/// [`FALLBACK_EXPLANATION`].
pub fn explain_or_fallback(
    narrator: &dyn Narrator,
    result: &SizingResult,
    catalog: &dyn Catalog,
) -> String {
    match narrator.explain(result, catalog) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!(error = %NarrativeError::Empty, "explanation failed");
            FALLBACK_EXPLANATION.to_owned()
        }
        Err(err) => {
            warn!(error = %err, "explanation failed");
            FALLBACK_EXPLANATION.to_owned()
        }
    }
}

/// Deterministic, offline narrator built from the result fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryNarrator;

impl Narrator for SummaryNarrator {
    fn explain(&self, result: &SizingResult, catalog: &dyn Catalog) -> Result<String, NarrativeError> {
        let demand = &result.demand;
        let load = &demand.load;
        let ap = &result.selected_ap().base;
        let breakdown = demand.breakdown;
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{} users in {:.0} m² ({}) give about {:.0} concurrent users and {:.0} background \
             devices, roughly {:.0} Mbps of demand.",
            result.request.total_users,
            result.request.area_m2,
            result.scenario.name,
            load.concurrent_users,
            load.background_devices,
            load.total_bandwidth_mbps,
        );

        let reason = match breakdown.driver() {
            ApCountDriver::Coverage => format!(
                "coverage: each AP covers about {:.0} m²",
                result.scenario.coverage_area_per_ap_m2
            ),
            ApCountDriver::Density => format!(
                "client density: {} devices on 5/6 GHz at up to {} per AP",
                load.devices_on_5ghz, ap.max_users
            ),
            ApCountDriver::Capacity => format!(
                "throughput: {:.0} Mbps of theoretical 5/6 GHz capacity per AP",
                demand.effective_capacity_mbps
            ),
        };
        let _ = writeln!(
            out,
            "{} x {} ({}) are recommended, driven by {reason}. That is about {} users and \
             {} Mbps per AP.",
            result.recommended_ap_count(),
            ap.model_id,
            ap.wifi_standard,
            result.users_per_ap(),
            result.bandwidth_per_ap_mbps(),
        );
        if demand.used_fallback {
            let considered = catalog.ap_models(result.request.generation).len();
            let _ = writeln!(
                out,
                "None of the {considered} {} models reaches the per-AP target, so the most \
                 capable one was chosen.",
                result.request.generation.label()
            );
        }

        match &result.switches {
            SwitchOutcome::Provisioned(plan) => {
                let _ = writeln!(
                    out,
                    "{} x {} switch{} wire and power them, leaving {} ports and {:.0} W for growth.",
                    plan.switches_needed,
                    plan.switch.model_id,
                    if plan.switches_needed == 1 { "" } else { "es" },
                    plan.unused_ports,
                    plan.unused_power_watts,
                );
            }
            SwitchOutcome::NoSuitableSwitch => {
                out.push_str("No switch in the catalogue can power these APs.\n");
            }
            SwitchOutcome::Unavailable { reason } => {
                let _ = writeln!(out, "No switch recommendation possible: {reason}.");
            }
            SwitchOutcome::NotRequested => {}
        }

        out.push_str(result.survey.message());
        let _ = write!(out, " (catalogue {})", result.catalog_version);
        Ok(out)
    }
}
