//! Access point and PoE switch sizing engine.
//!
//! Everything here is a pure, synchronous function of a [`SizingRequest`],
//! a [`SizingConstants`] set and a read-only [`Catalog`]:
//!
//! - **[`estimate_demand`]**: client load, AP model selection and the
//!   coverage / capacity / density sub-counts behind the AP recommendation.
//!   Model choice is the standalone [`select_ap_model`] policy.
//!
//! - **[`provision_switches`]**: greedy scan of the switch catalogue for the
//!   model needing the fewest units to wire and power every AP, after the
//!   growth margin.
//!
//! - **[`Sizer`]**: runs both and merges them into a [`SizingResult`] with
//!   [`Advisory`] entries, a [`SurveyAdvice`] and a bill of materials.
//!
//! - **[`StaticCatalog`]**: the built-in scenario, AP and switch data, or a
//!   TOML document with the same shape.
//!
//! Side channels that consume results, never feed them: [`Narrator`]
//! explanations and the append-only [`Journal`].

pub mod advisory;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod estimate;
pub mod journal;
pub mod model;
pub mod narrative;
pub mod provision;
pub mod result;

#[cfg(test)]
mod testing;

// ── Primary re-exports ──────────────────────────────────────────────
pub use advisory::{Advisory, SurveyAdvice, SurveyTrigger};
pub use catalog::{Catalog, CatalogDocument, StaticCatalog};
pub use constants::SizingConstants;
pub use error::CoreError;
pub use estimate::{
    ApChoice, ApCountBreakdown, ApCountDriver, ClientLoad, DemandEstimate, estimate_demand,
    select_ap_model,
};
pub use journal::{CalculationRecord, Journal};
pub use narrative::{
    FALLBACK_EXPLANATION, NarrativeError, Narrator, SummaryNarrator, explain_or_fallback,
};
pub use provision::{
    SwitchPlan, provision_switches, required_port_speed, switches_needed_for, usable_slots,
};
pub use result::{BomItem, BomLine, Sizer, SizingResult, SwitchOutcome};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    ApModel, BandCapacity, DEFAULT_CEILING_HEIGHT_M, DocLinks, Environment, Generation, Layer,
    LicenseOption, PortGroup, Scenario, SelectedAp, SizingRequest, Stacking, SwitchModel,
    describe_ports, total_ports,
};
