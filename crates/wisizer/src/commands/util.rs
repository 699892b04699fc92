//! Shared helpers for command handlers.

use wisizer_core::{
    ApModel, BandCapacity, Generation, LicenseOption, SizingRequest, SwitchModel, describe_ports,
};

use crate::cli::{GenerationArg, SpaceArgs};
use crate::config::Context;
use crate::output::{Field, field};

impl From<GenerationArg> for Generation {
    fn from(arg: GenerationArg) -> Self {
        match arg {
            GenerationArg::Wifi6 => Self::WiFi6,
            GenerationArg::Wifi6e => Self::WiFi6E,
            GenerationArg::Wifi7 => Self::WiFi7,
        }
    }
}

/// Turn the space flags into a request, filling gaps from `[defaults]`.
pub fn build_request(space: &SpaceArgs, ctx: &Context) -> SizingRequest {
    let scenario = space
        .scenario
        .clone()
        .unwrap_or_else(|| ctx.config.defaults.scenario.clone());
    let generation = space
        .generation
        .map_or(ctx.config.defaults.generation, Generation::from);

    SizingRequest::new(space.area, space.users, scenario, generation)
        .with_ceiling_height(space.ceiling_height)
}

// ── Display formatting ──────────────────────────────────────────────

pub fn bands(capacity: &BandCapacity) -> String {
    let parts: Vec<String> = [
        ("2.4 GHz", capacity.ghz_2_4),
        ("5 GHz", capacity.ghz_5),
        ("6 GHz", capacity.ghz_6),
    ]
    .into_iter()
    .filter_map(|(band, mbps)| mbps.map(|m| format!("{band} {m:.1}")))
    .collect();
    format!("{} Mbps", parts.join(" / "))
}

pub fn licenses(options: &[LicenseOption]) -> String {
    if options.is_empty() {
        return "-".into();
    }
    options
        .iter()
        .map(|l| format!("{}: {}", l.tier, l.sku))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn watts(value: f64) -> String {
    format!("{value:.1} W")
}

pub fn gbps(value: f64) -> String {
    format!("{value} Gbps")
}

/// Key/value rows describing one AP model.
pub fn ap_fields(ap: &ApModel) -> Vec<Field> {
    vec![
        field("Model", &ap.model_id),
        field("Generation", ap.generation.label()),
        field("Standard", &ap.wifi_standard),
        field("Spatial streams", &ap.spatial_streams),
        field("Ports", describe_ports(&ap.port_groups)),
        field("PoE", format!("{} ({})", ap.poe_type, watts(ap.poe_draw_watts))),
        field("Band capacity", bands(&ap.band_capacity_mbps)),
        field(
            "Total radio capacity",
            format!("{:.1} Mbps", ap.band_capacity_mbps.total_mbps()),
        ),
        field("Max users", ap.max_users),
        field("SKU", &ap.sku),
        field("Licences", licenses(&ap.license_options)),
        field("Datasheet", ap.doc_links.datasheet.as_deref().unwrap_or("-")),
        field(
            "Install guide",
            ap.doc_links.installation_guide.as_deref().unwrap_or("-"),
        ),
    ]
}

/// Key/value rows describing one switch model.
pub fn switch_fields(switch: &SwitchModel) -> Vec<Field> {
    vec![
        field("Model", &switch.model_id),
        field("Family", &switch.family),
        field("Layer", switch.layer),
        field("Access ports", describe_ports(&switch.access_port_groups)),
        field(
            "PoE budget",
            format!("{} {}", switch.poe_type, watts(switch.poe_budget_watts)),
        ),
        field("Uplinks", describe_ports(&switch.uplink_port_groups)),
        field("Switching capacity", gbps(switch.switching_capacity_gbps)),
        field("Stacking", switch.stacking),
        field("SKU", &switch.sku),
        field("Licences", licenses(&switch.license_options)),
        field(
            "Datasheet",
            switch.doc_links.datasheet.as_deref().unwrap_or("-"),
        ),
        field(
            "Install guide",
            switch.doc_links.installation_guide.as_deref().unwrap_or("-"),
        ),
    ]
}
