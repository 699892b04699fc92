//! Catalogue browsing and export.

use strum::IntoEnumIterator;
use tabled::Tabled;

use wisizer_core::{ApModel, Catalog, Generation, Scenario, SwitchModel, describe_ports};

use crate::cli::{CatalogCommand, OutputFormat};
use crate::config::Context;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct ApRow {
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Generation")]
    generation: &'static str,
    #[tabled(rename = "Ports")]
    ports: String,
    #[tabled(rename = "PoE")]
    poe: String,
    #[tabled(rename = "5/6 GHz Mbps")]
    capacity: String,
    #[tabled(rename = "Max users")]
    max_users: u32,
    #[tabled(rename = "Entry")]
    entry_level: String,
}

impl From<&ApModel> for ApRow {
    fn from(ap: &ApModel) -> Self {
        Self {
            model: ap.model_id.clone(),
            generation: ap.generation.label(),
            ports: describe_ports(&ap.port_groups),
            poe: util::watts(ap.poe_draw_watts),
            capacity: format!("{:.1}", ap.band_capacity_mbps.effective_mbps()),
            max_users: ap.max_users,
            entry_level: if ap.entry_level { "yes".into() } else { String::new() },
        }
    }
}

#[derive(Tabled)]
struct SwitchRow {
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Family")]
    family: String,
    #[tabled(rename = "Access ports")]
    ports: String,
    #[tabled(rename = "PoE budget")]
    budget: String,
    #[tabled(rename = "Uplinks")]
    uplinks: String,
}

impl From<&SwitchModel> for SwitchRow {
    fn from(s: &SwitchModel) -> Self {
        Self {
            model: s.model_id.clone(),
            family: s.family.clone(),
            ports: describe_ports(&s.access_port_groups),
            budget: util::watts(s.poe_budget_watts),
            uplinks: describe_ports(&s.uplink_port_groups),
        }
    }
}

#[derive(Tabled)]
struct ScenarioRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "m² per AP")]
    coverage: f64,
    #[tabled(rename = "High density")]
    high_density: String,
    #[tabled(rename = "Default")]
    default: String,
}

fn scenario_row(scenario: &Scenario, default_key: &str) -> ScenarioRow {
    let yes = |flag: bool| if flag { "yes".to_owned() } else { String::new() };
    ScenarioRow {
        key: scenario.key.clone(),
        name: scenario.name.clone(),
        coverage: scenario.coverage_area_per_ap_m2,
        high_density: yes(scenario.high_density),
        default: yes(scenario.key == default_key),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(cmd: CatalogCommand, ctx: &Context) -> Result<(), CliError> {
    let catalog: &dyn Catalog = &ctx.catalog;
    let out = match cmd {
        CatalogCommand::Aps { generation } => {
            let models: Vec<ApModel> = Generation::iter()
                .filter(|g| generation.is_none_or(|wanted| Generation::from(wanted) == *g))
                .flat_map(|g| catalog.ap_models(g).iter().cloned())
                .collect();
            output::render_list(ctx.output, &models, |m| ApRow::from(m), |m| m.model_id.clone())?
        }

        CatalogCommand::Switches { family } => {
            let needle = family.map(|f| f.to_lowercase());
            let models: Vec<SwitchModel> = catalog
                .switch_models()
                .iter()
                .filter(|s| {
                    needle
                        .as_deref()
                        .is_none_or(|n| s.family.to_lowercase().contains(n))
                })
                .cloned()
                .collect();
            output::render_list(
                ctx.output,
                &models,
                |s| SwitchRow::from(s),
                |s| s.model_id.clone(),
            )?
        }

        CatalogCommand::Scenarios => {
            let default_key = catalog.default_scenario().key.clone();
            output::render_list(
                ctx.output,
                catalog.scenarios(),
                |s| scenario_row(s, &default_key),
                |s| s.key.clone(),
            )?
        }

        CatalogCommand::Ap { model_id } => {
            let ap = catalog.require_ap_model(&model_id)?;
            output::render_single(
                ctx.output,
                ap,
                |a| output::detail_table(&a.model_id, &util::ap_fields(a), ctx.color),
                |a| a.model_id.clone(),
            )?
        }

        CatalogCommand::Switch { model_id } => {
            let switch = catalog.require_switch_model(&model_id)?;
            output::render_single(
                ctx.output,
                switch,
                |s| output::detail_table(&s.model_id, &util::switch_fields(s), ctx.color),
                |s| s.model_id.clone(),
            )?
        }

        CatalogCommand::Export => {
            let document = ctx.catalog.to_document();
            match ctx.output {
                OutputFormat::Table | OutputFormat::Plain => toml::to_string_pretty(&document)
                    .map_err(|e| CliError::Render(e.to_string()))?,
                format => {
                    output::render_single(format, &document, |_| String::new(), |_| String::new())?
                }
            }
        }
    };
    output::print_output(&out, ctx.quiet);
    Ok(())
}
