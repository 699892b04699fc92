//! `size` and shared sizing renderers.

use chrono::Utc;
use serde::Serialize;
use tabled::Tabled;
use tracing::{debug, warn};

use wisizer_core::{
    BomItem, BomLine, CalculationRecord, DemandEstimate, Journal, Scenario, SizingResult,
    SummaryNarrator, SwitchOutcome, SwitchPlan, explain_or_fallback,
};

use crate::cli::SizeArgs;
use crate::config::Context;
use crate::error::CliError;
use crate::output::{self, Field, field};

use super::util;

// ── Report ──────────────────────────────────────────────────────────

/// What `size` prints: the result plus its derived views.
#[derive(Serialize)]
struct SizeReport<'a> {
    #[serde(flatten)]
    result: &'a SizingResult,
    bill_of_materials: Vec<BomLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<String>,
}

#[derive(Tabled)]
struct BomRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Part number")]
    part_number: String,
}

impl From<&BomLine> for BomRow {
    fn from(line: &BomLine) -> Self {
        Self {
            item: line.item.to_string(),
            description: line.description.clone(),
            quantity: line.quantity,
            part_number: line.part_number.clone(),
        }
    }
}

// ── Shared detail sections ──────────────────────────────────────────

/// Headline numbers of an AP estimate.
pub(super) fn demand_fields(demand: &DemandEstimate, scenario: &Scenario) -> Vec<Field> {
    let breakdown = &demand.breakdown;
    let capacity = breakdown
        .by_capacity
        .map_or_else(|| "n/a".to_owned(), |n| n.to_string());
    vec![
        field("Scenario", format!("{} ({})", scenario.name, scenario.key)),
        field("Generation", demand.generation.label()),
        field("Access point", demand.selected_ap.model_id()),
        field("Access points", demand.recommended_ap_count),
        field(
            "Sized by",
            format!(
                "{} (coverage {}, capacity {capacity}, density {})",
                breakdown.driver(),
                breakdown.by_coverage,
                breakdown.by_density
            ),
        ),
        field("Users per AP", demand.users_per_ap),
        field("Bandwidth per AP", format!("{} Mbps", demand.bandwidth_per_ap_mbps)),
    ]
}

pub(super) fn plan_fields(plan: &SwitchPlan) -> Vec<Field> {
    let mut fields = vec![
        field("Units", plan.switches_needed),
        field("Required port speed", util::gbps(plan.required_port_speed_gbps)),
        field("AP connections", plan.total_connections),
        field("Usable ports per switch", plan.available_per_switch),
        field("Unused ports", plan.unused_ports),
        field("Unused PoE", util::watts(plan.unused_power_watts)),
    ];
    fields.extend(util::switch_fields(&plan.switch));
    fields
}

fn detail(report: &SizeReport<'_>, color: bool) -> String {
    let result = report.result;

    let mut summary = demand_fields(&result.demand, &result.scenario);
    summary.push(field("Wire speed per AP", format!("{} Mbps", result.wire_speed_mbps)));

    let mut sections = vec![
        output::detail_table("Wireless sizing", &summary, color),
        output::detail_table(
            "Access point",
            &util::ap_fields(&result.selected_ap().base),
            color,
        ),
    ];

    if let SwitchOutcome::Provisioned(plan) = &result.switches {
        sections.push(output::detail_table("PoE access switch", &plan_fields(plan), color));
    }

    let rows: Vec<BomRow> = report.bill_of_materials.iter().map(BomRow::from).collect();
    sections.push(format!(
        "{}\n{}",
        output::heading("Bill of materials", color),
        output::render_table(&rows)
    ));

    if !result.advisories.is_empty() {
        sections.push(
            result
                .advisories
                .iter()
                .map(|a| output::warning(&a.to_string(), color))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    let survey = &result.survey;
    let mut notice = format!("{}: {}", survey.headline(), survey.message());
    if survey.survey_recommended() {
        let reasons: Vec<String> = survey.triggers.iter().map(ToString::to_string).collect();
        notice.push_str(&format!(" ({})", reasons.join("; ")));
    }
    sections.push(output::notice(&notice, survey.survey_recommended(), color));

    if let Some(explanation) = &report.explanation {
        sections.push(format!("{}\n{explanation}", output::heading("Explanation", color)));
    }

    sections.join("\n\n")
}

/// Hardware part numbers and quantities, tab separated.
fn plain(report: &SizeReport<'_>) -> String {
    report
        .bill_of_materials
        .iter()
        .filter(|line| line.item != BomItem::License)
        .map(|line| format!("{}\t{}", line.part_number, line.quantity))
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Journal ─────────────────────────────────────────────────────────

fn record(ctx: &Context, result: &SizingResult) {
    let journal = Journal::new(ctx.config.journal_path());
    let entry = CalculationRecord::from_result(result, Utc::now());
    match journal.append(&entry) {
        Ok(()) => debug!(path = %journal.path().display(), "calculation recorded"),
        Err(err) => warn!(error = %err, "could not record calculation"),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &SizeArgs, ctx: &Context) -> Result<(), CliError> {
    let request = util::build_request(&args.space, ctx).with_switches(!args.no_switches);
    let sizer = ctx.sizer();
    let result = sizer.size(&request)?;

    if ctx.config.journal.enabled && !args.no_journal {
        record(ctx, &result);
    }

    let explanation = args
        .explain
        .then(|| explain_or_fallback(&SummaryNarrator, &result, sizer.catalog()));

    let report = SizeReport {
        bill_of_materials: result.bill_of_materials(),
        result: &result,
        explanation,
    };

    let out = output::render_single(ctx.output, &report, |r| detail(r, ctx.color), plain)?;
    output::print_output(&out, ctx.quiet);
    Ok(())
}
