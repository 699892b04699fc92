//! `history`: calculations recorded by `size`.

use tabled::Tabled;

use wisizer_core::{CalculationRecord, Journal};

use crate::cli::HistoryArgs;
use crate::config::Context;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "When (UTC)")]
    when: String,
    #[tabled(rename = "Users")]
    users: u32,
    #[tabled(rename = "Area m²")]
    area: f64,
    #[tabled(rename = "Scenario")]
    scenario: String,
    #[tabled(rename = "APs")]
    aps: String,
    #[tabled(rename = "Switches")]
    switches: String,
}

impl From<&CalculationRecord> for RecordRow {
    fn from(r: &CalculationRecord) -> Self {
        Self {
            when: r.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            users: r.request.total_users,
            area: r.request.area_m2,
            scenario: r.scenario_used.clone(),
            aps: format!("{} x {}", r.ap_count, r.ap_model),
            switches: match (&r.switch_model, r.switches_needed) {
                (Some(model), Some(n)) => format!("{n} x {model}"),
                _ => "-".into(),
            },
        }
    }
}

pub fn handle(args: &HistoryArgs, ctx: &Context) -> Result<(), CliError> {
    let journal = Journal::new(ctx.config.journal_path());
    let mut records = journal.read_all()?;
    if let Some(limit) = args.limit {
        let skip = records.len().saturating_sub(limit);
        records = records.split_off(skip);
    }

    let out = output::render_list(
        ctx.output,
        &records,
        |r| RecordRow::from(r),
        |r| format!("{}\t{}\t{}", r.timestamp.to_rfc3339(), r.ap_model, r.ap_count),
    )?;
    output::print_output(&out, ctx.quiet);
    Ok(())
}
