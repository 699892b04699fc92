//! `aps`: the access point half of a sizing, without switches.

use wisizer_core::DemandEstimate;

use crate::cli::ApsArgs;
use crate::config::Context;
use crate::error::CliError;
use crate::output;

use super::{size, util};

pub fn handle(args: &ApsArgs, ctx: &Context) -> Result<(), CliError> {
    let request = util::build_request(&args.space, ctx).with_switches(false);
    let sizer = ctx.sizer();
    let demand = sizer.estimate(&request)?;
    let scenario = sizer.catalog().scenario(&demand.scenario_key);

    let out = output::render_single(
        ctx.output,
        &demand,
        |d: &DemandEstimate| {
            let summary = size::demand_fields(d, scenario);
            [
                output::detail_table("Access points", &summary, ctx.color),
                output::detail_table("Model", &util::ap_fields(d.ap_model()), ctx.color),
            ]
            .join("\n\n")
        },
        |d| format!("{}\t{}", d.selected_ap.model_id(), d.recommended_ap_count),
    )?;
    output::print_output(&out, ctx.quiet);
    Ok(())
}
