//! `switches`: PoE switch selection for a known AP model and count.

use wisizer_core::SwitchOutcome;

use crate::cli::SwitchesArgs;
use crate::config::Context;
use crate::error::CliError;
use crate::output;

use super::size;

fn detail(outcome: &SwitchOutcome, ap_model: &str, color: bool) -> String {
    match outcome {
        SwitchOutcome::Provisioned(plan) => {
            output::detail_table("PoE access switch", &size::plan_fields(plan), color)
        }
        SwitchOutcome::NoSuitableSwitch => output::warning(
            &format!("No switch in the catalogue can wire and power {ap_model} access points"),
            color,
        ),
        SwitchOutcome::Unavailable { reason } => output::warning(reason, color),
        SwitchOutcome::NotRequested => String::new(),
    }
}

pub fn handle(args: &SwitchesArgs, ctx: &Context) -> Result<(), CliError> {
    let sizer = ctx.sizer();
    let ap = sizer.catalog().require_ap_model(&args.ap_model)?;

    let outcome = match sizer.provision(args.ap_count, ap)? {
        Some(plan) => SwitchOutcome::Provisioned(plan),
        None => SwitchOutcome::NoSuitableSwitch,
    };

    let out = output::render_single(
        ctx.output,
        &outcome,
        |o| detail(o, &ap.model_id, ctx.color),
        |o| match o {
            SwitchOutcome::Provisioned(plan) => {
                format!("{}\t{}", plan.switch.model_id, plan.switches_needed)
            }
            _ => "none".into(),
        },
    )?;
    output::print_output(&out, ctx.quiet);
    Ok(())
}
