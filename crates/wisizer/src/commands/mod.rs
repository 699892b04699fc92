//! Command dispatch: bridges CLI args -> core sizing -> output formatting.

pub mod aps;
pub mod catalog;
pub mod config_cmd;
pub mod history;
pub mod size;
pub mod switches;
pub mod util;

use crate::cli::Command;
use crate::config::Context;
use crate::error::CliError;

/// Dispatch a catalogue-bound command to the appropriate handler.
pub fn dispatch(cmd: Command, ctx: &Context) -> Result<(), CliError> {
    match cmd {
        Command::Size(args) => size::handle(&args, ctx),
        Command::Aps(args) => aps::handle(&args, ctx),
        Command::Switches(args) => switches::handle(&args, ctx),
        Command::Catalog(args) => catalog::handle(args.command, ctx),
        Command::History(args) => history::handle(&args, ctx),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
