//! Implementation of the `trellis list` command.

use trellis_adapters::builtin_definitions;
use trellis_core::{application::ports::ListingSink, domain::Listing};

use crate::{
    cli::ListArgs,
    error::{CliError, CliResult},
    output::{OutputManager, TerminalSink},
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let listing = catalogue(args.long)?;
    TerminalSink::new(&output).display(&listing)?;
    Ok(())
}

fn catalogue(long: bool) -> CliResult<Listing> {
    let mut listing = Listing::new("Built-in Definitions", "Name");

    for builtin in builtin_definitions::all() {
        let row = if long {
            let definition = builtin.definition().map_err(|e| CliError::Core(e.into()))?;
            format!(
                "{} ({} files): {}",
                builtin.name,
                definition.file_count(),
                builtin.description
            )
        } else {
            builtin.name.to_string()
        };
        listing.rows.push(row);
    }

    Ok(listing)
}
