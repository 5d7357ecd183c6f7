//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into core calls and display results. The
//! definition selection shared by `new` and `show` lives here.

use tracing::debug;

use trellis_adapters::{builtin_definitions, definition_loader};
use trellis_core::{
    application::{Materializer, ports::ListingSink},
    domain::{DuplicateFolders, Listing, ScaffoldDefinition},
};

use crate::{
    cli::DefinitionArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::{OutputManager, TerminalSink},
};

pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod new;
pub mod show;

/// Pick the definition: `--definition`, then `--builtin`, then the config
/// defaults in the same order.
pub fn resolve_definition(args: &DefinitionArgs, config: &AppConfig) -> CliResult<ScaffoldDefinition> {
    let file = match (&args.definition, &args.builtin) {
        (Some(path), _) => Some(path),
        (None, None) => config.defaults.definition.as_ref(),
        (None, Some(_)) => None,
    };

    if let Some(path) = file {
        if !path.is_file() {
            return Err(CliError::DefinitionNotFound { path: path.clone() });
        }
        debug!(path = %path.display(), "loading definition file");
        return Ok(definition_loader::load_file(path)?);
    }

    let name = args.builtin.as_deref().unwrap_or(&config.defaults.builtin);
    builtin_definitions::get(name).map_err(|e| CliError::Core(e.into()))
}

/// `--strict`, then `--duplicates`, then `defaults.duplicates`.
pub fn duplicate_policy(args: &DefinitionArgs, config: &AppConfig) -> DuplicateFolders {
    if args.strict {
        return DuplicateFolders::Reject;
    }
    args.duplicates.unwrap_or(config.defaults.duplicates).into()
}

/// Display the files `definition` would create, without touching disk.
pub fn preview(
    materializer: &Materializer,
    definition: &ScaffoldDefinition,
    output: &OutputManager,
) -> CliResult<usize> {
    let planned = materializer.plan(definition)?;
    let listing = Listing::new(definition.name(), definition.column()).with_paths(planned.iter());
    TerminalSink::new(output).display(&listing)?;
    Ok(planned.len())
}
