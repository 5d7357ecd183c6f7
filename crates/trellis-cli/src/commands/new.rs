//! Implementation of the `trellis new` command.
//!
//! Responsibility: pick the definition and root, run the materializer, then
//! hand the reporter's listing to the terminal. No business logic lives here.

use std::path::PathBuf;

use tracing::{info, instrument};

use trellis_adapters::LocalFilesystem;
use trellis_core::application::{Materializer, Reporter};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::CliResult,
    output::{OutputManager, TerminalSink},
};

/// Execute the `trellis new` command.
///
/// Dispatch sequence:
/// 1. Resolve the root (argument, then `defaults.root`, then `.`)
/// 2. Resolve the definition and repeated-folder policy
/// 3. Early-exit with a preview if `--dry-run`
/// 4. Materialize; the first filesystem error aborts
/// 5. Report every file under the root unless `--no-report`
#[instrument(skip_all)]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = resolve_root(args.root.as_ref(), &config);
    let definition = super::resolve_definition(&args.selection, &config)?;
    let materializer = Materializer::new(Box::new(LocalFilesystem::new()))
        .with_duplicate_folders(super::duplicate_policy(&args.selection, &config));

    if args.dry_run {
        output.info(&format!(
            "Dry run: would scaffold '{}' into {}",
            definition.name(),
            root.display(),
        ))?;
        super::preview(&materializer, &definition, &output)?;
        return Ok(());
    }

    output.header(&format!(
        "Scaffolding '{}' into {}...",
        definition.name(),
        root.display()
    ))?;

    let report = materializer.materialize(&root, &definition)?;
    info!(
        files = report.file_count(),
        directories = report.directories,
        "Scaffold completed"
    );

    output.success(&format!(
        "{} created, {} already present",
        report.created.len(),
        report.existing.len(),
    ))?;

    if !args.no_report {
        Reporter::new(Box::new(LocalFilesystem::new())).report(
            &root,
            definition.name(),
            definition.column(),
            &TerminalSink::new(&output),
        )?;
    }

    Ok(())
}

fn resolve_root(arg: Option<&PathBuf>, config: &AppConfig) -> PathBuf {
    arg.or(config.defaults.root.as_ref())
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."))
}
