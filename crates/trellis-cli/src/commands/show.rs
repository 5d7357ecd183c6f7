//! `trellis show`: print the files a definition would create.

use tracing::instrument;

use trellis_adapters::LocalFilesystem;
use trellis_core::application::Materializer;

use crate::{cli::ShowArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all)]
pub fn execute(args: ShowArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let definition = super::resolve_definition(&args.selection, &config)?;
    let materializer = Materializer::new(Box::new(LocalFilesystem::new()))
        .with_duplicate_folders(super::duplicate_policy(&args.selection, &config));

    super::preview(&materializer, &definition, &output)?;
    Ok(())
}
