//! Implementation of the `convert` subcommand.

use crate::cli::TrackArgs;
use crate::error::CliResult;

use albumart_core::convert_album_art;

use log::info;

/// Converts loose art in the track's directory to the canonical cover file.
pub fn run_convert(args: &TrackArgs) -> CliResult<()> {
    let config = args.cover.config_builder().build();
    config.validate()?;

    let outcome = convert_album_art(&config, &args.track)?;
    if let Some(backup) = &outcome.backup {
        info!("Previous cover kept as {}", backup.display());
    }
    info!(
        "Done: {} -> {}",
        outcome.source.display(),
        outcome.output.display()
    );
    Ok(())
}
