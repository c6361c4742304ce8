//! Implementation of the `extract` subcommand.

use crate::cli::TrackArgs;
use crate::error::CliResult;

use albumart_core::{extract_album_art, ExtractOutcome};

use log::info;

/// Writes the track's embedded cover next to it.
pub fn run_extract(args: &TrackArgs) -> CliResult<()> {
    let config = args.cover.config_builder().build();
    config.validate()?;

    match extract_album_art(&config, &args.track)? {
        ExtractOutcome::SidecarPresent(existing) => {
            info!("Not extracting, {} already exists", existing.display());
        }
        ExtractOutcome::Extracted(path) => {
            info!("Done: wrote {}", path.display());
        }
    }
    Ok(())
}
