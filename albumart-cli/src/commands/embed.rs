//! Implementation of the default embed action.
//!
//! Validates the arguments into a core config, chooses a picker and hands the
//! track to `albumart_core::embed_album_art`.

use crate::cli::EmbedArgs;
use crate::error::CliResult;
use crate::picker::DialogPicker;

use albumart_core::{embed_album_art, ArtPicker, CoreError, CoverConfig, EmbedOutcome, NoDialogPicker};

use log::{debug, info, warn};

/// Builds and validates the core config for an embed run.
pub fn embed_config(args: &EmbedArgs) -> CliResult<CoverConfig> {
    let mut builder = args
        .cover
        .config_builder()
        .edit_all(args.edit_all)
        .copy_cover(args.copy_cover);
    if let Some(megabytes) = args.max_cover_size {
        builder = builder.max_cover_size_mb(megabytes);
    }
    let config = builder.build();
    config.validate()?;
    Ok(config)
}

/// Runs the embed action on the track given on the command line.
pub fn run_embed(args: &EmbedArgs) -> CliResult<()> {
    let track = args
        .track
        .as_deref()
        .ok_or_else(|| CoreError::Config("no track given".to_string()))?;

    if args.delete_original_cover {
        warn!("--delete-original-cover is not implemented yet, ignoring it");
    }
    if args.recursive {
        warn!("--recursive is not implemented yet, only {} will be processed", track.display());
    }

    let config = embed_config(args)?;
    debug!("Using config: {:?}", config);

    let picker: &dyn ArtPicker = if args.no_dialog {
        &NoDialogPicker
    } else {
        &DialogPicker
    };

    match embed_album_art(&config, track, picker)? {
        EmbedOutcome::AlreadyPresent => {
            info!("Nothing to do for {} (use --edit-all to replace)", track.display());
        }
        EmbedOutcome::Added { image, .. } | EmbedOutcome::Replaced { image, .. } => {
            info!("Done: {} now uses {}", track.display(), image.display());
        }
    }
    Ok(())
}
