// ============================================================================
// albumart-core/src/processing/convert.rs
// ============================================================================
//
// CONVERSION: Normalising Loose Art To The Canonical Cover File
//
// Takes whatever conventionally named art sits next to a track and rewrites
// it as `<copy_cover_name>.<save_extension>`, scaled to fit the configured
// resize dimension. A file already holding the canonical name is backed up
// before it is replaced.

use crate::config::CoverConfig;
use crate::discovery::{combine_names, find_common_art};
use crate::error::{CoreError, CoreResult};
use crate::resize::resize_image;
use crate::utils::parent_dir;

use log::{debug, info};

use std::fs;
use std::path::{Path, PathBuf};

/// Files touched by `convert_album_art`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOutcome {
    /// The art file that was converted
    pub source: PathBuf,
    /// The canonical cover file that was written
    pub output: PathBuf,
    /// Copy of the previous canonical cover, if there was one
    pub backup: Option<PathBuf>,
}

/// Converts the art in the track's directory to the canonical cover file.
///
/// The source is the first match among the configured base names and
/// extensions. The resized/default priority names are not consulted, so a
/// previous `cover-resized.jpg` is never picked up as a source on its own.
pub fn convert_album_art(config: &CoverConfig, track: &Path) -> CoreResult<ConvertOutcome> {
    if !track.is_file() {
        return Err(CoreError::TrackNotFound(track.to_path_buf()));
    }
    let track_dir = parent_dir(track);
    let target = track_dir.join(config.default_cover_filename());

    let candidates = combine_names(&config.base_names, &config.extensions);
    let source = find_common_art(track_dir, &candidates)
        .ok_or_else(|| CoreError::NoArtFound(track_dir.to_path_buf()))?
        .path;
    debug!("Converting {} into {}", source.display(), target.display());

    let backup = if target.is_file() {
        let backup = track_dir.join(format!(
            "{}-original.{}",
            config.copy_cover_name, config.save_extension
        ));
        info!("Backing up {} to {}", target.display(), backup.display());
        fs::copy(&target, &backup)?;
        Some(backup)
    } else {
        None
    };

    // When the source is the target itself, read it from the backup so the
    // decode never races the overwrite.
    let read_from = match &backup {
        Some(backup) if source == target => backup.clone(),
        _ => source.clone(),
    };
    let output = resize_image(&read_from, config.resize_dimension, &target)?;
    info!("Converted {} to {}", source.display(), output.display());

    Ok(ConvertOutcome { source, output, backup })
}
