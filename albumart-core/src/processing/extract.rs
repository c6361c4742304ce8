// ============================================================================
// albumart-core/src/processing/extract.rs
// ============================================================================
//
// EXTRACTION: Writing Embedded Art Back Out As A Sidecar File
//
// The reverse of embedding. When a track carries a front cover but its
// directory has no loose art file, the picture bytes are written next to the
// track under the canonical cover name.

use crate::config::CoverConfig;
use crate::discovery::{candidate_names, find_common_art};
use crate::error::{CoreError, CoreResult};
use crate::tags::{extract_front_cover, TrackFormat};
use crate::utils::{extension_for_mime, format_bytes, parent_dir};

use log::{debug, info};

use std::fs;
use std::path::{Path, PathBuf};

/// What `extract_album_art` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractOutcome {
    /// The directory already has loose art; nothing was written.
    SidecarPresent(PathBuf),
    /// The embedded cover was written to this file.
    Extracted(PathBuf),
}

/// Writes the track's embedded front cover next to it.
///
/// The output is named `<copy_cover_name>.<ext>`, with the extension taken
/// from the picture's MIME type and falling back to the configured save
/// extension.
pub fn extract_album_art(config: &CoverConfig, track: &Path) -> CoreResult<ExtractOutcome> {
    if !track.is_file() {
        return Err(CoreError::TrackNotFound(track.to_path_buf()));
    }
    TrackFormat::require(track)?;
    let track_dir = parent_dir(track);

    if let Some(existing) = find_common_art(track_dir, &candidate_names(config)) {
        info!(
            "{} already has art next to it: {}",
            track.display(),
            existing.path.display()
        );
        return Ok(ExtractOutcome::SidecarPresent(existing.path));
    }

    let picture = extract_front_cover(track)?
        .ok_or_else(|| CoreError::NoEmbeddedArt(track.to_path_buf()))?;
    debug!(
        "Embedded cover is {} ({})",
        picture.mime_type,
        format_bytes(picture.data.len() as u64)
    );

    let extension = extension_for_mime(&picture.mime_type)
        .map(str::to_string)
        .unwrap_or_else(|| config.save_extension.clone());
    let destination = track_dir.join(format!("{}.{}", config.copy_cover_name, extension));
    fs::write(&destination, &picture.data)?;
    info!("Extracted album art from {} to {}", track.display(), destination.display());

    Ok(ExtractOutcome::Extracted(destination))
}
