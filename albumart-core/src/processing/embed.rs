// ============================================================================
// albumart-core/src/processing/embed.rs
// ============================================================================
//
// EMBEDDING: Per-Track Cover Art Orchestration
//
// This module houses the main orchestration logic for albumart. It takes a
// single track from "does it need art?" to "art embedded", calling into the
// discovery, picker, resize and tag modules along the way.
//
// WORKFLOW:
// 1. Check the config, that the track exists and that its format is supported
// 2. Inspect the track's tags for existing art
// 3. Stop early if art exists and re-embedding was not requested
// 4. Look for conventionally named art next to the track, else ask the user
// 5. Check that the chosen image exists and has an embeddable type
// 6. Resize oversized art, or copy picked art to the canonical cover name
// 7. Embed the image as the track's front cover

// ---- Internal crate imports ----
use crate::config::CoverConfig;
use crate::discovery::{candidate_names, find_common_art, LocatedArt};
use crate::error::{CoreError, CoreResult};
use crate::picker::ArtPicker;
use crate::resize::resize_image;
use crate::tags::{embed_art, TrackFormat};
use crate::utils::{extension_lowercase, format_bytes, mime_for_path, parent_dir};

// ---- External crate imports ----
use log::{debug, info, warn};

// ---- Standard library imports ----
use std::fs;
use std::path::{Path, PathBuf};

/// What `embed_album_art` did to the track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedOutcome {
    /// The track already had art and `edit_all` was off; nothing was written.
    AlreadyPresent,
    /// Art was embedded into a track that had none.
    Added { image: PathBuf, mime_type: &'static str },
    /// Existing art was overwritten.
    Replaced { image: PathBuf, mime_type: &'static str },
}

// ============================================================================
// MAIN EMBED FUNCTION
// ============================================================================

/// Embeds cover art into a single track.
///
/// # Arguments
///
/// * `config` - Lookup, copy and resize settings
/// * `track` - Path to the MP3/OGG track
/// * `picker` - Asked for an image when no conventional art file exists
///
/// # Errors
///
/// * `CoreError::Config` - The config failed validation
/// * `CoreError::TrackNotFound` - The track does not exist
/// * `CoreError::UnsupportedTrackFormat` - The track is not MP3/OGG
/// * `CoreError::NoArtSelected` - Nothing found and the user cancelled
/// * `CoreError::ImageNotFound` - The chosen image does not exist
/// * `CoreError::UnsupportedImageType` - The image is not jpg/jpeg/png
/// * Tag, image and IO errors from the underlying libraries
pub fn embed_album_art(
    config: &CoverConfig,
    track: &Path,
    picker: &dyn ArtPicker,
) -> CoreResult<EmbedOutcome> {
    config.validate()?;
    debug!("Track full path is {}", track.display());
    if !track.is_file() {
        return Err(CoreError::TrackNotFound(track.to_path_buf()));
    }
    let format = TrackFormat::require(track)?;
    debug!("Track format is {}", format);
    let track_dir = parent_dir(track);
    debug!("Track dir is {}", track_dir.display());

    let has_art = format.has_front_cover(track)?;
    if has_art && !config.edit_all {
        info!("File already has an album art: {}", track.display());
        return Ok(EmbedOutcome::AlreadyPresent);
    }

    let located = match find_common_art(track_dir, &candidate_names(config)) {
        Some(art) => art,
        None => {
            warn!(
                "Art for {} not found automatically, asking for a file...",
                track.display()
            );
            let picked = picker
                .pick(track_dir)
                .ok_or_else(|| CoreError::NoArtSelected(track.to_path_buf()))?;
            debug!("Got {} from the user.", picked.display());
            LocatedArt::picked(picked)
        }
    };

    let mime_type = validate_art(&located.path)?;
    debug!("Image file MIME type is {}", mime_type);

    let (image, mime_type) = prepare_art(config, track_dir, &located, mime_type)?;

    if has_art {
        info!("Changing album art for: {}", track.display());
    } else {
        info!("Adding album art to: {}", track.display());
    }
    embed_art(track, &image, mime_type)?;

    Ok(if has_art {
        EmbedOutcome::Replaced { image, mime_type }
    } else {
        EmbedOutcome::Added { image, mime_type }
    })
}

// ============================================================================
// HELPERS
// ============================================================================

/// Checks that an art file exists and resolves its MIME type.
fn validate_art(path: &Path) -> CoreResult<&'static str> {
    if !path.is_file() {
        return Err(CoreError::ImageNotFound(path.to_path_buf()));
    }
    mime_for_path(path).ok_or_else(|| CoreError::UnsupportedImageType(path.to_path_buf()))
}

/// Applies the size limit or the copy-cover option.
///
/// Returns the image and MIME type to embed, which differ from the located
/// art only when it had to be resized.
fn prepare_art(
    config: &CoverConfig,
    track_dir: &Path,
    located: &LocatedArt,
    mime_type: &'static str,
) -> CoreResult<(PathBuf, &'static str)> {
    if let Some(limit) = config.max_cover_size_bytes() {
        let size = fs::metadata(&located.path)?.len();
        if size > limit {
            info!(
                "{} is {} (limit {}), resizing to fit {}px",
                located.path.display(),
                format_bytes(size),
                format_bytes(limit),
                config.resize_dimension
            );
            let destination = track_dir.join(config.resized_cover_filename());
            let resized = resize_image(&located.path, config.resize_dimension, &destination)?;
            let resized_mime = validate_art(&resized)?;
            return Ok((resized, resized_mime));
        }
        debug!("{} is within the size limit", located.path.display());
    }

    if config.copy_cover && !located.common_name {
        copy_to_canonical_name(config, track_dir, &located.path)?;
    }

    Ok((located.path.clone(), mime_type))
}

fn copy_to_canonical_name(config: &CoverConfig, track_dir: &Path, image: &Path) -> CoreResult<()> {
    let extension = extension_lowercase(image)
        .unwrap_or_else(|| config.save_extension.clone());
    let destination = track_dir.join(format!("{}.{}", config.copy_cover_name, extension));

    if is_same_file(image, &destination) {
        debug!("{} is already the canonical cover", image.display());
        return Ok(());
    }

    info!(
        "Copying {} to track dir as {}",
        image.display(),
        destination.display()
    );
    fs::copy(image, &destination)?;
    Ok(())
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
