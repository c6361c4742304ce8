// ============================================================================
// albumart-core/src/tags/mod.rs
// ============================================================================
//
// TAG CONTAINERS: Per-Format Picture Inspection and Embedding
//
// Tracks are dispatched by extension to one handler module per format. Every
// handler answers the same three questions: does the track already carry
// art, write this picture as its front cover, and read its front cover back.
//
// KEY COMPONENTS:
// - TrackFormat: Closed set of supported track formats
// - has_existing_art / embed_art / extract_front_cover: format-agnostic entry points
// - mp3: ID3v2 APIC frames (id3 crate)
// - ogg: METADATA_BLOCK_PICTURE Vorbis comments (lofty crate)
// - picture: EmbeddedPicture, the format-neutral picture model

pub mod mp3;
pub mod ogg;
pub mod picture;

pub use picture::{EmbeddedPicture, COVER_DESCRIPTION, FRONT_COVER_TYPE};

use crate::error::{CoreError, CoreResult};
use crate::utils::extension_lowercase;

use log::debug;

use std::fmt;
use std::path::Path;

/// Audio formats whose tags albumart can read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackFormat {
    Mp3,
    Ogg,
}

impl TrackFormat {
    /// Matches an extension case-insensitively.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "mp3" => Some(Self::Mp3),
            "ogg" => Some(Self::Ogg),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        extension_lowercase(path).and_then(|ext| Self::from_extension(&ext))
    }

    /// Like [`TrackFormat::from_path`], but unsupported tracks are an error.
    pub fn require(path: &Path) -> CoreResult<Self> {
        Self::from_path(path).ok_or_else(|| {
            CoreError::UnsupportedTrackFormat(extension_lowercase(path).unwrap_or_default())
        })
    }

    pub fn has_front_cover(self, path: &Path) -> CoreResult<bool> {
        match self {
            Self::Mp3 => mp3::has_front_cover(path),
            Self::Ogg => ogg::has_front_cover(path),
        }
    }

    pub fn embed_front_cover(self, path: &Path, picture: &EmbeddedPicture) -> CoreResult<()> {
        match self {
            Self::Mp3 => mp3::embed_front_cover(path, picture),
            Self::Ogg => ogg::embed_front_cover(path, picture),
        }
    }

    pub fn read_front_cover(self, path: &Path) -> CoreResult<Option<EmbeddedPicture>> {
        match self {
            Self::Mp3 => mp3::read_front_cover(path),
            Self::Ogg => ogg::read_front_cover(path),
        }
    }
}

impl fmt::Display for TrackFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mp3 => write!(f, "MP3"),
            Self::Ogg => write!(f, "OGG"),
        }
    }
}

/// Whether the track already carries embedded art.
///
/// Unsupported formats report `false`; they are rejected later, when a write
/// is attempted.
pub fn has_existing_art(track: &Path) -> CoreResult<bool> {
    match TrackFormat::from_path(track) {
        Some(format) => {
            debug!("Inspecting {} tags of {}", format, track.display());
            format.has_front_cover(track)
        }
        None => {
            debug!("No tag inspector for {}, assuming no art", track.display());
            Ok(false)
        }
    }
}

/// Embeds the image at `image` as the track's single front cover.
///
/// The track format is checked before the image is read, so an unsupported
/// track is never touched.
pub fn embed_art(track: &Path, image: &Path, mime_type: &str) -> CoreResult<()> {
    let format = TrackFormat::require(track)?;
    debug!(
        "Adding {} album art to {} file {}: {}",
        mime_type,
        format,
        track.display(),
        image.display()
    );
    let data = std::fs::read(image)?;
    format.embed_front_cover(track, &EmbeddedPicture::front_cover(mime_type, data))
}

/// Reads the track's embedded front cover.
pub fn extract_front_cover(track: &Path) -> CoreResult<Option<EmbeddedPicture>> {
    TrackFormat::require(track)?.read_front_cover(track)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(TrackFormat::from_path(Path::new("a/song.mp3")), Some(TrackFormat::Mp3));
        assert_eq!(TrackFormat::from_path(Path::new("SONG.MP3")), Some(TrackFormat::Mp3));
        assert_eq!(TrackFormat::from_path(Path::new("song.Ogg")), Some(TrackFormat::Ogg));
        assert_eq!(TrackFormat::from_path(Path::new("song.flac")), None);
        assert_eq!(TrackFormat::from_path(Path::new("song")), None);
    }

    #[test]
    fn test_unsupported_track_reports_no_art() {
        let dir = tempdir().unwrap();
        let track = dir.path().join("song.flac");
        fs::write(&track, b"fLaC").unwrap();

        assert!(!has_existing_art(&track).unwrap());
    }

    #[test]
    fn test_embed_into_unsupported_track_does_not_mutate() {
        let dir = tempdir().unwrap();
        let track = dir.path().join("song.wav");
        let image = dir.path().join("cover.jpg");
        fs::write(&track, b"RIFF....WAVE").unwrap();
        fs::write(&image, b"jpeg").unwrap();

        let result = embed_art(&track, &image, "image/jpeg");
        match result {
            Err(CoreError::UnsupportedTrackFormat(ext)) => assert_eq!(ext, "wav"),
            other => panic!("Unexpected result: {:?}", other),
        }
        assert_eq!(fs::read(&track).unwrap(), b"RIFF....WAVE");
    }
}
