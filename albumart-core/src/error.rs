// ============================================================================
// albumart-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the Core Library
//
// Every fallible operation in albumart-core returns `CoreResult<T>`. Two
// failure modes never reach this type because they are recovered where they
// happen: a track without any tag header (treated as "no art"), and an image
// whose colour type the target encoder rejects (flattened and retried once).

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by albumart-core.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Track not found: {}", .0.display())]
    TrackNotFound(PathBuf),

    #[error("Album art file does not exist: {}", .0.display())]
    ImageNotFound(PathBuf),

    #[error("File type '{0}' is not supported for tracks")]
    UnsupportedTrackFormat(String),

    #[error("Image {} is not of a supported type", .0.display())]
    UnsupportedImageType(PathBuf),

    #[error("No art selected for {}", .0.display())]
    NoArtSelected(PathBuf),

    #[error("No suitable art files found in {}", .0.display())]
    NoArtFound(PathBuf),

    #[error("No embedded front cover in {}", .0.display())]
    NoEmbeddedArt(PathBuf),

    #[error("Failed to decode image: {0}")]
    ImageDecoding(String),

    #[error("Failed to encode image: {0}")]
    ImageEncoding(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("ID3 error: {0}")]
    Id3(#[from] id3::Error),

    #[error("Tag error: {0}")]
    Lofty(#[from] lofty::error::LoftyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for albumart-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
