//! Configuration structures and constants for the albumart-core library.
//!
//! This module provides the configuration for art lookup and placement:
//! which filenames count as cover art, what the canonical cover file is
//! called, and when and how art gets resized before it is embedded.

mod builder;

pub use builder::CoverConfigBuilder;

use crate::error::{CoreError, CoreResult};
use crate::utils::mime_for_extension;

// Default constants

/// Base name the copied or converted cover is saved under ("cover" -> cover.jpg).
pub const DEFAULT_COPY_COVER_NAME: &str = "cover";

/// Extension the canonical cover and resized covers are saved with.
pub const DEFAULT_COVER_SAVE_EXTENSION: &str = "jpg";

/// Base name of the downsized cover written when art exceeds the size limit.
pub const DEFAULT_COVER_RESIZE_NAME: &str = "cover-resized";

/// Bounding box (pixels, both axes) for resized covers.
pub const DEFAULT_RESIZE_DIMENSION: u32 = 512;

/// Base names recognised as loose cover art, in lookup order.
pub const COMMON_ART_BASE_NAMES: &[&str] = &[
    "cover", "Cover", "COVER", "cover0",
    "folder", "Folder", "FOLDER",
    "album_art", "Album_art", "ALBUM_ART",
    "albumart", "Albumart", "AlbumArt", "ALBUMART",
    "jacket", "Jacket", "JACKET",
];

/// Image extensions recognised on loose cover art, in lookup order.
pub const COMMON_ART_EXTENSIONS: &[&str] = &[
    "jpg", "Jpg", "JPG",
    "jpeg", "Jpeg", "JPEG",
    "png", "Png", "PNG",
    "tif", "Tif", "TIF",
    "tiff", "Tiff", "TIFF",
    "bmp", "Bmp", "BMP",
];

/// Main configuration structure for albumart-core.
///
/// Usually built by the CLI from its arguments and passed to the
/// orchestration functions in [`crate::processing`]. Every field has a
/// default, so `CoverConfig::default()` is a usable configuration.
///
/// # Examples
///
/// ```rust
/// use albumart_core::config::CoverConfigBuilder;
///
/// let config = CoverConfigBuilder::new()
///     .edit_all(true)
///     .copy_cover(true)
///     .max_cover_size_mb(1.0)
///     .resize_dimension(600)
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CoverConfig {
    /// Base names tried when looking for loose art next to a track
    pub base_names: Vec<String>,

    /// Extensions combined with every base name
    pub extensions: Vec<String>,

    /// Base name for the canonical cover file in the track directory
    pub copy_cover_name: String,

    /// Extension used when saving the canonical or resized cover
    pub save_extension: String,

    /// Base name for the resized cover written when art is too large
    pub resize_name: String,

    /// Bounding box for resizing, applied to both axes
    pub resize_dimension: u32,

    /// Art larger than this many megabytes is resized before embedding.
    /// `None` disables resizing.
    pub max_cover_size_mb: Option<f64>,

    /// Re-embed art even when the track already has a front cover
    pub edit_all: bool,

    /// Copy art that did not come from a common name into the track directory
    pub copy_cover: bool,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            base_names: COMMON_ART_BASE_NAMES.iter().map(|s| s.to_string()).collect(),
            extensions: COMMON_ART_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            copy_cover_name: DEFAULT_COPY_COVER_NAME.to_string(),
            save_extension: DEFAULT_COVER_SAVE_EXTENSION.to_string(),
            resize_name: DEFAULT_COVER_RESIZE_NAME.to_string(),
            resize_dimension: DEFAULT_RESIZE_DIMENSION,
            max_cover_size_mb: None,
            edit_all: false,
            copy_cover: false,
        }
    }
}

impl CoverConfig {
    /// Filename of the canonical cover, e.g. `cover.jpg`.
    #[must_use]
    pub fn default_cover_filename(&self) -> String {
        format!("{}.{}", self.copy_cover_name, self.save_extension)
    }

    /// Filename of the resized cover, e.g. `cover-resized.jpg`.
    #[must_use]
    pub fn resized_cover_filename(&self) -> String {
        format!("{}.{}", self.resize_name, self.save_extension)
    }

    /// Size limit in bytes, if one is configured.
    #[must_use]
    pub fn max_cover_size_bytes(&self) -> Option<u64> {
        self.max_cover_size_mb
            .map(|mb| (mb * 1024.0 * 1024.0) as u64)
    }

    /// Checks that the configuration can drive a run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.base_names.is_empty() {
            return Err(CoreError::Config("art base name list is empty".to_string()));
        }
        if self.extensions.is_empty() {
            return Err(CoreError::Config("art extension list is empty".to_string()));
        }
        for (label, value) in [
            ("cover name", &self.copy_cover_name),
            ("cover save extension", &self.save_extension),
            ("cover resize name", &self.resize_name),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::Config(format!("{label} must not be empty")));
            }
            if value.contains(['/', '\\']) {
                return Err(CoreError::Config(format!(
                    "{label} '{value}' must not contain path separators"
                )));
            }
        }
        if self.resize_dimension == 0 {
            return Err(CoreError::Config(
                "resize dimension must be greater than zero".to_string(),
            ));
        }
        if let Some(mb) = self.max_cover_size_mb {
            if !mb.is_finite() || mb <= 0.0 {
                return Err(CoreError::Config(format!(
                    "max cover size must be a positive number of megabytes, got {mb}"
                )));
            }
            // Resized covers are embedded, so they must be saved in an embeddable format.
            if mime_for_extension(&self.save_extension).is_none() {
                return Err(CoreError::Config(format!(
                    "cover save extension '{}' can't be embedded after resizing; use jpg, jpeg or png",
                    self.save_extension
                )));
            }
        }
        Ok(())
    }
}
