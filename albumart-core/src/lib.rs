//! Core library for finding, embedding, extracting and resizing album art
//! in MP3 and OGG tracks.
//!
//! This crate locates conventionally named cover images next to a track,
//! falls back to an interactive picker, shrinks oversized images and writes
//! the result as the track's front cover (ID3v2 APIC for MP3,
//! `METADATA_BLOCK_PICTURE` for OGG).
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use albumart_core::{embed_album_art, CoverConfigBuilder, EmbedOutcome, NoDialogPicker};
//! use std::path::Path;
//!
//! let config = CoverConfigBuilder::new()
//!     .copy_cover(true)
//!     .max_cover_size_mb(1.5)
//!     .build();
//! config.validate().unwrap();
//!
//! match embed_album_art(&config, Path::new("album/song.mp3"), &NoDialogPicker).unwrap() {
//!     EmbedOutcome::AlreadyPresent => println!("nothing to do"),
//!     EmbedOutcome::Added { image, .. } | EmbedOutcome::Replaced { image, .. } => {
//!         println!("embedded {}", image.display())
//!     }
//! }
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod picker;
pub mod processing;
pub mod resize;
pub mod tags;
pub mod utils;

// Re-exports for public API
pub use config::{CoverConfig, CoverConfigBuilder};
pub use discovery::{candidate_names, find_common_art, LocatedArt};
pub use error::{CoreError, CoreResult};
pub use picker::{ArtPicker, NoDialogPicker};
pub use processing::{
    convert_album_art, embed_album_art, extract_album_art, ConvertOutcome, EmbedOutcome,
    ExtractOutcome,
};
pub use resize::resize_image;
pub use tags::{EmbeddedPicture, TrackFormat};
pub use utils::format_bytes;
