//! Per-track cover art workflows.
//!
//! Each submodule drives one action end to end on a single track, combining
//! discovery, tag access and image resizing.

/// Embedding art into a track (the default action)
pub mod embed;

/// Writing embedded art back out as a sidecar file
pub mod extract;

/// Normalising loose art to the canonical cover file
pub mod convert;

pub use convert::{convert_album_art, ConvertOutcome};
pub use embed::{embed_album_art, EmbedOutcome};
pub use extract::{extract_album_art, ExtractOutcome};
