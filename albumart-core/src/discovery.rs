//! Art discovery: candidate filename generation and lookup.
//!
//! Loose cover art usually sits next to the tracks under a conventional name
//! such as `cover.jpg` or `Folder.png`. This module builds the ordered list
//! of names worth trying and checks them against a track's directory. Only
//! the track's own directory is searched, never subdirectories.

use crate::config::CoverConfig;
use crate::utils::mime_for_path;

use log::debug;

use std::path::{Path, PathBuf};

/// An art file chosen for a track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedArt {
    /// Full path to the image file
    pub path: PathBuf,
    /// True when the file was found under a conventional name, false when
    /// the user picked it
    pub common_name: bool,
}

impl LocatedArt {
    /// Wraps a path the user picked interactively.
    pub fn picked(path: PathBuf) -> Self {
        Self { path, common_name: false }
    }

    /// MIME type for the art, if its extension is embeddable.
    #[must_use]
    pub fn mime_type(&self) -> Option<&'static str> {
        mime_for_path(&self.path)
    }
}

/// Cross product of base names and extensions, base-major.
///
/// ```rust
/// let names = albumart_core::discovery::combine_names(&["cover", "folder"], &["jpg", "png"]);
/// assert_eq!(names, ["cover.jpg", "cover.png", "folder.jpg", "folder.png"]);
/// ```
#[must_use]
pub fn combine_names<B, E>(base_names: &[B], extensions: &[E]) -> Vec<String>
where
    B: AsRef<str>,
    E: AsRef<str>,
{
    base_names
        .iter()
        .flat_map(|base| {
            extensions
                .iter()
                .map(move |ext| format!("{}.{}", base.as_ref(), ext.as_ref()))
        })
        .collect()
}

/// Builds the ordered candidate list used when embedding.
///
/// The resized cover comes first so a previously downsized file beats the
/// full-size original, then the canonical cover, then every base × extension
/// combination. Duplicates are kept; they only cost an extra existence check.
#[must_use]
pub fn candidate_names(config: &CoverConfig) -> Vec<String> {
    let mut names = Vec::with_capacity(2 + config.base_names.len() * config.extensions.len());
    names.push(config.resized_cover_filename());
    names.push(config.default_cover_filename());
    names.extend(combine_names(&config.base_names, &config.extensions));
    names
}

/// Returns the first candidate that exists as a file in `track_dir`.
///
/// `None` is not an error: it tells the caller to fall back to asking the
/// user.
pub fn find_common_art<S: AsRef<str>>(track_dir: &Path, candidates: &[S]) -> Option<LocatedArt> {
    debug!("Checking for usual album art filenames in {}", track_dir.display());
    for candidate in candidates {
        let possible = track_dir.join(candidate.as_ref());
        debug!("Checking if {} exists...", possible.display());
        if possible.is_file() {
            debug!("Found it! {}", possible.display());
            return Some(LocatedArt { path: possible, common_name: true });
        }
    }
    debug!("Couldn't find anything.");
    None
}
