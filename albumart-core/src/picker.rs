//! Interactive art selection seam.
//!
//! When no conventional art file sits next to a track, the user is asked to
//! choose one. The core only needs "a path, or nothing"; the CLI decides how
//! to ask (a native dialog, or not at all).

use std::path::{Path, PathBuf};

/// Asks the user for an image file. Blocks until they answer.
pub trait ArtPicker {
    /// Returns the chosen file, or `None` if the user cancelled.
    fn pick(&self, start_dir: &Path) -> Option<PathBuf>;
}

/// Picker for non-interactive runs: every request counts as cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDialogPicker;

impl ArtPicker for NoDialogPicker {
    fn pick(&self, _start_dir: &Path) -> Option<PathBuf> {
        None
    }
}

impl<F> ArtPicker for F
where
    F: Fn(&Path) -> Option<PathBuf>,
{
    fn pick(&self, start_dir: &Path) -> Option<PathBuf> {
        self(start_dir)
    }
}
