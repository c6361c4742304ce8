//! Native file dialog used when no art file sits next to a track.

use albumart_core::ArtPicker;
use log::debug;

use std::path::{Path, PathBuf};

/// Extensions offered in the dialog's image filter.
const IMAGE_FILTER: &[&str] = &["jpg", "jpeg", "png", "JPG", "JPEG", "PNG"];

/// Opens a blocking "choose an image" dialog in the track's directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogPicker;

impl ArtPicker for DialogPicker {
    fn pick(&self, start_dir: &Path) -> Option<PathBuf> {
        debug!("Opening file dialog in {}", start_dir.display());
        rfd::FileDialog::new()
            .set_title("Choose album art")
            .set_directory(start_dir)
            .add_filter("Images", IMAGE_FILTER)
            .pick_file()
    }
}
