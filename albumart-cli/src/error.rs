// ============================================================================
// albumart-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result alias and user-facing error reporting
//
// Commands return core errors unchanged. At the process boundary they are
// logged once, at error level, with a hint for the failures a user can fix
// by rearranging files.

// ---- Internal crate imports ----
use albumart_core::{CoreError, CoreResult};

// ---- External crate imports ----
use log::{error, info};

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Suggestion shown after an error, if there is an obvious next step.
pub fn hint_for(err: &CoreError) -> Option<&'static str> {
    match err {
        CoreError::NoArtSelected(_) => {
            Some("Put a cover.jpg or folder.png next to the track, or run without --no-dialog")
        }
        CoreError::NoArtFound(_) => Some("Name the art file cover, folder, albumart or jacket"),
        CoreError::UnsupportedImageType(_) => Some("Only jpg, jpeg and png images can be embedded"),
        CoreError::UnsupportedTrackFormat(_) => Some("Only mp3 and ogg tracks are supported"),
        _ => None,
    }
}

/// Logs a command failure.
pub fn report_error(err: &CoreError) {
    error!("{err}");
    if let Some(hint) = hint_for(err) {
        info!("{hint}");
    }
}
