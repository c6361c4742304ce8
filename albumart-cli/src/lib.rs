// albumart-cli/src/lib.rs
//
// Library portion of the albumart CLI application.
// Contains argument definitions, logging setup and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod picker;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, CoverArgs, EmbedArgs, TrackArgs};
pub use commands::convert::run_convert;
pub use commands::embed::run_embed;
pub use commands::extract::run_extract;
pub use error::{report_error, CliResult};
