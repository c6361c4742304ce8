//! Command implementations for the CLI.
//!
//! Each submodule maps its parsed arguments onto a core config and runs one
//! workflow on one track.

/// Default action: embed art into a track.
pub mod embed;

/// The `extract` subcommand: write embedded art out to a file.
pub mod extract;

/// The `convert` subcommand: rewrite loose art as the canonical cover.
pub mod convert;
