// albumart-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.
//
// Embedding is the default action, so its arguments sit at the top level:
// `albumart song.mp3`. The secondary actions are subcommands:
// `albumart extract song.mp3`, `albumart convert song.mp3`.

use albumart_core::config::{
    DEFAULT_COPY_COVER_NAME, DEFAULT_COVER_RESIZE_NAME, DEFAULT_COVER_SAVE_EXTENSION,
    DEFAULT_RESIZE_DIMENSION,
};
use albumart_core::CoverConfigBuilder;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Albumart: embed cover art into MP3 and OGG tracks",
    long_about = "Finds cover art next to a track (cover.jpg, folder.png, ...) or asks for \
                  an image, optionally shrinks it, and embeds it as the track's front cover.",
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub embed: EmbedArgs,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Optional: Also write log output to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Writes a track's embedded cover out as an image file next to it
    Extract(TrackArgs),
    /// Rewrites loose cover art as the canonical cover file, resized
    Convert(TrackArgs),
}

/// Names and sizes shared by every action.
#[derive(Args, Debug, Clone)]
pub struct CoverArgs {
    /// Base name for copied, extracted and converted covers
    #[arg(long, value_name = "NAME", default_value = DEFAULT_COPY_COVER_NAME)]
    pub copy_cover_name: String,

    /// Extension for saved and resized covers
    #[arg(long, value_name = "EXT", default_value = DEFAULT_COVER_SAVE_EXTENSION)]
    pub cover_save_extension: String,

    /// Bounding box (in pixels) that resized covers must fit inside
    #[arg(
        long,
        value_name = "PX",
        default_value_t = DEFAULT_RESIZE_DIMENSION,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub cover_resize_dimensions: u32,

    /// Base name for resized covers
    #[arg(long, value_name = "NAME", default_value = DEFAULT_COVER_RESIZE_NAME)]
    pub cover_resize_name: String,
}

impl CoverArgs {
    /// Starts a core config builder from these arguments.
    pub fn config_builder(&self) -> CoverConfigBuilder {
        CoverConfigBuilder::new()
            .copy_cover_name(self.copy_cover_name.clone())
            .save_extension(self.cover_save_extension.clone())
            .resize_dimension(self.cover_resize_dimensions)
            .resize_name(self.cover_resize_name.clone())
    }
}

#[derive(Args, Debug)]
pub struct EmbedArgs {
    /// MP3 or OGG track to add album art to
    #[arg(required = true, value_name = "TRACK")]
    pub track: Option<PathBuf>,

    /// Replace art even in tracks that already have some
    #[arg(short = 'a', long)]
    pub edit_all: bool,

    /// Copy art picked from elsewhere into the track's directory
    #[arg(short = 'c', long)]
    pub copy_cover: bool,

    /// Optional: Resize art larger than this many megabytes before embedding.
    /// Can also be set via the ALBUMART_MAX_COVER_SIZE environment variable.
    #[arg(long, value_name = "MB", env = "ALBUMART_MAX_COVER_SIZE")]
    pub max_cover_size: Option<f64>,

    /// Never open the file picker; missing art is treated as a cancel
    #[arg(long)]
    pub no_dialog: bool,

    /// Not implemented; accepted for compatibility
    #[arg(long)]
    pub delete_original_cover: bool,

    /// Not implemented; accepted for compatibility
    #[arg(short = 'r', long)]
    pub recursive: bool,

    #[command(flatten)]
    pub cover: CoverArgs,
}

#[derive(Args, Debug)]
pub struct TrackArgs {
    /// MP3 or OGG track to work on
    #[arg(value_name = "TRACK")]
    pub track: PathBuf,

    #[command(flatten)]
    pub cover: CoverArgs,
}
