// ============================================================================
// albumart-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Terminal and File Log Dispatch
//
// The core library only talks to the `log` facade. This module installs the
// single global logger for the binary using `fern`:
// - stderr: level names coloured by severity, message only
// - optional log file: plain text with a local timestamp and target
//
// USAGE:
// Verbosity comes from the -v flag count:
// - (none): info and above
// - -v: debug
// - -vv: trace

use anyhow::Context;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

use std::path::Path;

/// Returns the current local timestamp formatted as "YYYY-MM-DD HH:MM:SS".
///
/// Used to prefix lines written to the log file.
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Maps the number of -v flags to a log level.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the global logger. Must be called once, before any logging.
pub fn init_logging(verbosity: u8, log_file: Option<&Path>) -> anyhow::Result<()> {
    let level = level_for_verbosity(verbosity);
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::Magenta);

    let terminal = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!("[{}] {}", colors.color(record.level()), message))
        })
        .chain(std::io::stderr());

    let mut dispatch = fern::Dispatch::new()
        .level(level)
        // The portal file dialog talks D-Bus, which is very chatty at debug.
        .level_for("zbus", LevelFilter::Warn)
        .chain(terminal);

    if let Some(path) = log_file {
        let file = fern::log_file(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} [{}] {}: {}",
                        get_timestamp(),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(file),
        );
    }

    dispatch
        .apply()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;
    Ok(())
}
