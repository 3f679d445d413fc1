//! Logging initialization for listing_app.
//!
//! Defaults to `./optimizer.log` in the current working directory so the
//! interactive session on stdout stays clean.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_PATH: &str = "./optimizer.log";

/// Destination for log output.
#[allow(dead_code)]
pub enum LogDestination {
    /// Write to ./optimizer.log in current directory.
    File,
    /// Write to terminal (stdout).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

/// Initialize the logger with the specified destination.
///
/// Failure to create the log file degrades to a warning on stderr rather
/// than aborting the session.
pub fn initialize(destination: LogDestination) {
    // Debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if matches!(destination, LogDestination::Terminal | LogDestination::Both) {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if matches!(destination, LogDestination::File | LogDestination::Both) {
        if let Some(file_logger) = file_logger(level, config) {
            loggers.push(file_logger);
        }
    }

    if !loggers.is_empty() {
        let _ = CombinedLogger::init(loggers);
    }
}

fn file_logger(level: LevelFilter, config: Config) -> Option<Box<WriteLogger<File>>> {
    match File::create(Path::new(LOG_PATH)) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {LOG_PATH}: {err}");
            None
        }
    }
}
