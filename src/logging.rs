use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable overriding the TUI log file location
pub const LOG_PATH_ENV: &str = "QUOTELIST_LOG";

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Subcommands log to stderr
    Stderr,
    /// The fullscreen TUI owns the terminal, so it logs to a file
    File,
}

/// Path of the TUI log file
pub fn log_file_path() -> PathBuf {
    std::env::var(LOG_PATH_ENV)
        .ok()
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("quotelist.log"))
}

/// Install the global subscriber. Only the first call wins.
pub fn init(target: LogTarget) {
    let default_level = match target {
        LogTarget::Stderr => "warn",
        LogTarget::File => "info",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
        }
        LogTarget::File => {
            let path = log_file_path();
            let file = match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => file,
                // No log file, no logging; stderr would corrupt the screen.
                Err(_) => return,
            };
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
    }
}
