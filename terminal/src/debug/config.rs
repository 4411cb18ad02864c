//! Logging configuration from environment variables

use std::path::PathBuf;

const DEFAULT_LOG_LEVEL: &str = "swap_terminal=info,warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log directory (daily rotation)
    pub log_dir: PathBuf,
    /// File name prefix inside `log_dir`
    pub file_name: String,
    /// Filter used when `RUST_LOG` is unset (e.g. "swap_terminal=debug,info")
    pub log_level: String,
    /// Mirror logs to stderr
    pub log_to_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            file_name: "swap-terminal.log".to_string(),
            log_level: default_level().to_string(),
            log_to_stderr: cfg!(feature = "debug-mode"),
        }
    }
}

fn default_level() -> &'static str {
    if cfg!(feature = "debug-mode") {
        "swap_terminal=debug,info"
    } else {
        DEFAULT_LOG_LEVEL
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_dir: std::env::var("SWAP_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            file_name: defaults.file_name,
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_to_stderr: std::env::var("SWAP_LOG_STDERR")
                .map(|v| v == "1")
                .unwrap_or(defaults.log_to_stderr),
        }
    }

    /// Override the filter (from `--log-level`).
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
