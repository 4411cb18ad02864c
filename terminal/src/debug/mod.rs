//! # Logging Infrastructure
//!
//! File-based structured logging for the swap terminal.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use swap_terminal::debug::{init_logger, LogConfig};
//!
//! // Initialize at app startup
//! init_logger(&LogConfig::from_env());
//!
//! // Log with structured fields
//! tracing::info!(network = "ethereum", duration_ms = 234, "Quote received");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `swap_terminal=debug,info`)
//! - `SWAP_LOG_DIR`: Log directory (default: `logs/`)
//! - `SWAP_LOG_STDERR`: Mirror logs to stderr (1=on, 0=off)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init as init_logger;
