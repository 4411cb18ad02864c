//! # Common Error Types
//!
//! Consolidated error handling for the swap terminal.
//!
//! This module provides a centralized error type [`AppError`] that covers every
//! recoverable failure in the application.
//!
//! ## Error Categories
//!
//! - **Request shape**: `SameToken`, `AmountSpecification` - rejected before any
//!   network call so they are never confused with transport failures
//! - **Transport**: `Network`, `Parse`, `Api` - quote API communication
//! - **Lookup**: `UnknownToken`, `UnsupportedNetwork` - registry misses
//! - **Input**: `InvalidAmount` - decimal/base-unit conversion
//! - **Setup**: `Config`, `Settings`, `Wallet`
//!
//! ## Usage Pattern
//!
//! ```rust
//! use swap_terminal::core::error::AppError;
//!
//! fn check_pair(sell: &str, buy: &str) -> Result<(), AppError> {
//!     if sell == buy {
//!         return Err(AppError::SameToken { token: sell.to_string() });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_pair("usdc", "usdc").is_err());
//! ```

use thiserror::Error;

/// Application-wide error type.
///
/// Errors travel from network tasks back to the UI thread as values inside
/// [`crate::app::AppEvent`], so the type is `Clone`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Sell and buy token are the same identifier.
    #[error("Cannot swap the same tokens: {token} & {token}")]
    SameToken { token: String },

    /// A quote request must carry exactly one of `sellAmount` / `buyAmount`.
    #[error("Invalid quote request: {0}")]
    AmountSpecification(&'static str),

    /// Transport failure (connection refused, timeout, DNS).
    #[error("Network error: {0}")]
    Network(String),

    /// Body was not JSON or did not match the quote schema.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Non-2xx reply from the quote API.
    #[error("Quote API error ({status}): {reason}")]
    Api { status: u16, reason: String },

    /// Token identifier missing from the registry.
    #[error("Unknown token: {0}")]
    UnknownToken(String),

    /// Network name without a chain id / endpoint mapping.
    #[error("Unsupported network: {0}")]
    UnsupportedNetwork(String),

    /// Amount could not be converted between human and base units.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings error: {0}")]
    Settings(String),

    /// The wallet collaborator refused or failed to take the transaction.
    #[error("Wallet error: {0}")]
    Wallet(String),
}

impl AppError {
    /// True for failures detected before any network call.
    pub fn is_request_rejection(&self) -> bool {
        matches!(self, AppError::SameToken { .. } | AppError::AmountSpecification(_))
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Parse(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}
