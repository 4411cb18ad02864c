//! # Utility Functions
//!
//! Shared utility functions used across the terminal application.
//!
//! ## Modules
//!
//! - **[`units`]**: Human decimal amounts <-> base-unit integer strings
//! - **[`validation`]**: Amount input filtering and quotability checks
//! - **[`query`]**: Deep-link query string parsing and building
//! - **[`runtime`]**: Process-wide tokio runtime
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate utilities (address formatting)
//! - [`crate::core`]: Core abstractions and error types

pub mod query;
pub mod runtime;
pub mod units;
pub mod validation;

pub use units::{format_units, is_zero, parse_units};
pub use validation::{check_quotable, is_valid_amount_input};
