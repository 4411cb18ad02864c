//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the swap terminal and the
//! swap-aggregation quote API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::quote`]**: Quote request parameters, quote payloads, API error bodies
//!     and the outbound transaction request built from a quote
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format hex addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! The quote API speaks **camelCase** JSON, so every quote DTO carries
//! `#[serde(rename_all = "camelCase")]`. Amount fields stay strings end to end:
//! they are base-unit integers that routinely exceed `u64`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::quote::{Quote, QuoteRequest};
//!
//! let request = QuoteRequest::sell("usdc", "weth", "1500000");
//!
//! let quote: Quote = reqwest::Client::new()
//!     .get("https://api.0x.org/swap/v1/quote")
//!     .query(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
