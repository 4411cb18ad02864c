//! # Quote API Client Module
//!
//! HTTP client for the swap aggregation API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - QuoteClient struct, endpoint selection, QuoteService impl
//! └── quote.rs    - Quote endpoint (request validation, fetch, error mapping)
//! ```

pub mod client;
pub mod quote;

pub use client::QuoteClient;
pub use quote::{get_quote, validate_request};
