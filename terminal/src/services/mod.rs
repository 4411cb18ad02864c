//! # Services Module
//!
//! External service integrations for the swap terminal.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── api/         - Quote API HTTP client (QuoteService)
//! └── wallet.rs    - Transaction export (WalletService)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     Swap Terminal                       │
//! │                                                         │
//! │  ┌──────────────────┐       ┌──────────────────┐       │
//! │  │  QuoteClient     │       │  ExportWallet    │       │
//! │  │  (api/)          │       │  (wallet.rs)     │       │
//! │  └────────┬─────────┘       └────────┬─────────┘       │
//! │           │                          │                 │
//! └───────────┼──────────────────────────┼─────────────────┘
//!             │                          │
//!             │ HTTP/JSON                │ JSON lines
//!             ▼                          ▼
//! ┌─────────────────────┐    ┌─────────────────────────────┐
//! │  Quote API          │    │  External signer            │
//! │  /swap/v1/quote     │    │  (stdout)                   │
//! │  per-network host   │    │                             │
//! └─────────────────────┘    └─────────────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Both services return [`crate::core::error::Result`]:
//! - Network errors: `AppError::Network`
//! - Parse errors: `AppError::Parse`
//! - API errors: `AppError::Api`, reason taken from the error body
//! - Request shape: `AppError::SameToken` / `AppError::AmountSpecification`,
//!   raised before any request is sent
//!
//! ## Thread Safety
//!
//! `QuoteClient` wraps `reqwest::Client` (internally pooled) and is shared as
//! `Arc<dyn QuoteService>` across the debounce tasks.

pub mod api;
pub mod wallet;

pub use api::QuoteClient;
pub use wallet::ExportWallet;
