//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`QuoteService`, `WalletService`)
//!
//! ## Dependency Injection
//!
//! Handlers and the debounced fetcher hold an `Arc<dyn QuoteService>`:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use swap_terminal::core::QuoteService;
//!
//! // In production: the HTTP client
//! let quotes: Arc<dyn QuoteService> = Arc::new(QuoteClient::new(&config)?);
//!
//! // In tests: a recording mock
//! let quotes: Arc<dyn QuoteService> = Arc::new(MockQuoteService::default());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{QuoteService, WalletService};
