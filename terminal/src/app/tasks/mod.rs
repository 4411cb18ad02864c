//! # Async Tasks
//!
//! Background work spawned from the UI thread: debounced quote fetching and
//! order hand-off to the wallet.

pub mod order;
pub mod quote;

pub use quote::{DebouncedQuoteFetcher, ErrorCallback, QuoteCallback, QuoteFetchers};
