//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.

use shared::{Quote, QuoteSide};

use super::store::QuoteTicket;
use crate::core::error::AppError;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Quote request finished
    QuoteResult {
        /// Which amount the request was denominated in
        side: QuoteSide,
        ticket: QuoteTicket,
        result: Result<Quote, AppError>,
    },
    /// Transaction handed to the wallet (or refused)
    OrderResult(Result<(), AppError>),
}

impl AppEvent {
    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            AppEvent::QuoteResult { .. } => "quote_result",
            AppEvent::OrderResult(_) => "order_result",
        }
    }
}
