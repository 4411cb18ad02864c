//! # Event Handler
//!
//! Handles async event results from background tasks, updating application state accordingly.
//!
//! Quote results are applied through the store's ticket check, so only the
//! response to the most recent request ever changes the trade state.

use shared::{Quote, QuoteSide};

use crate::app::store::QuoteTicket;
use crate::app::{App, AppEvent, OrderStatus};
use crate::core::error::AppError;

/// Trait for event handling implementation
pub trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        tracing::trace!(event = event.kind(), "Handling event");

        match event {
            AppEvent::QuoteResult { side, ticket, result: Ok(quote) } => {
                self.handle_quote_received(side, ticket, quote);
            }
            AppEvent::QuoteResult { side, ticket, result: Err(error) } => {
                self.handle_quote_failed(side, ticket, error);
            }
            AppEvent::OrderResult(result) => {
                self.handle_order_result(result);
            }
        }
    }
}

impl App {
    fn handle_quote_received(&mut self, side: QuoteSide, ticket: QuoteTicket, quote: Quote) {
        if self.store.apply_quote(side, ticket, quote) {
            self.last_quote_error = None;
        }
    }

    fn handle_quote_failed(&mut self, side: QuoteSide, ticket: QuoteTicket, error: AppError) {
        if self.store.fail_quote(side, ticket, &error) {
            self.last_quote_error = Some(error);
        }
    }

    fn handle_order_result(&mut self, result: Result<(), AppError>) {
        self.order_status = match result {
            Ok(()) => {
                tracing::info!("Order exported");
                OrderStatus::Exported
            }
            Err(error) => OrderStatus::Failed(error),
        };
    }
}
