//! # Trade Store
//!
//! Owns the shared [`TradeState`] and the quote ticket counter.
//!
//! Every mutation goes through [`Store::dispatch`], which runs the pure
//! reducer under a short write lock. Quote requests are numbered: each
//! [`Store::begin_quote`] issues a new [`QuoteTicket`], and a response is only
//! applied if its ticket is still the latest one issued.

use parking_lot::RwLock;
use shared::{Quote, QuoteSide};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::reducer::{reduce, Action};
use super::state::TradeState;
use crate::config::TokenRegistry;
use crate::core::error::AppError;

/// Sequence number of a quote request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuoteTicket(u64);

impl fmt::Display for QuoteTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Shared handle to the trade state. Cloning shares the same state.
#[derive(Clone)]
pub struct Store {
    state: Arc<RwLock<TradeState>>,
    tokens: Arc<TokenRegistry>,
    latest_ticket: Arc<AtomicU64>,
}

impl Store {
    pub fn new(initial: TradeState, tokens: Arc<TokenRegistry>) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
            tokens,
            latest_ticket: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Run one action through the reducer.
    pub fn dispatch(&self, action: Action) {
        tracing::trace!(action = action.name(), "dispatch");
        let mut state = self.state.write();
        *state = reduce(&state, action, &self.tokens);
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> TradeState {
        self.state.read().clone()
    }

    /// Read a derived value without cloning the whole state.
    pub fn read<R>(&self, f: impl FnOnce(&TradeState) -> R) -> R {
        f(&self.state.read())
    }

    pub fn tokens(&self) -> &Arc<TokenRegistry> {
        &self.tokens
    }

    /// Mark a quote request as started and number it.
    pub fn begin_quote(&self) -> QuoteTicket {
        let ticket = QuoteTicket(self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1);
        self.dispatch(Action::FetchingQuote(true));
        ticket
    }

    /// True when no request was issued after `ticket`.
    pub fn is_current(&self, ticket: QuoteTicket) -> bool {
        self.latest_ticket.load(Ordering::SeqCst) == ticket.0
    }

    /// Orphan every outstanding request and drop the held quote.
    ///
    /// The held quote no longer matches the form once its request is orphaned,
    /// so it must not stay placeable.
    pub fn invalidate_quotes(&self) {
        self.latest_ticket.fetch_add(1, Ordering::SeqCst);
        if self.read(|s| s.fetching || s.quote.is_some()) {
            self.dispatch(Action::ClearQuote);
        }
    }

    /// Apply a quote response. Returns false if it was stale and dropped.
    pub fn apply_quote(&self, side: QuoteSide, ticket: QuoteTicket, quote: Quote) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(%side, %ticket, "Dropping stale quote");
            return false;
        }
        match side {
            QuoteSide::Sell => self.dispatch(Action::SetSellQuote(quote)),
            QuoteSide::Buy => self.dispatch(Action::SetBuyQuote(quote)),
        }
        true
    }

    /// Record a failed request. Returns false if it was stale and ignored.
    pub fn fail_quote(&self, side: QuoteSide, ticket: QuoteTicket, error: &AppError) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(%side, %ticket, error = %error, "Ignoring stale quote error");
            return false;
        }
        tracing::warn!(%side, %ticket, error = %error, "Quote fetch failed");
        // The held quote answered an earlier edit.
        self.dispatch(Action::ClearQuote);
        true
    }
}
