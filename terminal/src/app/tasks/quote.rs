//! # Quote Tasks
//!
//! Debounced quote fetching.
//!
//! Each amount field owns one [`DebouncedQuoteFetcher`]. A call arms a timer;
//! another call before it fires aborts the timer and arms a new one, so only
//! the last call within the quiet period reaches the network. When the timer
//! fires the request runs as its own detached task, and its result is only
//! delivered while the fetcher is still active.

use async_channel::Sender;
use parking_lot::Mutex;
use shared::{Quote, QuoteRequest, QuoteSide};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::app::events::AppEvent;
use crate::app::store::QuoteTicket;
use crate::config::Network;
use crate::core::error::AppError;
use crate::core::service::QuoteService;

/// Called with the parsed quote of a finished request
pub type QuoteCallback = Arc<dyn Fn(QuoteTicket, Quote) + Send + Sync>;
/// Called with the failure of a finished request
pub type ErrorCallback = Arc<dyn Fn(QuoteTicket, AppError) + Send + Sync>;

/// Debounced quote fetcher for one edit target.
pub struct DebouncedQuoteFetcher {
    side: QuoteSide,
    service: Arc<dyn QuoteService>,
    delay: Duration,
    on_success: QuoteCallback,
    on_error: ErrorCallback,
    pending: Mutex<Option<JoinHandle<()>>>,
    active: Arc<AtomicBool>,
}

impl DebouncedQuoteFetcher {
    pub fn new(
        side: QuoteSide,
        service: Arc<dyn QuoteService>,
        delay: Duration,
        on_success: QuoteCallback,
        on_error: ErrorCallback,
    ) -> Self {
        Self {
            side,
            service,
            delay,
            on_success,
            on_error,
            pending: Mutex::new(None),
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Fetcher whose results are posted to the app event channel.
    pub fn with_events(
        side: QuoteSide,
        service: Arc<dyn QuoteService>,
        delay: Duration,
        event_tx: Sender<AppEvent>,
    ) -> Self {
        let success_tx = event_tx.clone();
        let on_success: QuoteCallback = Arc::new(move |ticket, quote| {
            post(&success_tx, AppEvent::QuoteResult { side, ticket, result: Ok(quote) });
        });
        let on_error: ErrorCallback = Arc::new(move |ticket, error| {
            post(&event_tx, AppEvent::QuoteResult { side, ticket, result: Err(error) });
        });
        Self::new(side, service, delay, on_success, on_error)
    }

    /// Schedule a request after the quiet period, replacing any pending one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn call(&self, request: QuoteRequest, network: Network, ticket: QuoteTicket) {
        if !self.is_active() {
            tracing::debug!(side = %self.side, "Fetcher cancelled, ignoring call");
            return;
        }

        let mut pending = self.pending.lock();
        if let Some(previous) = pending.take() {
            if !previous.is_finished() {
                tracing::trace!(side = %self.side, "Superseding pending quote request");
            }
            previous.abort();
        }

        let delay = self.delay;
        let job = self.job(request, network, ticket);
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Detached so a later abort of this timer never cancels the request.
            tokio::spawn(job.run());
        }));
    }

    /// Send a request right away, dropping any pending debounced one.
    pub fn call_now(&self, request: QuoteRequest, network: Network, ticket: QuoteTicket) {
        if !self.is_active() {
            tracing::debug!(side = %self.side, "Fetcher cancelled, ignoring call");
            return;
        }
        self.abort_pending();
        tokio::spawn(self.job(request, network, ticket).run());
    }

    /// Drop the pending call, if any, without deactivating.
    pub fn abort_pending(&self) {
        if let Some(previous) = self.pending.lock().take() {
            previous.abort();
        }
    }

    /// Abort the pending call and stop delivering results of requests in flight.
    pub fn cancel(&self) {
        self.active.store(false, Ordering::SeqCst);
        self.abort_pending();
        tracing::debug!(side = %self.side, "Quote fetcher cancelled");
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// A timer is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending.lock().as_ref().is_some_and(|handle| !handle.is_finished())
    }

    fn job(&self, request: QuoteRequest, network: Network, ticket: QuoteTicket) -> FetchJob {
        FetchJob {
            side: self.side,
            service: Arc::clone(&self.service),
            request,
            network,
            ticket,
            active: Arc::clone(&self.active),
            on_success: Arc::clone(&self.on_success),
            on_error: Arc::clone(&self.on_error),
        }
    }
}

impl Drop for DebouncedQuoteFetcher {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// One request, owned by the detached task that runs it.
struct FetchJob {
    side: QuoteSide,
    service: Arc<dyn QuoteService>,
    request: QuoteRequest,
    network: Network,
    ticket: QuoteTicket,
    active: Arc<AtomicBool>,
    on_success: QuoteCallback,
    on_error: ErrorCallback,
}

impl FetchJob {
    async fn run(self) {
        let start = std::time::Instant::now();
        tracing::debug!(
            side = %self.side,
            ticket = %self.ticket,
            network = %self.network,
            sell_token = %self.request.sell_token,
            buy_token = %self.request.buy_token,
            "Quote request sent"
        );

        let result = self.service.fetch_quote(self.network, &self.request).await;

        if !self.active.load(Ordering::SeqCst) {
            tracing::debug!(side = %self.side, ticket = %self.ticket, "Fetcher gone, dropping quote result");
            return;
        }

        match result {
            Ok(quote) => {
                tracing::debug!(
                    side = %self.side,
                    ticket = %self.ticket,
                    duration_ms = start.elapsed().as_millis(),
                    "Quote request finished"
                );
                (self.on_success)(self.ticket, quote);
            }
            Err(error) => {
                tracing::warn!(
                    side = %self.side,
                    ticket = %self.ticket,
                    duration_ms = start.elapsed().as_millis(),
                    error = %error,
                    "Quote request failed"
                );
                (self.on_error)(self.ticket, error);
            }
        }
    }
}

/// The two fetchers of the swap view, one per amount field.
pub struct QuoteFetchers {
    pub sell: DebouncedQuoteFetcher,
    pub buy: DebouncedQuoteFetcher,
}

impl QuoteFetchers {
    /// Both fetchers posting results to `event_tx`.
    pub fn with_events(service: Arc<dyn QuoteService>, delay: Duration, event_tx: Sender<AppEvent>) -> Self {
        Self {
            sell: DebouncedQuoteFetcher::with_events(QuoteSide::Sell, Arc::clone(&service), delay, event_tx.clone()),
            buy: DebouncedQuoteFetcher::with_events(QuoteSide::Buy, service, delay, event_tx),
        }
    }

    pub fn get(&self, side: QuoteSide) -> &DebouncedQuoteFetcher {
        match side {
            QuoteSide::Sell => &self.sell,
            QuoteSide::Buy => &self.buy,
        }
    }

    pub fn abort_pending(&self) {
        self.sell.abort_pending();
        self.buy.abort_pending();
    }

    pub fn cancel(&self) {
        self.sell.cancel();
        self.buy.cancel();
    }
}

fn post(event_tx: &Sender<AppEvent>, event: AppEvent) {
    if let Err(e) = event_tx.try_send(event) {
        tracing::warn!(error = %e, "Event channel closed, quote result lost");
    }
}
