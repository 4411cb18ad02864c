//! # Debounced Fetcher Tests
//!
//! Timing behaviour of `DebouncedQuoteFetcher` under a paused clock.

mod common;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use shared::{Quote, QuoteRequest, QuoteSide};
use std::sync::Arc;
use std::time::Duration;

use common::{MockQuoteService, DEBOUNCE};
use swap_terminal::app::tasks::{DebouncedQuoteFetcher, ErrorCallback, QuoteCallback};
use swap_terminal::app::{QuoteTicket, Store, TradeState};
use swap_terminal::config::{Network, TokenRegistry};
use swap_terminal::core::AppError;

#[derive(Default)]
struct Delivered {
    quotes: Mutex<Vec<(QuoteTicket, Quote)>>,
    errors: Mutex<Vec<(QuoteTicket, AppError)>>,
}

fn fetcher(service: Arc<MockQuoteService>, delivered: &Arc<Delivered>) -> DebouncedQuoteFetcher {
    let on_quote = Arc::clone(delivered);
    let on_success: QuoteCallback = Arc::new(move |ticket, quote| on_quote.quotes.lock().push((ticket, quote)));
    let on_failure = Arc::clone(delivered);
    let on_error: ErrorCallback = Arc::new(move |ticket, error| on_failure.errors.lock().push((ticket, error)));
    DebouncedQuoteFetcher::new(QuoteSide::Sell, service, DEBOUNCE, on_success, on_error)
}

fn tickets() -> Store {
    Store::new(TradeState::default(), Arc::new(TokenRegistry::default()))
}

fn sell(amount: &str) -> QuoteRequest {
    QuoteRequest::sell("usdc", "weth", amount)
}

#[tokio::test(start_paused = true)]
async fn test_calls_within_quiet_period_collapse_to_last() {
    // Arrange
    let service = Arc::new(MockQuoteService::new());
    let delivered = Arc::new(Delivered::default());
    let fetcher = fetcher(service.clone(), &delivered);
    let store = tickets();

    // Act
    let mut last = store.begin_quote();
    fetcher.call(sell("1000000"), Network::Ethereum, last);
    for amount in ["2000000", "3000000"] {
        tokio::time::sleep(DEBOUNCE / 2).await;
        last = store.begin_quote();
        fetcher.call(sell(amount), Network::Ethereum, last);
    }
    assert!(fetcher.is_pending());
    tokio::time::sleep(DEBOUNCE + Duration::from_millis(10)).await;

    // Assert
    assert_eq!(service.requests(), vec![(Network::Ethereum, sell("3000000"))]);
    let quotes = delivered.quotes.lock();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].0, last);
    assert_eq!(quotes[0].1.sell_amount, "3000000");
    assert!(!fetcher.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_nothing_is_sent_before_quiet_period_ends() {
    let service = Arc::new(MockQuoteService::new());
    let delivered = Arc::new(Delivered::default());
    let fetcher = fetcher(service.clone(), &delivered);

    fetcher.call(sell("1000000"), Network::Ethereum, tickets().begin_quote());
    tokio::time::sleep(DEBOUNCE - Duration::from_millis(10)).await;

    assert_eq!(service.request_count(), 0);
    assert!(fetcher.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_call_now_skips_the_delay() {
    let service = Arc::new(MockQuoteService::new());
    let delivered = Arc::new(Delivered::default());
    let fetcher = fetcher(service.clone(), &delivered);
    let store = tickets();

    fetcher.call(sell("1000000"), Network::Ethereum, store.begin_quote());
    fetcher.call_now(sell("5000000"), Network::Polygon, store.begin_quote());
    tokio::time::sleep(Duration::from_millis(1)).await;

    assert_eq!(service.requests(), vec![(Network::Polygon, sell("5000000"))]);
    assert_eq!(delivered.quotes.lock().len(), 1);

    // The debounced call was dropped
    tokio::time::sleep(DEBOUNCE * 2).await;
    assert_eq!(service.request_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_suppresses_in_flight_result() {
    // Arrange
    let service = Arc::new(MockQuoteService::with_latency(Duration::from_secs(1)));
    let delivered = Arc::new(Delivered::default());
    let fetcher = fetcher(service.clone(), &delivered);

    // Act
    fetcher.call(sell("1000000"), Network::Ethereum, tickets().begin_quote());
    tokio::time::sleep(DEBOUNCE + Duration::from_millis(100)).await;
    assert_eq!(service.request_count(), 1);
    fetcher.cancel();
    tokio::time::sleep(Duration::from_secs(2)).await;

    // Assert
    assert!(!fetcher.is_active());
    assert!(delivered.quotes.lock().is_empty());
    assert!(delivered.errors.lock().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_fetcher_ignores_new_calls() {
    let service = Arc::new(MockQuoteService::new());
    let delivered = Arc::new(Delivered::default());
    let fetcher = fetcher(service.clone(), &delivered);

    fetcher.cancel();
    fetcher.call(sell("1000000"), Network::Ethereum, tickets().begin_quote());
    fetcher.call_now(sell("1000000"), Network::Ethereum, tickets().begin_quote());
    tokio::time::sleep(DEBOUNCE * 2).await;

    assert_eq!(service.request_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_abort_pending_keeps_fetcher_usable() {
    let service = Arc::new(MockQuoteService::new());
    let delivered = Arc::new(Delivered::default());
    let fetcher = fetcher(service.clone(), &delivered);
    let store = tickets();

    fetcher.call(sell("1000000"), Network::Ethereum, store.begin_quote());
    fetcher.abort_pending();
    tokio::time::sleep(DEBOUNCE * 2).await;
    assert_eq!(service.request_count(), 0);

    fetcher.call(sell("2000000"), Network::Ethereum, store.begin_quote());
    tokio::time::sleep(DEBOUNCE * 2).await;
    assert_eq!(service.request_count(), 1);
    assert!(fetcher.is_active());
}

#[tokio::test(start_paused = true)]
async fn test_failure_goes_to_error_callback() {
    let error = AppError::Network("connection refused".to_string());
    let service = Arc::new(MockQuoteService::failing(error.clone()));
    let delivered = Arc::new(Delivered::default());
    let fetcher = fetcher(service, &delivered);
    let ticket = tickets().begin_quote();

    fetcher.call(sell("1000000"), Network::Ethereum, ticket);
    tokio::time::sleep(DEBOUNCE * 2).await;

    assert!(delivered.quotes.lock().is_empty());
    assert_eq!(*delivered.errors.lock(), vec![(ticket, error)]);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_fetcher_discards_pending_call() {
    let service = Arc::new(MockQuoteService::new());
    let delivered = Arc::new(Delivered::default());

    {
        let fetcher = fetcher(service.clone(), &delivered);
        fetcher.call(sell("1000000"), Network::Ethereum, tickets().begin_quote());
    }
    tokio::time::sleep(DEBOUNCE * 2).await;

    assert_eq!(service.request_count(), 0);
    assert!(delivered.quotes.lock().is_empty());
}
