//! # Application Orchestrator
//!
//! The main [`App`] struct ties the swap state machine together: the
//! [`Store`] holding [`TradeState`], the two debounced quote fetchers, the
//! wallet collaborator and the event channel that brings async results back
//! to the UI thread.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - drains async results every frame      │   │
//! │  │  - handle_*() - user input handlers                  │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │ dispatch(Action)                            │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  Store: Arc<RwLock<TradeState>> + quote tickets      │   │
//! │  │  - pure reducer under a short write lock             │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  - DebouncedQuoteFetcher (sell) ─┐                          │
//! │  - DebouncedQuoteFetcher (buy)  ─┴─> QuoteService           │
//! │  - submit_order ──────────────────> WalletService           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Event-Driven Communication
//!
//! ```rust,ignore
//! // Fetch task posts its result
//! event_tx.try_send(AppEvent::QuoteResult { side, ticket, result })?;
//!
//! // Main thread applies it in on_tick()
//! while let Ok(event) = app.event_rx.try_recv() {
//!     app.handle_event(event);
//! }
//! ```
//!
//! Responses carrying an outdated ticket are dropped, so a slow reply to an
//! earlier edit can never overwrite the result of a later one.

mod event_handler;
pub mod events;
pub mod handlers;
pub mod reducer;
pub mod state;
pub mod store;
pub mod tasks;

pub use event_handler::AppEventHandler;
pub use events::AppEvent;
pub use reducer::{reduce, Action};
pub use state::TradeState;
pub use store::{QuoteTicket, Store};

use async_channel::{unbounded, Receiver, Sender};
use shared::{QuoteSide, TransactionRequest};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{Language, Network, Preferences, SwapConfig, Theme, TokenRegistry};
use crate::core::error::AppError;
use crate::core::service::{QuoteService, WalletService};
use tasks::QuoteFetchers;

/// Outcome of the last "Place Order".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    Idle,
    Submitting(TransactionRequest),
    Exported,
    Failed(AppError),
}

/// Main application orchestrator.
///
/// Owns the swap store, both quote fetchers and the event channel. Dropping
/// the `App` cancels pending debounced calls and silences in-flight ones.
pub struct App {
    pub(crate) store: Store,
    pub(crate) fetchers: QuoteFetchers,
    pub(crate) wallet: Arc<dyn WalletService>,

    /// Sender cloned into async tasks.
    pub(crate) event_tx: Sender<AppEvent>,
    /// Polled in `on_tick()` with `try_recv()` (non-blocking).
    pub(crate) event_rx: Receiver<AppEvent>,

    pub(crate) preferences: Preferences,
    pub(crate) settings_path: PathBuf,

    /// Last failed quote for the current ticket, cleared by the next success
    pub(crate) last_quote_error: Option<AppError>,
    pub(crate) order_status: OrderStatus,
}

impl App {
    pub fn new(
        config: &SwapConfig,
        initial: TradeState,
        tokens: Arc<TokenRegistry>,
        quotes: Arc<dyn QuoteService>,
        wallet: Arc<dyn WalletService>,
        preferences: Preferences,
    ) -> Self {
        let (event_tx, event_rx) = unbounded();
        let fetchers = QuoteFetchers::with_events(quotes, config.debounce, event_tx.clone());

        tracing::info!(
            network = %initial.network,
            sell_token = ?initial.sell_token,
            buy_token = ?initial.buy_token,
            debounce_ms = config.debounce.as_millis(),
            "Swap view ready"
        );

        Self {
            store: Store::new(initial, tokens),
            fetchers,
            wallet,
            event_tx,
            event_rx,
            preferences,
            settings_path: config.settings_path.clone(),
            last_quote_error: None,
            order_status: OrderStatus::Idle,
        }
    }

    /// Apply every async result received since the last frame.
    ///
    /// Returns how many events were handled.
    pub fn on_tick(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// Wait for the next async result without applying it.
    pub async fn next_event(&self) -> Option<AppEvent> {
        self.event_rx.recv().await.ok()
    }

    /// Apply one async result.
    pub fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Copy of the current trade state.
    pub fn state(&self) -> TradeState {
        self.store.snapshot()
    }

    /// `network=..&sell=..&buy=..` for the current selection
    pub fn query_string(&self) -> String {
        self.store.read(TradeState::query_string)
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn last_quote_error(&self) -> Option<&AppError> {
        self.last_quote_error.as_ref()
    }

    pub fn order_status(&self) -> &OrderStatus {
        &self.order_status
    }

    pub fn handle_amount_change(&mut self, side: QuoteSide, input: &str) {
        handlers::swap::handle_amount_change(&self.store, &self.fetchers, side, input);
    }

    pub fn handle_token_select(&mut self, side: QuoteSide, token: &str) {
        handlers::swap::handle_token_select(&self.store, &self.fetchers, side, token);
    }

    pub fn handle_direction_switch(&mut self) {
        handlers::swap::handle_direction_switch(&self.store, &self.fetchers);
    }

    pub fn handle_network_select(&mut self, network: Network) {
        handlers::swap::handle_network_select(&self.store, &self.fetchers, network);
    }

    pub fn handle_reset(&mut self) {
        self.last_quote_error = None;
        self.order_status = OrderStatus::Idle;
        handlers::swap::handle_reset(&self.store, &self.fetchers);
    }

    /// Returns false when there is no settled quote to place.
    pub fn handle_place_order(&mut self) -> bool {
        match handlers::swap::handle_place_order(&self.store, Arc::clone(&self.wallet), self.event_tx.clone()) {
            Some(transaction) => {
                self.order_status = OrderStatus::Submitting(transaction);
                true
            }
            None => false,
        }
    }

    pub fn handle_language_change(&mut self, language: Language) {
        handlers::settings::handle_language_change(&mut self.preferences, &self.settings_path, language);
    }

    pub fn handle_theme_toggle(&mut self) -> Theme {
        handlers::settings::handle_theme_toggle(&mut self.preferences, &self.settings_path)
    }

    /// Stop both fetchers; results still in flight are discarded.
    pub fn shutdown(&self) {
        self.fetchers.cancel();
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}
