//! # Test Helpers
//!
//! In-memory quote service and app construction shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::{Quote, QuoteRequest};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use swap_terminal::app::{App, TradeState};
use swap_terminal::config::{Network, Preferences, SwapConfig, TokenRegistry};
use swap_terminal::core::{AppError, QuoteService, Result, WalletService};
use swap_terminal::services::ExportWallet;
use swap_terminal::utils::{format_units, parse_units};

pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Quote service that records every request and quotes at a 1:1 price.
pub struct MockQuoteService {
    requests: Mutex<Vec<(Network, QuoteRequest)>>,
    latency: Duration,
    failure: Option<AppError>,
    tokens: TokenRegistry,
}

impl MockQuoteService {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            latency: Duration::ZERO,
            failure: None,
            tokens: TokenRegistry::default(),
        }
    }

    /// Every request takes `latency` before answering.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency, ..Self::new() }
    }

    /// Every request fails with `error`.
    pub fn failing(error: AppError) -> Self {
        Self { failure: Some(error), ..Self::new() }
    }

    pub fn requests(&self) -> Vec<(Network, QuoteRequest)> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn last_request(&self) -> Option<QuoteRequest> {
        self.requests.lock().last().map(|(_, request)| request.clone())
    }

    /// Same human amount on both sides, re-expressed in each token's base units.
    fn one_to_one(&self, request: &QuoteRequest) -> Result<Quote> {
        let sell_decimals = self.tokens.decimals(&request.sell_token)?;
        let buy_decimals = self.tokens.decimals(&request.buy_token)?;

        let (sell_amount, buy_amount) = match (&request.sell_amount, &request.buy_amount) {
            (Some(sell), None) => {
                let human = format_units(sell, sell_decimals)?;
                (sell.clone(), parse_units(&human, buy_decimals)?)
            }
            (None, Some(buy)) => {
                let human = format_units(buy, buy_decimals)?;
                (parse_units(&human, sell_decimals)?, buy.clone())
            }
            _ => return Err(AppError::AmountSpecification("exactly one amount")),
        };

        Ok(quote(&sell_amount, &buy_amount))
    }
}

#[async_trait]
impl QuoteService for MockQuoteService {
    async fn fetch_quote(&self, network: Network, request: &QuoteRequest) -> Result<Quote> {
        self.requests.lock().push((network, request.clone()));

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        match &self.failure {
            Some(error) => Err(error.clone()),
            None => self.one_to_one(request),
        }
    }
}

/// A settled quote with the given base-unit amounts.
pub fn quote(sell_amount: &str, buy_amount: &str) -> Quote {
    serde_json::from_value(serde_json::json!({
        "price": "1",
        "guaranteedPrice": "0.99",
        "to": "0xdef1c0ded9bec7f1a1670819833240f027b25eff",
        "data": "0xd9627aa4",
        "value": "0",
        "gas": "136000",
        "estimatedGas": "136000",
        "sellAmount": sell_amount,
        "buyAmount": buy_amount,
        "sources": [{ "name": "Uniswap_V3", "proportion": "1" }],
    }))
    .unwrap()
}

/// Settings file path that no other test touches.
pub fn temp_settings_path() -> PathBuf {
    std::env::temp_dir().join(format!("swap-terminal-test-{}.json", uuid::Uuid::new_v4()))
}

pub fn test_config() -> SwapConfig {
    SwapConfig {
        debounce: DEBOUNCE,
        settings_path: temp_settings_path(),
        ..SwapConfig::default()
    }
}

/// App on the default usdc -> weth pair with output discarded.
pub fn test_app(quotes: Arc<MockQuoteService>) -> App {
    let wallet: Arc<dyn WalletService> = Arc::new(ExportWallet::with_writer(Box::new(std::io::sink())));
    test_app_with_wallet(quotes, wallet)
}

pub fn test_app_with_wallet(quotes: Arc<MockQuoteService>, wallet: Arc<dyn WalletService>) -> App {
    App::new(
        &test_config(),
        TradeState::default(),
        Arc::new(TokenRegistry::default()),
        quotes,
        wallet,
        Preferences::default(),
    )
}

/// Wait for the next async result and apply it.
pub async fn settle(app: &mut App) {
    let event = tokio::time::timeout(Duration::from_secs(30), app.next_event())
        .await
        .expect("no event within 30s")
        .expect("event channel closed");
    app.handle_event(event);
}

/// True if no async result shows up for `window`.
pub async fn stays_quiet(app: &App, window: Duration) -> bool {
    tokio::time::timeout(window, app.next_event()).await.is_err()
}
