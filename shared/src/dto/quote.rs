//! # Quote DTOs
//!
//! Wire types for `GET {endpoint}/swap/v1/quote`.

use serde::{Deserialize, Serialize};

/// Which amount a quote request is denominated in.
///
/// A `Sell` request fixes `sellAmount` and asks how much can be bought; a `Buy`
/// request fixes `buyAmount` and asks how much must be sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteSide {
    Sell,
    Buy,
}

impl QuoteSide {
    /// The opposite side
    pub fn opposite(self) -> Self {
        match self {
            QuoteSide::Sell => QuoteSide::Buy,
            QuoteSide::Buy => QuoteSide::Sell,
        }
    }
}

impl std::fmt::Display for QuoteSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteSide::Sell => write!(f, "sell"),
            QuoteSide::Buy => write!(f, "buy"),
        }
    }
}

/// Query parameters for a quote request.
///
/// Exactly one of `sell_amount` / `buy_amount` must be set; the client rejects
/// anything else before touching the network. Field order is the query order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub sell_token: String,
    pub buy_token: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sell_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub buy_amount: Option<String>,
}

impl QuoteRequest {
    /// Request denominated in the sell token (base units).
    pub fn sell(sell_token: impl Into<String>, buy_token: impl Into<String>, sell_amount: impl Into<String>) -> Self {
        Self {
            sell_token: sell_token.into(),
            buy_token: buy_token.into(),
            sell_amount: Some(sell_amount.into()),
            buy_amount: None,
        }
    }

    /// Request denominated in the buy token (base units).
    pub fn buy(sell_token: impl Into<String>, buy_token: impl Into<String>, buy_amount: impl Into<String>) -> Self {
        Self {
            sell_token: sell_token.into(),
            buy_token: buy_token.into(),
            sell_amount: None,
            buy_amount: Some(buy_amount.into()),
        }
    }

    /// The side this request is denominated in, if it is well formed.
    pub fn side(&self) -> Option<QuoteSide> {
        match (&self.sell_amount, &self.buy_amount) {
            (Some(_), None) => Some(QuoteSide::Sell),
            (None, Some(_)) => Some(QuoteSide::Buy),
            _ => None,
        }
    }
}

/// A liquidity source contributing to a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquiditySource {
    pub name: String,
    pub proportion: String,
}

/// Quote payload returned by the aggregation API.
///
/// `sell_amount` / `buy_amount` are base-unit integer strings. `to`, `data`,
/// `value` and `gas` are what the wallet needs to build the transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde(default)]
    pub chain_id: Option<u64>,
    pub price: String,
    #[serde(default)]
    pub guaranteed_price: String,
    #[serde(default)]
    pub estimated_price_impact: Option<String>,
    pub to: String,
    pub data: String,
    pub value: String,
    pub gas: String,
    #[serde(default)]
    pub estimated_gas: String,
    #[serde(default)]
    pub gas_price: String,
    #[serde(default)]
    pub protocol_fee: Option<String>,
    #[serde(default)]
    pub minimum_protocol_fee: Option<String>,
    #[serde(default)]
    pub buy_token_address: String,
    #[serde(default)]
    pub sell_token_address: String,
    pub buy_amount: String,
    pub sell_amount: String,
    #[serde(default)]
    pub sources: Vec<LiquiditySource>,
    #[serde(default)]
    pub allowance_target: Option<String>,
    #[serde(default)]
    pub sell_token_to_eth_rate: Option<String>,
    #[serde(default)]
    pub buy_token_to_eth_rate: Option<String>,
    #[serde(default)]
    pub expected_slippage: Option<String>,
}

impl Quote {
    /// Sources with a non-zero share of the route.
    pub fn active_sources(&self) -> impl Iterator<Item = &LiquiditySource> {
        self.sources
            .iter()
            .filter(|s| s.proportion.parse::<f64>().map(|p| p > 0.0).unwrap_or(false))
    }
}

/// Single field-level validation failure inside an API error body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiValidationError {
    pub field: String,
    #[serde(default)]
    pub code: Option<i64>,
    pub reason: String,
}

/// Error body returned by the quote API on non-2xx replies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub code: Option<i64>,
    pub reason: String,
    #[serde(default)]
    pub validation_errors: Vec<ApiValidationError>,
}

impl ApiErrorResponse {
    /// Reason plus any field-level details, on one line.
    pub fn describe(&self) -> String {
        if self.validation_errors.is_empty() {
            return self.reason.clone();
        }
        let details: Vec<String> = self
            .validation_errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.reason))
            .collect();
        format!("{} ({})", self.reason, details.join(", "))
    }
}

/// Outbound transaction handed to the wallet for signing.
///
/// Only the four fields a wallet needs; signing and broadcast happen elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub to: String,
    pub data: String,
    pub value: String,
    pub gas: String,
}

impl From<&Quote> for TransactionRequest {
    fn from(quote: &Quote) -> Self {
        Self {
            to: quote.to.clone(),
            data: quote.data.clone(),
            value: quote.value.clone(),
            gas: quote.gas.clone(),
        }
    }
}
