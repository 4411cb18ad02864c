//! # Trade State
//!
//! The single aggregate behind the swap view.
//!
//! `TradeState` is plain data: it is created from a deep link, replaced
//! wholesale by [`super::reducer::reduce`] on every action, and dropped with
//! the view. The [`super::store::Store`] wraps it in `Arc<RwLock<_>>` so the
//! UI and event handlers can share it.

use std::collections::HashMap;

use shared::{Quote, QuoteSide};

use crate::config::{Network, TokenRegistry};
use crate::utils::query::build_query;

/// Sell token when the link names none or an unsupported one
pub const DEFAULT_SELL_TOKEN: &str = "usdc";
/// Buy token when the link names none or an unsupported one
pub const DEFAULT_BUY_TOKEN: &str = "weth";

/// Current selection, amounts and quote of the swap view.
///
/// Token fields are `None` when cleared. `sell_token` and `buy_token` are
/// never equal while both are set.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeState {
    pub network: Network,
    pub sell_token: Option<String>,
    pub buy_token: Option<String>,
    /// Human decimal string, empty when unset
    pub sell_amount: String,
    /// Human decimal string, empty when unset
    pub buy_amount: String,
    /// Which amount the user typed last; the other one is derived from quotes
    pub direction: Option<QuoteSide>,
    pub fetching: bool,
    pub quote: Option<Quote>,
}

impl Default for TradeState {
    fn default() -> Self {
        Self::initial(Network::default())
    }
}

impl TradeState {
    /// Default pair on `network`, no amounts.
    pub fn initial(network: Network) -> Self {
        Self {
            network,
            sell_token: Some(DEFAULT_SELL_TOKEN.to_string()),
            buy_token: Some(DEFAULT_BUY_TOKEN.to_string()),
            sell_amount: String::new(),
            buy_amount: String::new(),
            direction: None,
            fetching: false,
            quote: None,
        }
    }

    /// Seed from deep-link parameters (`network`, `sell`, `buy`).
    ///
    /// Tokens outside the registry's allowlist and unknown networks fall back
    /// to the defaults. If the link names the same token twice, the buy side
    /// falls back so the pair stays distinct.
    pub fn from_query(params: &HashMap<String, String>, registry: &TokenRegistry) -> Self {
        let network = match params.get("network").map(|n| n.parse::<Network>()) {
            Some(Ok(network)) => network,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Ignoring network from link");
                Network::default()
            }
            None => Network::default(),
        };

        let pick = |key: &str, default: &str| -> String {
            match params.get(key) {
                Some(id) if registry.is_supported(id) => id.clone(),
                Some(id) => {
                    tracing::warn!(param = key, token = %id, "Ignoring unsupported token from link");
                    default.to_string()
                }
                None => default.to_string(),
            }
        };

        let sell = pick("sell", DEFAULT_SELL_TOKEN);
        let mut buy = pick("buy", DEFAULT_BUY_TOKEN);
        if buy == sell {
            buy = if sell == DEFAULT_BUY_TOKEN { DEFAULT_SELL_TOKEN } else { DEFAULT_BUY_TOKEN }.to_string();
        }

        Self {
            sell_token: Some(sell),
            buy_token: Some(buy),
            ..Self::initial(network)
        }
    }

    /// `network=..&sell=..&buy=..` for the current selection; cleared tokens are omitted.
    pub fn query_string(&self) -> String {
        let mut pairs = vec![("network", self.network.as_str())];
        if let Some(sell) = &self.sell_token {
            pairs.push(("sell", sell.as_str()));
        }
        if let Some(buy) = &self.buy_token {
            pairs.push(("buy", buy.as_str()));
        }
        build_query(&pairs)
    }

    /// Amount currently shown for a side
    pub fn amount(&self, side: QuoteSide) -> &str {
        match side {
            QuoteSide::Sell => &self.sell_amount,
            QuoteSide::Buy => &self.buy_amount,
        }
    }

    /// Token currently selected for a side
    pub fn token(&self, side: QuoteSide) -> Option<&str> {
        match side {
            QuoteSide::Sell => self.sell_token.as_deref(),
            QuoteSide::Buy => self.buy_token.as_deref(),
        }
    }

    /// A quote can be placed: one is held and no newer one is pending.
    pub fn can_place_order(&self) -> bool {
        self.quote.is_some() && !self.fetching
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::query::parse_query;

    fn seeded(query: &str) -> TradeState {
        TradeState::from_query(&parse_query(query), &TokenRegistry::default())
    }

    #[test]
    fn test_initial_state() {
        let state = TradeState::default();
        assert_eq!(state.network, Network::Ethereum);
        assert_eq!(state.sell_token.as_deref(), Some("usdc"));
        assert_eq!(state.buy_token.as_deref(), Some("weth"));
        assert!(state.sell_amount.is_empty());
        assert!(state.direction.is_none());
        assert!(!state.fetching);
    }

    #[test]
    fn test_from_query_accepts_supported_values() {
        let state = seeded("network=polygon&sell=dai&buy=matic");
        assert_eq!(state.network, Network::Polygon);
        assert_eq!(state.sell_token.as_deref(), Some("dai"));
        assert_eq!(state.buy_token.as_deref(), Some("matic"));
    }

    #[test]
    fn test_from_query_falls_back_on_invalid_values() {
        let state = seeded("network=solana&sell=shib&buy=wbtc");
        assert_eq!(state, TradeState::default());
    }

    #[test]
    fn test_from_query_keeps_pair_distinct() {
        let state = seeded("sell=weth");
        assert_eq!(state.sell_token.as_deref(), Some("weth"));
        assert_eq!(state.buy_token.as_deref(), Some("usdc"));

        let state = seeded("sell=dai&buy=dai");
        assert_eq!(state.sell_token.as_deref(), Some("dai"));
        assert_eq!(state.buy_token.as_deref(), Some("weth"));
    }

    #[test]
    fn test_query_string_round_trip() {
        let state = seeded("network=polygon&sell=dai&buy=usdc");
        assert_eq!(state.query_string(), "network=polygon&sell=dai&buy=usdc");
        assert_eq!(seeded(&state.query_string()), state);
    }

    #[test]
    fn test_query_string_omits_cleared_token() {
        let state = TradeState { buy_token: None, ..TradeState::default() };
        assert_eq!(state.query_string(), "network=ethereum&sell=usdc");
    }
}
