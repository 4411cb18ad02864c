//! # Trade Reducer
//!
//! Pure transition function `(state, action) -> state` for [`TradeState`].
//!
//! No I/O happens here; handlers decide what to dispatch and when to fetch.
//! [`Action`] is closed, so an unhandled action is a compile error rather than
//! a runtime failure.

use shared::{Quote, QuoteSide};

use super::state::TradeState;
use crate::config::{Network, TokenRegistry};
use crate::utils::units::format_units;

/// State transitions of the swap view.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Back to the default pair, keeping the network
    Reset,
    /// Swap tokens and move the authoritative amount to the other side
    ReverseTradeDirection,
    SetDirection(Option<QuoteSide>),
    SelectNetwork(Network),
    ChooseSellToken(String),
    ChooseBuyToken(String),
    FetchingQuote(bool),
    /// Drop the held quote and the amount derived from it
    ClearQuote,
    /// Quote requested by sell amount; derives `buy_amount`
    SetSellQuote(Quote),
    /// Quote requested by buy amount; derives `sell_amount`
    SetBuyQuote(Quote),
    SetSellAmount(String),
    SetBuyAmount(String),
}

impl Action {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::Reset => "reset",
            Action::ReverseTradeDirection => "reverse trade direction",
            Action::SetDirection(_) => "set direction",
            Action::SelectNetwork(_) => "select network",
            Action::ChooseSellToken(_) => "choose sell token",
            Action::ChooseBuyToken(_) => "choose buy token",
            Action::FetchingQuote(_) => "fetching quote",
            Action::ClearQuote => "clear quote",
            Action::SetSellQuote(_) => "set sell quote",
            Action::SetBuyQuote(_) => "set buy quote",
            Action::SetSellAmount(_) => "set sell amount",
            Action::SetBuyAmount(_) => "set buy amount",
        }
    }
}

/// Apply one action.
pub fn reduce(state: &TradeState, action: Action, tokens: &TokenRegistry) -> TradeState {
    match action {
        Action::Reset => TradeState::initial(state.network),

        Action::SelectNetwork(network) => TradeState { network, ..state.clone() },

        Action::ChooseSellToken(token) => {
            let mut next = state.clone();
            if state.buy_token.as_deref() == Some(token.as_str()) {
                // Taking the buy side's token: the old sell token moves over,
                // or the buy side clears if there was none.
                next.buy_token = state.sell_token.clone();
            }
            next.sell_token = Some(token);
            next
        }

        Action::ChooseBuyToken(token) => {
            let mut next = state.clone();
            if state.sell_token.as_deref() == Some(token.as_str()) {
                next.sell_token = state.buy_token.clone();
            }
            next.buy_token = Some(token);
            next
        }

        Action::SetDirection(direction) => TradeState { direction, ..state.clone() },

        Action::ReverseTradeDirection => {
            let mut next = state.clone();
            next.sell_token = state.buy_token.clone();
            next.buy_token = state.sell_token.clone();
            match state.direction {
                Some(QuoteSide::Sell) => {
                    next.buy_amount = state.sell_amount.clone();
                    next.sell_amount = String::new();
                    next.direction = Some(QuoteSide::Buy);
                }
                Some(QuoteSide::Buy) => {
                    next.sell_amount = state.buy_amount.clone();
                    next.buy_amount = String::new();
                    next.direction = Some(QuoteSide::Sell);
                }
                // Amounts stay where they are.
                None => {}
            }
            next
        }

        Action::FetchingQuote(fetching) => TradeState { fetching, ..state.clone() },

        Action::ClearQuote => {
            let mut next = state.clone();
            if state.quote.is_some() {
                match state.direction {
                    Some(QuoteSide::Sell) => next.buy_amount = String::new(),
                    Some(QuoteSide::Buy) => next.sell_amount = String::new(),
                    None => {}
                }
            }
            next.quote = None;
            next.fetching = false;
            next
        }

        Action::SetSellQuote(quote) => {
            let mut next = state.clone();
            if let Some(amount) = derive_amount(&quote.buy_amount, state.buy_token.as_deref(), tokens) {
                next.buy_amount = amount;
            }
            next.quote = Some(quote);
            next.fetching = false;
            next
        }

        Action::SetBuyQuote(quote) => {
            let mut next = state.clone();
            if let Some(amount) = derive_amount(&quote.sell_amount, state.sell_token.as_deref(), tokens) {
                next.sell_amount = amount;
            }
            next.quote = Some(quote);
            next.fetching = false;
            next
        }

        Action::SetSellAmount(amount) => TradeState { sell_amount: amount, ..state.clone() },

        Action::SetBuyAmount(amount) => TradeState { buy_amount: amount, ..state.clone() },
    }
}

/// Base units from a quote -> human amount for `token`, or `None` if either is unusable.
fn derive_amount(base_units: &str, token: Option<&str>, tokens: &TokenRegistry) -> Option<String> {
    let Some(token) = token else {
        tracing::warn!("Quote arrived with no token selected on the derived side");
        return None;
    };

    let converted = tokens
        .decimals(token)
        .and_then(|decimals| format_units(base_units, decimals));

    match converted {
        Ok(amount) => Some(amount),
        Err(e) => {
            tracing::warn!(token = %token, amount = %base_units, error = %e, "Cannot derive amount from quote");
            None
        }
    }
}
