//! # Swap Handlers
//!
//! Handlers for the swap view's inputs: amount typing, token selection,
//! direction switching, network selection and order placement.
//!
//! Each handler first dispatches what the user did, then decides whether the
//! new state warrants a quote. Typing goes through the debounced fetcher of
//! the edited field; selections and direction switches request immediately.

use async_channel::Sender;
use shared::{QuoteRequest, QuoteSide, TransactionRequest};
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::reducer::Action;
use crate::app::state::TradeState;
use crate::app::store::Store;
use crate::app::tasks::order::submit_order;
use crate::app::tasks::QuoteFetchers;
use crate::config::{Network, TokenRegistry};
use crate::core::service::WalletService;
use crate::utils::units::{is_zero, parse_units};
use crate::utils::validation::{check_quotable, is_valid_amount_input};

fn set_amount(side: QuoteSide, amount: String) -> Action {
    match side {
        QuoteSide::Sell => Action::SetSellAmount(amount),
        QuoteSide::Buy => Action::SetBuyAmount(amount),
    }
}

fn choose_token(side: QuoteSide, token: String) -> Action {
    match side {
        QuoteSide::Sell => Action::ChooseSellToken(token),
        QuoteSide::Buy => Action::ChooseBuyToken(token),
    }
}

/// The side whose amount the user typed, if any amount is present.
fn authoritative_side(state: &TradeState) -> Option<QuoteSide> {
    match state.direction {
        Some(side) => Some(side),
        None if !state.sell_amount.is_empty() => Some(QuoteSide::Sell),
        None if !state.buy_amount.is_empty() => Some(QuoteSide::Buy),
        None => None,
    }
}

/// Quote request for `amount` typed on `side`, or `None` if it is not worth sending.
pub fn quote_request(
    state: &TradeState,
    tokens: &TokenRegistry,
    side: QuoteSide,
    amount: &str,
) -> Option<QuoteRequest> {
    let check = check_quotable(amount);
    if !check.is_valid {
        tracing::trace!(%side, reason = ?check.error, "Amount not quotable");
        return None;
    }

    let (Some(sell), Some(buy)) = (state.sell_token.as_deref(), state.buy_token.as_deref()) else {
        tracing::debug!(%side, "Token pair incomplete, no quote");
        return None;
    };

    let token = match side {
        QuoteSide::Sell => sell,
        QuoteSide::Buy => buy,
    };
    let base_units = match tokens.decimals(token).and_then(|d| parse_units(amount, d)) {
        Ok(base_units) => base_units,
        Err(e) => {
            tracing::warn!(%side, token = %token, error = %e, "Cannot convert amount to base units");
            return None;
        }
    };
    if is_zero(&base_units) {
        tracing::trace!(%side, amount = %amount, "Amount below token precision, no quote");
        return None;
    }

    Some(match side {
        QuoteSide::Sell => QuoteRequest::sell(sell, buy, base_units),
        QuoteSide::Buy => QuoteRequest::buy(sell, buy, base_units),
    })
}

/// Request a quote for the amount already on `side`, without debounce.
///
/// Returns false (and orphans outstanding requests) when there is nothing to quote.
fn requote_now(store: &Store, fetchers: &QuoteFetchers, side: QuoteSide) -> bool {
    let state = store.snapshot();
    match quote_request(&state, store.tokens(), side, state.amount(side)) {
        Some(request) => {
            let ticket = store.begin_quote();
            fetchers.get(side.opposite()).abort_pending();
            fetchers.get(side).call_now(request, state.network, ticket);
            true
        }
        None => {
            fetchers.abort_pending();
            store.invalidate_quotes();
            false
        }
    }
}

/// Amount field edited.
///
/// Input failing the numeric pattern is dropped without a state change.
/// Incomplete input (empty, `0`, trailing separator) is echoed but not quoted.
pub fn handle_amount_change(store: &Store, fetchers: &QuoteFetchers, side: QuoteSide, input: &str) {
    if !is_valid_amount_input(input) {
        tracing::trace!(%side, input = %input, "Rejected amount input");
        return;
    }

    store.dispatch(set_amount(side, input.to_string()));
    store.dispatch(Action::SetDirection(Some(side)));

    let state = store.snapshot();
    match quote_request(&state, store.tokens(), side, input) {
        Some(request) => {
            let ticket = store.begin_quote();
            fetchers.get(side.opposite()).abort_pending();
            fetchers.get(side).call(request, state.network, ticket);
        }
        None => {
            fetchers.abort_pending();
            store.invalidate_quotes();
        }
    }
}

/// Token picked for `side`.
///
/// Picking the opposite side's token swaps the pair. The typed amount then
/// belongs to the other field, so it moves there and is re-quoted from that side.
pub fn handle_token_select(store: &Store, fetchers: &QuoteFetchers, side: QuoteSide, token: &str) {
    let before = store.snapshot();
    if before.token(side) == Some(token) {
        return;
    }
    if store.tokens().get(token).is_none() {
        tracing::warn!(%side, token = %token, "Ignoring selection of unknown token");
        return;
    }

    let collision = before.token(side.opposite()) == Some(token);
    tracing::info!(%side, token = %token, collision, "Token selected");
    store.dispatch(choose_token(side, token.to_string()));

    let Some(authoritative) = authoritative_side(&before) else {
        fetchers.abort_pending();
        store.invalidate_quotes();
        return;
    };

    if collision {
        let moved_to = authoritative.opposite();
        store.dispatch(set_amount(moved_to, before.amount(authoritative).to_string()));
        store.dispatch(set_amount(authoritative, String::new()));
        store.dispatch(Action::SetDirection(Some(moved_to)));
        requote_now(store, fetchers, moved_to);
    } else {
        requote_now(store, fetchers, authoritative);
    }
}

/// "Switch trading direction" pressed.
///
/// Without a recorded direction only the tokens swap and no quote is requested.
pub fn handle_direction_switch(store: &Store, fetchers: &QuoteFetchers) {
    let before = store.snapshot();
    store.dispatch(Action::ReverseTradeDirection);

    match before.direction {
        Some(side) => {
            requote_now(store, fetchers, side.opposite());
        }
        None => {
            if !before.sell_amount.is_empty() || !before.buy_amount.is_empty() {
                tracing::debug!("Direction unknown, amounts left in place without a quote");
            }
            fetchers.abort_pending();
            store.invalidate_quotes();
        }
    }
}

/// Network changed; the held quote is for the old chain, so re-quote.
pub fn handle_network_select(store: &Store, fetchers: &QuoteFetchers, network: Network) {
    let before = store.snapshot();
    if before.network == network {
        return;
    }

    tracing::info!(from = %before.network, to = %network, "Network selected");
    store.dispatch(Action::SelectNetwork(network));

    match authoritative_side(&before) {
        Some(side) => {
            requote_now(store, fetchers, side);
        }
        None => {
            fetchers.abort_pending();
            store.invalidate_quotes();
        }
    }
}

/// Clear the form, keeping the network.
pub fn handle_reset(store: &Store, fetchers: &QuoteFetchers) {
    fetchers.abort_pending();
    store.invalidate_quotes();
    store.dispatch(Action::Reset);
}

/// "Place Order" pressed: hand the held quote's transaction to the wallet.
///
/// Returns the transaction sent, or `None` if no settled quote is held.
pub fn handle_place_order(
    store: &Store,
    wallet: Arc<dyn WalletService>,
    event_tx: Sender<AppEvent>,
) -> Option<TransactionRequest> {
    let transaction = store.read(|state| {
        if state.can_place_order() {
            state.quote.as_ref().map(TransactionRequest::from)
        } else {
            None
        }
    });

    let Some(transaction) = transaction else {
        tracing::warn!("Place order without a settled quote");
        return None;
    };

    tracing::info!(to = %shared::truncate_address(&transaction.to), "Placing order");
    submit_order(wallet, transaction.clone(), event_tx);
    Some(transaction)
}
