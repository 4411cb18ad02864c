//! # Reducer Scenarios
//!
//! Multi-step action sequences through the pure reducer.

mod common;

use pretty_assertions::assert_eq;
use shared::QuoteSide;

use common::quote;
use swap_terminal::app::{reduce, Action, TradeState};
use swap_terminal::config::{Network, TokenRegistry};

fn run(state: TradeState, actions: Vec<Action>) -> TradeState {
    let tokens = TokenRegistry::default();
    actions.into_iter().fold(state, |state, action| reduce(&state, action, &tokens))
}

#[test]
fn test_type_quote_and_reverse() {
    let state = run(
        TradeState::default(),
        vec![
            Action::SetSellAmount("100".to_string()),
            Action::SetDirection(Some(QuoteSide::Sell)),
            Action::FetchingQuote(true),
            Action::SetSellQuote(quote("100000000", "82000000000000000")),
            Action::ReverseTradeDirection,
        ],
    );

    assert_eq!(state.sell_token.as_deref(), Some("weth"));
    assert_eq!(state.buy_token.as_deref(), Some("usdc"));
    assert_eq!(state.sell_amount, "");
    assert_eq!(state.buy_amount, "100");
    assert_eq!(state.direction, Some(QuoteSide::Buy));
    assert!(!state.fetching);
}

#[test]
fn test_buy_quote_fills_sell_amount_with_sell_decimals() {
    let state = run(
        TradeState::default(),
        vec![
            Action::SetBuyAmount("0.5".to_string()),
            Action::SetDirection(Some(QuoteSide::Buy)),
            Action::FetchingQuote(true),
            Action::SetBuyQuote(quote("1212884990", "500000000000000000")),
        ],
    );

    assert_eq!(state.sell_amount, "1212.88499");
    assert_eq!(state.buy_amount, "0.5");
    assert!(state.quote.is_some());
}

#[test]
fn test_choosing_both_sides_into_each_other() {
    let state = run(
        TradeState::default(),
        vec![
            Action::ChooseBuyToken("dai".to_string()),
            Action::ChooseSellToken("dai".to_string()),
        ],
    );

    assert_eq!(state.sell_token.as_deref(), Some("dai"));
    assert_eq!(state.buy_token.as_deref(), Some("usdc"));
}

#[test]
fn test_double_reverse_restores_state() {
    let start = run(
        TradeState::default(),
        vec![
            Action::SetSellAmount("7".to_string()),
            Action::SetDirection(Some(QuoteSide::Sell)),
        ],
    );

    let end = run(start.clone(), vec![Action::ReverseTradeDirection, Action::ReverseTradeDirection]);

    assert_eq!(end, start);
}

#[test]
fn test_reset_after_network_change() {
    let state = run(
        TradeState::default(),
        vec![
            Action::SelectNetwork(Network::Polygon),
            Action::ChooseSellToken("matic".to_string()),
            Action::SetSellAmount("3".to_string()),
            Action::Reset,
        ],
    );

    assert_eq!(state, TradeState::initial(Network::Polygon));
}

#[test]
fn test_no_choice_leaves_both_sides_on_one_token() {
    let tokens = TokenRegistry::default();
    let supported = tokens.supported();

    for a in supported {
        for b in supported.iter().filter(|b| *b != a) {
            let start = TradeState {
                sell_token: Some(a.clone()),
                buy_token: Some(b.clone()),
                ..TradeState::default()
            };

            for chosen in supported {
                let sell = reduce(&start, Action::ChooseSellToken(chosen.clone()), &tokens);
                assert_ne!(sell.sell_token, sell.buy_token, "sell {} over {}/{}", chosen, a, b);
                assert_eq!(sell.sell_token.as_deref(), Some(chosen.as_str()));

                let buy = reduce(&start, Action::ChooseBuyToken(chosen.clone()), &tokens);
                assert_ne!(buy.sell_token, buy.buy_token, "buy {} over {}/{}", chosen, a, b);
                assert_eq!(buy.buy_token.as_deref(), Some(chosen.as_str()));
            }

            // Taking the other side's token swaps the pair
            let swapped = reduce(&start, Action::ChooseSellToken(b.clone()), &tokens);
            assert_eq!((swapped.sell_token.as_deref(), swapped.buy_token.as_deref()), (Some(b.as_str()), Some(a.as_str())));
            let swapped = reduce(&start, Action::ChooseBuyToken(a.clone()), &tokens);
            assert_eq!((swapped.sell_token.as_deref(), swapped.buy_token.as_deref()), (Some(b.as_str()), Some(a.as_str())));
        }
    }
}
