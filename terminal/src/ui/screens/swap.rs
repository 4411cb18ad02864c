//! # Swap Screen
//!
//! Sell and buy rows, direction switch, quote summary and order button.

use egui::{self, RichText};
use shared::{Quote, QuoteSide};

use crate::app::{App, OrderStatus, TradeState};
use crate::config::{Language, Network};
use crate::ui::i18n::{t, Key};
use crate::ui::theme::Palette;

const AMOUNT_WIDTH: f32 = 200.0;

/// Render the swap screen
pub fn render(ui: &mut egui::Ui, state: &TradeState, app: &mut App, palette: &Palette) {
    let lang = app.preferences().language;

    render_network_row(ui, state, app, lang);
    ui.add_space(12.0);

    render_side(ui, state, app, QuoteSide::Sell, lang);
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        let switch = ui
            .button(RichText::new("⇅").size(18.0))
            .on_hover_text(t(lang, Key::SwitchTradingDirection));
        if switch.clicked() {
            app.handle_direction_switch();
        }
    });
    ui.add_space(6.0);

    render_side(ui, state, app, QuoteSide::Buy, lang);
    ui.add_space(12.0);

    render_quote_summary(ui, state, app, palette, lang);
    ui.add_space(12.0);

    render_order(ui, state, app, palette, lang);
}

fn render_network_row(ui: &mut egui::Ui, state: &TradeState, app: &mut App, lang: Language) {
    ui.horizontal(|ui| {
        ui.label(t(lang, Key::Network));
        let mut selected = state.network;
        egui::ComboBox::from_id_salt("network")
            .selected_text(selected.title())
            .show_ui(ui, |ui| {
                for network in Network::all() {
                    ui.selectable_value(&mut selected, *network, network.title());
                }
            });
        if selected != state.network {
            app.handle_network_select(selected);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(t(lang, Key::Reset)).clicked() {
                app.handle_reset();
            }
        });
    });
}

fn render_side(ui: &mut egui::Ui, state: &TradeState, app: &mut App, side: QuoteSide, lang: Language) {
    let (label, amount_label) = match side {
        QuoteSide::Sell => (Key::Sell, Key::SellAmount),
        QuoteSide::Buy => (Key::Buy, Key::BuyAmount),
    };
    let supported: Vec<String> = app.store().tokens().supported().to_vec();

    ui.horizontal(|ui| {
        ui.label(RichText::new(t(lang, label)).strong());

        let current = state.token(side).map(str::to_string);
        let mut picked: Option<String> = None;
        egui::ComboBox::from_id_salt(("token", side.to_string()))
            .selected_text(current.as_deref().map(str::to_uppercase).unwrap_or_else(|| "—".to_string()))
            .show_ui(ui, |ui| {
                for token in &supported {
                    let is_selected = current.as_deref() == Some(token.as_str());
                    if ui.selectable_label(is_selected, token.to_uppercase()).clicked() {
                        picked = Some(token.clone());
                    }
                }
            });
        if let Some(token) = picked {
            app.handle_token_select(side, &token);
        }

        let mut amount = state.amount(side).to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut amount)
                .hint_text(t(lang, amount_label))
                .desired_width(AMOUNT_WIDTH),
        );
        if response.changed() {
            app.handle_amount_change(side, &amount);
        }
    });
}

fn exchange_rate(state: &TradeState, quote: &Quote) -> String {
    let sell = state.sell_token.as_deref().unwrap_or_default().to_uppercase();
    let buy = state.buy_token.as_deref().unwrap_or_default().to_uppercase();
    format!("1 {} = {} {}", sell, quote.price, buy)
}

fn render_quote_summary(ui: &mut egui::Ui, state: &TradeState, app: &App, palette: &Palette, lang: Language) {
    if state.fetching {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.colored_label(palette.dim, format!("{}…", t(lang, Key::FetchingBestPrice)));
        });
        return;
    }

    if let Some(error) = app.last_quote_error() {
        ui.colored_label(palette.error, error.to_string());
    }

    let Some(quote) = &state.quote else {
        return;
    };

    egui::Grid::new("quote_summary")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            ui.colored_label(palette.dim, t(lang, Key::Rate));
            ui.label(exchange_rate(state, quote));
            ui.end_row();

            if !quote.guaranteed_price.is_empty() {
                ui.colored_label(palette.dim, t(lang, Key::GuaranteedPrice));
                ui.label(&quote.guaranteed_price);
                ui.end_row();
            }

            if !quote.estimated_gas.is_empty() {
                ui.colored_label(palette.dim, t(lang, Key::EstimatedGas));
                ui.label(&quote.estimated_gas);
                ui.end_row();
            }

            let sources: Vec<&str> = quote.active_sources().map(|s| s.name.as_str()).collect();
            if !sources.is_empty() {
                ui.colored_label(palette.dim, t(lang, Key::Sources));
                ui.label(sources.join(", "));
                ui.end_row();
            }
        });
}

fn render_order(ui: &mut egui::Ui, state: &TradeState, app: &mut App, palette: &Palette, lang: Language) {
    ui.colored_label(palette.warning, t(lang, Key::Disclosure));
    ui.add_space(6.0);

    let submitting = matches!(app.order_status(), OrderStatus::Submitting(_));
    let label = if submitting { t(lang, Key::Processing) } else { t(lang, Key::PlaceOrder) };
    let enabled = state.can_place_order() && !submitting;

    if ui.add_enabled(enabled, egui::Button::new(label)).clicked() {
        app.handle_place_order();
    }

    match app.order_status() {
        OrderStatus::Exported => {
            ui.colored_label(palette.success, t(lang, Key::TransactionExported));
        }
        OrderStatus::Failed(error) => {
            ui.colored_label(palette.error, error.to_string());
        }
        OrderStatus::Idle | OrderStatus::Submitting(_) => {}
    }
}
