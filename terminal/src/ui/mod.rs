//! # GUI Rendering
//!
//! eframe integration for the swap view: header with language and theme
//! controls, the swap screen, and a status bar showing the deep link for the
//! current selection.

pub mod i18n;
pub mod screens;
pub mod theme;

use std::time::Duration;

use crate::app::App;
use crate::config::{Language, Theme};
use i18n::{t, Key};

/// Repaint cadence while a quote may be on its way
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// eframe application hosting the swap view.
///
/// Dropping it (when the window closes) cancels the quote fetchers.
pub struct SwapTerminal {
    app: App,
    applied_theme: Option<Theme>,
}

impl SwapTerminal {
    pub fn new(app: App) -> Self {
        Self { app, applied_theme: None }
    }
}

impl eframe::App for SwapTerminal {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();

        let theme = self.app.preferences().theme;
        let palette = theme::Palette::for_theme(theme);
        if self.applied_theme != Some(theme) {
            theme::apply(ctx, theme);
            self.applied_theme = Some(theme);
        }

        // Render from a snapshot so no lock is held while drawing.
        let state = self.app.state();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            render_header(ui, &mut self.app);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(palette.dim, format!("swap?{}", self.app.query_string()));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            screens::swap::render(ui, &state, &mut self.app, &palette);
        });

        // Async results arrive off-frame; keep polling the channel.
        ctx.request_repaint_after(POLL_INTERVAL);
    }
}

fn render_header(ui: &mut egui::Ui, app: &mut App) {
    let prefs = app.preferences();

    ui.horizontal(|ui| {
        ui.heading("Swap");

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let icon = match prefs.theme {
                Theme::Dark => "☀",
                Theme::Light => "🌙",
            };
            if ui.button(icon).on_hover_text(t(prefs.language, Key::SwitchTheme)).clicked() {
                app.handle_theme_toggle();
            }

            let mut language = prefs.language;
            egui::ComboBox::from_id_salt("language")
                .selected_text(language.native_name())
                .show_ui(ui, |ui| {
                    for option in Language::all() {
                        ui.selectable_value(&mut language, *option, option.native_name());
                    }
                });
            if language != prefs.language {
                app.handle_language_change(language);
            }
        });
    });
}
