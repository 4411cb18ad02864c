//! # Theme
//!
//! Dark and light palettes for the swap window and their egui `Visuals`.

use egui::{Color32, Context, Stroke, Visuals};

use crate::config::Theme;

/// Colors used by the swap view on top of egui's own visuals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub text: Color32,
    pub dim: Color32,
    pub accent: Color32,
    pub border: Color32,
    pub panel: Color32,
    pub field: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                text: Color32::from_rgb(230, 230, 230),
                dim: Color32::from_rgb(140, 140, 140),
                accent: Color32::from_rgb(102, 126, 234),
                border: Color32::from_rgb(51, 51, 51),
                panel: Color32::from_rgb(17, 17, 17),
                field: Color32::from_rgb(30, 30, 30),
                success: Color32::from_rgb(0, 200, 83),
                error: Color32::from_rgb(230, 57, 70),
                warning: Color32::from_rgb(255, 193, 7),
            },
            Theme::Light => Self {
                text: Color32::from_rgb(25, 25, 25),
                dim: Color32::from_rgb(110, 110, 110),
                accent: Color32::from_rgb(76, 96, 210),
                border: Color32::from_rgb(210, 210, 210),
                panel: Color32::from_rgb(250, 250, 250),
                field: Color32::from_rgb(238, 238, 238),
                success: Color32::from_rgb(0, 140, 60),
                error: Color32::from_rgb(200, 30, 45),
                warning: Color32::from_rgb(180, 120, 0),
            },
        }
    }

    /// egui visuals for this palette
    pub fn visuals(&self, theme: Theme) -> Visuals {
        let mut visuals = match theme {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        };

        visuals.override_text_color = Some(self.text);
        visuals.panel_fill = self.panel;
        visuals.window_fill = self.panel;
        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.extreme_bg_color = self.field;

        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, self.accent);
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, self.accent);

        visuals.selection.stroke = Stroke::new(1.5, self.accent);
        visuals.hyperlink_color = self.accent;
        visuals
    }
}

/// Apply `theme` to an egui context and return its palette.
pub fn apply(ctx: &Context, theme: Theme) -> Palette {
    let palette = Palette::for_theme(theme);
    ctx.set_visuals(palette.visuals(theme));
    palette
}
