//! Theme management

use super::PromptApp;
use eframe::egui;

impl PromptApp {
    pub(super) fn apply_theme(&self, ctx: &egui::Context) {
        catppuccin_egui::set_theme(ctx, self.theme.catppuccin());

        let mut style = (*ctx.style()).clone();
        style.visuals.window_corner_radius = egui::CornerRadius::same(2);
        ctx.set_style(style);
    }
}
