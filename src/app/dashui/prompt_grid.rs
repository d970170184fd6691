//! Card grid of the visible prompts.

use super::badge;
use crate::app::prompt_library::{FilterState, Prompt};
use eframe::egui;
use egui::{CornerRadius, Margin, RichText};

pub const EMPTY_RESULT_MESSAGE: &str = "No prompts found. Try adjusting your filters.";

const MAX_COLUMNS: usize = 3;

/// Number of card columns fitting into `available_width`, between 1 and 3
pub fn column_count(available_width: f32, min_card_width: f32, spacing: f32) -> usize {
    if min_card_width <= 0.0 || !available_width.is_finite() {
        return 1;
    }
    let fitting = ((available_width + spacing) / (min_card_width + spacing)).floor();
    (fitting.max(1.0) as usize).min(MAX_COLUMNS)
}

pub fn build_grid(ui: &mut egui::Ui, prompts: &[&Prompt], filter: &FilterState, min_card_width: f32) {
    if prompts.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.label(RichText::new(EMPTY_RESULT_MESSAGE).size(16.0).weak());
        });
        return;
    }

    let spacing = ui.spacing().item_spacing.x * 3.0;
    let columns = column_count(ui.available_width(), min_card_width, spacing);

    for row in prompts.chunks(columns) {
        ui.columns(columns, |cols| {
            for (col, prompt) in cols.iter_mut().zip(row) {
                prompt_card(col, prompt, filter);
            }
        });
        ui.add_space(spacing);
    }
}

fn prompt_card(ui: &mut egui::Ui, prompt: &Prompt, filter: &FilterState) {
    egui::Frame::group(ui.style())
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&prompt.title).size(16.0).strong());
            ui.add_space(6.0);
            ui.label(RichText::new(&prompt.description).weak());
            ui.add_space(10.0);
            ui.horizontal_wrapped(|ui| {
                for tag in &prompt.tags {
                    badge::tag_badge(ui, tag, filter.is_tag_selected(tag));
                }
            });
        });
}
