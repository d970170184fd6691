//! Small pill-shaped labels used for tags and active filters.

use eframe::egui;
use egui::{Color32, CornerRadius, Margin, Response, RichText, Ui};

fn badge_colors(ui: &Ui, highlighted: bool) -> (Color32, Color32) {
    let visuals = ui.visuals();
    if highlighted {
        (visuals.selection.bg_fill, visuals.selection.stroke.color)
    } else {
        (visuals.widgets.inactive.weak_bg_fill, visuals.text_color())
    }
}

/// Tag label, drawn with the selection colors when `highlighted`
pub fn tag_badge(ui: &mut Ui, tag: &str, highlighted: bool) -> Response {
    let (fill, text_color) = badge_colors(ui, highlighted);
    egui::Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(tag).small().color(text_color));
        })
        .response
}

/// Badge with a trailing remove button. Returns `true` when it was clicked.
pub fn removable_chip(ui: &mut Ui, tag: &str) -> bool {
    let (fill, text_color) = badge_colors(ui, false);
    let mut removed = false;

    egui::Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;
                ui.label(RichText::new(tag).small().color(text_color));
                let button = egui::Button::new(RichText::new("✖").small()).frame(false);
                if ui
                    .add(button)
                    .on_hover_text(format!("Remove {} filter", tag))
                    .clicked()
                {
                    removed = true;
                }
            });
        });

    removed
}

/// "{n} results" counter shown next to the page title
pub fn count_badge(ui: &mut Ui, count: usize) -> Response {
    tag_badge(ui, &format!("{} results", count), false)
}
