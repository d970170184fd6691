//! Header above the prompt grid.
//!
//! Shows the page title, the result counter while a filter is active, the
//! Add Prompt button and one removable chip per selected tag.

use super::badge;
use crate::app::prompt_library::{FilterIntent, FilterState};
use eframe::egui;
use egui::RichText;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderAction {
    Filter(FilterIntent),
    ToggleSidebar,
    OpenAddPrompt,
}

pub fn build_header(
    ui: &mut egui::Ui,
    filter: &FilterState,
    visible_count: usize,
    sidebar_open: bool,
) -> Vec<HeaderAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        let toggle_text = if sidebar_open { "◀" } else { "▶" };
        let toggle_hint = if sidebar_open {
            "Hide sidebar"
        } else {
            "Show sidebar"
        };
        if ui.button(toggle_text).on_hover_text(toggle_hint).clicked() {
            actions.push(HeaderAction::ToggleSidebar);
        }

        ui.label(RichText::new("Prompts").size(20.0).strong());

        if filter.is_active() {
            badge::count_badge(ui, visible_count);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("➕ Add Prompt").clicked() {
                actions.push(HeaderAction::OpenAddPrompt);
            }
        });
    });

    if !filter.selected_tags().is_empty() {
        ui.separator();
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("Filters:").weak());
            for tag in filter.selected_tags().iter() {
                if badge::removable_chip(ui, tag) {
                    actions.push(HeaderAction::Filter(FilterIntent::ToggleTag(tag.to_string())));
                }
            }
            if ui.small_button("Clear all").clicked() {
                actions.push(HeaderAction::Filter(FilterIntent::ClearFilters));
            }
        });
    }

    actions
}
