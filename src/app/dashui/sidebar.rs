//! Left panel: search box, tag list and the clear-filters button.
//!
//! The sidebar never mutates the filter itself. It reads the current
//! [`FilterState`] and reports what the user did as [`FilterIntent`]s.

use crate::app::prompt_library::{FilterIntent, FilterState};
use eframe::egui;
use egui::RichText;

/// Id of the search box, used to move keyboard focus to it
pub const SEARCH_INPUT_ID: &str = "sidebar_search_input";

pub fn search_input_id() -> egui::Id {
    egui::Id::new(SEARCH_INPUT_ID)
}

pub fn build_sidebar(ui: &mut egui::Ui, tags: &[String], filter: &FilterState) -> Vec<FilterIntent> {
    let mut intents = Vec::new();

    ui.add_space(8.0);

    // Edit a copy so the filter only changes through the intent
    let mut query = filter.search_query().to_string();
    let search = egui::TextEdit::singleline(&mut query)
        .id(search_input_id())
        .hint_text("🔍 Search prompts...")
        .desired_width(f32::INFINITY);
    if ui.add(search).changed() {
        intents.push(FilterIntent::SetSearchQuery(query));
    }

    ui.add_space(8.0);
    ui.separator();

    ui.horizontal(|ui| {
        ui.heading("Tags");
        if filter.is_active() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Clear filters").clicked() {
                    intents.push(FilterIntent::ClearFilters);
                }
            });
        }
    });

    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .id_salt("sidebar_tags")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for tag in tags {
                let selected = filter.is_tag_selected(tag);
                ui.horizontal(|ui| {
                    ui.label(RichText::new("🏷").weak());
                    if ui.selectable_label(selected, tag.as_str()).clicked() {
                        intents.push(FilterIntent::ToggleTag(tag.clone()));
                    }
                    if selected {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(RichText::new("✖").small().weak());
                        });
                    }
                });
            }
        });

    intents
}
