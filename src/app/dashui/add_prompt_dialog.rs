//! Modal "Add New Prompt" dialog.
//!
//! While it is open the backdrop swallows input to the sidebar and grid.
//! Renders a [`PromptDraft`]: title, prompt text and a searchable tag picker.
//! Saving hands back a [`PromptSubmission`]; the dialog itself does not store
//! it anywhere.

use super::badge;
use super::window_focus::FocusableWindow;
use crate::app::prompt_library::{PromptDraft, PromptSubmission};
use eframe::egui;
use egui::{Context, RichText, Ui};

pub const ADD_PROMPT_WINDOW_ID: &str = "add_prompt_dialog";

const DIALOG_WIDTH: f32 = 425.0;

#[derive(Debug, Default)]
pub struct AddPromptDialog {
    pub draft: PromptDraft,
    /// Catalog tags offered by the picker
    tags: Vec<String>,
    submission: Option<PromptSubmission>,
}

impl AddPromptDialog {
    pub fn new(tags: Vec<String>) -> Self {
        Self {
            draft: PromptDraft::new(),
            tags,
            submission: None,
        }
    }

    pub fn open(&mut self) {
        self.draft.open();
    }

    pub fn close(&mut self) {
        self.draft.close();
    }

    /// Submission saved during the last frame, if any
    pub fn take_submission(&mut self) -> Option<PromptSubmission> {
        self.submission.take()
    }

    pub fn show(&mut self, ctx: &Context) {
        self.show_with_focus(ctx, (), false);
    }

    fn ui_content(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("Create a new prompt for ChatGPT. Click save when you're done.").weak());
        ui.add_space(8.0);

        ui.label("Title");
        ui.add(
            egui::TextEdit::singleline(&mut self.draft.title)
                .hint_text("Enter prompt title")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);

        ui.label("Prompt");
        ui.add(
            egui::TextEdit::multiline(&mut self.draft.body)
                .hint_text("Write your prompt here...")
                .desired_rows(5)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);

        ui.label("Tags");
        self.tag_picker(ui);

        if !self.draft.tags.is_empty() {
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                for tag in self.draft.tags.iter() {
                    badge::tag_badge(ui, tag, false);
                }
            });
        }

        ui.add_space(10.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Save Prompt").clicked() {
                let submission = self.draft.submit();
                trace_info!(
                    "Prompt {:?} saved from dialog with {} tags",
                    submission.title,
                    submission.tags.len()
                );
                self.submission = Some(submission);
            }
        });
    }

    fn tag_picker(&mut self, ui: &mut Ui) {
        if ui
            .selectable_label(self.draft.tag_picker_open, "Select tags")
            .clicked()
        {
            self.draft.tag_picker_open = !self.draft.tag_picker_open;
        }

        if !self.draft.tag_picker_open {
            return;
        }

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.draft.tag_query)
                    .hint_text("Search tags...")
                    .desired_width(f32::INFINITY),
            );

            let matching: Vec<String> = self
                .draft
                .matching_tags(&self.tags)
                .into_iter()
                .map(str::to_string)
                .collect();

            if matching.is_empty() {
                ui.label(RichText::new("No tags found.").weak());
                return;
            }

            egui::ScrollArea::vertical()
                .id_salt("add_prompt_tag_picker")
                .max_height(160.0)
                .show(ui, |ui| {
                    for tag in matching {
                        let checked = self.draft.tags.contains(&tag);
                        ui.horizontal(|ui| {
                            let mark = if checked { "✔" } else { "" };
                            ui.add_sized([14.0, 14.0], egui::Label::new(mark));
                            if ui.selectable_label(checked, tag.as_str()).clicked() {
                                self.draft.toggle_tag(&tag);
                            }
                        });
                    }
                });
        });
    }
}

impl FocusableWindow for AddPromptDialog {
    type ShowParams = ();

    fn window_id(&self) -> &'static str {
        ADD_PROMPT_WINDOW_ID
    }

    fn window_title(&self) -> String {
        "Add New Prompt".to_string()
    }

    fn is_open(&self) -> bool {
        self.draft.open
    }

    /// Shown as a modal, which always sits above the floating windows, so
    /// `bring_to_front` has nothing to do here
    fn show_with_focus(&mut self, ctx: &egui::Context, _params: (), _bring_to_front: bool) {
        if !self.draft.open {
            return;
        }

        let title = self.window_title();
        let modal = egui::Modal::new(egui::Id::new(ADD_PROMPT_WINDOW_ID)).show(ctx, |ui| {
            ui.set_width(DIALOG_WIDTH);

            let mut close_clicked = false;
            ui.horizontal(|ui| {
                ui.heading(title);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✖").on_hover_text("Close").clicked() {
                        close_clicked = true;
                    }
                });
            });
            ui.separator();

            self.ui_content(ui);
            close_clicked
        });

        // Clicking outside dismisses the dialog like the close button
        if modal.inner || modal.backdrop_response.clicked() {
            self.close();
        }
    }
}
