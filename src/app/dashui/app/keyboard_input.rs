//! Global keyboard shortcuts

use super::{FocusedWindow, PromptApp};
use eframe::egui;
use tracing::info;

impl PromptApp {
    pub(super) fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        let (escape, new_prompt, find, help) = ctx.input_mut(|input| {
            (
                input.consume_key(egui::Modifiers::NONE, egui::Key::Escape),
                input.consume_key(egui::Modifiers::COMMAND, egui::Key::N),
                input.consume_key(egui::Modifiers::COMMAND, egui::Key::F),
                input.consume_key(egui::Modifiers::NONE, egui::Key::F1),
            )
        });

        if escape {
            self.close_focused_window();
        }

        if new_prompt {
            info!("Ctrl+N pressed - opening Add Prompt dialog");
            self.open_add_prompt_dialog();
        }

        if find {
            self.sidebar_open = true;
            self.pending_search_focus = true;
        }

        if help {
            self.help_window.toggle();
            if self.help_window.open {
                self.open_help_window();
            } else {
                self.forget_window(FocusedWindow::Help);
            }
        }
    }
}
