//! Floating windows and their focus order

use super::{FocusedWindow, PromptApp};
use crate::app::dashui::window_focus::FocusableWindow;
use eframe::egui;
use tracing::info;

impl PromptApp {
    pub fn open_add_prompt_dialog(&mut self) {
        self.add_prompt_dialog.open();
        let window_id = self.add_prompt_dialog.window_id();
        self.window_focus_manager.request_focus(window_id);
        self.set_focused_window(FocusedWindow::AddPrompt);
    }

    pub fn open_help_window(&mut self) {
        self.help_window.open = true;
        let window_id = self.help_window.window_id();
        self.window_focus_manager.request_focus(window_id);
        self.set_focused_window(FocusedWindow::Help);
    }

    pub(super) fn handle_add_prompt_dialog(&mut self, ctx: &egui::Context) {
        if !self.add_prompt_dialog.is_open() {
            self.forget_window(FocusedWindow::AddPrompt);
            return;
        }

        let bring_to_front = self
            .window_focus_manager
            .take_bring_to_front(self.add_prompt_dialog.window_id());
        self.add_prompt_dialog.show_with_focus(ctx, (), bring_to_front);

        if let Some(submission) = self.add_prompt_dialog.take_submission() {
            // Prompts are not persisted; the catalog stays as shipped
            info!(
                "Discarding new prompt {:?} ({} chars, tags {:?})",
                submission.title,
                submission.body.chars().count(),
                submission.tags
            );
            self.last_submission = Some(submission);
        }

        if !self.add_prompt_dialog.is_open() {
            self.forget_window(FocusedWindow::AddPrompt);
        }
    }

    pub(super) fn handle_help_window(&mut self, ctx: &egui::Context) {
        if !self.help_window.is_open() {
            self.forget_window(FocusedWindow::Help);
            return;
        }

        let bring_to_front = self
            .window_focus_manager
            .take_bring_to_front(self.help_window.window_id());
        self.help_window.show_with_focus(ctx, (), bring_to_front);

        if !self.help_window.is_open() {
            self.forget_window(FocusedWindow::Help);
        }
    }

    pub(super) fn set_focused_window(&mut self, window: FocusedWindow) {
        if self.currently_focused_window == Some(window) {
            return;
        }

        if let Some(previous) = self.currently_focused_window {
            self.window_focus_order.retain(|w| *w != previous);
            self.window_focus_order.push(previous);
        }

        self.currently_focused_window = Some(window);
        self.window_focus_order.retain(|w| *w != window);
    }

    /// Drop a closed window from the focus bookkeeping
    pub(super) fn forget_window(&mut self, window: FocusedWindow) {
        self.window_focus_order.retain(|w| *w != window);
        if self.currently_focused_window == Some(window) {
            self.currently_focused_window = self.window_focus_order.pop();
        }
    }

    /// Close the focused window and hand focus to the one opened before it
    pub fn close_focused_window(&mut self) {
        let Some(window) = self.currently_focused_window else {
            return;
        };

        match window {
            FocusedWindow::AddPrompt => self.add_prompt_dialog.close(),
            FocusedWindow::Help => self.help_window.open = false,
        }
        self.forget_window(window);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_closes_most_recent_window_first() {
        let mut app = PromptApp::default();
        app.open_add_prompt_dialog();
        app.open_help_window();

        app.close_focused_window();
        assert!(!app.help_window.open);
        assert!(app.add_prompt_dialog.is_open());
        assert_eq!(app.currently_focused_window(), Some(FocusedWindow::AddPrompt));

        app.close_focused_window();
        assert!(!app.add_prompt_dialog.is_open());
        assert_eq!(app.currently_focused_window(), None);

        // Nothing left to close
        app.close_focused_window();
        assert_eq!(app.currently_focused_window(), None);
    }

    #[test]
    fn test_reopening_window_moves_it_to_front() {
        let mut app = PromptApp::default();
        app.open_help_window();
        app.open_add_prompt_dialog();
        app.open_help_window();

        assert_eq!(app.currently_focused_window(), Some(FocusedWindow::Help));
        app.close_focused_window();
        assert_eq!(app.currently_focused_window(), Some(FocusedWindow::AddPrompt));
    }
}
