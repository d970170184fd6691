//! Window focus handling for the Add Prompt dialog and the Help window.
//!
//! Windows implement [`FocusableWindow`] so the app can open, focus and
//! render them the same way. [`WindowFocusManager`] carries a one-shot
//! "bring to front" request between the code that opens a window and the
//! frame that renders it.

use eframe::egui;

pub trait FocusableWindow {
    /// Extra data the window needs to render
    type ShowParams;

    /// Unique identifier, also used for focus requests
    fn window_id(&self) -> &'static str;

    /// Text shown in the window's title bar
    fn window_title(&self) -> String;

    fn is_open(&self) -> bool;

    /// Render the window. With `bring_to_front` the window is shown with
    /// `egui::Order::Foreground` for this frame.
    fn show_with_focus(
        &mut self,
        ctx: &egui::Context,
        params: Self::ShowParams,
        bring_to_front: bool,
    );
}

#[derive(Debug, Default)]
pub struct WindowFocusManager {
    bring_to_front_window: Option<String>,
}

impl WindowFocusManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_focus(&mut self, window_id: impl Into<String>) {
        self.bring_to_front_window = Some(window_id.into());
    }

    pub fn should_bring_to_front(&self, window_id: &str) -> bool {
        self.bring_to_front_window.as_deref() == Some(window_id)
    }

    /// Consume the request for `window_id`, returning whether there was one
    pub fn take_bring_to_front(&mut self, window_id: &str) -> bool {
        if self.should_bring_to_front(window_id) {
            self.bring_to_front_window = None;
            true
        } else {
            false
        }
    }

    /// Apply foreground ordering to `window` when requested
    pub fn apply_focus_order(window: egui::Window<'_>, bring_to_front: bool) -> egui::Window<'_> {
        if bring_to_front {
            window.order(egui::Order::Foreground)
        } else {
            window
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_is_consumed_once() {
        let mut manager = WindowFocusManager::new();
        manager.request_focus("help_window");

        assert!(manager.should_bring_to_front("help_window"));
        assert!(!manager.should_bring_to_front("add_prompt_dialog"));
        assert!(manager.take_bring_to_front("help_window"));
        assert!(!manager.take_bring_to_front("help_window"));
    }

    #[test]
    fn test_latest_request_wins() {
        let mut manager = WindowFocusManager::new();
        manager.request_focus("help_window");
        manager.request_focus("add_prompt_dialog");

        assert!(!manager.should_bring_to_front("help_window"));
        assert!(manager.should_bring_to_front("add_prompt_dialog"));
    }
}
