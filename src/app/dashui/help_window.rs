use super::window_focus::{FocusableWindow, WindowFocusManager};
use eframe::egui;
use egui::{Context, RichText, Ui};

pub const HELP_WINDOW_ID: &str = "help_window";

#[derive(Debug, Default)]
pub struct HelpWindow {
    pub open: bool,
}

impl HelpWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    fn shortcut(ui: &mut Ui, keys: &str, description: &str) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(keys).strong().monospace());
            ui.label(format!("- {}", description));
        });
    }

    fn ui_content(&self, ui: &mut Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Keyboard Shortcuts");
            ui.add_space(5.0);

            Self::shortcut(ui, "Ctrl+F", "Focus the search box");
            Self::shortcut(ui, "Ctrl+N", "Add a new prompt");
            Self::shortcut(ui, "F1", "Show or hide this window");
            Self::shortcut(ui, "Escape", "Close the current window");

            ui.add_space(15.0);
            ui.heading("Filtering");
            ui.add_space(5.0);

            ui.label("Search matches prompt titles and descriptions, ignoring case.");
            ui.label("Selecting several tags shows only prompts carrying all of them.");
            ui.label("Remove a single tag from the Filters row, or use Clear all.");

            ui.add_space(15.0);
            ui.label(
                RichText::new(format!(
                    "Prompt Collector {} ({} @ {})",
                    env!("CARGO_PKG_VERSION"),
                    env!("GIT_BRANCH"),
                    env!("GIT_COMMIT")
                ))
                .small()
                .weak(),
            );
        });
    }
}

impl FocusableWindow for HelpWindow {
    type ShowParams = ();

    fn window_id(&self) -> &'static str {
        HELP_WINDOW_ID
    }

    fn window_title(&self) -> String {
        "Help".to_string()
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn show_with_focus(&mut self, ctx: &Context, _params: (), bring_to_front: bool) {
        if !self.open {
            return;
        }

        let central_panel_size = ctx.available_rect().size();
        let window_width = central_panel_size.x.min(480.0);

        let mut open = self.open;
        let window = egui::Window::new(self.window_title())
            .id(egui::Id::new(HELP_WINDOW_ID))
            .open(&mut open)
            .default_width(window_width)
            .resizable(false)
            .collapsible(false);

        WindowFocusManager::apply_focus_order(window, bring_to_front).show(ctx, |ui| {
            self.ui_content(ui);
        });

        self.open = open;
    }
}
