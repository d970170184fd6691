use crate::app::dashui::app::ThemeChoice;
use eframe::egui;
use egui::RichText;

#[derive(Debug, PartialEq)]
pub enum MenuAction {
    None,
    AddPrompt,
    ClearFilters,
    ToggleSidebar,
    ThemeChanged,
    VerboseLoggingChanged(bool),
    ShowHelp,
    Quit,
}

pub fn build_menu(
    ui: &mut egui::Ui,
    theme: &mut ThemeChoice,
    sidebar_open: bool,
    filters_active: bool,
    verbose_logging: &mut bool,
) -> MenuAction {
    let mut menu_action = MenuAction::None;
    let original_theme = *theme;
    let original_verbose = *verbose_logging;

    ui.menu_button("Prompts", |ui| {
        if ui
            .add(egui::Button::new("Add Prompt…").shortcut_text("Ctrl+N"))
            .clicked()
        {
            menu_action = MenuAction::AddPrompt;
        }
        if ui
            .add_enabled(filters_active, egui::Button::new("Clear filters"))
            .clicked()
        {
            menu_action = MenuAction::ClearFilters;
        }
        let sidebar_label = if sidebar_open {
            "Hide sidebar"
        } else {
            "Show sidebar"
        };
        if ui.button(sidebar_label).clicked() {
            menu_action = MenuAction::ToggleSidebar;
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            menu_action = MenuAction::Quit;
        }
    });

    ui.menu_button(RichText::new("🎨").size(18.0), |ui| {
        for choice in ThemeChoice::ALL {
            if ui
                .radio(*theme == choice, choice.to_string())
                .clicked()
            {
                *theme = choice;
            }
        }

        ui.separator();

        ui.checkbox(verbose_logging, "Verbose logging")
            .on_hover_text("Write debug level messages to the log file");
    });

    if ui.button("❓").on_hover_text("Help (F1)").clicked() {
        menu_action = MenuAction::ShowHelp;
    }

    if menu_action != MenuAction::None {
        return menu_action;
    }

    if original_theme != *theme {
        return MenuAction::ThemeChanged;
    }

    if original_verbose != *verbose_logging {
        return MenuAction::VerboseLoggingChanged(*verbose_logging);
    }

    MenuAction::None
}
