//! Menu bar, sidebar and the central prompt grid

use super::PromptApp;
use crate::app::dashui::filter_header::{self, HeaderAction};
use crate::app::dashui::{menu, prompt_grid, sidebar};
use crate::app::prompt_library::{FilterIntent, Prompt};
use eframe::egui;

impl PromptApp {
    pub(super) fn render_top_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                let filters_active = self.library.filter().is_active();
                let menu_action = menu::build_menu(
                    ui,
                    &mut self.theme,
                    self.sidebar_open,
                    filters_active,
                    &mut self.verbose_logging,
                );

                match menu_action {
                    menu::MenuAction::AddPrompt => self.open_add_prompt_dialog(),
                    menu::MenuAction::ClearFilters => {
                        self.apply_intent(FilterIntent::ClearFilters);
                    }
                    menu::MenuAction::ToggleSidebar => self.toggle_sidebar(),
                    menu::MenuAction::ThemeChanged => {
                        tracing::info!("Theme changed to {}", self.theme);
                        self.apply_theme(ctx);
                    }
                    menu::MenuAction::VerboseLoggingChanged(enabled) => {
                        self.set_verbose_logging(enabled);
                    }
                    menu::MenuAction::ShowHelp => self.open_help_window(),
                    menu::MenuAction::Quit => {
                        tracing::info!("Quit requested from menu");
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    menu::MenuAction::None => {}
                }
            });
        });
    }

    pub(super) fn render_sidebar(&mut self, ctx: &egui::Context) {
        if !self.sidebar_open {
            return;
        }

        let intents = egui::SidePanel::left("sidebar")
            .resizable(true)
            .default_width(240.0)
            .width_range(180.0..=400.0)
            .show(ctx, |ui| {
                sidebar::build_sidebar(
                    ui,
                    self.library.catalog().tags(),
                    self.library.filter(),
                )
            })
            .inner;

        if self.pending_search_focus {
            ctx.memory_mut(|memory| memory.request_focus(sidebar::search_input_id()));
            self.pending_search_focus = false;
        }

        self.apply_intents(intents);
    }

    pub(super) fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let visible_count = self.library.visible_count();
            let actions = filter_header::build_header(
                ui,
                self.library.filter(),
                visible_count,
                self.sidebar_open,
            );
            for action in actions {
                match action {
                    HeaderAction::Filter(intent) => self.apply_intent(intent),
                    HeaderAction::ToggleSidebar => self.toggle_sidebar(),
                    HeaderAction::OpenAddPrompt => self.open_add_prompt_dialog(),
                }
            }

            ui.separator();

            let min_card_width = self.config.min_card_width;
            egui::ScrollArea::vertical()
                .id_salt("prompt_grid")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let indices = self.library.visible_indices().to_vec();
                    let prompts = self.library.catalog().prompts();
                    let visible: Vec<&Prompt> = indices.iter().map(|&idx| &prompts[idx]).collect();
                    prompt_grid::build_grid(ui, &visible, self.library.filter(), min_card_width);
                });
        });
    }

    pub(super) fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        tracing::debug!("Sidebar {}", if self.sidebar_open { "shown" } else { "hidden" });
    }
}
