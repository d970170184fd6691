//! Main window of Prompt Collector.
//!
//! [`PromptApp`] owns the [`PromptLibrary`] (catalog plus filter state), the
//! Add Prompt dialog and the help window. Child views only read state and
//! return intents; the app applies them right after each view has drawn, so
//! later views in the same frame already see the new filter.
//!
//! The implementation is split the same way as the frame is processed:
//! - initialization: creation from eframe context and config
//! - theme: applying the catppuccin theme
//! - keyboard_input: global shortcuts
//! - rendering: menu bar, sidebar, header and grid
//! - window_rendering: floating windows and focus bookkeeping

use super::add_prompt_dialog::AddPromptDialog;
use super::help_window::HelpWindow;
use super::window_focus::WindowFocusManager;
use crate::app::config::AppConfig;
use crate::app::prompt_library::{FilterIntent, PromptLibrary, PromptSubmission};
use eframe::egui;
use std::str::FromStr;

mod initialization;
mod keyboard_input;
mod rendering;
mod theme;
mod window_rendering;

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeChoice {
    #[default]
    Latte,
    Frappe,
    Macchiato,
    Mocha,
}

impl ThemeChoice {
    pub const ALL: [ThemeChoice; 4] = [
        ThemeChoice::Latte,
        ThemeChoice::Frappe,
        ThemeChoice::Macchiato,
        ThemeChoice::Mocha,
    ];

    pub fn catppuccin(self) -> catppuccin_egui::Theme {
        match self {
            ThemeChoice::Latte => catppuccin_egui::LATTE,
            ThemeChoice::Frappe => catppuccin_egui::FRAPPE,
            ThemeChoice::Macchiato => catppuccin_egui::MACCHIATO,
            ThemeChoice::Mocha => catppuccin_egui::MOCHA,
        }
    }
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeChoice::Latte => write!(f, "Latte"),
            ThemeChoice::Frappe => write!(f, "Frappe"),
            ThemeChoice::Macchiato => write!(f, "Macchiato"),
            ThemeChoice::Mocha => write!(f, "Mocha"),
        }
    }
}

impl FromStr for ThemeChoice {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeChoice::ALL
            .into_iter()
            .find(|choice| choice.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown theme {:?}, expected one of latte, frappe, macchiato, mocha",
                    s
                )
            })
    }
}

/// Floating windows that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedWindow {
    AddPrompt,
    Help,
}

#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PromptApp {
    pub theme: ThemeChoice,
    pub sidebar_open: bool,

    #[serde(skip)]
    pub library: PromptLibrary,
    #[serde(skip)]
    pub add_prompt_dialog: AddPromptDialog,
    #[serde(skip)]
    pub help_window: HelpWindow,
    #[serde(skip)]
    pub config: AppConfig,
    #[serde(skip)]
    pub verbose_logging: bool,
    #[serde(skip)]
    currently_focused_window: Option<FocusedWindow>,
    #[serde(skip)]
    window_focus_order: Vec<FocusedWindow>,
    #[serde(skip)]
    window_focus_manager: WindowFocusManager,
    #[serde(skip)]
    /// Set by Ctrl+F, consumed when the sidebar is drawn
    pending_search_focus: bool,
    #[serde(skip)]
    last_submission: Option<PromptSubmission>,
}

impl Default for PromptApp {
    fn default() -> Self {
        let library = PromptLibrary::builtin();
        let add_prompt_dialog = AddPromptDialog::new(library.catalog().tags().to_vec());
        Self {
            theme: ThemeChoice::default(),
            sidebar_open: true,
            library,
            add_prompt_dialog,
            help_window: HelpWindow::new(),
            config: AppConfig::default(),
            verbose_logging: false,
            currently_focused_window: None,
            window_focus_order: Vec::new(),
            window_focus_manager: WindowFocusManager::new(),
            pending_search_focus: false,
            last_submission: None,
        }
    }
}

impl PromptApp {
    pub fn apply_intent(&mut self, intent: FilterIntent) {
        self.library.apply(intent);
    }

    pub fn apply_intents(&mut self, intents: Vec<FilterIntent>) {
        for intent in intents {
            self.apply_intent(intent);
        }
    }

    /// Switch the live log filter. The flag only changes when the switch
    /// succeeded.
    pub fn set_verbose_logging(&mut self, enabled: bool) {
        match crate::set_verbose_logging(enabled) {
            Ok(()) => self.verbose_logging = enabled,
            Err(e) => {
                log_warn!("Could not change log level: {:#}", e);
                self.verbose_logging = !enabled;
            }
        }
    }

    /// Last prompt saved through the dialog. It is never added to the catalog.
    pub fn last_submission(&self) -> Option<&PromptSubmission> {
        self.last_submission.as_ref()
    }

    pub fn currently_focused_window(&self) -> Option<FocusedWindow> {
        self.currently_focused_window
    }

    /// Draw one frame without the eframe wrapper; used by `update` and by
    /// headless UI tests
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.handle_keyboard_input(ctx);

        self.render_top_menu_bar(ctx);
        self.render_sidebar(ctx);
        self.render_central_panel(ctx);

        self.handle_add_prompt_dialog(ctx);
        self.handle_help_window(ctx);
    }
}

impl eframe::App for PromptApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let frame_start = std::time::Instant::now();

        self.ui(ctx);

        let frame_duration = frame_start.elapsed();
        if frame_duration.as_millis() > 16 {
            log::warn!(
                "⏱️ SLOW FRAME: {:?} (target: 16ms for 60fps)",
                frame_duration
            );
        }
    }
}
