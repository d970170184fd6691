//! App creation from the eframe context

use super::PromptApp;
use crate::app::config::AppConfig;
use tracing::info;

impl PromptApp {
    /// Create the app, restoring saved UI settings when eframe has them
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let restored = cc
            .storage
            .and_then(|storage| eframe::get_value::<PromptApp>(storage, eframe::APP_KEY));

        let mut app = match restored {
            Some(app) => {
                info!("Restored UI settings (theme {})", app.theme);
                app
            }
            None => {
                info!("No saved UI settings, using theme {}", config.default_theme);
                Self {
                    theme: config.default_theme,
                    ..Self::default()
                }
            }
        };
        app.config = config;

        app.apply_theme(&cc.egui_ctx);

        info!(
            "Prompt catalog loaded: {} prompts, {} tags",
            app.library.catalog().len(),
            app.library.catalog().tags().len()
        );

        app
    }
}
