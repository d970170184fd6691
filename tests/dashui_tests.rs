#[cfg(test)]
mod tests {
    use promptcollector::app::dashui::app::{PromptApp, ThemeChoice};
    use promptcollector::app::prompt_library::FilterIntent;

    #[test]
    fn test_prompt_app_default() {
        let app = PromptApp::default();

        assert!(matches!(app.theme, ThemeChoice::Latte));
        assert!(app.sidebar_open);
        assert!(!app.add_prompt_dialog.draft.open);
        assert!(!app.help_window.open);
        assert!(!app.library.filter().is_active());
        assert!(app.last_submission().is_none());
    }

    #[test]
    fn test_theme_choice_parsing() {
        assert_eq!("latte".parse::<ThemeChoice>().unwrap(), ThemeChoice::Latte);
        assert_eq!("Frappe".parse::<ThemeChoice>().unwrap(), ThemeChoice::Frappe);
        assert_eq!(" MOCHA ".parse::<ThemeChoice>().unwrap(), ThemeChoice::Mocha);
        assert!("solarized".parse::<ThemeChoice>().is_err());

        for choice in ThemeChoice::ALL {
            assert_eq!(choice.to_string().parse::<ThemeChoice>().unwrap(), choice);
        }
    }

    #[test]
    fn test_settings_serialization_skips_filter_state() {
        let mut app = PromptApp::default();
        app.theme = ThemeChoice::Mocha;
        app.sidebar_open = false;
        app.apply_intent(FilterIntent::ToggleTag("SEO".to_string()));
        app.apply_intent(FilterIntent::SetSearchQuery("blog".to_string()));

        let serialized = serde_json::to_string(&app).unwrap();
        assert!(!serialized.contains("blog"));

        let deserialized: PromptApp = serde_json::from_str(&serialized).unwrap();

        // Settings survive, filters start empty
        assert!(matches!(deserialized.theme, ThemeChoice::Mocha));
        assert!(!deserialized.sidebar_open);
        assert!(!deserialized.library.filter().is_active());
    }

    #[test]
    fn test_verbose_logging_reverts_when_filter_cannot_switch() {
        // Logging is never initialized in this test binary
        let mut app = PromptApp::default();
        app.verbose_logging = true;

        app.set_verbose_logging(true);
        assert!(!app.verbose_logging);
    }

    #[test]
    fn test_missing_settings_use_defaults() {
        let deserialized: PromptApp = serde_json::from_str("{}").unwrap();
        assert!(matches!(deserialized.theme, ThemeChoice::Latte));
        assert!(deserialized.sidebar_open);
    }
}
