//! Optional startup configuration read from `config.toml`.
//!
//! The file lives in the platform config directory
//! (`~/.config/promptcollector/config.toml` on Linux) and every key is
//! optional:
//!
//! ```toml
//! log_filter = "promptcollector=debug,eframe=info"
//! default_theme = "mocha"
//! min_card_width = 320.0
//! ```
//!
//! A missing file means defaults. `main` reports a broken file in the log and
//! falls back to defaults as well.

use crate::app::dashui::app::ThemeChoice;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const APP_QUALIFIER: &str = "com";
pub const APP_NAME: &str = "promptcollector";

pub const DEFAULT_LOG_FILTER: &str =
    "promptcollector=info,eframe=info,egui=warn,egui_glow=warn,wgpu=warn,wgpu_core=warn,wgpu_hal=warn,naga=warn,winit=warn";

const DEFAULT_MIN_CARD_WIDTH: f32 = 280.0;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    log_filter: Option<String>,
    default_theme: Option<String>,
    min_card_width: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_filter: String,
    /// Theme used when eframe storage has no saved choice
    pub default_theme: ThemeChoice,
    pub min_card_width: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            default_theme: ThemeChoice::default(),
            min_card_width: DEFAULT_MIN_CARD_WIDTH,
        }
    }
}

impl AppConfig {
    pub fn project_dirs() -> Option<directories::ProjectDirs> {
        directories::ProjectDirs::from(APP_QUALIFIER, "", APP_NAME)
    }

    pub fn default_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(text).context("Failed to parse TOML")?;
        let mut config = Self::default();

        if let Some(filter) = raw.log_filter {
            tracing_subscriber::EnvFilter::builder()
                .parse(&filter)
                .with_context(|| format!("Invalid log_filter {:?}", filter))?;
            config.log_filter = filter;
        }

        if let Some(theme) = raw.default_theme {
            config.default_theme = theme.parse()?;
        }

        if let Some(width) = raw.min_card_width {
            if !width.is_finite() || width <= 0.0 {
                bail!("min_card_width must be a positive number, got {}", width);
            }
            config.min_card_width = width;
        }

        Ok(config)
    }

    /// `RUST_LOG` wins over the configured filter when it parses
    pub fn effective_log_filter(&self) -> EffectiveLogFilter {
        self.resolve_log_filter(std::env::var("RUST_LOG").ok())
    }

    fn resolve_log_filter(&self, env_filter: Option<String>) -> EffectiveLogFilter {
        match env_filter.filter(|v| !v.trim().is_empty()) {
            Some(directives) if tracing_subscriber::EnvFilter::builder().parse(&directives).is_ok() => {
                EffectiveLogFilter {
                    directives,
                    rejected_env: None,
                }
            }
            rejected_env => EffectiveLogFilter {
                directives: self.log_filter.clone(),
                rejected_env,
            },
        }
    }
}

/// Log filter chosen at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveLogFilter {
    pub directives: String,
    /// `RUST_LOG` value that did not parse and was ignored
    pub rejected_env: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_all_keys() {
        let config = AppConfig::from_toml_str(
            r#"
            log_filter = "promptcollector=debug"
            default_theme = "Mocha"
            min_card_width = 320.0
            "#,
        )
        .unwrap();

        assert_eq!(config.log_filter, "promptcollector=debug");
        assert!(config.default_theme == ThemeChoice::Mocha);
        assert_eq!(config.min_card_width, 320.0);
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let err = AppConfig::from_toml_str(r#"default_theme = "solarized""#).unwrap_err();
        assert!(format!("{:#}", err).contains("solarized"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(AppConfig::from_toml_str("prompts = []").is_err());
    }

    #[test]
    fn test_non_positive_card_width_rejected() {
        assert!(AppConfig::from_toml_str("min_card_width = 0.0").is_err());
        assert!(AppConfig::from_toml_str("min_card_width = -10.0").is_err());
    }

    #[test]
    fn test_env_filter_overrides_config() {
        let config = AppConfig::default();
        let filter = config.resolve_log_filter(Some("promptcollector=trace".to_string()));

        assert_eq!(filter.directives, "promptcollector=trace");
        assert_eq!(filter.rejected_env, None);
    }

    #[test]
    fn test_invalid_env_filter_falls_back_to_config() {
        let config = AppConfig::from_toml_str(r#"log_filter = "promptcollector=debug""#).unwrap();
        let filter = config.resolve_log_filter(Some("promptcollector=loud".to_string()));

        assert_eq!(filter.directives, "promptcollector=debug");
        assert_eq!(filter.rejected_env.as_deref(), Some("promptcollector=loud"));
        assert!(tracing_subscriber::EnvFilter::builder()
            .parse(&filter.directives)
            .is_ok());
    }

    #[test]
    fn test_blank_env_filter_is_ignored() {
        let config = AppConfig::default();
        let filter = config.resolve_log_filter(Some("  ".to_string()));

        assert_eq!(filter.directives, DEFAULT_LOG_FILTER);
        assert_eq!(filter.rejected_env, None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_theme = \"frappe\"").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert!(config.default_theme == ThemeChoice::Frappe);
        assert_eq!(config.min_card_width, DEFAULT_MIN_CARD_WIDTH);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load_from(&dir.path().join("nope.toml")).is_err());
    }
}
