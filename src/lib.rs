//! Prompt Collector - a desktop browser for a catalog of reusable AI prompts
//!
//! Prompt Collector shows a fixed catalog of prompts as a card grid. A sidebar
//! narrows the grid by free-text search and by tags, and a dialog drafts new
//! prompts (drafts are not stored anywhere).
//!
//! # Architecture Overview
//!
//! - **Domain** ([`app::prompt_library`]): catalog, insertion-ordered tag
//!   selection, the pure filter engine and the filter state controller.
//!   Nothing in here depends on egui.
//! - **UI Layer** ([`app::dashui`]): egui views that read domain state and
//!   return intents, plus [`PromptApp`], which owns the state and applies them.
//! - **Configuration** ([`app::config`]): optional `config.toml` for log filter,
//!   default theme and card width. UI settings are persisted by eframe.
//!
//! # Filtering
//!
//! A prompt is visible when the search text (case-insensitive) occurs in its
//! title or description and it carries every selected tag. See
//! [`app::prompt_library::filter`] for the exact rules.

#![warn(clippy::all, rust_2018_idioms)]

// Include logging macros first
#[macro_use]
pub mod logging_macros;

pub mod app;
pub use app::PromptApp;

use anyhow::{anyhow, Context, Result};
use once_cell::sync::OnceCell;
use tracing_subscriber::{reload, EnvFilter, Registry};

pub type TracingReloadHandle = reload::Handle<EnvFilter, Registry>;

const VERBOSE_LOG_FILTER: &str = "promptcollector=debug,eframe=info,egui=info,wgpu=warn,naga=warn,winit=warn";

static TRACING_RELOAD_HANDLE: OnceCell<TracingReloadHandle> = OnceCell::new();
static BASE_LOG_FILTER: OnceCell<String> = OnceCell::new();

/// Remember the reload handle of the global filter layer and the filter it
/// started with. Later calls are ignored.
pub fn set_tracing_reload_handle(handle: TracingReloadHandle, base_filter: String) {
    if TRACING_RELOAD_HANDLE.set(handle).is_err() {
        trace_warn!("Tracing reload handle already set");
        return;
    }
    let _ = BASE_LOG_FILTER.set(base_filter);
}

/// Switch between the debug filter and the filter logging started with
pub fn set_verbose_logging(enabled: bool) -> Result<()> {
    let handle = TRACING_RELOAD_HANDLE
        .get()
        .ok_or_else(|| anyhow!("Logging was not initialized with a reloadable filter"))?;

    let directives = if enabled {
        VERBOSE_LOG_FILTER
    } else {
        BASE_LOG_FILTER
            .get()
            .map(String::as_str)
            .unwrap_or(app::config::DEFAULT_LOG_FILTER)
    };

    let filter = EnvFilter::builder()
        .parse(directives)
        .with_context(|| format!("Invalid log filter {:?}", directives))?;
    handle
        .reload(filter)
        .context("Failed to reload tracing filter")?;

    tracing::info!("Log filter switched to {}", directives);
    Ok(())
}
