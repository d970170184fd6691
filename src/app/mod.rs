//! Core application modules for Prompt Collector.
//!
//! - [`prompt_library`] - prompt catalog, tag selection, filtering and drafts
//! - [`config`] - optional startup configuration
//! - [`dashui`] - egui user interface

pub mod config;
pub mod dashui;
pub mod prompt_library;

pub use dashui::app::PromptApp;
