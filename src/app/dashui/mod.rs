//! Desktop user interface for Prompt Collector.
//!
//! The window is laid out like a small document browser:
//!
//! - a menu bar ([`menu`]) with prompt actions, the theme picker and help,
//! - a collapsible left panel ([`sidebar`]) with search box and tag list,
//! - a header ([`filter_header`]) with the result counter and active filter chips,
//! - the card grid ([`prompt_grid`]),
//! - floating windows ([`add_prompt_dialog`], [`help_window`]) implementing
//!   [`window_focus::FocusableWindow`].
//!
//! Views are plain functions over borrowed state that return intents or
//! actions. [`app::PromptApp`] owns all state and applies them.

pub mod add_prompt_dialog;
pub mod app;
pub mod badge;
pub mod filter_header;
pub mod help_window;
pub mod menu;
pub mod prompt_grid;
pub mod sidebar;
pub mod window_focus;

pub use add_prompt_dialog::AddPromptDialog;
pub use help_window::HelpWindow;
pub use window_focus::{FocusableWindow, WindowFocusManager};
