//! Logging macros that prefix every message with `[file:module:line]`.
//!
//! - `log_warn!` writes to both `log` and `tracing`, for failures worth
//!   finding in the log file later.
//! - `trace_*!` write to `tracing` only. Use them for state changes and
//!   debugging detail.
//!
//! Nothing here may be called from per-frame rendering code except at
//! `warn` level or above; filter intents and window actions are fine because
//! they only fire on input.
//!
//! ```text
//! [src/app/prompt_library/state.rs:promptcollector::app::prompt_library::state:52] Tag SEO selected (1 selected)
//! ```

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
        tracing::warn!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! trace_trace {
    ($($arg:tt)*) => {
        tracing::trace!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! trace_debug {
    ($($arg:tt)*) => {
        tracing::debug!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! trace_info {
    ($($arg:tt)*) => {
        tracing::info!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! trace_warn {
    ($($arg:tt)*) => {
        tracing::warn!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

