#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use anyhow::{Context, Result};
use promptcollector::app::config::{AppConfig, EffectiveLogFilter};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

fn log_dir() -> Option<PathBuf> {
    AppConfig::project_dirs().map(|dirs| dirs.data_dir().join("logs"))
}

fn init_logging(config: &AppConfig) -> Result<PathBuf> {
    let log_dir = log_dir().context("No home directory to place logs in")?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {:?}", log_dir))?;

    let log_path = log_dir.join("promptcollector.log");
    let file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    // Owner read/write only
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(metadata) = file.metadata() {
            let mut perms = metadata.permissions();
            perms.set_mode(0o600);
            if let Err(e) = std::fs::set_permissions(&log_path, perms) {
                eprintln!("Failed to set log file permissions: {}", e);
            }
        }
    }

    let EffectiveLogFilter {
        directives,
        rejected_env,
    } = config.effective_log_filter();
    let filter = tracing_subscriber::EnvFilter::builder()
        .parse(&directives)
        .with_context(|| format!("Invalid log filter {:?}", directives))?;

    // Reloadable so the menu can switch to verbose logging at runtime
    let (filter, reload_handle) = tracing_subscriber::reload::Layer::new(filter);

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false),
    );

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    // eframe, egui and wgpu log through the `log` crate. Must come after the
    // subscriber is installed.
    tracing_log::LogTracer::init().context("Failed to initialize log-to-tracing bridge")?;

    promptcollector::set_tracing_reload_handle(reload_handle, directives.clone());

    tracing::info!("Logging initialized to: {:?}", log_path);
    tracing::info!("Log filter: {}", directives);
    if let Some(rejected) = rejected_env {
        tracing::warn!("Ignoring invalid RUST_LOG {:?}, using the configured filter", rejected);
    }
    Ok(log_path)
}

fn setup_panic_handler() {
    // Writes panic info to crash.log even if logging never came up
    std::panic::set_hook(Box::new(|panic_info| {
        let crash_msg = format!(
            "Prompt Collector crashed!\n\
             Panic occurred at: {}\n\
             Details: {}\n\
             Backtrace:\n{:?}\n",
            panic_info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown location".to_string()),
            panic_info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| panic_info.payload().downcast_ref::<String>().map(|s| s.as_str()))
                .unwrap_or("unknown panic"),
            std::backtrace::Backtrace::force_capture()
        );

        if let Some(log_dir) = log_dir() {
            let _ = std::fs::create_dir_all(&log_dir);
            let crash_log_path = log_dir.join("crash.log");

            if let Ok(mut file) = std::fs::OpenOptions::new()
                .append(true)
                .create(true)
                .open(&crash_log_path)
            {
                use std::io::Write;
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                let _ = writeln!(file, "\n=== CRASH at {} ===\n{}", timestamp, crash_msg);
            }

            eprintln!("\n{}", crash_msg);
            eprintln!("Crash log written to: {:?}", crash_log_path);
        } else {
            eprintln!("\n{}", crash_msg);
        }
    }));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_panic_handler();

    // Read before logging starts; problems are reported once the log is up
    let config_path = AppConfig::default_path();
    let config_result = match &config_path {
        Some(path) if path.exists() => Some(AppConfig::load_from(path)),
        _ => None,
    };
    let config = match &config_result {
        Some(Ok(config)) => config.clone(),
        _ => AppConfig::default(),
    };

    if let Err(e) = init_logging(&config) {
        eprintln!("Logging disabled: {:#}", e);
    }

    match config_result {
        Some(Ok(_)) => tracing::info!("Loaded configuration from {:?}", config_path),
        Some(Err(e)) => tracing::warn!("Ignoring configuration: {:#}", e),
        None => tracing::info!("No configuration file, using defaults"),
    }

    tracing::info!(
        "promptcollector {} starting ({} @ {})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_BRANCH"),
        env!("GIT_COMMIT")
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Prompt Collector")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Prompt Collector",
        native_options,
        Box::new(move |cc| Ok(Box::new(promptcollector::PromptApp::new(cc, config)))),
    )?;

    tracing::info!("promptcollector exited");
    Ok(())
}
