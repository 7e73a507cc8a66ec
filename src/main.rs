// SDRLog - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Preference store and session setup
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use sdrlog::app;
pub use sdrlog::core;
pub use sdrlog::platform;
pub use sdrlog::ui;
pub use sdrlog::util;

use clap::Parser;
use std::path::PathBuf;

/// SDRLog - Viewer for SDR application log files.
///
/// Shows the log of one application at a time, filtered by severity and
/// text, with optional periodic refresh.
#[derive(Parser, Debug)]
#[command(name = "SDRLog", version, about)]
struct Cli {
    /// Folder containing the application logs (defaults to config or platform folder).
    folder: Option<PathBuf>,

    /// Application whose log is shown at startup, e.g. SDRApi.
    #[arg(short = 'a', long = "app")]
    app: Option<String>,

    /// Directory holding config.toml and preferences.json.
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut platform_paths = platform::config::PlatformPaths::resolve();
    if let Some(dir) = cli.config_dir.clone() {
        platform_paths.config_dir = dir;
    }

    // Config is read before logging so its level can take effect.
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);
    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config_dir = %platform_paths.config_dir.display(),
        "SDRLog starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // Log folder: CLI > config.toml > platform default
    let folder = cli
        .folder
        .clone()
        .or_else(|| config.log_folder.clone())
        .unwrap_or_else(|| platform_paths.default_log_folder());

    let store = app::prefs::PreferenceStore::open(&platform_paths.preferences_file());
    if let Some(path) = store.path() {
        tracing::info!(path = %path.display(), "Preference store opened");
    }
    let mut state = app::state::AppState::new(config, store);

    // A CLI app choice applies to this run only and is not persisted.
    if let Some(app_name) = cli.app {
        if state.config.apps.contains(&app_name) {
            state.prefs.app_selection = app_name;
        } else {
            tracing::warn!(
                app = %app_name,
                choices = ?state.config.apps,
                "Unknown --app value; keeping stored selection"
            );
        }
    }

    state.startup(folder);
    if !config_warnings.is_empty() && state.last_error.is_none() {
        state.status_message = format!(
            "{} config.toml warning(s); see log output.",
            config_warnings.len()
        );
    }

    tracing::info!(app = %state.prefs.app_selection, "Ready to launch GUI");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size(ui::theme::WINDOW_SIZE)
            .with_min_inner_size(ui::theme::MIN_WINDOW_SIZE),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::SdrLogApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch SDRLog GUI: {e}");
        std::process::exit(1);
    }
}
