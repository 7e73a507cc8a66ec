// SDRLog - tests/e2e_pipeline.rs
//
// End-to-end tests for the load -> filter -> display -> save pipeline.
//
// These tests exercise the real filesystem, the real preference store and
// the real refresh timer, driving `AppState` the same way the UI does.

use sdrlog::app::prefs::{PreferenceStore, Preferences};
use sdrlog::app::state::AppState;
use sdrlog::core::model::{FilterMode, Severity};
use sdrlog::core::parser::parse_content;
use sdrlog::platform::config::{load_config, AppConfig};
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture files.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// State over the fixture folder with an in-memory preference store.
fn fixture_state() -> AppState {
    let mut state = AppState::new(AppConfig::default(), PreferenceStore::in_memory());
    state.startup(fixtures_dir());
    state
}

fn visible_texts(state: &AppState) -> Vec<String> {
    state
        .visible_entries()
        .map(|e| state.display_text(e).to_string())
        .collect()
}

// =============================================================================
// Loading and filtering
// =============================================================================

#[test]
fn e2e_loads_every_line_of_fixture() {
    let state = fixture_state();
    assert!(state.last_error.is_none(), "{:?}", state.last_error);
    assert_eq!(state.entries.len(), 8);
    assert_eq!(state.filtered_indices.len(), 8);

    let content = fs::read_to_string(fixtures_dir().join("SDR6000.log")).unwrap();
    let rejoined: Vec<&str> = state.entries.iter().map(|e| e.raw_text.as_str()).collect();
    assert_eq!(format!("{}\n", rejoined.join("\n")), content);
}

#[test]
fn e2e_severity_then_prefix_filter() {
    let mut state = fixture_state();

    state.set_min_severity(Severity::Warning);
    assert_eq!(
        visible_texts(&state),
        vec![
            "2024-03-02 08:15:01.002 [Warning] Audio > Radio stream underrun",
            "2024-03-02 08:15:02.875 [Error] Main > Radio connection lost",
        ]
    );

    state.set_filter_mode(FilterMode::Prefix);
    state.set_filter_text("Radio");
    state.set_show_timestamps(false);
    assert_eq!(
        visible_texts(&state),
        vec![
            "[Warning] Audio > Radio stream underrun",
            "[Error] Main > Radio connection lost",
        ]
    );
}

#[test]
fn e2e_excludes_filter_keeps_untagged_lines_at_debug() {
    let mut state = fixture_state();
    state.set_filter_mode(FilterMode::Excludes);
    state.set_filter_text("Radio");
    let texts = visible_texts(&state);
    assert_eq!(texts.len(), 3);
    assert!(texts.contains(&"    continuation line without a tag".to_string()));
}

#[test]
fn e2e_prefix_mode_without_text_requires_delimiter() {
    let mut state = fixture_state();
    state.set_filter_mode(FilterMode::Prefix);
    let texts = visible_texts(&state);
    assert_eq!(texts.len(), 7);
    assert!(!texts.contains(&"    continuation line without a tag".to_string()));
}

#[test]
fn e2e_untagged_lines_hidden_above_debug() {
    let mut state = fixture_state();
    state.set_min_severity(Severity::Info);
    assert!(state
        .visible_entries()
        .all(|e| e.severity.is_some_and(|s| s >= Severity::Info)));
    assert_eq!(state.filtered_indices.len(), 5);
}

// =============================================================================
// Load menu and app switching
// =============================================================================

#[test]
fn e2e_load_menu_lists_files_for_selected_app() {
    let mut state = fixture_state();
    let names: Vec<String> = state
        .loadable_files()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["SDR6000.log", "sdr6000-old.log"]);

    state.select_app("SDRApi").unwrap();
    assert_eq!(state.entries.len(), 2);
    assert_eq!(state.loadable_files().len(), 1);
}

#[test]
fn e2e_open_older_file() {
    let mut state = fixture_state();
    state.open_file(fixtures_dir().join("sdr6000-old.log")).unwrap();
    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.prefs.app_selection, "SDR6000");
}

// =============================================================================
// Save
// =============================================================================

#[test]
fn e2e_save_writes_displayed_view() {
    let out = TempDir::new().unwrap();
    let mut state = fixture_state();
    state.set_min_severity(Severity::Error);
    state.set_show_timestamps(false);

    let dest = out.path().join("Saved.log");
    assert_eq!(state.save_view(&dest).unwrap(), 1);
    assert_eq!(
        fs::read_to_string(&dest).unwrap(),
        "[Error] Main > Radio connection lost"
    );
}

// =============================================================================
// Preferences across sessions
// =============================================================================

#[test]
fn e2e_settings_restored_on_next_launch() {
    let config_dir = TempDir::new().unwrap();
    let prefs_path = config_dir.path().join("preferences.json");

    {
        let mut state = AppState::new(AppConfig::default(), PreferenceStore::open(&prefs_path));
        state.startup(fixtures_dir());
        state.select_app("SDRApi").unwrap();
        state.set_min_severity(Severity::Error);
        state.set_filter_mode(FilterMode::Includes);
        state.set_filter_text("client");
        state.set_font_size(9.0);
    }

    let mut state = AppState::new(AppConfig::default(), PreferenceStore::open(&prefs_path));
    state.startup(fixtures_dir());
    assert_eq!(state.prefs.app_selection, "SDRApi");
    assert_eq!(state.prefs.font_size, 9.0);
    assert_eq!(
        visible_texts(&state),
        vec!["2024-03-02 08:15:04.500 [Error] Api > client dropped"]
    );

    let prefs = Preferences::load(&PreferenceStore::open(&prefs_path));
    assert_eq!(prefs.filter.filter_text, "client");
}

// =============================================================================
// Config and auto-refresh
// =============================================================================

#[test]
fn e2e_config_drives_apps_and_interval() {
    let config_dir = TempDir::new().unwrap();
    let logs = TempDir::new().unwrap();
    fs::write(
        config_dir.path().join("config.toml"),
        "[source]\napps = [\"Rig\"]\n\n[refresh]\ninterval_ms = 250\n",
    )
    .unwrap();
    fs::write(logs.path().join("Rig.log"), "t [Info] one\n").unwrap();

    let (config, warnings) = load_config(config_dir.path());
    assert!(warnings.is_empty(), "{warnings:?}");

    let mut state = AppState::new(config, PreferenceStore::in_memory());
    assert_eq!(state.prefs.app_selection, "Rig");
    state.startup(logs.path().to_path_buf());
    assert_eq!(state.entries.len(), 1);

    state.set_auto_refresh(true);
    fs::write(logs.path().join("Rig.log"), "t [Info] one\nt [Error] two\n").unwrap();
    let deadline = Instant::now() + Duration::from_secs(10);
    while state.entries.len() != 2 && Instant::now() < deadline {
        state.poll_auto_refresh();
        std::thread::sleep(Duration::from_millis(20));
    }
    assert_eq!(state.entries.len(), 2);
    state.set_auto_refresh(false);
    assert!(!state.auto_refresh_active());
}

#[test]
fn e2e_parse_matches_state_load() {
    let path = fixtures_dir().join("SDR6000.log");
    let content = fs::read_to_string(&path).unwrap();
    let parsed = parse_content(&content, &path);
    assert!(parsed.had_trailing_newline);
    assert_eq!(parsed.entries, fixture_state().entries);
}
