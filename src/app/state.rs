// SDRLog - app/state.rs
//
// Application state: the loaded log session, the derived filtered view,
// user preferences, and the auto-refresh timer.
// Owned by the eframe::App implementation.
//
// Every path that changes `entries` or the filter configuration ends in
// `apply_filters()`, which recomputes `filtered_indices` from scratch.
// Every setting change is followed by an explicit `persist()` call.

use crate::app::prefs::{self, PreferenceStore, Preferences};
use crate::app::refresh::RefreshTimer;
use crate::core::model::{FilterMode, LogEntry, Severity};
use crate::core::{export, filter, parser, source};
use crate::platform::config::AppConfig;
use crate::platform::fs;
use crate::util::error::{SdrLogError, SourceError};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Validated config.toml values.
    pub config: AppConfig,

    /// Current user settings (mirrors the preference store).
    pub prefs: Preferences,

    /// Backing store for `prefs`.
    store: PreferenceStore,

    /// Folder containing the `<app>.log` files.
    pub source_folder: Option<PathBuf>,

    /// File currently shown.
    pub source_file: Option<PathBuf>,

    /// All entries from the most recent successful read.
    pub entries: Vec<LogEntry>,

    /// Indices of entries matching the current filter (into `entries`).
    pub filtered_indices: Vec<usize>,

    /// Periodic refresh task.
    refresh_timer: RefreshTimer,

    /// Time of the most recent successful read.
    pub last_refreshed: Option<DateTime<Local>>,

    /// Most recent recoverable error, cleared by the next successful read.
    pub last_error: Option<String>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Set whenever the view changes; the log view scrolls to its anchor
    /// and clears it.
    pub scroll_to_anchor: bool,
}

impl AppState {
    /// Create state from config and the preference store. Nothing is read
    /// from disk until `startup` is called.
    pub fn new(config: AppConfig, store: PreferenceStore) -> Self {
        let mut prefs = Preferences::load(&store);
        if !config.apps.contains(&prefs.app_selection) {
            if let Some(first) = config.apps.first() {
                tracing::warn!(
                    stored = %prefs.app_selection,
                    using = %first,
                    "Stored app selection is not configured; using first app"
                );
                prefs.app_selection = first.clone();
            }
        }

        Self {
            config,
            prefs,
            store,
            source_folder: None,
            source_file: None,
            entries: Vec::new(),
            filtered_indices: Vec::new(),
            refresh_timer: RefreshTimer::new(),
            last_refreshed: None,
            last_error: None,
            status_message: "Ready.".to_string(),
            scroll_to_anchor: false,
        }
    }

    /// Point the session at `folder`, load the selected app's log, and
    /// resume auto-refresh if it was on last time.
    ///
    /// A missing folder is reported but not fatal: the user can pick
    /// another one via `set_source_folder`.
    pub fn startup(&mut self, folder: PathBuf) {
        if let Err(e) = self.set_source_folder(folder) {
            tracing::warn!(error = %e, "Log folder unavailable at startup");
        }
        if self.prefs.auto_refresh {
            self.refresh_timer.start(self.refresh_interval());
        }
    }

    // -------------------------------------------------------------------------
    // Source selection and refresh
    // -------------------------------------------------------------------------

    /// Switch to a new log folder and load the selected app's file from it.
    pub fn set_source_folder(&mut self, folder: PathBuf) -> Result<usize, SdrLogError> {
        if let Err(e) = fs::check_folder(&folder) {
            self.report_error(&e);
            return Err(e.into());
        }
        tracing::info!(folder = %folder.display(), "Log folder selected");
        let file = source::log_file_for(&folder, &self.prefs.app_selection);
        self.source_folder = Some(folder);
        self.switch_file(file)
    }

    /// Select another application. The auto-refresh timer keeps running
    /// and refreshes the new file.
    pub fn select_app(&mut self, app_name: &str) -> Result<usize, SdrLogError> {
        self.prefs.app_selection = app_name.to_string();
        self.persist(prefs::KEY_APP_SELECTION, &app_name);

        let Some(folder) = self.source_folder.clone() else {
            let e = SourceError::NoFolderSelected;
            self.report_error(&e);
            return Err(e.into());
        };
        self.switch_file(source::log_file_for(&folder, app_name))
    }

    /// Open an arbitrary log file chosen by the user.
    pub fn open_file(&mut self, path: PathBuf) -> Result<usize, SdrLogError> {
        self.switch_file(path)
    }

    /// Reset to `file`: drop the old entries, then read the new file.
    fn switch_file(&mut self, file: PathBuf) -> Result<usize, SdrLogError> {
        tracing::info!(file = %file.display(), "Switching log file");
        self.source_file = Some(file);
        self.entries.clear();
        self.apply_filters();
        self.refresh()
    }

    /// Re-read the current file and re-derive the view.
    ///
    /// On failure the previous entries and view are left intact and the
    /// error is recorded for the status bar.
    pub fn refresh(&mut self) -> Result<usize, SdrLogError> {
        let Some(file) = self.source_file.clone() else {
            let e = SourceError::NoFolderSelected;
            self.report_error(&e);
            return Err(e.into());
        };

        match read_entries(&file) {
            Ok(entries) => {
                let count = entries.len();
                self.entries = entries;
                self.apply_filters();
                self.last_refreshed = Some(Local::now());
                self.last_error = None;
                self.status_message = format!(
                    "Loaded {count} lines from {}",
                    file.file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| file.display().to_string())
                );
                Ok(count)
            }
            Err(e) => {
                self.report_error(&e);
                Err(e)
            }
        }
    }

    /// Empty the loaded entries. The next refresh reloads them.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.apply_filters();
        self.last_error = None;
        self.status_message = "Cleared.".to_string();
    }

    // -------------------------------------------------------------------------
    // Auto-refresh
    // -------------------------------------------------------------------------

    /// Turn auto-refresh on or off, persisting the choice.
    pub fn set_auto_refresh(&mut self, on: bool) {
        self.prefs.auto_refresh = on;
        self.persist(prefs::KEY_AUTO_REFRESH, &on);
        if on {
            self.refresh_timer.start(self.refresh_interval());
        } else {
            self.refresh_timer.stop();
        }
    }

    /// Whether a periodic refresh task is armed.
    pub fn auto_refresh_active(&self) -> bool {
        self.refresh_timer.is_active()
    }

    /// Handle elapsed timer intervals. Several ticks that piled up between
    /// frames collapse into one refresh. Returns `true` if a refresh ran.
    pub fn poll_auto_refresh(&mut self) -> bool {
        if self.refresh_timer.poll_ticks() == 0 {
            return false;
        }
        // Errors are already recorded for the status bar.
        let _ = self.refresh();
        true
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.config.refresh_interval_ms)
    }

    // -------------------------------------------------------------------------
    // Filter settings
    // -------------------------------------------------------------------------

    pub fn set_min_severity(&mut self, severity: Severity) {
        self.prefs.filter.min_severity = severity;
        self.persist(prefs::KEY_SHOW_LEVEL, &severity);
        self.apply_filters();
    }

    pub fn set_filter_mode(&mut self, mode: FilterMode) {
        self.prefs.filter.filter_mode = mode;
        self.persist(prefs::KEY_FILTER_BY, &mode);
        self.apply_filters();
    }

    pub fn set_filter_text(&mut self, text: &str) {
        self.prefs.filter.filter_text = text.to_string();
        self.persist(prefs::KEY_FILTER_TEXT, &text);
        self.apply_filters();
    }

    pub fn set_show_timestamps(&mut self, show: bool) {
        self.prefs.filter.show_timestamps = show;
        self.persist(prefs::KEY_SHOW_TIMESTAMPS, &show);
        self.apply_filters();
    }

    // -------------------------------------------------------------------------
    // Display settings
    // -------------------------------------------------------------------------

    pub fn set_font_size(&mut self, size: f64) {
        let size = prefs::sanitize_font_size(size);
        self.prefs.font_size = size;
        self.persist(prefs::KEY_FONT_SIZE, &size);
    }

    pub fn set_go_to_last(&mut self, go_to_last: bool) {
        self.prefs.go_to_last = go_to_last;
        self.persist(prefs::KEY_GO_TO_LAST, &go_to_last);
        self.scroll_to_anchor = true;
    }

    // -------------------------------------------------------------------------
    // View
    // -------------------------------------------------------------------------

    /// Recompute filtered indices from current entries and filter config.
    pub fn apply_filters(&mut self) {
        self.filtered_indices = filter::apply_filters(&self.entries, &self.prefs.filter);
        self.scroll_to_anchor = true;
    }

    /// Visible entries in display order.
    pub fn visible_entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.filtered_indices
            .iter()
            .filter_map(|&i| self.entries.get(i))
    }

    /// Text shown for one entry under the current settings.
    pub fn display_text<'a>(&self, entry: &'a LogEntry) -> &'a str {
        entry.display_text(self.prefs.filter.show_timestamps)
    }

    /// Write the visible lines, as displayed, to `dest`.
    pub fn save_view(&mut self, dest: &Path) -> Result<usize, SdrLogError> {
        let text = export::render_text(
            &self.entries,
            &self.filtered_indices,
            self.prefs.filter.show_timestamps,
        );
        match fs::write_text_atomic(dest, &text) {
            Ok(()) => {
                let n = self.filtered_indices.len();
                tracing::info!(path = %dest.display(), lines = n, "Filtered view saved");
                self.last_error = None;
                self.status_message = format!("Saved {n} lines to {}", dest.display());
                Ok(n)
            }
            Err(e) => {
                self.report_error(&e);
                Err(e.into())
            }
        }
    }

    /// Files in the source folder that the Load menu may offer.
    pub fn loadable_files(&self) -> Vec<PathBuf> {
        match &self.source_folder {
            Some(folder) => fs::list_app_logs(folder, &self.prefs.app_selection),
            None => Vec::new(),
        }
    }

    /// Write every setting in one flush. Called on exit.
    pub fn save_preferences(&mut self) {
        match self.prefs.save(&mut self.store) {
            Ok(()) => tracing::debug!("All preferences saved"),
            Err(e) => tracing::warn!(error = %e, "Failed to save preferences"),
        }
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    /// Write one preference; failures are logged and shown, never fatal.
    fn persist<T: Serialize>(&mut self, key: &str, value: &T) {
        if let Err(e) = self.store.set(key, value) {
            tracing::warn!(key, error = %e, "Failed to persist preference");
            self.last_error = Some(e.to_string());
        }
    }

    fn report_error(&mut self, e: &dyn std::error::Error) {
        tracing::warn!(error = %e, "Recoverable error");
        self.last_error = Some(e.to_string());
        self.status_message = e.to_string();
    }
}

/// Read and parse `file` in one step.
fn read_entries(file: &Path) -> Result<Vec<LogEntry>, SdrLogError> {
    let bytes = fs::read_log_file(file)?;
    Ok(parser::parse_bytes(bytes, file)?.entries)
}
