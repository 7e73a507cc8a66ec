// SDRLog - app/prefs.rs
//
// Preference store: a flat key/value map persisted as JSON, read once at
// startup and written on every change.
//
// Design principles:
// - Writes are atomic (write to temp, rename to final) so a crash during save never
//   corrupts the previous good file.
// - Load errors are logged and discarded; a corrupt or missing file just
//   starts the app with defaults.
// - A missing key, or a value of the wrong type, yields the caller's default.
// - Parsed log entries are never stored here.

use crate::core::model::{FilterConfig, FilterMode, Severity};
use crate::util::constants;
use crate::util::error::PrefsError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// =============================================================================
// Keys
// =============================================================================

pub const KEY_APP_SELECTION: &str = "appSelection";
pub const KEY_AUTO_REFRESH: &str = "autoRefresh";
pub const KEY_FILTER_BY: &str = "filterBy";
pub const KEY_FILTER_TEXT: &str = "filterText";
pub const KEY_FONT_SIZE: &str = "fontSize";
pub const KEY_GO_TO_LAST: &str = "goToLast";
pub const KEY_SHOW_LEVEL: &str = "showLevel";
pub const KEY_SHOW_TIMESTAMPS: &str = "showTimestamps";

// =============================================================================
// PreferenceStore
// =============================================================================

/// Synchronous key/value store.
///
/// With a backing path every `set` rewrites the file; without one the store
/// lives in memory only (used by tests and when no config dir is available).
#[derive(Debug, Default)]
pub struct PreferenceStore {
    path: Option<PathBuf>,
    values: BTreeMap<String, Value>,
}

impl PreferenceStore {
    /// In-memory store with no backing file.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open the store at `path`, reading any existing values.
    pub fn open(path: &Path) -> Self {
        let values = load_values(path).unwrap_or_default();
        Self {
            path: Some(path.to_path_buf()),
            values,
        }
    }

    /// Backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read `key`, falling back to `default` when it is absent or has the
    /// wrong type.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.values.get(key) {
            Some(value) => match serde_json::from_value(value.clone()) {
                Ok(v) => v,
                Err(e) => {
                    tracing::debug!(key, error = %e, "Preference has unexpected type; using default");
                    default
                }
            },
            None => default,
        }
    }

    /// Store `value` under `key` and persist.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), PrefsError> {
        self.set_many(&[(key, to_value(value)?)])
    }

    /// Store several values and persist once.
    pub fn set_many(&mut self, pairs: &[(&str, Value)]) -> Result<(), PrefsError> {
        for (key, value) in pairs {
            self.values.insert((*key).to_string(), value.clone());
        }
        self.flush()
    }

    fn flush(&self) -> Result<(), PrefsError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PrefsError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json =
            serde_json::to_string_pretty(&self.values).map_err(|e| PrefsError::Json { source: e })?;

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json.as_bytes()).map_err(|e| PrefsError::Io {
            path: tmp.clone(),
            source: e,
        })?;
        std::fs::rename(&tmp, path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            PrefsError::Io {
                path: path.clone(),
                source: e,
            }
        })?;

        tracing::debug!(path = %path.display(), keys = self.values.len(), "Preferences saved");
        Ok(())
    }
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, PrefsError> {
    serde_json::to_value(value).map_err(|e| PrefsError::Json { source: e })
}

/// Read the JSON object at `path`. `None` on any error.
fn load_values(path: &Path) -> Option<BTreeMap<String, Value>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot read preferences");
            }
        })
        .ok()?;

    let values = serde_json::from_str(&content)
        .map_err(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Preferences file is malformed; starting fresh"
            );
        })
        .ok()?;

    tracing::info!(path = %path.display(), "Preferences loaded");
    Some(values)
}

// =============================================================================
// Typed view
// =============================================================================

/// Every persisted setting, decoded with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub app_selection: String,
    pub auto_refresh: bool,
    pub filter: FilterConfig,
    pub font_size: f64,
    /// Scroll anchor: true keeps the last line in view, false the first.
    pub go_to_last: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            app_selection: constants::DEFAULT_APP_SELECTION.to_string(),
            auto_refresh: false,
            filter: FilterConfig::default(),
            font_size: constants::DEFAULT_FONT_SIZE,
            go_to_last: false,
        }
    }
}

impl Preferences {
    /// Decode all settings from `store`.
    pub fn load(store: &PreferenceStore) -> Self {
        let defaults = Self::default();
        let filter_defaults = FilterConfig::default();
        Self {
            app_selection: store.get(KEY_APP_SELECTION, defaults.app_selection),
            auto_refresh: store.get(KEY_AUTO_REFRESH, defaults.auto_refresh),
            filter: FilterConfig {
                min_severity: store.get::<Severity>(KEY_SHOW_LEVEL, filter_defaults.min_severity),
                filter_mode: store.get::<FilterMode>(KEY_FILTER_BY, filter_defaults.filter_mode),
                filter_text: store.get(KEY_FILTER_TEXT, filter_defaults.filter_text),
                show_timestamps: store.get(KEY_SHOW_TIMESTAMPS, filter_defaults.show_timestamps),
            },
            font_size: sanitize_font_size(store.get(KEY_FONT_SIZE, defaults.font_size)),
            go_to_last: store.get(KEY_GO_TO_LAST, defaults.go_to_last),
        }
    }

    /// Write all settings to `store` in one flush.
    pub fn save(&self, store: &mut PreferenceStore) -> Result<(), PrefsError> {
        store.set_many(&[
            (KEY_APP_SELECTION, to_value(&self.app_selection)?),
            (KEY_AUTO_REFRESH, to_value(&self.auto_refresh)?),
            (KEY_FILTER_BY, to_value(&self.filter.filter_mode)?),
            (KEY_FILTER_TEXT, to_value(&self.filter.filter_text)?),
            (KEY_FONT_SIZE, to_value(&self.font_size)?),
            (KEY_GO_TO_LAST, to_value(&self.go_to_last)?),
            (KEY_SHOW_LEVEL, to_value(&self.filter.min_severity)?),
            (KEY_SHOW_TIMESTAMPS, to_value(&self.filter.show_timestamps)?),
        ])
    }
}

/// A stored 0 (never set) means the default; anything else is clamped to
/// the stepper range.
pub fn sanitize_font_size(size: f64) -> f64 {
    if size == 0.0 || !size.is_finite() {
        constants::DEFAULT_FONT_SIZE
    } else {
        size.clamp(constants::MIN_FONT_SIZE, constants::MAX_FONT_SIZE)
    }
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_returns_default_when_absent() {
        let store = PreferenceStore::in_memory();
        assert_eq!(store.get(KEY_FILTER_TEXT, "dflt".to_string()), "dflt");
        assert!(store.get(KEY_SHOW_TIMESTAMPS, true));
    }

    #[test]
    fn test_get_returns_default_on_type_mismatch() {
        let mut store = PreferenceStore::in_memory();
        store.set(KEY_GO_TO_LAST, &"not a bool").unwrap();
        assert!(!store.get(KEY_GO_TO_LAST, false));
    }

    #[test]
    fn test_defaults_when_store_empty() {
        let prefs = Preferences::load(&PreferenceStore::in_memory());
        assert_eq!(prefs, Preferences::default());
        assert!(prefs.filter.show_timestamps);
        assert_eq!(prefs.filter.min_severity, Severity::Debug);
        assert_eq!(prefs.font_size, 12.0);
    }

    #[test]
    fn test_set_persists_to_disk_immediately() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut store = PreferenceStore::open(&path);
        assert_eq!(store.path(), Some(path.as_path()));
        store.set(KEY_FILTER_TEXT, &"Radio").unwrap();
        store.set(KEY_SHOW_LEVEL, &Severity::Warning).unwrap();

        let reopened = PreferenceStore::open(&path);
        assert_eq!(reopened.get(KEY_FILTER_TEXT, String::new()), "Radio");
        assert_eq!(
            reopened.get(KEY_SHOW_LEVEL, Severity::Debug),
            Severity::Warning
        );

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"showLevel\": \"warning\""), "{raw}");
    }

    #[test]
    fn test_preferences_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        let prefs = Preferences {
            app_selection: "SDRDax".to_string(),
            auto_refresh: true,
            filter: FilterConfig {
                min_severity: Severity::Error,
                filter_mode: FilterMode::Excludes,
                filter_text: "heartbeat".to_string(),
                show_timestamps: false,
            },
            font_size: 9.0,
            go_to_last: true,
        };

        let mut store = PreferenceStore::open(&path);
        prefs.save(&mut store).unwrap();

        let loaded = Preferences::load(&PreferenceStore::open(&path));
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_malformed_file_starts_fresh() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, b"not valid json {{{{").unwrap();
        let prefs = Preferences::load(&PreferenceStore::open(&path));
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_unknown_enum_value_falls_back() {
        let mut store = PreferenceStore::in_memory();
        store.set(KEY_FILTER_BY, &"regex").unwrap();
        assert_eq!(Preferences::load(&store).filter.filter_mode, FilterMode::None);
    }

    #[test]
    fn test_font_size_sanitised() {
        assert_eq!(sanitize_font_size(0.0), 12.0);
        assert_eq!(sanitize_font_size(40.0), 14.0);
        assert_eq!(sanitize_font_size(2.0), 8.0);
        assert_eq!(sanitize_font_size(10.0), 10.0);
    }

    #[test]
    fn test_in_memory_store_has_no_path() {
        let mut store = PreferenceStore::in_memory();
        assert!(store.path().is_none());
        store.set(KEY_AUTO_REFRESH, &true).unwrap();
        assert!(store.get(KEY_AUTO_REFRESH, false));
    }
}
