// SDRLog - platform/config.rs
//
// Platform-specific directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for SDRLog data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/sdrlog/ or %APPDATA%\SDRLog\config\)
    pub config_dir: PathBuf,

    /// Data directory; the default log folder lives below it.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }

    /// Folder the applications write their logs to unless configured otherwise.
    pub fn default_log_folder(&self) -> PathBuf {
        self.data_dir.join(constants::LOG_FOLDER_NAME)
    }

    /// Location of the preference store.
    pub fn preferences_file(&self) -> PathBuf {
        self.config_dir.join(constants::PREFERENCES_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[source]` section.
    pub source: SourceSection,
    /// `[refresh]` section.
    pub refresh: RefreshSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[source]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SourceSection {
    /// Folder containing `<app>.log` files.
    pub log_folder: Option<String>,
    /// Application names offered by the app picker.
    pub apps: Option<Vec<String>>,
}

/// `[refresh]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RefreshSection {
    /// Auto-refresh interval in milliseconds.
    pub interval_ms: Option<u64>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Explicit log folder; `None` means the platform default.
    pub log_folder: Option<PathBuf>,
    /// Application names offered by the app picker.
    pub apps: Vec<String>,
    /// Auto-refresh interval in milliseconds.
    pub refresh_interval_ms: u64,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_folder: None,
            apps: constants::DEFAULT_APP_CHOICES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            refresh_interval_ms: constants::REFRESH_INTERVAL_MS,
            log_level: None,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal
/// warnings. A missing file yields defaults with no warnings (first run);
/// an unreadable or unparseable file yields defaults plus a warning.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let raw = match read_raw_config(&config_path) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let config = validate(raw, &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

fn read_raw_config(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Validate each field against named constants, accumulating all warnings.
fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- Source: log_folder --
    if let Some(folder) = raw.source.log_folder {
        if folder.trim().is_empty() {
            warnings.push(
                "[source] log_folder is empty. Using the platform default folder.".to_string(),
            );
        } else {
            config.log_folder = Some(PathBuf::from(folder));
        }
    }

    // -- Source: apps --
    if let Some(apps) = raw.source.apps {
        let apps: Vec<String> = apps
            .into_iter()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect();
        if apps.is_empty() || apps.len() > constants::MAX_APP_CHOICES {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "[source] apps".to_string(),
                    value: format!("{} names", apps.len()),
                    expected: format!("1-{} non-empty names", constants::MAX_APP_CHOICES),
                }
                .to_string(),
            );
        } else {
            config.apps = apps;
        }
    }

    // -- Refresh: interval_ms --
    if let Some(ms) = raw.refresh.interval_ms {
        if (constants::MIN_REFRESH_INTERVAL_MS..=constants::MAX_REFRESH_INTERVAL_MS).contains(&ms)
        {
            config.refresh_interval_ms = ms;
        } else {
            warnings.push(format!(
                "[refresh] interval_ms = {ms} is out of range ({}-{}). Using default ({}).",
                constants::MIN_REFRESH_INTERVAL_MS,
                constants::MAX_REFRESH_INTERVAL_MS,
                constants::REFRESH_INTERVAL_MS,
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    config
}
