// SDRLog - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "SDRLog";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "SDRLog";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Log sources
// =============================================================================

/// Applications whose logs can be viewed, in picker order.
pub const DEFAULT_APP_CHOICES: &[&str] = &["SDR6000", "SDRApi", "SDRDax"];

/// Application selected on first launch.
pub const DEFAULT_APP_SELECTION: &str = "SDR6000";

/// Extension of per-application log files (`<app>.log`).
pub const LOG_FILE_EXTENSION: &str = "log";

/// Glob used when listing candidate log files in the source folder.
pub const LOG_FILE_PATTERN: &str = "*.log";

/// Name of the log folder below the platform data directory.
pub const LOG_FOLDER_NAME: &str = "Logs";

/// Maximum number of application names accepted from config.toml.
pub const MAX_APP_CHOICES: usize = 16;

// =============================================================================
// Auto-refresh
// =============================================================================

/// Interval between automatic refreshes (ms).
pub const REFRESH_INTERVAL_MS: u64 = 1_000;

/// How often the cancel flag is checked within each refresh sleep (ms).
/// The timer thread wakes every this many ms to check for cancellation.
pub const REFRESH_CANCEL_CHECK_INTERVAL_MS: u64 = 50;

/// Minimum user-configurable refresh interval (ms).
pub const MIN_REFRESH_INTERVAL_MS: u64 = 250;

/// Maximum user-configurable refresh interval (ms).
pub const MAX_REFRESH_INTERVAL_MS: u64 = 60_000;

// =============================================================================
// Severity markers
// =============================================================================

/// Separator that precedes the message origin in a log line (`... > Radio ...`).
/// The Prefix filter mode matches the filter text immediately after it.
pub const PREFIX_DELIMITER: &str = " > ";

/// Character that opens the first bracketed tag; timestamp stripping
/// starts the displayed text here.
pub const TAG_OPEN: char = '[';

// =============================================================================
// UI defaults
// =============================================================================

/// Default log body font size in points.
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Minimum font size offered by the stepper (points).
pub const MIN_FONT_SIZE: f64 = 8.0;

/// Maximum font size offered by the stepper (points).
pub const MAX_FONT_SIZE: f64 = 14.0;

/// Increment applied by the font size stepper (points).
pub const FONT_SIZE_STEP: f64 = 1.0;

/// How often the UI wakes to collect refresh ticks while auto-refresh is on (ms).
pub const UI_POLL_INTERVAL_MS: u64 = 100;

/// Default file name proposed by the Save dialog.
pub const DEFAULT_SAVE_FILE_NAME: &str = "Saved.log";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Maximum length of a log line included in debug output.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Preference store file name (stored in the platform config directory).
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";
