// SDRLog - core/source.rs
//
// Naming rules that tie an application to its log file.
// Core layer: path arithmetic only, no filesystem access.

use crate::util::constants::LOG_FILE_EXTENSION;
use std::path::{Path, PathBuf};

/// Path of the log written by `app_name` inside `folder` (`<folder>/<app>.log`).
pub fn log_file_for(folder: &Path, app_name: &str) -> PathBuf {
    folder.join(format!("{app_name}.{LOG_FILE_EXTENSION}"))
}

/// Whether the open-file picker should offer `path` for `app_name`.
///
/// The part of the file name before its first `.` must contain the app
/// name, compared case-insensitively. `SDR6000.log`, `sdr6000-old.log` and
/// `SDR6000.log.1` match `SDR6000`; `SDRApi.log` does not.
pub fn file_matches_app(path: &Path, app_name: &str) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let stem = name.split('.').next().unwrap_or(name);
    stem.to_uppercase().contains(&app_name.to_uppercase())
}
