// SDRLog - platform/fs.rs
//
// Filesystem access for the log source folder: folder validation, whole-file
// reads, folder listing for the Load menu, and atomic text writes for Save.

use crate::core::source::file_matches_app;
use crate::util::constants::LOG_FILE_PATTERN;
use crate::util::error::{ReadError, SourceError, WriteError};
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Check that `folder` exists and is a directory.
pub fn check_folder(folder: &Path) -> Result<(), SourceError> {
    match std::fs::metadata(folder) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(SourceError::NotADirectory {
            path: folder.to_path_buf(),
        }),
        Err(_) => Err(SourceError::FolderNotFound {
            path: folder.to_path_buf(),
        }),
    }
}

/// Read the full content of a log file as raw bytes.
///
/// Decoding is left to core::parser so encoding failures are reported with
/// the same error type.
pub fn read_log_file(path: &Path) -> Result<Vec<u8>, ReadError> {
    std::fs::read(path).map_err(|e| ReadError::Io {
        file: path.to_path_buf(),
        source: e,
    })
}

/// List the `*.log` files directly inside `folder` that belong to `app_name`,
/// sorted by file name.
///
/// Unreadable directory entries are skipped; a missing folder yields an
/// empty list.
pub fn list_app_logs(folder: &Path, app_name: &str) -> Vec<PathBuf> {
    let pattern = match Pattern::new(LOG_FILE_PATTERN) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(pattern = LOG_FILE_PATTERN, error = %e, "Invalid log file pattern");
            return Vec::new();
        }
    };

    let files: Vec<PathBuf> = WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .flatten()
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.file_name()
                .to_str()
                .is_some_and(|name| pattern.matches(name))
        })
        .map(|e| e.into_path())
        .filter(|p| file_matches_app(p, app_name))
        .collect();

    tracing::debug!(
        folder = %folder.display(),
        app = app_name,
        count = files.len(),
        "Listed application logs"
    );
    files
}

/// Write `text` to `path` atomically (write temp → rename).
///
/// A failure between write and rename leaves any previous file at `path`
/// untouched.
pub fn write_text_atomic(path: &Path, text: &str) -> Result<(), WriteError> {
    let tmp = temp_path_for(path);
    std::fs::write(&tmp, text.as_bytes()).map_err(|e| WriteError::Io {
        path: tmp.clone(),
        source: e,
    })?;

    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        WriteError::Io {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "Text written");
    Ok(())
}

/// Sibling temp file used by `write_text_atomic` (`Saved.log` → `Saved.log.tmp`).
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
