// SDRLog - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every error here is recoverable: the UI reports it in the status bar and
// keeps running. All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all SDRLog operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum SdrLogError {
    /// The log source folder is unusable.
    Source(SourceError),

    /// A log file could not be read or decoded.
    Read(ReadError),

    /// Saving the filtered view failed.
    Write(WriteError),

    /// config.toml could not be loaded.
    Config(ConfigError),

    /// The preference store could not be read or written.
    Prefs(PrefsError),
}

impl fmt::Display for SdrLogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(e) => write!(f, "Log source error: {e}"),
            Self::Read(e) => write!(f, "Read error: {e}"),
            Self::Write(e) => write!(f, "Save error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Prefs(e) => write!(f, "Preferences error: {e}"),
        }
    }
}

impl std::error::Error for SdrLogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(e) => Some(e),
            Self::Read(e) => Some(e),
            Self::Write(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Prefs(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Source errors
// ---------------------------------------------------------------------------

/// Errors related to locating the log folder.
#[derive(Debug)]
pub enum SourceError {
    /// The log folder does not exist (e.g. the app container was never created).
    FolderNotFound { path: PathBuf },

    /// The log folder path exists but is not a directory.
    NotADirectory { path: PathBuf },

    /// No log folder has been chosen yet.
    NoFolderSelected,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FolderNotFound { path } => {
                write!(f, "Log folder '{}' does not exist", path.display())
            }
            Self::NotADirectory { path } => {
                write!(f, "Log folder '{}' is not a directory", path.display())
            }
            Self::NoFolderSelected => {
                write!(f, "No log folder selected. Choose one via File > Open Folder.")
            }
        }
    }
}

impl std::error::Error for SourceError {}

impl From<SourceError> for SdrLogError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

// ---------------------------------------------------------------------------
// Read errors
// ---------------------------------------------------------------------------

/// Errors raised while reading a log file into memory.
#[derive(Debug)]
pub enum ReadError {
    /// File is missing, unreadable, or permission was denied.
    Io { file: PathBuf, source: io::Error },

    /// File content is not valid UTF-8.
    InvalidEncoding {
        file: PathBuf,
        source: std::string::FromUtf8Error,
    },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { file, source } => {
                write!(f, "cannot read '{}': {source}", file.display())
            }
            Self::InvalidEncoding { file, source } => {
                write!(f, "'{}': invalid UTF-8 encoding: {source}", file.display())
            }
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidEncoding { source, .. } => Some(source),
        }
    }
}

impl From<ReadError> for SdrLogError {
    fn from(e: ReadError) -> Self {
        Self::Read(e)
    }
}

// ---------------------------------------------------------------------------
// Write errors
// ---------------------------------------------------------------------------

/// Errors related to saving the filtered view.
#[derive(Debug)]
pub enum WriteError {
    /// I/O error writing the destination or its temp file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot write '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<WriteError> for SdrLogError {
    fn from(e: WriteError) -> Self {
        Self::Write(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for SdrLogError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Preference errors
// ---------------------------------------------------------------------------

/// Errors related to the preference store.
#[derive(Debug)]
pub enum PrefsError {
    /// The store could not be serialised.
    Json { source: serde_json::Error },

    /// I/O error writing the store file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for PrefsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "cannot serialise preferences: {source}"),
            Self::Io { path, source } => {
                write!(f, "cannot write preferences '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for PrefsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<PrefsError> for SdrLogError {
    fn from(e: PrefsError) -> Self {
        Self::Prefs(e)
    }
}

/// Convenience type alias for SDRLog results.
pub type Result<T> = std::result::Result<T, SdrLogError>;
