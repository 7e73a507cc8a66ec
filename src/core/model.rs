// SDRLog - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants::TAG_OPEN;
use serde::{Deserialize, Serialize};

// =============================================================================
// Log Entry
// =============================================================================

/// A single line of the loaded log file.
///
/// Entries are created by the parser and never mutated afterwards. Anything
/// the UI shows differently from `raw_text` (such as timestamp stripping) is
/// derived on demand from `raw_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// 0-based position of the line in the file, stable for one load.
    pub id: u64,

    /// The line exactly as read, without its terminator.
    pub raw_text: String,

    /// Classifier result. `None` for lines without a recognised tag; those
    /// are displayed like Info.
    pub severity: Option<Severity>,

    /// Text preceding the first `[`, when there is any.
    pub timestamp_prefix: Option<String>,
}

impl LogEntry {
    /// Build an entry from one raw line, classifying it.
    pub fn new(id: u64, raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let severity = Severity::classify(&raw_text);
        let timestamp_prefix = raw_text
            .find(TAG_OPEN)
            .filter(|&idx| idx > 0)
            .map(|idx| raw_text[..idx].to_string());
        Self {
            id,
            raw_text,
            severity,
            timestamp_prefix,
        }
    }

    /// The text to display for this entry.
    ///
    /// With timestamps hidden, the text starts at the first `[`; lines
    /// without a `[` are shown unchanged. Always derived from `raw_text`, so
    /// toggling back and forth can never truncate cumulatively.
    pub fn display_text(&self, show_timestamps: bool) -> &str {
        if show_timestamps {
            return &self.raw_text;
        }
        match self.raw_text.find(TAG_OPEN) {
            Some(idx) => &self.raw_text[idx..],
            None => &self.raw_text,
        }
    }

    /// Severity used for colouring: untagged lines render as Info.
    pub fn display_severity(&self) -> Severity {
        self.severity.unwrap_or(Severity::Info)
    }
}

// =============================================================================
// Severity
// =============================================================================

/// Severity levels, ordered from least to most severe.
///
/// The ordering drives the threshold filter: a threshold keeps its own level
/// and every level above it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Debug,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Returns all variants in classification order (least severe first).
    pub fn all() -> &'static [Severity] {
        &[
            Severity::Debug,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Debug => "Debug",
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }

    /// Bracketed tag as written in the log (`[Warning]`).
    pub fn marker(&self) -> &'static str {
        match self {
            Severity::Debug => "[Debug]",
            Severity::Info => "[Info]",
            Severity::Warning => "[Warning]",
            Severity::Error => "[Error]",
        }
    }

    /// Tag with one space on each side (` [Warning] `).
    ///
    /// The threshold filter matches only this form, so a tag that is not
    /// surrounded by spaces is coloured but not selected by a threshold
    /// above Debug.
    pub fn padded_marker(&self) -> &'static str {
        match self {
            Severity::Debug => " [Debug] ",
            Severity::Info => " [Info] ",
            Severity::Warning => " [Warning] ",
            Severity::Error => " [Error] ",
        }
    }

    /// Classify a raw line by its bracketed tag.
    ///
    /// Tags are checked in the order Debug, Info, Warning, Error and the
    /// first one present wins.
    pub fn classify(line: &str) -> Option<Severity> {
        Severity::all()
            .iter()
            .copied()
            .find(|severity| line.contains(severity.marker()))
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Filter configuration
// =============================================================================

/// Text-matching strategy applied after the severity threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    None,
    /// Text must follow the ` > ` origin delimiter.
    Prefix,
    Includes,
    Excludes,
}

impl FilterMode {
    pub fn all() -> &'static [FilterMode] {
        &[
            FilterMode::None,
            FilterMode::Prefix,
            FilterMode::Includes,
            FilterMode::Excludes,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::None => "none",
            FilterMode::Prefix => "prefix",
            FilterMode::Includes => "includes",
            FilterMode::Excludes => "excludes",
        }
    }
}

/// User-selected view settings. Every field is persisted on change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Inclusive severity threshold; Debug shows everything.
    pub min_severity: Severity,
    pub filter_mode: FilterMode,
    pub filter_text: String,
    pub show_timestamps: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_severity: Severity::Debug,
            filter_mode: FilterMode::None,
            filter_text: String::new(),
            show_timestamps: true,
        }
    }
}
