// SDRLog - core/parser.rs
//
// Splits raw log text into classified entries.
// Core layer: accepts text or bytes, never touches the filesystem directly.

use crate::core::model::LogEntry;
use crate::util::error::ReadError;
use std::path::Path;

/// Result of parsing one log file.
#[derive(Debug)]
pub struct ParseResult {
    /// Entries in file order; `id` is the 0-based line position.
    pub entries: Vec<LogEntry>,
    /// Whether the text ended with a line terminator (the empty artifact
    /// segment that follows it is not an entry).
    pub had_trailing_newline: bool,
}

/// Parse log text into entries.
///
/// The text is split on `\n`. When it ends with a terminator the split
/// yields one empty trailing segment; that artifact is dropped. A final
/// segment that is not empty is a real line (the file simply lacks a
/// trailing newline) and is kept. Blank lines anywhere else are kept too.
pub fn parse_content(content: &str, file_path: &Path) -> ParseResult {
    let mut segments: Vec<&str> = content.split('\n').collect();

    let had_trailing_newline = segments.last().is_some_and(|s| s.is_empty());
    if had_trailing_newline {
        segments.pop();
    }

    let entries: Vec<LogEntry> = segments
        .into_iter()
        .enumerate()
        .map(|(idx, line)| LogEntry::new(idx as u64, line))
        .collect();

    tracing::debug!(
        file = %file_path.display(),
        entries = entries.len(),
        trailing_newline = had_trailing_newline,
        first = entries
            .first()
            .map(|e| crate::util::logging::preview(&e.raw_text))
            .unwrap_or(""),
        "Parsing complete"
    );

    ParseResult {
        entries,
        had_trailing_newline,
    }
}

/// Decode raw file bytes as UTF-8 and parse them.
///
/// Invalid UTF-8 is a recoverable `ReadError::InvalidEncoding`; the caller
/// keeps whatever it had loaded before.
pub fn parse_bytes(bytes: Vec<u8>, file_path: &Path) -> Result<ParseResult, ReadError> {
    let content = String::from_utf8(bytes).map_err(|e| ReadError::InvalidEncoding {
        file: file_path.to_path_buf(),
        source: e,
    })?;
    Ok(parse_content(&content, file_path))
}
