// SDRLog - core/export.rs
//
// Plain-text export of the filtered view.
// Core layer: pure string building; the caller writes the file.

use crate::core::model::LogEntry;

/// Render the visible lines as they are displayed, joined by `\n`.
///
/// `indices` is the filtered view (see core::filter::apply_filters).
/// No terminator follows the last line.
pub fn render_text(entries: &[LogEntry], indices: &[usize], show_timestamps: bool) -> String {
    indices
        .iter()
        .filter_map(|&i| entries.get(i))
        .map(|e| e.display_text(show_timestamps))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<LogEntry> {
        vec![
            LogEntry::new(0, "09:00 [Info] first"),
            LogEntry::new(1, "09:01 [Error] second"),
            LogEntry::new(2, "09:02 [Info] third"),
        ]
    }

    #[test]
    fn test_render_only_visible_lines() {
        let text = render_text(&entries(), &[0, 2], true);
        assert_eq!(text, "09:00 [Info] first\n09:02 [Info] third");
    }

    #[test]
    fn test_render_without_timestamps() {
        let text = render_text(&entries(), &[1], false);
        assert_eq!(text, "[Error] second");
    }

    #[test]
    fn test_render_empty_view() {
        assert_eq!(render_text(&entries(), &[], true), "");
    }

    #[test]
    fn test_render_has_no_trailing_newline() {
        let text = render_text(&entries(), &[0, 1, 2], true);
        assert_eq!(text.lines().count(), 3);
        assert!(!text.ends_with('\n'));
    }
}
