// SDRLog - core/filter.rs
//
// Derives the visible subset of entries from a FilterConfig.
// Two stages, always in this order: severity threshold, then text match.
// Timestamp stripping is not a filter; see LogEntry::display_text.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{FilterConfig, FilterMode, LogEntry, Severity};
use crate::util::constants::PREFIX_DELIMITER;

/// Apply the filter configuration, returning indices of visible entries.
///
/// Returns a Vec of indices into the original entries slice, in ascending
/// order. This avoids copying entries, keeps the view an order-preserving
/// subsequence of `entries`, and lets the caller recompute it from scratch
/// on every change.
pub fn apply_filters(entries: &[LogEntry], config: &FilterConfig) -> Vec<usize> {
    let text_needle = text_needle(config);

    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| passes_severity(&entry.raw_text, config.min_severity))
        .filter(|(_, entry)| passes_text(&entry.raw_text, config.filter_mode, &text_needle))
        .map(|(idx, _)| idx)
        .collect()
}

/// Whether the text stage does anything for this configuration.
///
/// An empty filter text disables Includes and Excludes. Prefix always has
/// a needle (the delimiter itself), so it stays active with empty text.
pub fn text_filter_active(config: &FilterConfig) -> bool {
    match config.filter_mode {
        FilterMode::None => false,
        FilterMode::Prefix => true,
        FilterMode::Includes | FilterMode::Excludes => !config.filter_text.is_empty(),
    }
}

/// Substring the text stage searches for; `None` when the stage is off.
fn text_needle(config: &FilterConfig) -> Option<String> {
    if !text_filter_active(config) {
        return None;
    }
    match config.filter_mode {
        FilterMode::Prefix => Some(format!("{PREFIX_DELIMITER}{}", config.filter_text)),
        _ => Some(config.filter_text.clone()),
    }
}

/// Severity stage.
///
/// Matches the space-padded tag of the threshold or any higher level. A
/// Debug threshold keeps everything, including untagged lines.
fn passes_severity(raw: &str, min: Severity) -> bool {
    if min == Severity::Debug {
        return true;
    }
    Severity::all()
        .iter()
        .filter(|severity| **severity >= min)
        .any(|severity| raw.contains(severity.padded_marker()))
}

/// Text stage.
fn passes_text(raw: &str, mode: FilterMode, needle: &Option<String>) -> bool {
    let Some(needle) = needle else {
        return true;
    };
    match mode {
        FilterMode::None => true,
        FilterMode::Prefix | FilterMode::Includes => raw.contains(needle.as_str()),
        FilterMode::Excludes => !raw.contains(needle.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entries(lines: &[&str]) -> Vec<LogEntry> {
        lines
            .iter()
            .enumerate()
            .map(|(i, l)| LogEntry::new(i as u64, *l))
            .collect()
    }

    fn visible<'a>(entries: &'a [LogEntry], config: &FilterConfig) -> Vec<&'a str> {
        apply_filters(entries, config)
            .into_iter()
            .map(|i| entries[i].raw_text.as_str())
            .collect()
    }

    fn sample() -> Vec<LogEntry> {
        make_entries(&[
            "a [Debug] x",
            " [Info] y",
            " [Warning] z",
            " [Error] w",
            "untagged line",
            "10:00 [Error]nospace",
        ])
    }

    #[test]
    fn test_default_config_returns_all() {
        let entries = sample();
        let result = apply_filters(&entries, &FilterConfig::default());
        assert_eq!(result, (0..entries.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_warning_threshold() {
        let entries = make_entries(&["a [Debug] x", " [Info] y", " [Warning] z", " [Error] w"]);
        let config = FilterConfig {
            min_severity: Severity::Warning,
            ..Default::default()
        };
        assert_eq!(visible(&entries, &config), vec![" [Warning] z", " [Error] w"]);
    }

    #[test]
    fn test_info_threshold_excludes_debug_and_untagged() {
        let entries = sample();
        let config = FilterConfig {
            min_severity: Severity::Info,
            ..Default::default()
        };
        assert_eq!(
            visible(&entries, &config),
            vec![" [Info] y", " [Warning] z", " [Error] w"]
        );
    }

    #[test]
    fn test_unpadded_tag_classified_but_not_thresholded() {
        let entries = sample();
        assert_eq!(entries[5].severity, Some(Severity::Error));
        let config = FilterConfig {
            min_severity: Severity::Error,
            ..Default::default()
        };
        assert_eq!(visible(&entries, &config), vec![" [Error] w"]);
    }

    #[test]
    fn test_threshold_monotonic() {
        let entries = sample();
        let mut previous: Option<Vec<usize>> = None;
        // Walk from most to least severe; each result must contain the last.
        for severity in Severity::all().iter().rev() {
            let config = FilterConfig {
                min_severity: *severity,
                ..Default::default()
            };
            let result = apply_filters(&entries, &config);
            if let Some(prev) = &previous {
                assert!(prev.iter().all(|i| result.contains(i)), "{severity}");
            }
            previous = Some(result);
        }
    }

    #[test]
    fn test_prefix_requires_delimiter() {
        let entries = make_entries(&[
            "10:00 [Info] Main > Radio started",
            "10:01 [Info] RadioStarted",
            "10:02 [Info] Main > Radiogram",
        ]);
        let config = FilterConfig {
            filter_mode: FilterMode::Prefix,
            filter_text: "Radio".to_string(),
            ..Default::default()
        };
        assert_eq!(
            visible(&entries, &config),
            vec!["10:00 [Info] Main > Radio started", "10:02 [Info] Main > Radiogram"]
        );
    }

    #[test]
    fn test_includes_and_excludes_partition() {
        let entries = sample();
        let inc = FilterConfig {
            filter_mode: FilterMode::Includes,
            filter_text: "[Error]".to_string(),
            ..Default::default()
        };
        let exc = FilterConfig {
            filter_mode: FilterMode::Excludes,
            ..inc.clone()
        };
        let a = apply_filters(&entries, &inc);
        let b = apply_filters(&entries, &exc);
        assert_eq!(a, vec![3, 5]);
        assert_eq!(a.len() + b.len(), entries.len());
        assert!(a.iter().all(|i| !b.contains(i)));
    }

    #[test]
    fn test_text_match_is_case_sensitive() {
        let entries = make_entries(&["Radio ok", "radio ok"]);
        let config = FilterConfig {
            filter_mode: FilterMode::Includes,
            filter_text: "Radio".to_string(),
            ..Default::default()
        };
        assert_eq!(visible(&entries, &config), vec!["Radio ok"]);
    }

    #[test]
    fn test_empty_text_disables_includes_and_excludes() {
        let entries = sample();
        for mode in [FilterMode::None, FilterMode::Includes, FilterMode::Excludes] {
            let config = FilterConfig {
                filter_mode: mode,
                ..Default::default()
            };
            assert!(!text_filter_active(&config));
            assert_eq!(apply_filters(&entries, &config).len(), entries.len());
        }
    }

    #[test]
    fn test_prefix_with_empty_text_keeps_delimiter_lines() {
        let entries = make_entries(&["t [Info] Main > Radio up", "t [Info] no delimiter"]);
        let config = FilterConfig {
            filter_mode: FilterMode::Prefix,
            ..Default::default()
        };
        assert!(text_filter_active(&config));
        assert_eq!(apply_filters(&entries, &config), vec![0]);
    }

    #[test]
    fn test_stages_combine() {
        let entries = make_entries(&[
            "t [Error] > Radio down",
            "t [Error] > Panadapter down",
            "t [Info] > Radio up",
        ]);
        let config = FilterConfig {
            min_severity: Severity::Error,
            filter_mode: FilterMode::Prefix,
            filter_text: "Radio".to_string(),
            show_timestamps: false,
        };
        assert_eq!(apply_filters(&entries, &config), vec![0]);
    }

    #[test]
    fn test_subsequence_and_idempotent_for_all_configs() {
        let entries = sample();
        for severity in Severity::all() {
            for mode in FilterMode::all() {
                for text in ["", "[", "y", "zz"] {
                    let config = FilterConfig {
                        min_severity: *severity,
                        filter_mode: *mode,
                        filter_text: text.to_string(),
                        show_timestamps: true,
                    };
                    let once = apply_filters(&entries, &config);
                    assert!(once.windows(2).all(|w| w[0] < w[1]));
                    assert!(once.iter().all(|&i| i < entries.len()));

                    // Re-filtering the already-filtered entries changes nothing.
                    let subset: Vec<LogEntry> =
                        once.iter().map(|&i| entries[i].clone()).collect();
                    let twice = apply_filters(&subset, &config);
                    assert_eq!(twice, (0..subset.len()).collect::<Vec<_>>());
                }
            }
        }
    }

    #[test]
    fn test_show_timestamps_does_not_affect_selection() {
        let entries = sample();
        let on = FilterConfig::default();
        let off = FilterConfig {
            show_timestamps: false,
            ..Default::default()
        };
        assert_eq!(apply_filters(&entries, &on), apply_filters(&entries, &off));
    }
}
