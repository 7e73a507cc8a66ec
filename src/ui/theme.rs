// SDRLog - ui/theme.rs
//
// Severity colour mapping and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::Severity;
use egui::Color32;

/// Colour for a log line of the given display severity.
///
/// Info uses the primary text colour so it follows the light/dark theme.
pub fn line_colour(severity: Severity, visuals: &egui::Visuals) -> Color32 {
    match severity {
        Severity::Debug => Color32::from_rgb(128, 128, 128), // Gray
        Severity::Info => visuals.strong_text_color(),
        Severity::Warning => Color32::from_rgb(255, 140, 0), // Dark orange
        Severity::Error => Color32::from_rgb(220, 38, 38),   // Red 600
    }
}

/// Colour for error text in the status bar.
pub const STATUS_ERROR: Color32 = Color32::from_rgb(220, 38, 38);

/// Colour of the auto-refresh badge.
pub const AUTO_BADGE: Color32 = Color32::from_rgb(34, 197, 94); // Green 500

/// Layout constants.
pub const WINDOW_SIZE: [f32; 2] = [1000.0, 700.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [640.0, 400.0];
pub const FILTER_TEXT_WIDTH: f32 = 220.0;
pub const COMBO_WIDTH: f32 = 100.0;
