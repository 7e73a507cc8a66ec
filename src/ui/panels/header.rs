// SDRLog - ui/panels/header.rs
//
// Filter controls above the log view: timestamp toggle, minimum level,
// filter mode, and filter text. Each change is applied immediately.

use crate::app::state::AppState;
use crate::core::model::{FilterMode, Severity};
use crate::ui::theme;

/// Render the filter bar.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        let mut show_timestamps = state.prefs.filter.show_timestamps;
        if ui
            .checkbox(&mut show_timestamps, "Show timestamps")
            .changed()
        {
            state.set_show_timestamps(show_timestamps);
        }

        ui.separator();

        ui.label("Level:");
        let mut level = state.prefs.filter.min_severity;
        egui::ComboBox::from_id_salt("min_severity")
            .width(theme::COMBO_WIDTH)
            .selected_text(level.label())
            .show_ui(ui, |ui| {
                for severity in Severity::all() {
                    ui.selectable_value(&mut level, *severity, severity.label());
                }
            });
        if level != state.prefs.filter.min_severity {
            state.set_min_severity(level);
        }

        ui.separator();

        ui.label("Filter by:");
        let mut mode = state.prefs.filter.filter_mode;
        egui::ComboBox::from_id_salt("filter_mode")
            .width(theme::COMBO_WIDTH)
            .selected_text(mode.label())
            .show_ui(ui, |ui| {
                for m in FilterMode::all() {
                    ui.selectable_value(&mut mode, *m, m.label());
                }
            });
        if mode != state.prefs.filter.filter_mode {
            state.set_filter_mode(mode);
        }

        let mut text = state.prefs.filter.filter_text.clone();
        let response = ui.add_enabled(
            mode != FilterMode::None,
            egui::TextEdit::singleline(&mut text)
                .hint_text("filter text")
                .desired_width(theme::FILTER_TEXT_WIDTH),
        );
        if response.changed() {
            state.set_filter_text(&text);
        }

        let can_clear = !state.prefs.filter.filter_text.is_empty();
        if ui
            .add_enabled(can_clear, egui::Button::new("\u{2715}").small())
            .on_hover_text("Clear filter text")
            .clicked()
        {
            state.set_filter_text("");
        }
    });
}
