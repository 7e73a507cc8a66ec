// SDRLog - ui/panels/log_view.rs
//
// Virtual-scrolling view of the filtered lines.
//
// Uses `ScrollArea::show_rows` so only the rows in the viewport are laid
// out. Lines are not wrapped; long lines scroll horizontally.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the log lines (central area).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let visible = state.filtered_indices.len();

    if visible == 0 {
        ui.centered_and_justified(|ui| {
            if state.entries.is_empty() {
                ui.label("No log lines loaded.");
            } else {
                ui.label("No lines match the current filters.");
            }
        });
        state.scroll_to_anchor = false;
        return;
    }

    let font = egui::FontId::monospace(state.prefs.font_size as f32);
    let row_height = ui.fonts(|f| f.row_height(&font));
    let visuals = ui.visuals().clone();

    let mut scroll = egui::ScrollArea::both()
        .auto_shrink([false; 2])
        .stick_to_bottom(state.prefs.go_to_last);
    if std::mem::take(&mut state.scroll_to_anchor) {
        let offset = if state.prefs.go_to_last {
            // Clamped to the real maximum by the scroll area.
            visible as f32 * (row_height + ui.spacing().item_spacing.y)
        } else {
            0.0
        };
        scroll = scroll.vertical_scroll_offset(offset);
    }

    scroll.show_rows(ui, row_height, visible, |ui, row_range| {
        for row in row_range {
            let Some(entry) = state
                .filtered_indices
                .get(row)
                .and_then(|&i| state.entries.get(i))
            else {
                continue;
            };
            let colour = theme::line_colour(entry.display_severity(), &visuals);
            ui.add(
                egui::Label::new(
                    egui::RichText::new(state.display_text(entry))
                        .font(font.clone())
                        .color(colour),
                )
                .extend(),
            );
        }
    });
}
