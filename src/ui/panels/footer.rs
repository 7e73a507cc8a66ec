// SDRLog - ui/panels/footer.rs
//
// Control bar below the log view: font size, scroll anchor, refresh
// controls, file actions, and the application picker.

use super::PanelAction;
use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants;

/// Render the control bar. Returns an action that needs a native dialog.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> Option<PanelAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        // Font size stepper
        let size = state.prefs.font_size;
        if ui
            .add_enabled(size > constants::MIN_FONT_SIZE, egui::Button::new("A-").small())
            .on_hover_text("Smaller text")
            .clicked()
        {
            state.set_font_size(size - constants::FONT_SIZE_STEP);
        }
        ui.label(format!("{size:.0} pt"));
        if ui
            .add_enabled(size < constants::MAX_FONT_SIZE, egui::Button::new("A+").small())
            .on_hover_text("Larger text")
            .clicked()
        {
            state.set_font_size(size + constants::FONT_SIZE_STEP);
        }

        ui.separator();

        let mut go_to_last = state.prefs.go_to_last;
        if ui
            .checkbox(&mut go_to_last, "Go to last")
            .on_hover_text("Keep the newest line in view instead of the first")
            .changed()
        {
            state.set_go_to_last(go_to_last);
        }

        ui.separator();

        if ui.button("Refresh").clicked() {
            // Failures are recorded in state for the status bar.
            let _ = state.refresh();
        }
        let mut auto = state.auto_refresh_active();
        if ui.checkbox(&mut auto, "Auto refresh").changed() {
            state.set_auto_refresh(auto);
        }

        ui.separator();

        ui.menu_button("Load", |ui| {
            let files = state.loadable_files();
            if files.is_empty() {
                ui.label("No matching log files in folder");
            }
            for path in files {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                if ui.button(name).clicked() {
                    action = Some(PanelAction::LoadFile(path));
                    ui.close_menu();
                }
            }
            ui.separator();
            if ui.button("Browse\u{2026}").clicked() {
                action = Some(PanelAction::PickFile);
                ui.close_menu();
            }
        });
        if ui
            .add_enabled(!state.filtered_indices.is_empty(), egui::Button::new("Save"))
            .on_hover_text("Save the visible lines")
            .clicked()
        {
            action = Some(PanelAction::Save);
        }
        if ui.button("Clear").clicked() {
            state.clear();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut selected = state.prefs.app_selection.clone();
            egui::ComboBox::from_id_salt("app_selection")
                .width(theme::COMBO_WIDTH)
                .selected_text(selected.as_str())
                .show_ui(ui, |ui| {
                    for app in &state.config.apps {
                        ui.selectable_value(&mut selected, app.clone(), app);
                    }
                });
            if selected != state.prefs.app_selection {
                let _ = state.select_app(&selected);
            }
            ui.label("App:");
        });
    });

    action
}
