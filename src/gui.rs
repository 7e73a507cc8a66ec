// SDRLog - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the panels, drives auto-refresh, and owns native dialogs.

use crate::app::state::AppState;
use crate::core::source;
use crate::ui;
use crate::ui::panels::PanelAction;
use crate::util::constants;
use std::time::Duration;

/// The SDRLog application.
pub struct SdrLogApp {
    pub state: AppState,
}

impl SdrLogApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    fn handle_action(&mut self, action: PanelAction) {
        match action {
            PanelAction::OpenFolder => {
                let mut dialog = rfd::FileDialog::new();
                if let Some(folder) = &self.state.source_folder {
                    dialog = dialog.set_directory(folder);
                }
                if let Some(folder) = dialog.pick_folder() {
                    let _ = self.state.set_source_folder(folder);
                }
            }
            PanelAction::PickFile => {
                let mut dialog = rfd::FileDialog::new()
                    .add_filter("Log files", &[constants::LOG_FILE_EXTENSION]);
                if let Some(folder) = &self.state.source_folder {
                    dialog = dialog.set_directory(folder);
                }
                if let Some(path) = dialog.pick_file() {
                    if !source::file_matches_app(&path, &self.state.prefs.app_selection) {
                        tracing::info!(
                            file = %path.display(),
                            app = %self.state.prefs.app_selection,
                            "Opening a file that does not match the selected app"
                        );
                    }
                    let _ = self.state.open_file(path);
                }
            }
            PanelAction::LoadFile(path) => {
                let _ = self.state.open_file(path);
            }
            PanelAction::Save => {
                let mut dialog = rfd::FileDialog::new()
                    .add_filter("Log files", &[constants::LOG_FILE_EXTENSION])
                    .set_file_name(constants::DEFAULT_SAVE_FILE_NAME);
                if let Some(folder) = &self.state.source_folder {
                    dialog = dialog.set_directory(folder);
                }
                if let Some(dest) = dialog.save_file() {
                    let _ = self.state.save_view(&dest);
                }
            }
        }
    }
}

impl eframe::App for SdrLogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Collect auto-refresh ticks; the refresh itself runs on this thread.
        if self.state.poll_auto_refresh() {
            ctx.request_repaint();
        }
        if self.state.auto_refresh_active() {
            ctx.request_repaint_after(Duration::from_millis(constants::UI_POLL_INTERVAL_MS));
        }

        let mut action: Option<PanelAction> = None;

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Folder\u{2026}").clicked() {
                        action = Some(PanelAction::OpenFolder);
                        ui.close_menu();
                    }
                    if ui.button("Open File\u{2026}").clicked() {
                        action = Some(PanelAction::PickFile);
                        ui.close_menu();
                    }
                    let can_save = !self.state.filtered_indices.is_empty();
                    if ui
                        .add_enabled(can_save, egui::Button::new("Save\u{2026}"))
                        .clicked()
                    {
                        action = Some(PanelAction::Save);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
            ui::panels::header::render(ui, &mut self.state);
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.auto_refresh_active() {
                    ui.label(
                        egui::RichText::new(" AUTO ")
                            .strong()
                            .color(ui::theme::AUTO_BADGE),
                    );
                    ui.separator();
                }
                match &self.state.last_error {
                    Some(err) => {
                        ui.label(egui::RichText::new(err).color(ui::theme::STATUS_ERROR));
                    }
                    None => {
                        ui.label(&self.state.status_message);
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(at) = self.state.last_refreshed {
                        ui.label(format!("Refreshed {}", at.format("%H:%M:%S")));
                        ui.separator();
                    }
                    let total = self.state.entries.len();
                    let visible = self.state.filtered_indices.len();
                    ui.label(format!("{visible}/{total} lines"));
                });
            });
        });

        // Control bar
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            if let Some(a) = ui::panels::footer::render(ui, &mut self.state) {
                action = Some(a);
            }
        });

        // Central panel (log lines)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::log_view::render(ui, &mut self.state);
        });

        if let Some(action) = action {
            self.handle_action(action);
        }
    }

    /// Called by eframe when the application window is about to close.
    ///
    /// The refresh timer stops when the state is dropped; the persisted
    /// auto-refresh choice is left as is so it resumes next launch.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.save_preferences();
    }
}
