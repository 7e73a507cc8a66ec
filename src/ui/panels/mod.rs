// SDRLog - ui/panels/mod.rs

pub mod footer;
pub mod header;
pub mod log_view;

use std::path::PathBuf;

/// Requests a panel cannot fulfil itself because they need a native dialog
/// or file access. Handled by the top-level app after the frame's panels run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    /// Pick a new log folder.
    OpenFolder,
    /// Open a log file through the file picker.
    PickFile,
    /// Open a specific file from the Load menu.
    LoadFile(PathBuf),
    /// Save the visible lines through the save dialog.
    Save,
}
