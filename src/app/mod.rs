// SDRLog - app/mod.rs
//
// Application layer: session state, preference persistence, auto-refresh.
// Dependencies: core, platform, util.
// Must NOT depend on: ui.

pub mod prefs;
pub mod refresh;
pub mod state;
