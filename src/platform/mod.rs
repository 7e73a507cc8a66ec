// SDRLog - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: standard library, directories, walkdir, glob.
// Must NOT depend on: app, ui.

pub mod config;
pub mod fs;
