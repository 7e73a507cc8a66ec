// SDRLog - core/mod.rs
//
// Core business logic layer: classification, parsing, filtering, export.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod export;
pub mod filter;
pub mod model;
pub mod parser;
pub mod source;
