// Crate root library declaration and module exports.
pub mod cli;
pub mod composer;
pub mod config;
pub mod data;
pub mod document;
pub mod model;
pub mod paths;

#[cfg(feature = "tui")]
pub mod tui;
