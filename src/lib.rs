// Crate root library declaration and module exports.
pub mod cli;
pub mod color_utils;
pub mod config;
pub mod context;
pub mod help;
pub mod links;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;

#[cfg(feature = "tui")]
pub mod tui;
