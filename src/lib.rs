pub mod catalog;
pub mod config;
pub mod content;
pub mod model;
pub mod render;
pub mod tui;
mod tui_shell;
pub mod workspace;
