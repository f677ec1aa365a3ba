pub mod api;
pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod format;
pub mod keyboard;
pub mod tea;
pub mod theme;
pub mod ui;

pub use app::App;
