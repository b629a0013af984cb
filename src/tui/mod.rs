// src/tui/mod.rs — TUI dashboard module.
//
// Terminal dashboard built with ratatui. Launch via `academic-tracker`
// (or `academic-tracker dashboard`).

pub mod app;
pub mod data;
pub mod theme;
pub mod widgets;

pub use app::{run_dashboard, Tab};
