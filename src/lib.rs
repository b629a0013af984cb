// src/lib.rs — Library root for Academic Tracker

pub mod backend;
pub mod cli;
pub mod infra;
pub mod tui;
