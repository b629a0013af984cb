// src/cli/mod.rs — CLI definition (clap derive)

pub mod export;
pub mod show;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "academic-tracker",
    about = "Terminal dashboard for attendance, marks, timetable, and profile",
    version
)]
pub struct Cli {
    /// Backend origin (overrides ACADEMIC_TRACKER_BACKEND_URL and config.toml)
    #[arg(long)]
    pub backend: Option<String>,

    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    /// Debug-level logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Launch the TUI dashboard (default)
    Dashboard,
    /// Load once and print one tab as plain text
    Show {
        /// overview, attendance, marks, timetable, or profile
        #[arg(default_value = "overview")]
        tab: String,
    },
    /// Load once and print the normalized data as JSON
    Export {
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}
