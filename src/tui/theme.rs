// src/tui/theme.rs — Color scheme and style definitions for the TUI dashboard.

use ratatui::style::{Color, Modifier, Style};

use crate::backend::types::AttendanceLevel;

/// Slate palette with traffic-light accents for attendance.
pub struct Theme;

impl Theme {
    // ── Base colors ──────────────────────────────────────────────
    pub const SLATE_100: Color = Color::Rgb(241, 245, 249);
    pub const SLATE_400: Color = Color::Rgb(148, 163, 184);
    pub const SLATE_600: Color = Color::Rgb(71, 85, 105);
    pub const SLATE_800: Color = Color::Rgb(30, 41, 59);
    pub const ACCENT: Color = Color::Rgb(96, 165, 250);

    // ── Attendance bands ─────────────────────────────────────────
    pub const GREEN: Color = Color::Rgb(74, 222, 128);
    pub const EMERALD: Color = Color::Rgb(52, 211, 153);
    pub const YELLOW: Color = Color::Rgb(250, 204, 21);
    pub const RED: Color = Color::Rgb(248, 113, 113);

    // ── Semantic styles ──────────────────────────────────────────

    /// Active/selected tab header.
    pub fn tab_active() -> Style {
        Style::default()
            .fg(Theme::SLATE_800)
            .bg(Theme::SLATE_100)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive tab header.
    pub fn tab_inactive() -> Style {
        Style::default().fg(Theme::SLATE_400)
    }

    /// Main title / header bar.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Block border.
    pub fn border() -> Style {
        Style::default().fg(Theme::SLATE_600)
    }

    /// Normal body text.
    pub fn text() -> Style {
        Style::default().fg(Theme::SLATE_100)
    }

    /// Card titles and values.
    pub fn text_bold() -> Style {
        Theme::text().add_modifier(Modifier::BOLD)
    }

    /// Dimmed / secondary text.
    pub fn text_dim() -> Style {
        Style::default().fg(Theme::SLATE_400)
    }

    /// Load-failure banner.
    pub fn error() -> Style {
        Style::default()
            .fg(Theme::RED)
            .add_modifier(Modifier::BOLD)
    }

    /// Section headings inside a panel.
    pub fn section() -> Style {
        Style::default()
            .fg(Theme::SLATE_100)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Key hint in the footer.
    pub fn key_hint() -> Style {
        Style::default().fg(Theme::ACCENT)
    }

    /// Description next to key hint.
    pub fn key_desc() -> Style {
        Style::default().fg(Theme::SLATE_400)
    }

    /// Attendance percentage badge, color-coded by band.
    pub fn attendance(level: AttendanceLevel) -> Style {
        let color = match level {
            AttendanceLevel::High => Theme::GREEN,
            AttendanceLevel::Good => Theme::EMERALD,
            AttendanceLevel::Fair => Theme::YELLOW,
            AttendanceLevel::Low => Theme::RED,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}
