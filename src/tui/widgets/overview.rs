// src/tui/widgets/overview.rs — Attendance snapshot and recent marks (Tab 1).

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    Frame,
};

use super::cards::{attendance_card, card_list, marks_card};
use crate::tui::data::DashboardData;
use crate::tui::theme::Theme;

/// Cards shown per section on the overview.
pub const SNAPSHOT_LEN: usize = 3;

pub fn attendance_snapshot(data: &DashboardData) -> Vec<Line<'static>> {
    let shown = &data.attendance[..data.attendance.len().min(SNAPSHOT_LEN)];
    let mut lines = vec![
        Line::from(Span::styled("Attendance snapshot", Theme::section())),
        Line::from(""),
    ];
    lines.extend(card_list(shown, attendance_card, "No attendance yet."));
    lines
}

pub fn marks_snapshot(data: &DashboardData) -> Vec<Line<'static>> {
    let shown = &data.marks[..data.marks.len().min(SNAPSHOT_LEN)];
    let mut lines = vec![
        Line::from(Span::styled("Recent marks", Theme::section())),
        Line::from(""),
    ];
    lines.extend(card_list(shown, marks_card, "No marks yet."));
    lines
}

/// Left (attendance) and right (marks) halves of the overview.
pub fn columns(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    (chunks[0], chunks[1])
}

pub fn render(f: &mut Frame, area: Rect, data: &DashboardData, scroll: u16) {
    let (left, right) = columns(area);
    f.render_widget(
        super::panel(" Attendance ", attendance_snapshot(data), scroll),
        left,
    );
    f.render_widget(super::panel(" Marks ", marks_snapshot(data), scroll), right);
}
