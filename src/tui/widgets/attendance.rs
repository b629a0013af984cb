// src/tui/widgets/attendance.rs — Every attendance card (Tab 2).

use ratatui::{layout::Rect, text::Line, Frame};

use super::cards::{attendance_card, card_list};
use crate::backend::types::AttendanceRecord;

pub fn lines(records: &[AttendanceRecord]) -> Vec<Line<'static>> {
    card_list(records, attendance_card, "No attendance to show.")
}

pub fn render(f: &mut Frame, area: Rect, records: &[AttendanceRecord], scroll: u16) {
    let title = format!(" Attendance ({}) ", records.len());
    f.render_widget(super::panel(&title, lines(records), scroll), area);
}
