// src/tui/widgets/marks.rs — Every marks card (Tab 3).

use ratatui::{layout::Rect, text::Line, Frame};

use super::cards::{card_list, marks_card};
use crate::backend::types::MarksRecord;

pub fn lines(records: &[MarksRecord]) -> Vec<Line<'static>> {
    card_list(records, marks_card, "No marks to show.")
}

pub fn render(f: &mut Frame, area: Rect, records: &[MarksRecord], scroll: u16) {
    let title = format!(" Marks ({}) ", records.len());
    f.render_widget(super::panel(&title, lines(records), scroll), area);
}
