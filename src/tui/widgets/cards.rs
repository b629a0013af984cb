// src/tui/widgets/cards.rs — Attendance and marks cards as styled lines.
//
// Cards are pure: one record in, a handful of lines out. Panels stack them.

use ratatui::text::{Line, Span};

use crate::backend::types::{AttendanceRecord, MarksRecord};
use crate::tui::theme::Theme;

/// Mark entries shown side by side on one sub-grid row.
pub const MARKS_PER_ROW: usize = 4;

const DOT: &str = "\u{2022}";
const DASH: &str = "\u{2014}";

pub fn attendance_card(item: &AttendanceRecord) -> Vec<Line<'static>> {
    let level = item.level();

    let mut stats = Vec::with_capacity(8);
    for (label, value) in [
        ("Held", item.conducted),
        ("Absent", item.absent),
        ("Margin", item.margin),
        ("Present", item.present()),
    ] {
        stats.push(Span::styled(format!("  {label} "), Theme::text_dim()));
        stats.push(Span::styled(format!("{value:<5}"), Theme::text_bold()));
    }

    vec![
        Line::from(vec![
            Span::styled(
                format!(
                    "{} {DOT} {} {DOT} Slot {}",
                    item.code, item.category, item.slot
                ),
                Theme::text_dim(),
            ),
            Span::raw("  "),
            Span::styled(format!("[{}%]", item.percentage), Theme::attendance(level)),
        ]),
        Line::from(Span::styled(item.title.clone(), Theme::text_bold())),
        Line::from(Span::styled(item.faculty.clone(), Theme::text_dim())),
        Line::from(stats),
    ]
}

pub fn marks_card(item: &MarksRecord) -> Vec<Line<'static>> {
    let total = item.total.clone().unwrap_or_else(|| DASH.to_string());

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{} {DOT} {}", item.code, item.kind), Theme::text_dim()),
            Span::raw("  "),
            Span::styled(total, Theme::text_bold()),
        ]),
        Line::from(Span::styled(item.name.clone(), Theme::text_bold())),
    ];

    for row in item.marks.chunks(MARKS_PER_ROW) {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for entry in row {
            spans.push(Span::styled(format!("  {} ", entry.name), Theme::text_dim()));
            spans.push(Span::styled(
                format!("{} / {}", entry.mark, entry.total),
                Theme::text(),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines
}

/// Stack cards with a blank line between them, or show `empty` when there
/// are none.
pub fn card_list<T>(
    items: &[T],
    card: fn(&T) -> Vec<Line<'static>>,
    empty: &str,
) -> Vec<Line<'static>> {
    if items.is_empty() {
        return vec![super::empty_line(empty)];
    }
    let mut lines = Vec::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(card(item));
    }
    lines
}
