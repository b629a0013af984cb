// src/tui/widgets/mod.rs — Widget sub-modules for each tab panel.

pub mod attendance;
pub mod cards;
pub mod marks;
pub mod overview;
pub mod profile;
pub mod tabs;
pub mod timetable;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app::Tab;
use super::data::DashboardData;
use super::theme::Theme;

/// Dimmed placeholder used when a panel has nothing to show.
pub fn empty_line(message: &str) -> Line<'static> {
    Line::from(Span::styled(message.to_string(), Theme::text_dim()))
}

/// Bordered, scrollable panel around prebuilt lines.
pub fn panel(title: &str, lines: Vec<Line<'static>>, scroll: u16) -> Paragraph<'static> {
    Paragraph::new(lines)
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
}

/// Largest useful scroll offset for `lines` in a bordered panel filling
/// `area`: wrapped height minus the rows the panel can show.
pub fn max_scroll(lines: Vec<Line<'static>>, area: Rect) -> u16 {
    let width = area.width.saturating_sub(2);
    let height = usize::from(area.height.saturating_sub(2));
    let wrapped = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .line_count(width);
    u16::try_from(wrapped.saturating_sub(height)).unwrap_or(u16::MAX)
}

/// Scroll limit for `tab` drawn into `area`. Overview's two columns share one
/// offset, so the taller column sets it.
pub fn tab_max_scroll(data: &DashboardData, tab: Tab, area: Rect) -> u16 {
    match tab {
        Tab::Overview => {
            let (left, right) = overview::columns(area);
            max_scroll(overview::attendance_snapshot(data), left)
                .max(max_scroll(overview::marks_snapshot(data), right))
        }
        _ => max_scroll(tab_lines(data, tab), area),
    }
}

/// All lines a tab shows, in display order. Overview stacks its two sections.
pub fn tab_lines(data: &DashboardData, tab: Tab) -> Vec<Line<'static>> {
    match tab {
        Tab::Overview => {
            let mut lines = overview::attendance_snapshot(data);
            lines.push(Line::from(""));
            lines.extend(overview::marks_snapshot(data));
            lines
        }
        Tab::Attendance => attendance::lines(&data.attendance),
        Tab::Marks => marks::lines(&data.marks),
        Tab::Timetable => timetable::lines(&data.timetable),
        Tab::Profile => profile::lines(data.user.as_ref()),
    }
}

/// Lines as plain text, styles dropped and trailing spaces trimmed.
pub fn plain_text(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            text.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
