// src/tui/widgets/tabs.rs — Tab strip with app title and student identity.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::tui::app::Tab;
use crate::tui::theme::Theme;

pub fn titles(active: Tab) -> Vec<Line<'static>> {
    Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let label = format!(" {} {} ", i + 1, tab.label());
            if *tab == active {
                Line::from(Span::styled(label, Theme::tab_active()))
            } else {
                Line::from(Span::styled(label, Theme::tab_inactive()))
            }
        })
        .collect()
}

pub fn render(f: &mut Frame, area: Rect, active: Tab, identity: &str) {
    let tabs = Tabs::new(titles(active))
        .block(
            Block::default()
                .title(Span::styled(" Academic Tracker ", Theme::header()))
                .title(
                    Line::from(Span::styled(format!(" {identity} "), Theme::text_dim()))
                        .right_aligned(),
                )
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        )
        .select(active.index())
        .highlight_style(Theme::tab_active())
        .divider(Span::styled(" | ", Theme::text_dim()));

    f.render_widget(tabs, area);
}
