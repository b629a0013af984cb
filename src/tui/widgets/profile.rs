// src/tui/widgets/profile.rs — Profile fields (Tab 5).

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    Frame,
};

use crate::backend::types::UserProfile;
use crate::tui::theme::Theme;

pub fn lines(user: Option<&UserProfile>) -> Vec<Line<'static>> {
    let Some(user) = user else {
        return vec![super::empty_line("No profile loaded.")];
    };

    let mut lines = Vec::with_capacity(user.fields.len() * 3);
    for (key, value) in &user.fields {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(key.to_uppercase(), Theme::text_dim())));
        lines.push(Line::from(Span::styled(value.clone(), Theme::text_bold())));
    }
    lines
}

pub fn render(f: &mut Frame, area: Rect, user: Option<&UserProfile>, scroll: u16) {
    f.render_widget(super::panel(" Profile ", lines(user), scroll), area);
}
