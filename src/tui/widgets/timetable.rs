// src/tui/widgets/timetable.rs — Monday-to-Friday class grid (Tab 4).

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    Frame,
};

use crate::backend::types::{Timetable, Weekday};
use crate::tui::theme::Theme;

pub fn lines(timetable: &Timetable) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for day in Weekday::ALL {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(day.short_label(), Theme::section())));

        let slots = timetable.day(day);
        if slots.is_empty() {
            lines.push(super::empty_line("No classes."));
            continue;
        }

        for (time, slot) in slots {
            lines.push(Line::from(vec![
                Span::styled(format!("  {time:<14}"), Theme::text_dim()),
                Span::styled(slot.title.clone(), Theme::text_bold()),
            ]));
            lines.push(Line::from(Span::styled(
                format!(
                    "  {:<14}{} \u{2022} {} \u{2022} {}",
                    "", slot.code, slot.room, slot.category
                ),
                Theme::text_dim(),
            )));
        }
    }

    lines
}

pub fn render(f: &mut Frame, area: Rect, timetable: &Timetable, scroll: u16) {
    f.render_widget(super::panel(" Timetable ", lines(timetable), scroll), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::types::ClassSlot;
    use crate::tui::widgets::plain_text;

    #[test]
    fn test_every_weekday_listed() {
        let text = plain_text(&lines(&Timetable::default()));
        for day in ["Mon", "Tue", "Wed", "Thu", "Fri"] {
            assert!(text.contains(day));
        }
        assert_eq!(text.matches("No classes.").count(), 5);
    }

    #[test]
    fn test_slot_rendered_under_its_day() {
        let mut t = Timetable::default();
        t.set_day(
            Weekday::Wednesday,
            vec![(
                "10:00-10:50".into(),
                ClassSlot {
                    title: "Operating Systems".into(),
                    code: "CS301".into(),
                    room: "TP 402".into(),
                    category: "Theory".into(),
                },
            )],
        );
        let text = plain_text(&lines(&t));
        assert_eq!(text.matches("No classes.").count(), 4);
        let wed = text.find("Wed").unwrap();
        let slot = text.find("Operating Systems").unwrap();
        let thu = text.find("Thu").unwrap();
        assert!(wed < slot && slot < thu);
        assert!(text.contains("CS301 \u{2022} TP 402 \u{2022} Theory"));
    }
}
