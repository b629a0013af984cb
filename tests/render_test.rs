// tests/render_test.rs — Full-frame rendering on ratatui's TestBackend

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use academic_tracker::backend::types::{AttendanceRecord, UserProfile};
use academic_tracker::tui::app::{render, render_loading, App};
use academic_tracker::tui::data::{DashboardData, LOAD_ERROR_MESSAGE};
use academic_tracker::tui::theme::Theme;
use academic_tracker::tui::Tab;

// ---------- Helpers ----------

const WIDTH: u16 = 140;
const HEIGHT: u16 = 32;

fn rows(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Cell coordinates of the first occurrence of `needle`.
fn locate(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
    rows(buf).iter().enumerate().find_map(|(y, row)| {
        row.find(needle)
            .map(|byte| (row[..byte].chars().count() as u16, y as u16))
    })
}

fn draw(app: &mut App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    frame(&mut terminal, app)
}

fn frame(terminal: &mut Terminal<TestBackend>, app: &mut App) -> Buffer {
    terminal.draw(|f| render(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn screen(buf: &Buffer) -> String {
    rows(buf).join("\n")
}

fn cs101() -> AttendanceRecord {
    AttendanceRecord {
        code: "CS101".into(),
        category: "Theory".into(),
        slot: "A".into(),
        title: "Data Structures".into(),
        faculty: "Dr. Rao".into(),
        percentage: "92".into(),
        conducted: 20,
        absent: 1,
        margin: 2,
    }
}

// ---------- Tests ----------

#[test]
fn test_overview_card_is_high_with_present_19() {
    let mut app = App::new(DashboardData {
        attendance: vec![cs101()],
        ..Default::default()
    });
    let buf = draw(&mut app);
    let text = screen(&buf);

    assert_eq!(text.matches("[92%]").count(), 1);
    assert!(text.contains("Present 19"));
    assert!(text.contains("No marks yet."));

    let (x, y) = locate(&buf, "[92%]").unwrap();
    assert_eq!(buf[(x, y)].fg, Theme::GREEN);
}

#[test]
fn test_tab_strip_and_identity() {
    let mut app = App::new(DashboardData {
        user: Some(UserProfile {
            fields: vec![("name".into(), "Asha".into()), ("roll".into(), "RA21".into())],
        }),
        ..Default::default()
    });
    let text = screen(&draw(&mut app));
    assert!(text.contains("Academic Tracker"));
    assert!(text.contains("Asha \u{2022} RA21"));
    for tab in Tab::ALL {
        assert!(text.contains(tab.label()));
    }
}

#[test]
fn test_error_banner_appears_once() {
    let mut app = App::new(DashboardData {
        error: Some(LOAD_ERROR_MESSAGE.into()),
        ..Default::default()
    });
    let buf = draw(&mut app);
    let text = screen(&buf);
    assert_eq!(text.matches(LOAD_ERROR_MESSAGE).count(), 1);

    let (x, y) = locate(&buf, "Failed").unwrap();
    assert_eq!(buf[(x, y)].fg, Theme::RED);
}

#[test]
fn test_no_banner_without_error() {
    let text = screen(&draw(&mut App::new(DashboardData::default())));
    assert!(!text.contains("Failed to load"));
}

#[test]
fn test_profile_empty_state() {
    let mut app = App::new(DashboardData::default());
    app.select(Tab::Profile);
    let text = screen(&draw(&mut app));
    assert!(text.contains("No profile loaded."));
    assert!(!text.contains("NAME"));
}

#[test]
fn test_timetable_empty_week() {
    let mut app = App::new(DashboardData::default());
    app.select(Tab::Timetable);
    let text = screen(&draw(&mut app));
    assert_eq!(text.matches("No classes.").count(), 5);
}

#[test]
fn test_attendance_tab_lists_every_record() {
    let mut second = cs101();
    second.code = "PH102".into();
    second.percentage = "70".into();
    second.absent = 6;

    let mut app = App::new(DashboardData {
        attendance: vec![cs101(), second],
        ..Default::default()
    });
    app.select(Tab::Attendance);
    let buf = draw(&mut app);
    let text = screen(&buf);

    assert!(text.contains("Attendance (2)"));
    assert!(text.contains("Present 14"));
    let (x, y) = locate(&buf, "[70%]").unwrap();
    assert_eq!(buf[(x, y)].fg, Theme::RED);
}

#[test]
fn test_loading_screen() {
    let mut terminal = Terminal::new(TestBackend::new(40, 9)).unwrap();
    terminal.draw(render_loading).unwrap();
    let text = screen(terminal.backend().buffer());
    assert!(text.contains("Loading\u{2026}"));
}

#[test]
fn test_narrow_profile_scrolls_to_wrapped_end() {
    let mut app = App::new(DashboardData {
        user: Some(UserProfile {
            fields: vec![("bio".into(), format!("{}END", "lorem ".repeat(200)))],
        }),
        ..Default::default()
    });
    app.select(Tab::Profile);

    let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
    let first = screen(&frame(&mut terminal, &mut app));
    assert!(!first.contains("END"));

    for _ in 0..500 {
        app.scroll_down();
    }
    let last = screen(&frame(&mut terminal, &mut app));
    assert!(last.contains("END"), "{last}");
}

#[test]
fn test_narrow_overview_scrolls_to_last_snapshot_card() {
    let mut third = cs101();
    third.code = "EE303".into();
    third.faculty = "Dr. Zed".into();
    let mut app = App::new(DashboardData {
        attendance: vec![cs101(), cs101(), third],
        ..Default::default()
    });

    let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
    let first = screen(&frame(&mut terminal, &mut app));
    assert!(!first.contains("Dr. Zed"));

    for _ in 0..500 {
        app.scroll_down();
    }
    let last = screen(&frame(&mut terminal, &mut app));
    assert!(last.contains("Dr. Zed"), "{last}");
}
