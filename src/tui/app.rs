// src/tui/app.rs — TUI application state, event loop, and rendering.

use std::future::Future;
use std::io;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use tokio::sync::oneshot;

use crate::backend::DataSource;

use super::data::{self, DashboardData};
use super::theme::Theme;
use super::widgets;

// ── Tab enum ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Attendance,
    Marks,
    Timetable,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Attendance,
        Tab::Marks,
        Tab::Timetable,
        Tab::Profile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Attendance => "Attendance",
            Tab::Marks => "Marks",
            Tab::Timetable => "Timetable",
            Tab::Profile => "Profile",
        }
    }

    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn from_index(i: usize) -> Tab {
        *Tab::ALL.get(i).unwrap_or(&Tab::Overview)
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = Tab::ALL.iter().map(|t| t.label()).collect();
                format!("unknown tab '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

// ── App state ────────────────────────────────────────────────────

pub struct App {
    active_tab: Tab,
    data: DashboardData,
    /// Vertical scroll offset per tab, indexed by `Tab::index`.
    scroll: [u16; 5],
    /// Content area from the last frame; scroll limits are measured in it.
    viewport: Rect,
}

impl App {
    pub fn new(data: DashboardData) -> Self {
        Self {
            active_tab: Tab::Overview,
            data,
            scroll: [0; 5],
            viewport: Rect::default(),
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    pub fn scroll(&self) -> u16 {
        self.scroll[self.active_tab.index()]
    }

    /// Make `tab` the active view. Nothing else changes.
    pub fn select(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        let idx = self.active_tab.index();
        self.select(Tab::from_index((idx + 1) % Tab::ALL.len()));
    }

    pub fn prev_tab(&mut self) {
        let idx = self.active_tab.index();
        self.select(Tab::from_index((idx + Tab::ALL.len() - 1) % Tab::ALL.len()));
    }

    /// Record the content area and pull every tab's offset back inside it.
    pub fn set_viewport(&mut self, area: Rect) {
        if area == self.viewport {
            return;
        }
        self.viewport = area;
        for tab in Tab::ALL {
            let max = widgets::tab_max_scroll(&self.data, tab, area);
            let offset = &mut self.scroll[tab.index()];
            *offset = (*offset).min(max);
        }
    }

    pub fn scroll_down(&mut self) {
        let max = widgets::tab_max_scroll(&self.data, self.active_tab, self.viewport);
        let offset = &mut self.scroll[self.active_tab.index()];
        *offset = offset.saturating_add(1).min(max);
    }

    pub fn scroll_up(&mut self) {
        let offset = &mut self.scroll[self.active_tab.index()];
        *offset = offset.saturating_sub(1);
    }

    /// Apply one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if is_quit_key(&key) {
            return true;
        }

        match key.code {
            // Tab navigation
            KeyCode::Tab | KeyCode::Right => self.next_tab(),
            KeyCode::BackTab | KeyCode::Left => self.prev_tab(),

            // Number keys for direct tab access
            KeyCode::Char(c @ '1'..='5') => {
                let idx = c as usize - '1' as usize;
                self.select(Tab::from_index(idx));
            }

            // Scrolling
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),

            _ => {}
        }
        false
    }
}

/// q, Esc, or Ctrl-C.
pub fn is_quit_key(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('q')
        || key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

// ── Loading ──────────────────────────────────────────────────────

/// How the initial load ended.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(DashboardData),
    /// The user quit before the load settled.
    Quit,
}

/// Race the initial load against a quit request.
pub async fn load_or_quit<L, Q>(load: L, quit: Q) -> LoadOutcome
where
    L: Future<Output = DashboardData>,
    Q: Future<Output = ()>,
{
    tokio::select! {
        data = load => LoadOutcome::Loaded(data),
        () = quit => LoadOutcome::Quit,
    }
}

/// Resolves once a quit key is reported. A dropped sender never resolves.
pub async fn quit_requested(rx: oneshot::Receiver<()>) {
    if rx.await.is_err() {
        std::future::pending::<()>().await;
    }
}

/// Blocking key reader for the loading screen: reports the first quit key on
/// `tx`, and returns once `stop` is set. Other keys are discarded.
fn watch_for_quit(stop: &AtomicBool, tx: oneshot::Sender<()>) -> io::Result<()> {
    while !stop.load(Ordering::Relaxed) {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && is_quit_key(&key) {
                    let _ = tx.send(());
                    return Ok(());
                }
            }
        }
    }
    Ok(())
}

// ── Public entry point ───────────────────────────────────────────

/// Launch the TUI dashboard: show a loading screen, load once, then run
/// until the user quits (q / Esc / Ctrl-C). Quitting also works while the
/// load is in flight. No network I/O after the load.
pub async fn run_dashboard(source: &dyn DataSource) -> anyhow::Result<()> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_session(&mut terminal, source).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_session(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    source: &dyn DataSource,
) -> anyhow::Result<()> {
    terminal.draw(render_loading)?;

    let stop = Arc::new(AtomicBool::new(false));
    let (tx, rx) = oneshot::channel();
    let watcher = tokio::task::spawn_blocking({
        let stop = Arc::clone(&stop);
        move || watch_for_quit(&stop, tx)
    });

    let outcome = load_or_quit(data::load_all(source), quit_requested(rx)).await;

    // The watcher must stop reading keys before the event loop takes over.
    stop.store(true, Ordering::Relaxed);
    match watcher.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!(error = %e, "key reader failed during load"),
        Err(e) => tracing::warn!(error = %e, "key reader task failed"),
    }

    match outcome {
        LoadOutcome::Loaded(data) => {
            let mut app = App::new(data);
            run_event_loop(terminal, &mut app)
        }
        LoadOutcome::Quit => {
            tracing::info!("quit during initial load");
            Ok(())
        }
    }
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| render(f, &mut *app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}

// ── Rendering ────────────────────────────────────────────────────

/// Placeholder drawn while the initial load is in flight.
pub fn render_loading(f: &mut Frame) {
    let area = f.area();
    let middle = Rect::new(area.x, area.y + area.height / 2, area.width, area.height.min(1));
    let p = Paragraph::new(Line::from(Span::styled("Loading\u{2026}", Theme::text_dim())))
        .alignment(Alignment::Center);
    f.render_widget(p, middle);
}

pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let mut constraints = vec![Constraint::Length(3)]; // Header + tabs
    if app.data.error.is_some() {
        constraints.push(Constraint::Length(3)); // Error banner
    }
    constraints.push(Constraint::Min(5)); // Main content
    constraints.push(Constraint::Length(1)); // Footer / key hints

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    widgets::tabs::render(f, chunks[0], app.active_tab, &app.data.identity());

    let mut next = 1;
    if let Some(message) = &app.data.error {
        render_banner(f, chunks[next], message);
        next += 1;
    }
    app.set_viewport(chunks[next]);
    render_tab_content(f, chunks[next], app);
    render_footer(f, chunks[next + 1], app);
}

fn render_banner(f: &mut Frame, area: Rect, message: &str) {
    let p = Paragraph::new(Line::from(Span::styled(message.to_string(), Theme::error()))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::error()),
    );
    f.render_widget(p, area);
}

fn render_tab_content(f: &mut Frame, area: Rect, app: &App) {
    let scroll = app.scroll();
    let data = &app.data;
    match app.active_tab {
        Tab::Overview => widgets::overview::render(f, area, data, scroll),
        Tab::Attendance => widgets::attendance::render(f, area, &data.attendance, scroll),
        Tab::Marks => widgets::marks::render(f, area, &data.marks, scroll),
        Tab::Timetable => widgets::timetable::render(f, area, &data.timetable, scroll),
        Tab::Profile => widgets::profile::render(f, area, data.user.as_ref(), scroll),
    }
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let mut hints = vec![
        Span::styled(" q", Theme::key_hint()),
        Span::styled(" quit  ", Theme::key_desc()),
        Span::styled("Tab/\u{2190}\u{2192}", Theme::key_hint()),
        Span::styled(" switch  ", Theme::key_desc()),
        Span::styled("1-5", Theme::key_hint()),
        Span::styled(" jump  ", Theme::key_desc()),
        Span::styled("j/k/\u{2191}\u{2193}", Theme::key_hint()),
        Span::styled(" scroll", Theme::key_desc()),
    ];
    if let Some(at) = app.data.loaded_at {
        hints.push(Span::styled(
            format!("  loaded {}", at.format("%H:%M:%S")),
            Theme::text_dim(),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(hints)), area);
}
