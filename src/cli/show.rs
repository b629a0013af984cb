// src/cli/show.rs — `academic-tracker show <tab>`: one tab as plain text.

use crate::backend::DataSource;
use crate::tui::data::{self, DashboardData};
use crate::tui::widgets;
use crate::tui::Tab;

pub async fn run_show(source: &dyn DataSource, tab: Tab) -> anyhow::Result<()> {
    let data = data::load_all(source).await;
    println!("{}", render_plain(&data, tab));
    Ok(())
}

/// Banner (if any), then the tab's content with styles dropped.
pub fn render_plain(data: &DashboardData, tab: Tab) -> String {
    let body = widgets::plain_text(&widgets::tab_lines(data, tab));
    match &data.error {
        Some(message) => format!("{message}\n\n{body}"),
        None => body,
    }
}
