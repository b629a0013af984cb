// src/cli/export.rs — `academic-tracker export`: normalized data as JSON.

use std::path::Path;

use crate::backend::DataSource;
use crate::tui::data;

pub async fn run_export(source: &dyn DataSource, output: Option<&str>) -> anyhow::Result<()> {
    let data = data::load_all(source).await;
    let json = serde_json::to_string_pretty(&data)?;

    match output {
        Some(path) => {
            std::fs::write(Path::new(path), format!("{json}\n"))?;
            eprintln!("Exported to {path}");
        }
        None => println!("{json}"),
    }
    Ok(())
}
