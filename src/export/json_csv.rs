// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::{SessionRowExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write an already encoded JSON document.
pub(crate) fn export_json(json_data: &str, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV (header from the serde field names).
pub(crate) fn export_csv(rows: &[SessionRowExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for item in rows {
        wtr.serialize(item)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
