use std::path::Path;

use anyhow::{Context, Result, bail};
use download_engine::column_select::{download_columns, subject_column_index, usable_subject};
use download_engine::types::DownloadTask;
use tracing::{info, warn};

/// Reads the roster and turns every populated download-column cell
/// into a task.
///
/// Fatal conditions (unreadable file, no download columns, a subject
/// column override that is not present) fail the whole run before any
/// network traffic happens. Row-level problems only skip the row.
pub fn load_tasks(
    path: &Path,
    marker: &str,
    subject_column: Option<&str>,
) -> Result<Vec<DownloadTask>> {
    // Flexible: exports with ragged rows are common, and short rows
    // just read as empty cells.
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("could not open roster {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("could not read roster headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    info!("loaded roster with {} columns", headers.len());

    let columns = download_columns(&headers, marker);
    if columns.is_empty() {
        bail!(
            "no columns containing {:?} found in {}",
            marker,
            path.display()
        );
    }
    info!(
        "found {} download columns: {:?}",
        columns.len(),
        columns.iter().map(|&i| &headers[i]).collect::<Vec<_>>()
    );

    let subject_idx = match subject_column {
        Some(header) => headers
            .iter()
            .position(|h| h == header)
            .with_context(|| format!("subject column {:?} not present in roster", header))?,
        None => subject_column_index(&headers),
    };
    info!("using subject column: {}", headers[subject_idx]);

    let mut tasks = Vec::new();
    for (row, record) in reader.records().enumerate() {
        // Header sits on line 1; records start at line 2.
        let line = row + 2;
        let record = record.with_context(|| format!("could not parse roster line {}", line))?;

        let subject = record.get(subject_idx).unwrap_or("").trim();
        if !usable_subject(subject) {
            warn!("skipping line {}: no subject label", line);
            continue;
        }

        for &idx in &columns {
            let cell = record.get(idx).unwrap_or("").trim();
            if cell.is_empty() || cell.eq_ignore_ascii_case("nan") {
                continue;
            }
            tasks.push(DownloadTask::new(subject, &headers[idx], cell));
        }
    }

    Ok(tasks)
}
