//! Generic CSV table reading for the reference files.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

/// A CSV file as headers plus string rows. Rows are padded or truncated to
/// the header width.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of a header matched case-insensitively, ignoring surrounding
    /// whitespace.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name.trim()))
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file whose first row is the header.
///
/// Cells are BOM- and whitespace-trimmed; fully blank rows are skipped.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let mut records = reader.records();
    let headers: Vec<String> = match records.next() {
        Some(record) => {
            let record = record.with_context(|| format!("read header: {}", path.display()))?;
            record.iter().map(normalize_header).collect()
        }
        None => Vec::new(),
    };

    let mut rows = Vec::new();
    for record in records {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(normalize_cell(record.get(idx).unwrap_or("")));
        }
        rows.push(row);
    }

    Ok(CsvTable { headers, rows })
}
