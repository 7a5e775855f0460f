//! Spreadsheet row-table writer.
//!
//! The row table's schema is positional, so no header record is written;
//! cells go to disk exactly as assembled.

use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Write the row table to `path` as CSV, one record per row.
pub fn write_row_table(path: &Path, rows: &[Vec<String>]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().from_path(path)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    debug!(
        path = %path.display(),
        row_count = rows.len(),
        "row table written"
    );
    Ok(())
}
