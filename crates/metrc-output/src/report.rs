//! JSON run report written alongside the row table.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use metrc_model::ManifestHeader;

use crate::error::Result;

/// Per-document accounting for the run report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentReport {
    /// Source PDF path as given on the command line.
    pub source_file: String,
    /// Extracted header fields (absent fields stay null).
    pub header: ManifestHeader,
    /// Resolved customer name, when any.
    pub customer: Option<String>,
    pub package_count: usize,
    pub mention_count: usize,
    pub service_count: usize,
    pub row_count: usize,
}

/// Summary of one extraction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// RFC 3339 generation timestamp.
    pub generated_at: String,
    pub document_count: usize,
    pub row_count: usize,
    pub documents: Vec<DocumentReport>,
    /// Non-fatal per-document errors (e.g., undecodable PDFs).
    pub errors: Vec<String>,
}

impl RunReport {
    /// Build a timestamped report from per-document results.
    pub fn new(documents: Vec<DocumentReport>, errors: Vec<String>) -> Self {
        let row_count = documents.iter().map(|document| document.row_count).sum();
        Self {
            generated_at: Utc::now().to_rfc3339(),
            document_count: documents.len(),
            row_count,
            documents,
            errors,
        }
    }
}

/// Write the run report as pretty-printed JSON.
pub fn write_run_report(path: &Path, report: &RunReport) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)?;
    debug!(
        path = %path.display(),
        document_count = report.document_count,
        "run report written"
    );
    Ok(())
}
