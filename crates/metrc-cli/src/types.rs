use std::path::PathBuf;

use metrc_output::DocumentReport;

/// Final result of an extraction run, consumed by the console summary.
#[derive(Debug)]
pub struct ExtractResult {
    pub output_path: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    pub row_count: usize,
    pub documents: Vec<DocumentReport>,
    pub errors: Vec<String>,
}

impl ExtractResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
