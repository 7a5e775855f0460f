//! PDF → text decoding.
//!
//! Decoding is a black box: every page's text is concatenated in page order
//! into one flat string with no layout reconstruction. Anything smarter
//! (OCR, positional parsing) is out of scope for manifest extraction.

use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};

/// Decode a manifest PDF into its flat, page-concatenated text.
pub fn read_manifest_text(path: &Path) -> Result<String> {
    let text = pdf_extract::extract_text(path).map_err(|e| IngestError::PdfDecode {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(
        path = %path.display(),
        text_len = text.len(),
        "manifest decoded"
    );
    Ok(text)
}
