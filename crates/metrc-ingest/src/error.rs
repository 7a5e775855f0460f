use std::path::PathBuf;

use thiserror::Error;

/// Failures while locating or decoding input documents.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to read directory {path}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode pdf {path}")]
    PdfDecode {
        path: PathBuf,
        #[source]
        source: pdf_extract::OutputError,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
