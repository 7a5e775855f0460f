//! Batch processing pipeline with explicit stages.
//!
//! 1. **Ingest**: load reference tables, collect manifest PDFs
//! 2. **Extract**: decode each manifest and run the extraction pipeline
//! 3. **Output**: write the row table and the optional run report
//!
//! Only reference-table loading is fatal; everything after degrades per
//! document, accumulating error strings so one bad file never aborts the
//! batch.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use metrc_extract::{ReferenceTables, extract_document};
use metrc_ingest::{
    list_manifest_files, load_license_directory, load_product_catalog, read_manifest_text,
};
use metrc_model::{ExtractionOptions, LicenseDirectory, ProductCatalog};
use metrc_output::{DocumentReport, RunReport, write_row_table, write_run_report};

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Input configuration for the ingest stage.
#[derive(Debug, Default)]
pub struct IngestConfig<'a> {
    /// Explicit manifest paths, processed in the given order.
    pub manifests: &'a [PathBuf],
    /// Folder to scan for additional manifests (sorted by filename).
    pub input_dir: Option<&'a Path>,
    /// License → company reference table.
    pub license_table: Option<&'a Path>,
    /// Product → standardized-name/description reference table.
    pub product_table: Option<&'a Path>,
}

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    pub licenses: Option<LicenseDirectory>,
    pub products: Option<ProductCatalog>,
    /// Manifests in processing order: explicit paths first, then discovered.
    pub manifests: Vec<PathBuf>,
}

impl IngestResult {
    /// Borrow the loaded tables for the extraction stage.
    pub fn tables(&self) -> ReferenceTables<'_> {
        ReferenceTables {
            licenses: self.licenses.as_ref(),
            products: self.products.as_ref(),
        }
    }
}

/// Load reference tables and collect the manifest list.
///
/// A supplied table path that cannot be loaded is fatal; discovery of a
/// missing input directory is fatal too (there is nothing to process).
pub fn ingest(config: &IngestConfig<'_>) -> Result<IngestResult> {
    let start = Instant::now();

    let licenses = match config.license_table {
        Some(path) => Some(load_license_directory(path).context("license table")?),
        None => None,
    };
    let products = match config.product_table {
        Some(path) => Some(load_product_catalog(path).context("product table")?),
        None => None,
    };

    let mut manifests: Vec<PathBuf> = config.manifests.to_vec();
    if let Some(dir) = config.input_dir {
        let discovered = list_manifest_files(dir).context("scan input directory")?;
        manifests.extend(discovered);
    }

    info!(
        manifest_count = manifests.len(),
        license_count = licenses.as_ref().map(LicenseDirectory::len).unwrap_or(0),
        product_count = products.as_ref().map(ProductCatalog::len).unwrap_or(0),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );

    Ok(IngestResult {
        licenses,
        products,
        manifests,
    })
}

// ============================================================================
// Stage 2: Extract
// ============================================================================

/// Result of the extraction stage.
#[derive(Debug, Default)]
pub struct ExtractStageResult {
    /// Per-document accounting, in processing order.
    pub documents: Vec<DocumentReport>,
    /// All output rows, each document's group contiguous.
    pub rows: Vec<Vec<String>>,
    /// Per-document failures (e.g., undecodable PDFs).
    pub errors: Vec<String>,
}

/// Run the extraction pipeline over one document's text and render its rows.
pub fn process_text(
    source: &str,
    text: &str,
    tables: ReferenceTables<'_>,
    options: ExtractionOptions,
) -> (DocumentReport, Vec<Vec<String>>) {
    let extraction = extract_document(text, tables, options);
    if extraction.package_count == 0 {
        warn!(source_file = %source, "no packages found");
    }
    let layout = tables.row_layout();
    let cells: Vec<Vec<String>> = extraction
        .rows
        .iter()
        .map(|row| row.to_cells(layout))
        .collect();
    let report = DocumentReport {
        source_file: source.to_string(),
        header: extraction.header,
        customer: extraction.customer,
        package_count: extraction.package_count,
        mention_count: extraction.mention_count,
        service_count: extraction.tally.len(),
        row_count: cells.len(),
    };
    (report, cells)
}

/// Decode and process every manifest, in input order.
pub fn extract_all(
    manifests: &[PathBuf],
    tables: ReferenceTables<'_>,
    options: ExtractionOptions,
) -> ExtractStageResult {
    let start = Instant::now();
    let mut result = ExtractStageResult::default();

    for path in manifests {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("unknown");
        info!(source_filename = %filename, "processing manifest");
        let text = match read_manifest_text(path) {
            Ok(text) => text,
            Err(error) => {
                result.errors.push(format!("{}: {error}", path.display()));
                continue;
            }
        };
        let (report, mut cells) =
            process_text(&path.display().to_string(), &text, tables, options);
        debug!(
            source_filename = %filename,
            package_count = report.package_count,
            row_count = report.row_count,
            "manifest processed"
        );
        result.documents.push(report);
        result.rows.append(&mut cells);
    }

    info!(
        document_count = result.documents.len(),
        row_count = result.rows.len(),
        error_count = result.errors.len(),
        duration_ms = start.elapsed().as_millis(),
        "extraction complete"
    );
    result
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Output configuration.
#[derive(Debug)]
pub struct OutputConfig<'a> {
    /// Row-table destination.
    pub output: &'a Path,
    /// Optional JSON run-report destination.
    pub report_json: Option<&'a Path>,
    /// Report without writing any files.
    pub dry_run: bool,
}

/// Result of the output stage.
#[derive(Debug, Default)]
pub struct OutputResult {
    pub output_path: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    pub errors: Vec<String>,
}

/// Write the row table and the optional run report.
pub fn output(
    config: &OutputConfig<'_>,
    rows: &[Vec<String>],
    documents: &[DocumentReport],
    extract_errors: &[String],
) -> OutputResult {
    let start = Instant::now();
    let mut result = OutputResult::default();

    if config.dry_run {
        info!(row_count = rows.len(), "output skipped (dry run)");
        return result;
    }

    match write_row_table(config.output, rows) {
        Ok(()) => result.output_path = Some(config.output.to_path_buf()),
        Err(error) => result
            .errors
            .push(format!("{}: {error}", config.output.display())),
    }

    if let Some(path) = config.report_json {
        let report = RunReport::new(documents.to_vec(), extract_errors.to_vec());
        match write_run_report(path, &report) {
            Ok(()) => result.report_path = Some(path.to_path_buf()),
            Err(error) => result.errors.push(format!("{}: {error}", path.display())),
        }
    }

    info!(
        row_count = rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "output complete"
    );
    result
}
