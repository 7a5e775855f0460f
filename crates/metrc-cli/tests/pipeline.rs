//! Integration tests for the batch pipeline stages.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use metrc_cli::pipeline::{IngestConfig, OutputConfig, ingest, output, process_text};
use metrc_model::{
    COL_COUNT, COL_CUSTOMER, COL_DESCRIPTION, COL_LICENSE_NUMBER, COL_MANIFEST_NUMBER, COL_SERVICE,
    ExtractionOptions,
};

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn manifest_text(manifest_number: &str) -> String {
    format!(
        "Originating License Number 402-X0011\n\
         Originating Entity Acme Cultivation For MED use\n\
         Manifest No. {manifest_number}\n\
         1. Package | Accepted\n\
         Req'd Lab Test Batches Potency Panel, Pesticides\n\
         2. Package | Accepted\n\
         Req'd Lab Test Batches Pesticides\n"
    )
}

#[test]
fn ingest_loads_tables_and_orders_manifests() {
    let dir = TempDir::new().expect("temp dir");
    let license_table = write_file(
        &dir,
        "licenses.csv",
        "License Number,Company Name\n402-X0011,Acme Labs\n",
    );
    let product_table = write_file(
        &dir,
        "products.csv",
        "Product Name,Standardized Name,Description\npotency panel,Potency,Cannabinoid panel\n",
    );
    let scan_dir = dir.path().join("inbox");
    fs::create_dir(&scan_dir).expect("create inbox");
    fs::write(scan_dir.join("b.pdf"), "").expect("write pdf");
    fs::write(scan_dir.join("a.pdf"), "").expect("write pdf");
    let explicit = vec![PathBuf::from("first.pdf")];

    let ingested = ingest(&IngestConfig {
        manifests: &explicit,
        input_dir: Some(&scan_dir),
        license_table: Some(&license_table),
        product_table: Some(&product_table),
    })
    .expect("ingest");

    assert_eq!(ingested.licenses.as_ref().map(|l| l.len()), Some(1));
    assert_eq!(ingested.products.as_ref().map(|p| p.len()), Some(1));
    let names: Vec<String> = ingested
        .manifests
        .iter()
        .map(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
        .collect();
    // Explicit paths first, then the directory scan sorted by filename.
    assert_eq!(names, vec!["first.pdf", "a.pdf", "b.pdf"]);
    assert!(ingested.tables().row_layout().with_description);
}

#[test]
fn ingest_fails_on_unloadable_reference_table() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("absent.csv");
    let result = ingest(&IngestConfig {
        manifests: &[],
        input_dir: None,
        license_table: Some(&missing),
        product_table: None,
    });
    assert!(result.is_err());
}

#[test]
fn process_text_renders_positional_cells() {
    let dir = TempDir::new().expect("temp dir");
    let license_table = write_file(
        &dir,
        "licenses.csv",
        "License Number,Company Name\n402-X0011,Acme Labs\n",
    );
    let product_table = write_file(
        &dir,
        "products.csv",
        "Product Name,Standardized Name,Description\npotency panel,Potency,Cannabinoid panel\n",
    );
    let ingested = ingest(&IngestConfig {
        manifests: &[],
        input_dir: None,
        license_table: Some(&license_table),
        product_table: Some(&product_table),
    })
    .expect("ingest");

    let (report, rows) = process_text(
        "doc.pdf",
        &manifest_text("0012345678"),
        ingested.tables(),
        ExtractionOptions::default(),
    );

    assert_eq!(report.package_count, 2);
    assert_eq!(report.mention_count, 3);
    assert_eq!(report.customer.as_deref(), Some("Acme Labs"));
    assert_eq!(rows.len(), 2);
    // Description layout: 15 cells.
    assert!(rows.iter().all(|cells| cells.len() == 15));
    let head = &rows[0];
    assert_eq!(head[COL_CUSTOMER], "Acme Labs");
    assert_eq!(head[COL_MANIFEST_NUMBER], "0012345678");
    assert_eq!(head[COL_LICENSE_NUMBER], "402-X0011");
    assert_eq!(head[COL_SERVICE], "Pesticides");
    assert_eq!(head[COL_COUNT], "2");
    assert_eq!(head[COL_DESCRIPTION], "");
    let second = &rows[1];
    assert_eq!(second[COL_CUSTOMER], "");
    assert_eq!(second[COL_SERVICE], "Potency");
    assert_eq!(second[COL_COUNT], "1");
    assert_eq!(second[COL_DESCRIPTION], "Cannabinoid panel");
}

#[test]
fn process_text_without_tables_uses_base_layout() {
    let tables = metrc_extract::ReferenceTables::default();
    let (report, rows) = process_text(
        "doc.pdf",
        &manifest_text("0012345678"),
        tables,
        ExtractionOptions::default(),
    );
    assert_eq!(report.customer.as_deref(), Some("Acme Cultivation"));
    assert!(rows.iter().all(|cells| cells.len() == 14));
}

#[test]
fn output_writes_contiguous_document_groups() {
    let dir = TempDir::new().expect("temp dir");
    let tables = metrc_extract::ReferenceTables::default();
    let mut all_rows = Vec::new();
    let mut documents = Vec::new();
    for manifest_number in ["0012345678", "8765432100"] {
        let (report, mut rows) = process_text(
            &format!("{manifest_number}.pdf"),
            &manifest_text(manifest_number),
            tables,
            ExtractionOptions::default(),
        );
        documents.push(report);
        all_rows.append(&mut rows);
    }
    assert_eq!(all_rows.len(), 4);

    let output_path = dir.path().join("rows.csv");
    let report_path = dir.path().join("report.json");
    let result = output(
        &OutputConfig {
            output: &output_path,
            report_json: Some(&report_path),
            dry_run: false,
        },
        &all_rows,
        &documents,
        &[],
    );
    assert!(result.errors.is_empty());
    assert_eq!(result.output_path.as_deref(), Some(output_path.as_path()));

    let contents = fs::read_to_string(&output_path).expect("read rows");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("0012345678"));
    assert!(!lines[1].contains("0012345678"));
    assert!(lines[2].contains("8765432100"));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).expect("read report"))
            .expect("parse report");
    assert_eq!(report["document_count"], 2);
    assert_eq!(report["row_count"], 4);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let output_path = dir.path().join("rows.csv");
    let result = output(
        &OutputConfig {
            output: &output_path,
            report_json: None,
            dry_run: true,
        },
        &[],
        &[],
        &[],
    );
    assert!(result.output_path.is_none());
    assert!(!output_path.exists());
}
