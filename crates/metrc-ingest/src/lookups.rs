//! Reference-table loaders.
//!
//! Both tables are required to be well-formed when supplied: a missing file
//! or a missing named column is fatal at startup, per the batch contract.
//! Rows with an empty key cell are skipped, not errors.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use metrc_model::{LicenseDirectory, ProductCatalog};

use crate::csv_table::{CsvTable, read_csv_table};

fn require_column(table: &CsvTable, name: &str, path: &Path) -> Result<usize> {
    match table.column_index(name) {
        Some(index) => Ok(index),
        None => bail!("{}: missing required column \"{name}\"", path.display()),
    }
}

fn cell<'a>(row: &'a [String], index: usize) -> &'a str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// Load the license → company table ("License Number", "Company Name").
pub fn load_license_directory(path: &Path) -> Result<LicenseDirectory> {
    let table =
        read_csv_table(path).with_context(|| format!("load license table: {}", path.display()))?;
    let license_idx = require_column(&table, "License Number", path)?;
    let company_idx = require_column(&table, "Company Name", path)?;

    let mut directory = LicenseDirectory::new();
    for row in &table.rows {
        let license = cell(row, license_idx);
        if license.is_empty() {
            continue;
        }
        directory.insert(license, cell(row, company_idx));
    }
    debug!(
        path = %path.display(),
        license_count = directory.len(),
        "license table loaded"
    );
    Ok(directory)
}

/// Load the product table ("Product Name", "Standardized Name",
/// "Description").
pub fn load_product_catalog(path: &Path) -> Result<ProductCatalog> {
    let table =
        read_csv_table(path).with_context(|| format!("load product table: {}", path.display()))?;
    let product_idx = require_column(&table, "Product Name", path)?;
    let standardized_idx = require_column(&table, "Standardized Name", path)?;
    let description_idx = require_column(&table, "Description", path)?;

    let mut catalog = ProductCatalog::new();
    for row in &table.rows {
        let product = cell(row, product_idx);
        if product.is_empty() {
            continue;
        }
        catalog.insert(
            product,
            cell(row, standardized_idx),
            cell(row, description_idx),
        );
    }
    debug!(
        path = %path.display(),
        product_count = catalog.len(),
        "product table loaded"
    );
    Ok(catalog)
}
