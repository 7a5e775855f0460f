//! Per-document extraction driver.
//!
//! Runs the full pipeline on one manifest's text:
//! 1. Strip the boilerplate footer
//! 2. Extract header fields and resolve the customer
//! 3. Segment into package blocks
//! 4. Parse and canonicalize service mentions
//! 5. Aggregate into a service tally and build output rows

use tracing::debug;

use metrc_model::{
    ExtractionOptions, LabTestRow, LicenseDirectory, ManifestHeader, ProductCatalog, RowLayout,
};

use crate::aggregate::{ServiceTally, tally_services};
use crate::header::{extract_header, resolve_customer};
use crate::normalize::strip_boilerplate_footer;
use crate::packages::split_package_blocks;
use crate::rows::build_document_rows;
use crate::services::{canonicalize_service, extract_service_mentions};

/// Read-only reference tables for one run. Either table may be absent; the
/// pipeline degrades per field rather than failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceTables<'a> {
    pub licenses: Option<&'a LicenseDirectory>,
    pub products: Option<&'a ProductCatalog>,
}

impl ReferenceTables<'_> {
    /// Row layout implied by these tables: the description column is active
    /// exactly when a product catalog is present.
    pub fn row_layout(&self) -> RowLayout {
        RowLayout {
            with_description: self.products.is_some(),
        }
    }
}

/// Everything extracted from one document.
#[derive(Debug, Clone)]
pub struct DocumentExtraction {
    pub header: ManifestHeader,
    pub customer: Option<String>,
    pub tally: ServiceTally,
    pub rows: Vec<LabTestRow>,
    pub package_count: usize,
    pub mention_count: usize,
}

/// Run the extraction pipeline over one manifest's raw text.
///
/// Pure and infallible: malformed text degrades to absent fields and an
/// empty row set, never an error.
pub fn extract_document(
    raw_text: &str,
    tables: ReferenceTables<'_>,
    options: ExtractionOptions,
) -> DocumentExtraction {
    let text = strip_boilerplate_footer(raw_text);
    let header = extract_header(&text);
    let customer = resolve_customer(&header, tables.licenses);

    let blocks = split_package_blocks(&text);
    let package_count = blocks.len();
    let mut mention_count = 0usize;
    let mut services = Vec::new();
    for block in &blocks {
        for mention in extract_service_mentions(block) {
            mention_count += 1;
            if let Some(service) =
                canonicalize_service(mention, tables.products, options.unmatched_policy)
            {
                services.push(service);
            }
        }
    }

    let tally = tally_services(services);
    let rows = build_document_rows(&header, customer.as_deref(), &tally, tables.products);
    debug!(
        package_count,
        mention_count,
        service_count = tally.len(),
        row_count = rows.len(),
        "document extracted"
    );

    DocumentExtraction {
        header,
        customer,
        tally,
        rows,
        package_count,
        mention_count,
    }
}
