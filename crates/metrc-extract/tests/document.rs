//! End-to-end tests for the per-document extraction pipeline.

use metrc_extract::{ReferenceTables, extract_document};
use metrc_model::{ExtractionOptions, LicenseDirectory, ProductCatalog, UnmatchedPolicy};

const NO_TABLES: ReferenceTables<'_> = ReferenceTables {
    licenses: None,
    products: None,
};

fn manifest_text() -> String {
    [
        "Colorado Marijuana Enforcement Division",
        "Originating License Number 402-X0011",
        "Originating Entity Acme Cultivation For MED use only",
        "Manifest No. 0012345678",
        "1. Package | Accepted",
        "Item: Bulk Flower 5 lb",
        "Req'd Lab Test Batches Potency, Pesticides",
        "2. Package | Accepted",
        "Item: Concentrate 500 g",
        "Req'd Lab Test Batches Pesticides",
        "By receiving this transfer in Metrc the recipient acknowledges",
        "responsibility for accepting or rejecting any items listed above.",
    ]
    .join("\n")
}

#[test]
fn footer_is_stripped_before_extraction() {
    // A manifest number printed inside the footer must not be extracted.
    let text = "no real header here\n\
                By receiving this transfer in Metrc blah\n\
                Manifest No. 9999999999 blah rejecting any items XYZ";
    let extraction = extract_document(text, NO_TABLES, ExtractionOptions::default());
    assert_eq!(extraction.header.manifest_number, None);
}

#[test]
fn header_enrichment_via_license_table() {
    let mut licenses = LicenseDirectory::new();
    licenses.insert("402-X0011", "Acme Labs");
    let tables = ReferenceTables {
        licenses: Some(&licenses),
        products: None,
    };
    let extraction = extract_document(&manifest_text(), tables, ExtractionOptions::default());
    assert_eq!(
        extraction.header.license_number.as_deref(),
        Some("402-X0011")
    );
    assert_eq!(
        extraction.header.manifest_number.as_deref(),
        Some("0012345678")
    );
    assert_eq!(extraction.customer.as_deref(), Some("Acme Labs"));
}

#[test]
fn vocabulary_tally_across_packages() {
    let extraction =
        extract_document(&manifest_text(), NO_TABLES, ExtractionOptions::default());
    assert_eq!(extraction.package_count, 2);
    assert_eq!(extraction.mention_count, 3);
    assert_eq!(extraction.tally.get("Potency"), Some(&1));
    assert_eq!(extraction.tally.get("Pesticides"), Some(&2));
    assert_eq!(extraction.tally.len(), 2);
}

#[test]
fn no_package_markers_means_no_rows() {
    let text = "Originating License Number 402-X0011\n\
                Manifest No. 0012345678\n\
                Req'd Lab Test Batches Potency";
    let extraction = extract_document(text, NO_TABLES, ExtractionOptions::default());
    assert_eq!(extraction.package_count, 0);
    assert!(extraction.tally.is_empty());
    assert!(extraction.rows.is_empty());
}

#[test]
fn one_row_per_distinct_service_with_single_group_head() {
    let extraction =
        extract_document(&manifest_text(), NO_TABLES, ExtractionOptions::default());
    assert_eq!(extraction.rows.len(), extraction.tally.len());
    let heads = extraction
        .rows
        .iter()
        .filter(|row| {
            row.manifest_number.is_some() || row.license_number.is_some() || row.customer.is_some()
        })
        .count();
    assert_eq!(heads, 1);
    // Rows follow the tally's lexicographic order.
    assert_eq!(extraction.rows[0].service, "Pesticides");
    assert_eq!(extraction.rows[1].service, "Potency");
}

#[test]
fn catalog_supplies_standardization_and_descriptions() {
    let mut products = ProductCatalog::new();
    products.insert("potency", "Potency Profile", "Full cannabinoid panel");
    let tables = ReferenceTables {
        licenses: None,
        products: Some(&products),
    };
    assert!(tables.row_layout().with_description);
    let extraction = extract_document(&manifest_text(), tables, ExtractionOptions::default());
    assert_eq!(extraction.tally.get("Potency Profile"), Some(&1));
    let potency_row = extraction
        .rows
        .iter()
        .find(|row| row.service == "Potency Profile")
        .expect("potency row");
    assert_eq!(
        potency_row.description.as_deref(),
        Some("Full cannabinoid panel")
    );
}

#[test]
fn drop_policy_discards_unknown_mentions() {
    let text = "header\n1. Package | Accepted\nReq'd Lab Test Batches Terpenes, Potency\n";
    let options = ExtractionOptions::new().with_unmatched_policy(UnmatchedPolicy::Drop);
    let extraction = extract_document(text, NO_TABLES, options);
    assert_eq!(extraction.mention_count, 2);
    assert_eq!(extraction.tally.len(), 1);
    assert_eq!(extraction.tally.get("Potency"), Some(&1));

    let pass = extract_document(text, NO_TABLES, ExtractionOptions::default());
    assert_eq!(pass.tally.get("Terpenes"), Some(&1));
}

#[test]
fn batch_of_two_documents_yields_contiguous_groups() {
    let first = manifest_text();
    let second = first.replace("0012345678", "8765432100");
    let mut all_rows = Vec::new();
    for text in [&first, &second] {
        all_rows.extend(
            extract_document(text, NO_TABLES, ExtractionOptions::default()).rows,
        );
    }
    assert_eq!(all_rows.len(), 4);
    assert_eq!(
        all_rows[0].manifest_number.as_deref(),
        Some("0012345678")
    );
    assert_eq!(all_rows[1].manifest_number, None);
    assert_eq!(
        all_rows[2].manifest_number.as_deref(),
        Some("8765432100")
    );
    assert_eq!(all_rows[3].manifest_number, None);
}
