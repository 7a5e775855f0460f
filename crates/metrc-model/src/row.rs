//! Fixed positional row schema for the lab-test spreadsheet.
//!
//! Column positions are significant and consumed downstream by position, not
//! by name. The schema exists in two variants: the base 14-column layout and
//! the description-bearing 15-column layout used whenever a product catalog
//! is available. All other columns stay blank.

use serde::{Deserialize, Serialize};

/// Customer / company name; first row of a document's group only.
pub const COL_CUSTOMER: usize = 1;
/// Manifest number; first row of a document's group only.
pub const COL_MANIFEST_NUMBER: usize = 8;
/// Originating license number; first row of a document's group only.
pub const COL_LICENSE_NUMBER: usize = 9;
/// Canonical service name; every row.
pub const COL_SERVICE: usize = 10;
/// Occurrence count for the service within the document; every row.
pub const COL_COUNT: usize = 13;
/// Service description from the product catalog; description layout only.
pub const COL_DESCRIPTION: usize = 14;

const BASE_COLUMN_COUNT: usize = 14;

/// Which variant of the positional schema a run emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RowLayout {
    /// Append the description column (active when a product catalog is
    /// supplied).
    pub with_description: bool,
}

impl RowLayout {
    /// Total number of cells per row under this layout.
    pub fn column_count(self) -> usize {
        if self.with_description {
            BASE_COLUMN_COUNT + 1
        } else {
            BASE_COLUMN_COUNT
        }
    }
}

/// One (document, canonical service) output row.
///
/// The identifying fields are `None` on every row except the first of a
/// document's group; `None` renders as a blank cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabTestRow {
    pub customer: Option<String>,
    pub manifest_number: Option<String>,
    pub license_number: Option<String>,
    pub service: String,
    pub count: usize,
    pub description: Option<String>,
}

impl LabTestRow {
    /// Render this row into its fixed-arity cell vector.
    pub fn to_cells(&self, layout: RowLayout) -> Vec<String> {
        let mut cells = vec![String::new(); layout.column_count()];
        if let Some(customer) = &self.customer {
            cells[COL_CUSTOMER] = customer.clone();
        }
        if let Some(manifest) = &self.manifest_number {
            cells[COL_MANIFEST_NUMBER] = manifest.clone();
        }
        if let Some(license) = &self.license_number {
            cells[COL_LICENSE_NUMBER] = license.clone();
        }
        cells[COL_SERVICE] = self.service.clone();
        cells[COL_COUNT] = self.count.to_string();
        if layout.with_description
            && let Some(description) = &self.description
        {
            cells[COL_DESCRIPTION] = description.clone();
        }
        cells
    }
}
