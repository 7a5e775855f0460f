//! Data model for the Metrc manifest lab-test extractor.

pub mod header;
pub mod lookup;
pub mod options;
pub mod row;
pub mod vocabulary;

pub use header::ManifestHeader;
pub use lookup::{LicenseDirectory, ProductCatalog};
pub use options::{ExtractionOptions, UnmatchedPolicy};
pub use row::{
    COL_COUNT, COL_CUSTOMER, COL_DESCRIPTION, COL_LICENSE_NUMBER, COL_MANIFEST_NUMBER, COL_SERVICE,
    LabTestRow, RowLayout,
};
pub use vocabulary::{KNOWN_SERVICES, match_known_service};
