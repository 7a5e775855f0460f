//! Extraction pipeline for Metrc transfer-manifest text.
//!
//! Stages, in order:
//! 1. **Normalize**: strip the boilerplate legal footer
//! 2. **Header**: anchored extraction of license / manifest / entity fields
//! 3. **Packages**: segment the text into per-package blocks
//! 4. **Services**: parse required-test mentions and canonicalize them
//! 5. **Aggregate**: tally canonical services per document
//! 6. **Rows**: assemble the fixed-schema output rows
//!
//! Everything here is a pure, synchronous text transform; per-field failures
//! degrade to absent data instead of propagating as errors.

pub mod aggregate;
pub mod document;
pub mod header;
pub mod normalize;
pub mod packages;
pub mod rows;
pub mod services;

pub use aggregate::{ServiceTally, tally_services};
pub use document::{DocumentExtraction, ReferenceTables, extract_document};
pub use header::{extract_header, resolve_customer};
pub use normalize::strip_boilerplate_footer;
pub use packages::split_package_blocks;
pub use rows::build_document_rows;
pub use services::{canonicalize_service, clean_mention, extract_service_mentions};
