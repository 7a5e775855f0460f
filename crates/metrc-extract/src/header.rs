//! Anchored extraction of document-level identifying fields.
//!
//! Extraction failure is silent: a pattern that does not match leaves its
//! field as `None`. Downstream row assembly tolerates any combination of
//! missing fields.

use std::sync::LazyLock;

use regex::Regex;

use metrc_model::{LicenseDirectory, ManifestHeader};

static LICENSE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Originating License Number\s+(\S+)").expect("invalid license regex")
});

/// Manifest numbers are exactly ten digits.
static MANIFEST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Manifest No\.\s+(\d{10})").expect("invalid manifest regex"));

static ENTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Originating Entity\s*(.*?)\s*For MED").expect("invalid entity regex")
});

/// First capture group of `regex` in `text`, trimmed; `None` when the
/// pattern is absent or the capture trims to nothing.
fn first_capture(regex: &Regex, text: &str) -> Option<String> {
    let capture = regex.captures(text)?.get(1)?;
    let trimmed = capture.as_str().trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Extract the identifying header fields from normalized manifest text.
pub fn extract_header(text: &str) -> ManifestHeader {
    ManifestHeader {
        license_number: first_capture(&LICENSE_REGEX, text),
        manifest_number: first_capture(&MANIFEST_REGEX, text),
        originating_entity: first_capture(&ENTITY_REGEX, text),
    }
}

/// Resolve the customer name for a document.
///
/// With a license directory, the customer is the company registered for the
/// extracted license (unknown license → `None`). Without one, the customer
/// is the originating-entity text as printed on the manifest.
pub fn resolve_customer(
    header: &ManifestHeader,
    licenses: Option<&LicenseDirectory>,
) -> Option<String> {
    match licenses {
        Some(directory) => header
            .license_number
            .as_deref()
            .and_then(|license| directory.company_for(license))
            .map(str::to_string),
        None => header.originating_entity.clone(),
    }
}
