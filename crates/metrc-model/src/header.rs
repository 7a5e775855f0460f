//! Document-level fields extracted from a manifest.

use serde::{Deserialize, Serialize};

/// Identifying fields pulled from one manifest document.
///
/// Every field is optional: an anchored pattern that fails to match leaves
/// its field as `None` rather than raising an error. Fields stay `None`
/// internally and are rendered to empty cells only at row assembly, so
/// "absent" and "genuinely empty" never get conflated mid-pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestHeader {
    /// Originating license number (e.g., "402-X0011").
    pub license_number: Option<String>,
    /// Ten-digit manifest number.
    pub manifest_number: Option<String>,
    /// Originating entity name as printed on the manifest.
    pub originating_entity: Option<String>,
}
