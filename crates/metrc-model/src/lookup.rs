//! Reference-table lookups used to enrich extracted manifest fields.
//!
//! Both tables are loaded once per run and never mutated afterwards. They are
//! passed into the pipeline explicitly so tests and parallel invocations can
//! each carry their own tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// License number → company name, keyed on the exact license string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LicenseDirectory {
    companies: BTreeMap<String, String>,
}

impl LicenseDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a license → company pair.
    pub fn insert(&mut self, license: &str, company: &str) {
        self.companies
            .insert(license.trim().to_string(), company.trim().to_string());
    }

    /// Company name for a license, or `None` when the license is unknown.
    pub fn company_for(&self, license: &str) -> Option<&str> {
        self.companies.get(license).map(String::as_str)
    }

    /// Number of registered licenses.
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    /// True when no licenses are registered.
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

/// Product name → standardized service name, plus a description per
/// standardized name.
///
/// Product keys are lowercased with whitespace collapsed on insert so the
/// cleaned mention text produced by the service parser can be used for
/// lookup directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCatalog {
    standardized: BTreeMap<String, String>,
    descriptions: BTreeMap<String, String>,
}

impl ProductCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a product with its standardized name and description.
    pub fn insert(&mut self, product: &str, standardized: &str, description: &str) {
        let standardized = standardized.trim().to_string();
        let key = product
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        self.standardized.insert(key, standardized.clone());
        let description = description.trim();
        if !description.is_empty() {
            self.descriptions.insert(standardized, description.to_string());
        }
    }

    /// Standardized name for a cleaned (lowercased, trimmed) product mention.
    pub fn standardize(&self, cleaned: &str) -> Option<&str> {
        self.standardized.get(cleaned).map(String::as_str)
    }

    /// Description for a standardized service name.
    pub fn description_for(&self, standardized: &str) -> Option<&str> {
        self.descriptions.get(standardized).map(String::as_str)
    }

    /// Number of registered products.
    pub fn len(&self) -> usize {
        self.standardized.len()
    }

    /// True when no products are registered.
    pub fn is_empty(&self) -> bool {
        self.standardized.is_empty()
    }
}
