//! Fixed vocabulary of known laboratory service categories.
//!
//! The list is a behavioral contract: matching walks it linearly and the
//! first entry whose lowercased form is contained in the cleaned mention
//! wins. The two "Microbial Contaminant For ..." entries are declared before
//! the generic "Microbial Contaminant" so the generic term cannot shadow
//! them; the rest keeps the source ordering. Do not reorder.

/// Known service categories, in match-precedence order.
pub const KNOWN_SERVICES: &[&str] = &[
    "Homogeneity",
    "Metals",
    "Microbial Contaminant For Edible/Topical Products Only",
    "Microbial Contaminant For Remediated Concentrates Only",
    "Microbial Contaminant",
    "Mycotoxin",
    "Pesticides",
    "Potency",
    "R & D Testing",
    "Residual Solvents",
    "Water Activity",
];

/// First known service whose lowercased name is contained in `cleaned`.
///
/// `cleaned` is expected to be lowercased and whitespace-collapsed already;
/// the mention text may carry arbitrary surrounding words, hence containment
/// rather than equality.
pub fn match_known_service(cleaned: &str) -> Option<&'static str> {
    KNOWN_SERVICES
        .iter()
        .find(|service| cleaned.contains(&service.to_lowercase()))
        .copied()
}
