//! Required-lab-test parsing and canonical service normalization.
//!
//! Normalization resolves each raw mention in order: product-catalog exact
//! match on the cleaned text, then first-match-wins containment against the
//! known-service vocabulary, then the configured unmatched policy.

use std::sync::LazyLock;

use regex::Regex;

use metrc_model::{ProductCatalog, UnmatchedPolicy, match_known_service};

/// The required-test list is the remainder of the field's line. Rest-of-line
/// capture keeps mentions containing punctuation the word/comma-run variant
/// would truncate.
static SERVICES_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // [ \t]* keeps the capture on the anchor's own line; \s* would cross an
    // empty field's newline and grab the next line.
    Regex::new(r"Req'd Lab Test Batches[ \t]*([^\n]*)").expect("invalid services regex")
});

/// Raw comma-separated service mentions from one package block.
///
/// Entries are trimmed and empties dropped; a block without the field yields
/// no mentions.
pub fn extract_service_mentions(block: &str) -> Vec<&str> {
    let Some(captures) = SERVICES_REGEX.captures(block) else {
        return Vec::new();
    };
    let Some(list) = captures.get(1) else {
        return Vec::new();
    };
    list.as_str()
        .split(',')
        .map(str::trim)
        .filter(|mention| !mention.is_empty())
        .collect()
}

/// Lowercase and collapse whitespace runs for lookup.
pub fn clean_mention(raw: &str) -> String {
    raw.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Map a raw mention to its canonical service name.
///
/// Returns `None` only under [`UnmatchedPolicy::Drop`] when neither the
/// catalog nor the vocabulary recognizes the mention.
pub fn canonicalize_service(
    raw: &str,
    catalog: Option<&ProductCatalog>,
    policy: UnmatchedPolicy,
) -> Option<String> {
    let cleaned = clean_mention(raw);
    if let Some(catalog) = catalog
        && let Some(standardized) = catalog.standardize(&cleaned)
    {
        return Some(standardized.to_string());
    }
    if let Some(known) = match_known_service(&cleaned) {
        return Some(known.to_string());
    }
    match policy {
        UnmatchedPolicy::PassThrough => Some(raw.trim().to_string()),
        UnmatchedPolicy::Drop => None,
    }
}
