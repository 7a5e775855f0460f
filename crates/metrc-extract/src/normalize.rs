//! Pre-extraction text cleanup.

use std::sync::LazyLock;

use regex::Regex;

/// Boilerplate legal-notice footer appended to Metrc transfer manifests.
/// Spans from the fixed opening phrase through "rejecting any items" and
/// whatever trails it on that line.
static FOOTER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)By receiving this transfer in Metrc[\s\S]+?rejecting any items.*")
        .expect("invalid footer regex")
});

/// Remove the boilerplate footer from raw manifest text.
///
/// The footer is optional cleanup, not validation: text without it comes
/// back unchanged.
pub fn strip_boilerplate_footer(text: &str) -> String {
    FOOTER_REGEX.replace_all(text, "").into_owned()
}
