//! Segmentation of manifest text into per-package blocks.

use std::sync::LazyLock;

use regex::Regex;

/// Per-package header line: an ordinal followed by the accepted-package
/// marker, e.g. "\n12. Package | Accepted".
static PACKAGE_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\d+\. Package \| Accepted").expect("invalid package regex"));

/// Split normalized manifest text into package blocks.
///
/// The segment before the first package header is document metadata and is
/// discarded. Text without any package header yields no blocks: the document
/// simply contributes no services.
pub fn split_package_blocks(text: &str) -> Vec<&str> {
    let mut segments = PACKAGE_HEADER_REGEX.split(text);
    // Leading segment is the document header, not a package.
    let _ = segments.next();
    segments.collect()
}
