//! Configuration options for manifest extraction.

use serde::{Deserialize, Serialize};

/// Policy for service mentions that match neither the product catalog nor
/// the known-service vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnmatchedPolicy {
    /// Keep the raw trimmed mention as its own canonical service.
    /// Default: dropping silently loses lab-test data.
    #[default]
    PassThrough,
    /// Discard the mention.
    Drop,
}

/// Options controlling extraction behavior.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ExtractionOptions {
    /// What to do with mentions no lookup or vocabulary entry matches.
    pub unmatched_policy: UnmatchedPolicy,
}

impl ExtractionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unmatched_policy(mut self, policy: UnmatchedPolicy) -> Self {
        self.unmatched_policy = policy;
        self
    }
}
