//! Result type definitions

use serde::{Deserialize, Serialize};

/// A single match found in a feed
///
/// Ownership transfers to the consumer when the match is sent on the result
/// stream; producers never touch a match again after sending it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Match {
    /// Name of the feed the match came from
    pub feed: String,
    /// Which part of the feed matched (e.g. "Title", "Description")
    pub field: String,
    /// The matched text
    pub content: String,
}

impl Match {
    /// Create a new match
    pub fn new(
        feed: impl Into<String>,
        field: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            feed: feed.into(),
            field: field.into(),
            content: content.into(),
        }
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}:\n{}", self.feed, self.field, self.content)
    }
}
