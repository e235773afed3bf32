//! Crate error types
//!
//! Distinguishes unrecoverable configuration errors (broken setup, caller
//! should abort) from feed-scoped search failures, which stay inside the
//! matchers as `anyhow` errors and never cross the result stream.

use std::path::PathBuf;
use thiserror::Error;

/// Unrecoverable errors surfaced to the caller
#[derive(Debug, Error)]
pub enum Error {
    /// A matcher was registered twice for the same feed type. This is a
    /// broken build-time configuration, not a runtime fault.
    #[error("matcher already registered for feed type {0:?}")]
    DuplicateMatcher(String),

    /// The feed list could not be retrieved
    #[error("failed to retrieve feed list from {}", path.display())]
    FeedList {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// Settings could not be loaded
    #[error("failed to load settings")]
    Config(#[source] anyhow::Error),
}
