//! Matcher trait

use crate::feeds::Feed;
use crate::results::Match;
use async_trait::async_trait;

/// Capability implemented by every feed type to search its feeds for a term
///
/// Matchers are stateless: one instance may be invoked concurrently by many
/// feed tasks, so implementations keep no per-feed mutable state. A matcher
/// that performs I/O returns a descriptive error rather than failing the run;
/// the orchestrator isolates the failure to the affected feed.
#[async_trait]
pub trait Matcher: Send + Sync {
    /// Matcher name, used for logging
    fn name(&self) -> &str;

    /// Search one feed for the term and return every match found
    async fn search(&self, feed: &Feed, term: &str) -> anyhow::Result<Vec<Match>>;
}
