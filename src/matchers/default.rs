//! Default matcher implementation
//!
//! Matches nothing and never fails. It exists so the registry's `resolve`
//! never needs to return an error for an unknown feed type.

use super::traits::Matcher;
use crate::feeds::Feed;
use crate::results::Match;
use async_trait::async_trait;

/// Fallback matcher for feed types without a registered matcher
pub struct DefaultMatcher;

#[async_trait]
impl Matcher for DefaultMatcher {
    fn name(&self) -> &str {
        "default"
    }

    async fn search(&self, _feed: &Feed, _term: &str) -> anyhow::Result<Vec<Match>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_matcher_matches_nothing() {
        let feed = Feed::new("npr", "https://www.npr.org", "unknown");
        let matches = DefaultMatcher.search(&feed, "anything").await.unwrap();
        assert!(matches.is_empty());
    }
}
