//! Matcher registry mapping feed types to matcher implementations

use super::default::DefaultMatcher;
use super::traits::Matcher;
use crate::error::Error;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Feed type resolved when no matcher is registered for a type
pub const DEFAULT_FEED_TYPE: &str = "default";

/// Registry of all available matchers, keyed by feed type
///
/// Built once before orchestration begins and read-only during a run, so it
/// needs no locking; share it across tasks as `Arc<MatcherRegistry>`.
pub struct MatcherRegistry {
    matchers: HashMap<String, Arc<dyn Matcher>>,
}

impl MatcherRegistry {
    /// Create a registry with the default matcher pre-installed
    ///
    /// The `"default"` entry is installed here so that [`resolve`] can honor
    /// its never-fails contract from the moment the registry exists.
    ///
    /// [`resolve`]: MatcherRegistry::resolve
    pub fn new() -> Self {
        let mut matchers: HashMap<String, Arc<dyn Matcher>> = HashMap::new();
        matchers.insert(DEFAULT_FEED_TYPE.to_string(), Arc::new(DefaultMatcher));
        Self { matchers }
    }

    /// Register a matcher for a feed type
    ///
    /// Registering the same feed type twice is a broken configuration and
    /// returns [`Error::DuplicateMatcher`]; the caller decides whether to
    /// abort the process.
    pub fn register(
        &mut self,
        feed_type: impl Into<String>,
        matcher: Arc<dyn Matcher>,
    ) -> Result<(), Error> {
        let feed_type = feed_type.into();
        if self.matchers.contains_key(&feed_type) {
            return Err(Error::DuplicateMatcher(feed_type));
        }

        info!("registered {} matcher for feed type {}", matcher.name(), feed_type);
        self.matchers.insert(feed_type, matcher);
        Ok(())
    }

    /// Resolve the matcher for a feed type
    ///
    /// Falls back to the `"default"` matcher for unregistered types; never
    /// fails.
    pub fn resolve(&self, feed_type: &str) -> Arc<dyn Matcher> {
        self.matchers
            .get(feed_type)
            .or_else(|| self.matchers.get(DEFAULT_FEED_TYPE))
            .cloned()
            .unwrap_or_else(|| Arc::new(DefaultMatcher))
    }

    /// Check if a matcher is registered for a feed type
    pub fn contains(&self, feed_type: &str) -> bool {
        self.matchers.contains_key(feed_type)
    }

    /// Get all registered feed types
    pub fn feed_types(&self) -> Vec<&str> {
        self.matchers.keys().map(|s| s.as_str()).collect()
    }

    /// Get number of registered matchers
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Check if registry holds only the default matcher
    pub fn is_empty(&self) -> bool {
        self.matchers.len() <= 1
    }
}

impl std::fmt::Debug for MatcherRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatcherRegistry")
            .field("feed_types", &self.feed_types())
            .finish()
    }
}

impl Default for MatcherRegistry {
    fn default() -> Self {
        Self::new()
    }
}
