//! Matcher loader for building the registry from configuration
//!
//! Registration is an explicit initialization phase: every matcher is
//! registered here, before any search run starts, so the registry is
//! read-only for the lifetime of the process afterwards.

use super::registry::MatcherRegistry;
use super::rss::RssMatcher;
use super::traits::Matcher;
use crate::config::Settings;
use crate::error::Error;
use crate::network::HttpClient;
use std::sync::Arc;
use tracing::{info, warn};

/// Loader for initializing matchers from configuration
pub struct MatcherLoader;

impl MatcherLoader {
    /// Build a registry from settings
    ///
    /// Unknown matcher types are skipped with a warning; a duplicate feed
    /// type is a configuration error and aborts the load.
    pub fn load(settings: &Settings, client: &HttpClient) -> Result<MatcherRegistry, Error> {
        let mut registry = MatcherRegistry::new();

        for config in &settings.matchers {
            if config.disabled {
                info!("skipping disabled matcher: {}", config.feed_type);
                continue;
            }

            match Self::create_matcher(&config.feed_type, client) {
                Some(matcher) => registry.register(&config.feed_type, matcher)?,
                None => {
                    warn!("unknown matcher type: {}", config.feed_type);
                }
            }
        }

        info!("loaded {} matchers", registry.len());
        Ok(registry)
    }

    /// Create a matcher instance by feed type
    fn create_matcher(feed_type: &str, client: &HttpClient) -> Option<Arc<dyn Matcher>> {
        match feed_type {
            "rss" => Some(Arc::new(RssMatcher::new(client.clone()))),
            _ => None,
        }
    }

    /// Get list of available matcher types
    pub fn available_matchers() -> Vec<&'static str> {
        vec!["rss"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatcherConfig;

    fn settings_with(matchers: Vec<MatcherConfig>) -> Settings {
        Settings {
            matchers,
            ..Default::default()
        }
    }

    fn config(feed_type: &str, disabled: bool) -> MatcherConfig {
        MatcherConfig {
            feed_type: feed_type.to_string(),
            disabled,
        }
    }

    #[test]
    fn test_load_registers_rss() {
        let settings = settings_with(vec![config("rss", false)]);
        let registry = MatcherLoader::load(&settings, &HttpClient::new().unwrap()).unwrap();

        assert!(registry.contains("rss"));
        assert!(registry.contains("default"));
    }

    #[test]
    fn test_load_skips_disabled_and_unknown() {
        let settings = settings_with(vec![config("rss", true), config("carrier-pigeon", false)]);
        let registry = MatcherLoader::load(&settings, &HttpClient::new().unwrap()).unwrap();

        assert!(!registry.contains("rss"));
        assert!(!registry.contains("carrier-pigeon"));
    }

    #[test]
    fn test_load_rejects_duplicates() {
        let settings = settings_with(vec![config("rss", false), config("rss", false)]);
        let err = MatcherLoader::load(&settings, &HttpClient::new().unwrap()).unwrap_err();

        assert!(matches!(err, Error::DuplicateMatcher(t) if t == "rss"));
    }
}
