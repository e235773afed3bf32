//! Settings structures for feedsearch configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub search: SearchSettings,
    pub feeds: FeedSettings,
    pub outgoing: OutgoingSettings,
    pub matchers: Vec<MatcherConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            search: SearchSettings::default(),
            feeds: FeedSettings::default(),
            outgoing: OutgoingSettings::default(),
            matchers: default_matchers(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (FEEDSEARCH_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("FEEDSEARCH_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("FEEDSEARCH_FEEDS_PATH") {
            self.feeds.path = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("FEEDSEARCH_MAX_CONCURRENCY") {
            if let Ok(n) = val.parse() {
                self.search.max_concurrency = Some(n);
            }
        }
    }

    /// Get matcher config by feed type
    pub fn get_matcher(&self, feed_type: &str) -> Option<&MatcherConfig> {
        self.matchers.iter().find(|m| m.feed_type == feed_type)
    }

    /// Get all enabled matchers
    pub fn enabled_matchers(&self) -> Vec<&MatcherConfig> {
        self.matchers.iter().filter(|m| !m.disabled).collect()
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug mode
    pub debug: bool,
    /// Instance name used in logs
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "feedsearch".to_string(),
        }
    }
}

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchSettings {
    /// Upper bound on feed tasks running at once (none = one task per feed,
    /// unbounded)
    pub max_concurrency: Option<usize>,
    /// Search term used when none is given on the command line
    pub default_term: Option<String>,
}

/// Feed list settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSettings {
    /// Path to the feed list document
    pub path: PathBuf,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/feeds.json"),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Default request timeout in seconds
    pub request_timeout: f64,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy URL applied to all outgoing requests
    pub proxy: Option<String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: crate::DEFAULT_TIMEOUT as f64,
            verify_ssl: true,
            proxy: None,
        }
    }
}

/// Configuration for one registered matcher
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MatcherConfig {
    /// Feed type this matcher handles
    pub feed_type: String,
    /// Skip registration of this matcher
    pub disabled: bool,
}

/// Matchers registered when no settings file is present
fn default_matchers() -> Vec<MatcherConfig> {
    vec![MatcherConfig {
        feed_type: "rss".to_string(),
        disabled: false,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.feeds.path, PathBuf::from("data/feeds.json"));
        assert_eq!(settings.matchers.len(), 1);
        assert_eq!(settings.matchers[0].feed_type, "rss");
        assert!(settings.search.max_concurrency.is_none());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
general:
  debug: true
search:
  max_concurrency: 8
feeds:
  path: /tmp/feeds.json
matchers:
  - feed_type: rss
  - feed_type: atom
    disabled: true
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert!(settings.general.debug);
        assert_eq!(settings.search.max_concurrency, Some(8));
        assert_eq!(settings.matchers.len(), 2);
        assert_eq!(settings.enabled_matchers().len(), 1);
        assert!(settings.get_matcher("atom").unwrap().disabled);
    }
}
