//! Feed descriptors and feed list retrieval
//!
//! Feeds are loaded once from a JSON document before a run starts and are
//! read-only afterwards. A retrieval failure is unrecoverable: without a
//! feed list there is nothing to search.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One data source to search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feed {
    /// Display name of the feed
    #[serde(rename = "site")]
    pub name: String,
    /// Location the feed is fetched from
    #[serde(rename = "link")]
    pub uri: String,
    /// Feed type, selects the matcher used to search it
    #[serde(rename = "type")]
    pub feed_type: String,
}

impl Feed {
    pub fn new(
        name: impl Into<String>,
        uri: impl Into<String>,
        feed_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            feed_type: feed_type.into(),
        }
    }
}

/// Retrieve the feed list from a JSON document
pub fn retrieve<P: AsRef<Path>>(path: P) -> Result<Vec<Feed>, Error> {
    let path = path.as_ref();
    let wrap = |source: anyhow::Error| Error::FeedList {
        path: path.to_path_buf(),
        source,
    };

    let content = std::fs::read_to_string(path).map_err(|e| wrap(e.into()))?;
    parse(&content).map_err(wrap)
}

/// Parse a feed list document
fn parse(content: &str) -> anyhow::Result<Vec<Feed>> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"[
        {"site": "npr", "link": "https://www.npr.org/rss/rss.php?id=1001", "type": "rss"},
        {"site": "cnn", "link": "https://rss.cnn.com/rss/cnn_world.rss", "type": "rss"},
        {"site": "legacy", "link": "https://example.com/archive", "type": "atom"}
    ]"#;

    #[test]
    fn test_parse_document() {
        let feeds = parse(DOCUMENT).unwrap();
        assert_eq!(feeds.len(), 3);
        assert_eq!(feeds[0].name, "npr");
        assert_eq!(feeds[0].feed_type, "rss");
        assert_eq!(feeds[2].feed_type, "atom");
    }

    #[test]
    fn test_parse_invalid_document() {
        assert!(parse("not json").is_err());
    }

    #[test]
    fn test_retrieve_missing_file() {
        let err = retrieve("does/not/exist.json").unwrap_err();
        assert!(matches!(err, Error::FeedList { .. }));
    }
}
