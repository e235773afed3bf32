//! RSS matcher implementation
//!
//! Fetches an RSS 2.0 document from the feed URI and reports a match for
//! every item whose title or description contains the search term.

use super::traits::Matcher;
use crate::feeds::Feed;
use crate::network::HttpClient;
use crate::results::Match;
use anyhow::Result as AnyhowResult;
use async_trait::async_trait;
use regex::{Regex, RegexBuilder};

/// Matcher for RSS feeds
pub struct RssMatcher {
    client: HttpClient,
}

impl RssMatcher {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Compile the search term into a case-insensitive pattern
    fn compile_term(term: &str) -> AnyhowResult<Regex> {
        RegexBuilder::new(term)
            .case_insensitive(true)
            .build()
            .map_err(|e| anyhow::anyhow!("invalid search term {:?}: {}", term, e))
    }

    /// Scan the RSS document for items matching the pattern
    fn match_document(feed: &Feed, xml: &str, pattern: &Regex) -> Vec<Match> {
        let mut matches = Vec::new();

        for item_str in xml.split("<item>").skip(1) {
            let item_end = match item_str.find("</item>") {
                Some(pos) => pos,
                None => continue,
            };
            let item = &item_str[..item_end];

            if let Some(title) = Self::extract_tag(item, "title") {
                if pattern.is_match(&title) {
                    matches.push(Match::new(&feed.name, "Title", title));
                }
            }

            if let Some(description) = Self::extract_tag(item, "description") {
                if pattern.is_match(&description) {
                    matches.push(Match::new(&feed.name, "Description", description));
                }
            }
        }

        matches
    }

    /// Extract text content from an XML tag, unwrapping CDATA sections
    fn extract_tag(xml: &str, tag: &str) -> Option<String> {
        let start_tag = format!("<{}", tag);
        let end_tag = format!("</{}>", tag);

        let start = xml.find(&start_tag)?;
        let content_start = xml[start..].find('>')? + start + 1;
        let end = xml[content_start..].find(&end_tag)? + content_start;

        let content = xml[content_start..end].trim();
        let content = content
            .strip_prefix("<![CDATA[")
            .and_then(|c| c.strip_suffix("]]>"))
            .unwrap_or(content);

        Some(content.trim().to_string())
    }
}

#[async_trait]
impl Matcher for RssMatcher {
    fn name(&self) -> &str {
        "rss"
    }

    async fn search(&self, feed: &Feed, term: &str) -> AnyhowResult<Vec<Match>> {
        let pattern = Self::compile_term(term)?;

        let response = self.client.get(&feed.uri).await?;
        if !response.is_success() {
            return Err(anyhow::anyhow!(
                "feed {} responded with HTTP {}",
                feed.uri,
                response.status
            ));
        }

        Ok(Self::match_document(feed, &response.text, &pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const RSS_DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>World News</title>
    <item>
      <title>Election results roll in</title>
      <description><![CDATA[Polls close across the country.]]></description>
    </item>
    <item>
      <title>Weather update</title>
      <description>Rain expected through the election weekend.</description>
    </item>
    <item>
      <title>Sports roundup</title>
      <description>Highlights from the weekend games.</description>
    </item>
  </channel>
</rss>"#;

    fn feed(uri: &str) -> Feed {
        Feed::new("worldnews", uri, "rss")
    }

    #[test]
    fn test_extract_tag() {
        let xml = "<item><title>Test Title</title><description>Body</description></item>";
        assert_eq!(
            RssMatcher::extract_tag(xml, "title"),
            Some("Test Title".to_string())
        );
        assert_eq!(RssMatcher::extract_tag(xml, "missing"), None);
    }

    #[test]
    fn test_extract_tag_cdata() {
        let xml = "<item><description><![CDATA[Wrapped <b>text</b>]]></description></item>";
        assert_eq!(
            RssMatcher::extract_tag(xml, "description"),
            Some("Wrapped <b>text</b>".to_string())
        );
    }

    #[test]
    fn test_match_document_fields() {
        let pattern = RssMatcher::compile_term("election").unwrap();
        let matches = RssMatcher::match_document(&feed("unused"), RSS_DOCUMENT, &pattern);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].field, "Title");
        assert_eq!(matches[0].content, "Election results roll in");
        assert_eq!(matches[1].field, "Description");
        assert!(matches.iter().all(|m| m.feed == "worldnews"));
    }

    #[test]
    fn test_invalid_term_is_an_error() {
        assert!(RssMatcher::compile_term("[unclosed").is_err());
    }

    #[tokio::test]
    async fn test_search_fetches_and_matches() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/feed.xml"))
            .respond_with(ResponseTemplate::new(200).set_body_string(RSS_DOCUMENT))
            .mount(&server)
            .await;

        let matcher = RssMatcher::new(HttpClient::new().unwrap());
        let feed = feed(&format!("{}/feed.xml", server.uri()));

        let matches = matcher.search(&feed, "weekend").await.unwrap();
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|m| m.field == "Description"));
    }

    #[tokio::test]
    async fn test_search_reports_http_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/feed.xml"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let matcher = RssMatcher::new(HttpClient::new().unwrap());
        let feed = feed(&format!("{}/feed.xml", server.uri()));

        let err = matcher.search(&feed, "weekend").await.unwrap_err();
        assert!(err.to_string().contains("500"));
    }
}
