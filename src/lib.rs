//! Feedsearch: a concurrent feed search engine
//!
//! Searches a heterogeneous set of data feeds in parallel for a search term
//! and streams matches to a consumer as they arrive. Each feed type plugs in
//! its own [`Matcher`] through a registry built before the run starts.

pub mod config;
pub mod error;
pub mod feeds;
pub mod matchers;
pub mod network;
pub mod results;
pub mod search;

pub use config::Settings;
pub use error::Error;
pub use feeds::Feed;
pub use matchers::{Matcher, MatcherLoader, MatcherRegistry};
pub use results::Match;
pub use search::Search;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout for feed fetches in seconds
pub const DEFAULT_TIMEOUT: u64 = 5;
