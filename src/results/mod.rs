//! Match types for search results
//!
//! Defines the core result structure delivered over the match stream.

mod types;

pub use types::Match;
