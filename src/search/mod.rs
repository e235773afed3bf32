//! Search orchestration module
//!
//! Fans out one task per feed, fans their matches in onto a single stream,
//! and closes the stream once every task has finished.

mod executor;

pub use executor::Search;
