//! HTTP networking module
//!
//! Provides HTTP client functionality for fetching feed content.

mod client;

pub use client::{FetchResponse, HttpClient};
