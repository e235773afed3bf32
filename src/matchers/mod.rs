//! Matcher module
//!
//! Defines the Matcher trait and provides a registry mapping feed types to
//! matcher implementations.

mod loader;
mod registry;
mod traits;

// Matcher implementations
pub mod default;
pub mod rss;

pub use loader::MatcherLoader;
pub use registry::{MatcherRegistry, DEFAULT_FEED_TYPE};
pub use traits::Matcher;
