//! Configuration module for feedsearch
//!
//! Handles loading and validating settings from YAML files and environment
//! variables. Settings are constructed once at startup and passed explicitly;
//! there is no global settings instance.

mod settings;

pub use settings::*;
