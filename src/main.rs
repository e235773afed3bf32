//! Feedsearch: a concurrent feed search engine
//!
//! This is the main entry point for the application.

use anyhow::Result;
use feedsearch::{
    config::Settings,
    feeds,
    matchers::MatcherLoader,
    network::HttpClient,
    search::Search,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    info!("starting feedsearch v{}", feedsearch::VERSION);

    // Load configuration
    let settings = load_settings().map_err(feedsearch::Error::Config)?;

    // Search term from the command line, falling back to the configured default
    let term = std::env::args()
        .nth(1)
        .or_else(|| settings.search.default_term.clone())
        .unwrap_or_else(|| "president".to_string());

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;

    // Build the matcher registry; registration happens entirely before the run
    let registry = MatcherLoader::load(&settings, &client)?;

    // Retrieve the feed list
    let feeds = feeds::retrieve(&settings.feeds.path)?;
    info!("retrieved {} feeds", feeds.len());

    // Run the search, printing matches as they arrive
    let mut search = Search::new(Arc::new(registry));
    if let Some(limit) = settings.search.max_concurrency {
        search = search.with_max_concurrency(limit);
    }

    let delivered = search
        .run(&term, &feeds, |matched| println!("{matched}\n"))
        .await;

    info!("search for {:?} finished with {} matches", term, delivered);
    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    let paths = [
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/feedsearch/settings.yml"),
    ];

    // Check environment variable first
    if let Ok(path) = std::env::var("FEEDSEARCH_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Try each default path
    for path in paths.iter() {
        if path.exists() {
            info!("loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Use defaults
    info!("no settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}
