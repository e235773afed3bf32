//! Search execution and orchestration

use crate::feeds::Feed;
use crate::matchers::{Matcher, MatcherRegistry};
use crate::results::Match;
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Search executor that coordinates searching across all feeds
///
/// One task runs per feed. Matches from every task are merged onto a single
/// rendezvous channel; a dedicated watcher task joins all feed tasks and is
/// the only place the channel is closed, so closure happens exactly once and
/// strictly after the last producer's last send.
pub struct Search {
    /// Matcher registry, read-only for the duration of every run
    registry: Arc<MatcherRegistry>,
    /// Optional bound on feed tasks running at once
    max_concurrency: Option<usize>,
}

impl Search {
    /// Create a new search executor
    pub fn new(registry: Arc<MatcherRegistry>) -> Self {
        Self {
            registry,
            max_concurrency: None,
        }
    }

    /// Bound the number of concurrently running feed tasks
    pub fn with_max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = Some(limit);
        self
    }

    /// Fan out one search task per feed and return the match stream
    ///
    /// The stream is lazy and arrival-ordered: matches interleave in whatever
    /// order producers complete, though each feed's own matches keep their
    /// production order. The channel has capacity one, so a slow consumer
    /// throttles producers. The receiver yields `None` once every feed task
    /// has finished; a fresh call produces a fresh stream.
    pub fn stream(&self, term: &str, feeds: &[Feed]) -> mpsc::Receiver<Match> {
        let (tx, rx) = mpsc::channel(1);
        let limiter = self.max_concurrency.map(|n| Arc::new(Semaphore::new(n)));

        info!("searching {} feeds for {:?}", feeds.len(), term);

        // Each task receives its feed and matcher by value at launch time.
        let handles: Vec<JoinHandle<()>> = feeds
            .iter()
            .map(|feed| {
                let matcher = self.registry.resolve(&feed.feed_type);
                let feed = feed.clone();
                let term = term.to_string();
                let tx = tx.clone();
                let limiter = limiter.clone();

                tokio::spawn(async move {
                    let _permit = match limiter {
                        Some(sem) => sem.acquire_owned().await.ok(),
                        None => None,
                    };
                    search_feed(matcher, feed, term, tx).await;
                })
            })
            .collect();

        // Watcher: joins every feed task, then drops the last sender. The
        // runners' sender clones are gone by then, so this close is the
        // channel's final transition and no send can follow it.
        tokio::spawn(async move {
            for joined in join_all(handles).await {
                if let Err(err) = joined {
                    error!("feed task panicked: {err}");
                }
            }
            drop(tx);
        });

        rx
    }

    /// Run a search to completion, handing each match to the consumer
    ///
    /// Returns only after every feed task has finished and every match has
    /// been delivered; the return value is the number of matches delivered.
    pub async fn run<F>(&self, term: &str, feeds: &[Feed], mut consumer: F) -> usize
    where
        F: FnMut(Match),
    {
        let mut rx = self.stream(term, feeds);
        let mut delivered = 0;

        while let Some(matched) = rx.recv().await {
            consumer(matched);
            delivered += 1;
        }

        debug!("search for {:?} delivered {} matches", term, delivered);
        delivered
    }
}

/// Search one feed and forward its matches onto the shared stream
///
/// A failing matcher is logged and contributes zero matches; it never stops
/// sibling feeds. Completion is signaled by this task ending, which happens
/// on the error path too.
async fn search_feed(matcher: Arc<dyn Matcher>, feed: Feed, term: String, tx: mpsc::Sender<Match>) {
    debug!("searching feed {} with {} matcher", feed.name, matcher.name());

    match matcher.search(&feed, &term).await {
        Ok(matches) => {
            for matched in matches {
                // A send error means the consumer hung up; nothing left to do.
                if tx.send(matched).await.is_err() {
                    debug!("consumer gone, dropping remaining matches from {}", feed.name);
                    return;
                }
            }
        }
        Err(err) => warn!("search of feed {} failed: {err:#}", feed.name),
    }
}
