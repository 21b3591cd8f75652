//! Crawler coordinator - the bounded breadth-first crawl loop
//!
//! The loop pops one URL at a time from the [`Frontier`], fetches it, feeds the
//! page's links back into the frontier and marks the URL visited whatever the
//! outcome. A failed URL is never retried within the run, and the visit budget
//! guarantees termination even on sites with endless link graphs.

use crate::config::CrawlerConfig;
use crate::crawler::fetcher::Fetcher;
use crate::crawler::frontier::{Frontier, FrontierError};
use crate::crawler::parser::extract_links;
use std::time::Duration;

/// Why the crawl loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The frontier ran out of URLs
    Drained,
    /// The visit budget was used up
    Bounded,
}

/// Result of a crawl run
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Every URL a fetch was attempted for, in visitation order
    pub visited: Vec<String>,

    /// How the loop ended
    pub termination: Termination,

    /// Number of visits whose fetch failed or returned non-2xx
    pub failures: usize,

    /// URLs still queued when the loop stopped
    pub pending: usize,
}

/// Breadth-first crawler over a [`Fetcher`]
pub struct Crawler<'a, F> {
    fetcher: &'a F,
    throttle_every: usize,
    throttle_pause: Duration,
}

impl<'a, F: Fetcher> Crawler<'a, F> {
    /// Creates a crawler using the throttle settings from `config`
    pub fn new(fetcher: &'a F, config: &CrawlerConfig) -> Self {
        Self {
            fetcher,
            throttle_every: config.throttle_every,
            throttle_pause: Duration::from_millis(config.throttle_pause_ms),
        }
    }

    /// Crawls from `seeds` until the frontier drains or `max_visits` fetches
    /// have been attempted
    ///
    /// Per-URL failures are logged and counted; they never abort the loop.
    pub async fn run(&self, seeds: Vec<String>, max_visits: usize) -> CrawlReport {
        let mut frontier = Frontier::new(seeds);
        let mut failures = 0;
        let mut termination = Termination::Bounded;

        tracing::info!(
            "Starting crawl: {} seed(s), budget {} visits",
            frontier.pending_len(),
            max_visits
        );

        for iteration in 0..max_visits {
            let url = match frontier.next() {
                Ok(url) => url,
                Err(FrontierError::Empty) => {
                    tracing::info!("Frontier is empty after {} visits", iteration);
                    termination = Termination::Drained;
                    break;
                }
            };

            tracing::info!("{} Crawling: {}", iteration, url);

            if !self.crawl_one(&url, &mut frontier).await {
                failures += 1;
            }
            frontier.mark_visited(url);

            let completed = iteration + 1;
            if completed < max_visits {
                self.throttle(completed, &frontier).await;
            }
        }

        // Budget spent exactly as the queue emptied
        if termination == Termination::Bounded && frontier.is_empty() {
            termination = Termination::Drained;
        }

        tracing::info!(
            "Crawl finished ({:?}): {} visited, {} failed, {} still pending",
            termination,
            frontier.visited_len(),
            failures,
            frontier.pending_len()
        );

        let pending = frontier.pending_len();
        CrawlReport {
            visited: frontier.into_visited(),
            termination,
            failures,
            pending,
        }
    }

    /// Fetches one URL and admits its links; returns false on failure
    async fn crawl_one(&self, url: &str, frontier: &mut Frontier) -> bool {
        let page = match self.fetcher.fetch(url).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Failed to crawl {}: {}", url, e);
                return false;
            }
        };

        if !page.is_success() {
            tracing::warn!(
                "Failed to crawl {}: HTTP {} {}",
                url,
                page.status_code,
                page.reason
            );
            return false;
        }

        let links = extract_links(&page.body, &page.final_url);
        let found = links.len();
        let admitted = links
            .into_iter()
            .filter(|link| frontier.admit(link.as_str()))
            .count();

        tracing::debug!("{}: {} links, {} new", url, found, admitted);
        true
    }

    /// Pauses after every `throttle_every` iterations while work remains
    ///
    /// Never called once the budget is spent.
    async fn throttle(&self, completed: usize, frontier: &Frontier) {
        if self.throttle_every == 0 || completed % self.throttle_every != 0 {
            return;
        }
        if frontier.is_empty() {
            return;
        }

        tracing::info!(
            "Current number of urls to visit: {} in {} iterations",
            frontier.pending_len(),
            completed
        );

        if !self.throttle_pause.is_zero() {
            tokio::time::sleep(self.throttle_pause).await;
        }
    }
}
