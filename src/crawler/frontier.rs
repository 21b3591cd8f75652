//! Crawl frontier: visited URLs plus the FIFO queue of URLs awaiting a visit
//!
//! Consuming the queue first-in first-out makes the crawl breadth-first: every
//! URL discovered at depth N is visited before anything discovered at N+1.

use std::collections::{HashSet, VecDeque};
use thiserror::Error;

/// Frontier errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontierError {
    #[error("Frontier is empty")]
    Empty,
}

/// Dedup-enforcing crawl frontier
///
/// A URL is admitted at most once for the lifetime of the frontier. That covers
/// the window between [`Frontier::next`] and [`Frontier::mark_visited`], so a
/// page linking to itself cannot re-queue itself while it is being crawled.
#[derive(Debug, Default)]
pub struct Frontier {
    /// Visited URLs in visitation order
    visited: Vec<String>,

    /// URLs awaiting a visit
    pending: VecDeque<String>,

    /// Every URL ever admitted
    seen: HashSet<String>,
}

impl Frontier {
    /// Creates a frontier seeded with `seeds`, in order
    ///
    /// The seed list is owned by this instance; duplicates among the seeds are
    /// admitted once.
    pub fn new<I, S>(seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut frontier = Self::default();
        for seed in seeds {
            frontier.admit(seed);
        }
        frontier
    }

    /// Queues `url` unless it was admitted before
    ///
    /// Returns true if the URL was queued.
    pub fn admit(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if self.seen.contains(&url) {
            return false;
        }
        self.seen.insert(url.clone());
        self.pending.push_back(url);
        true
    }

    /// Removes and returns the oldest pending URL
    pub fn next(&mut self) -> Result<String, FrontierError> {
        self.pending.pop_front().ok_or(FrontierError::Empty)
    }

    /// Records that a crawl of `url` was attempted
    pub fn mark_visited(&mut self, url: impl Into<String>) {
        let url = url.into();
        // Keeps the dedup guarantee for URLs that never went through admit()
        self.seen.insert(url.clone());
        self.visited.push(url);
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.iter().any(|visited| visited == url)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending URLs, head first
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.pending.iter().map(String::as_str)
    }

    /// Visited URLs in visitation order
    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    pub fn into_visited(self) -> Vec<String> {
        self.visited
    }
}
