//! Crawler module for web page fetching and link following
//!
//! This module contains the crawl phase of a harvest, including:
//! - HTTP fetching behind the [`Fetcher`] trait
//! - HTML link extraction
//! - The deduplicating FIFO frontier
//! - The bounded crawl loop

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::{CrawlReport, Crawler, Termination};
pub use fetcher::{build_http_client, FetchError, Fetcher, HttpFetcher, Page};
pub use frontier::{Frontier, FrontierError};
pub use parser::{extract_links, LinkExtractor};

#[cfg(test)]
pub(crate) use fetcher::testing;
