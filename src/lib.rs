//! News-Frontier: a breadth-first news article harvester
//!
//! This crate crawls a single news site breadth-first, extracts the date, title
//! and body of every article page it visited, stores the raw HTML of each article
//! and exports the collected records as a CSV table.

pub mod article;
pub mod config;
pub mod crawler;
pub mod output;
pub mod pipeline;
pub mod url;

use thiserror::Error;

/// Fatal errors that abort a harvest run
///
/// Per-page failures never surface here: fetch and parse problems are logged and
/// recorded where they happen, so only setup failures reach the caller.
#[derive(Debug, Error)]
pub enum NewsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Failed to prepare article directory {path}: {source}")]
    ArticleStore {
        path: String,
        source: std::io::Error,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid domain pattern: {0}")]
    InvalidPattern(String),

    #[error("Invalid CSS selector: {0}")]
    InvalidSelector(String),
}

/// Result type alias for News-Frontier operations
pub type Result<T> = std::result::Result<T, NewsError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use crate::article::{ArticleExtractor, ArticleRecord, ArticleStore, SelectorProfile, SiteProfile};
pub use crate::config::Config;
pub use crate::crawler::{CrawlReport, Crawler, Fetcher, Frontier, HttpFetcher, Page, Termination};
pub use crate::output::Exporter;
pub use crate::pipeline::harvest;
pub use crate::url::SiteFilter;
