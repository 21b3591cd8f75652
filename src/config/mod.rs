//! Configuration module for News-Frontier
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so a run without any file uses [`Config::default`].
//!
//! # Example
//!
//! ```no_run
//! use news_frontier::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("news-frontier.toml")).unwrap();
//! println!("Crawl budget: {}", config.crawler.max_visits);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, FetcherConfig, OutputConfig, SiteConfig, DEFAULT_USER_AGENT,
};

pub use parser::{load_config, parse_config};
pub use validation::validate;
