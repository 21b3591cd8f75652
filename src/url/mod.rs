//! URL handling module for News-Frontier
//!
//! URLs travel through the crawler as plain strings and are compared verbatim.
//! This module only decides which of them belong to the target site.

mod filter;

pub use filter::{host_matches, SiteFilter};
