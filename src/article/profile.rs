//! Site-specific field extraction
//!
//! The extractor never queries the DOM itself; it asks a [`SiteProfile`] for
//! each field, so supporting another site means another profile.

use crate::config::SiteConfig;
use crate::ConfigError;
use scraper::{Html, Selector};

/// Capability to read article fields from a parsed page
///
/// Each method is independent: `None` means the field is absent on this page
/// and never affects the other fields.
pub trait SiteProfile {
    fn extract_date(&self, document: &Html) -> Option<String>;

    fn extract_title(&self, document: &Html) -> Option<String>;

    fn extract_body(&self, document: &Html) -> Option<String>;
}

/// Profile reading each field from the first element matching a CSS selector
#[derive(Debug, Clone)]
pub struct SelectorProfile {
    date: Selector,
    title: Selector,
    content: Selector,
}

impl SelectorProfile {
    /// Builds a profile from three CSS selectors
    pub fn new(date: &str, title: &str, content: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            date: parse_selector(date)?,
            title: parse_selector(title)?,
            content: parse_selector(content)?,
        })
    }

    /// Builds the profile described by the site configuration
    pub fn from_config(site: &SiteConfig) -> Result<Self, ConfigError> {
        Self::new(
            &site.date_selector,
            &site.title_selector,
            &site.content_selector,
        )
    }

    /// El Financiero layout: `<time>` date, `<title>` title, `<article>` body
    pub fn el_financiero() -> Result<Self, ConfigError> {
        Self::new("time", "title", "article")
    }
}

impl SiteProfile for SelectorProfile {
    fn extract_date(&self, document: &Html) -> Option<String> {
        first_text(document, &self.date)
    }

    fn extract_title(&self, document: &Html) -> Option<String> {
        first_text(document, &self.title)
    }

    fn extract_body(&self, document: &Html) -> Option<String> {
        first_text(document, &self.content)
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector)
        .map_err(|e| ConfigError::InvalidSelector(format!("'{}': {:?}", selector, e)))
}

/// Trimmed text of the first match; blank text counts as absent
fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}
