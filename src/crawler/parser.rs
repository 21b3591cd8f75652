//! Link extraction from fetched HTML
//!
//! Only `<a href>` anchors are considered. Absolute http(s) hrefs are yielded
//! exactly as written; relative hrefs (root-relative `/path` included) are
//! resolved against the base URL.

use scraper::{Html, Selector};
use url::Url;

/// Extracts anchor targets from parsed documents
pub struct LinkExtractor {
    anchors: Selector,
}

impl Default for LinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkExtractor {
    pub fn new() -> Self {
        Self {
            anchors: Selector::parse("a[href]").expect("anchor selector is valid"),
        }
    }

    /// Lazily yields the absolute URLs of every followable anchor
    ///
    /// # Link Rules
    ///
    /// **Skipped:**
    /// - empty hrefs and fragment-only links (`#section`)
    /// - `javascript:`, `mailto:`, `tel:` and `data:` links
    /// - anything that is not HTTP(S) once resolved
    ///
    /// # Example
    ///
    /// ```
    /// use news_frontier::crawler::LinkExtractor;
    /// use scraper::Html;
    /// use url::Url;
    ///
    /// let document = Html::parse_document(r#"<a href="/b/c">C</a>"#);
    /// let base = Url::parse("https://example.com/a/").unwrap();
    /// let links: Vec<String> = LinkExtractor::new().links(&document, &base).collect();
    /// assert_eq!(links, vec!["https://example.com/b/c"]);
    /// ```
    pub fn links<'a>(
        &'a self,
        document: &'a Html,
        base_url: &'a Url,
    ) -> impl Iterator<Item = String> + 'a {
        document
            .select(&self.anchors)
            .filter_map(|element| element.value().attr("href"))
            .filter_map(move |href| resolve_link(href, base_url))
    }
}

/// Resolves an href to an absolute URL string
///
/// Returns None if the link should not be followed.
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if ["javascript:", "mailto:", "tel:", "data:"]
        .iter()
        .any(|scheme| lowered.starts_with(scheme))
    {
        return None;
    }

    // Already absolute: keep the string as written
    if let Ok(absolute) = Url::parse(href) {
        return is_http(&absolute).then(|| href.to_string());
    }

    match base_url.join(href) {
        Ok(resolved) if is_http(&resolved) => Some(resolved.to_string()),
        _ => None,
    }
}

fn is_http(url: &Url) -> bool {
    url.scheme() == "http" || url.scheme() == "https"
}

/// Parses `html` and collects its links
///
/// Returns an empty list when `base_url` is not a valid URL.
pub fn extract_links(html: &str, base_url: &str) -> Vec<String> {
    let Ok(base) = Url::parse(base_url) else {
        tracing::warn!("Cannot resolve links against invalid base URL {}", base_url);
        return Vec::new();
    };

    let extractor = LinkExtractor::new();
    let document = Html::parse_document(html);
    let links = extractor.links(&document, &base).collect();
    links
}
