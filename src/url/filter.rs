use crate::config::SiteConfig;
use url::Url;

/// Predicate selecting which visited URLs belong to the target site
///
/// A URL passes when its host matches the domain pattern and, if required,
/// its scheme is `https`. Unparseable URLs never pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFilter {
    pattern: String,
    require_https: bool,
}

impl SiteFilter {
    /// Creates a filter for a domain pattern ("example.com" or "*.example.com")
    pub fn new(pattern: impl Into<String>, require_https: bool) -> Self {
        Self {
            pattern: pattern.into().to_lowercase(),
            require_https,
        }
    }

    /// Builds the filter described by the site configuration
    pub fn from_config(site: &SiteConfig) -> Self {
        Self::new(site.domain.clone(), site.require_https)
    }

    /// The lowercase domain pattern
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns true if `url` belongs to the target site
    ///
    /// # Examples
    ///
    /// ```
    /// use news_frontier::url::SiteFilter;
    ///
    /// let filter = SiteFilter::new("*.example.com", true);
    /// assert!(filter.matches("https://www.example.com/news/1"));
    /// assert!(!filter.matches("http://www.example.com/news/1"));
    /// assert!(!filter.matches("https://example.org/"));
    /// ```
    pub fn matches(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };

        match parsed.scheme() {
            "https" => {}
            "http" if !self.require_https => {}
            _ => return false,
        }

        parsed
            .host_str()
            .map(|host| host_matches(&self.pattern, &host.to_lowercase()))
            .unwrap_or(false)
    }

    /// Keeps the URLs that pass the filter, preserving order
    pub fn apply<'a, I>(&'a self, urls: I) -> impl Iterator<Item = &'a String> + 'a
    where
        I: IntoIterator<Item = &'a String>,
        I::IntoIter: 'a,
    {
        urls.into_iter().filter(move |url| self.matches(url))
    }
}

/// Matches a host against an exact or `*.` wildcard pattern
///
/// The wildcard form also matches the bare domain.
pub fn host_matches(pattern: &str, host: &str) -> bool {
    match pattern.strip_prefix("*.") {
        Some(base) => {
            host == base
                || host
                    .strip_suffix(base)
                    .is_some_and(|prefix| prefix.ends_with('.'))
        }
        None => host == pattern,
    }
}
