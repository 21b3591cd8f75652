//! Article module: per-page field extraction and raw HTML persistence
//!
//! Each qualifying URL is fetched once more, its date, title and content are
//! read through a [`SiteProfile`], and the raw body is written to an
//! [`ArticleStore`]. Failures stay local to the article: a missing field yields
//! a partial record and a failed fetch yields an error record.

mod extractor;
mod profile;
mod store;

pub use extractor::ArticleExtractor;
pub use profile::{SelectorProfile, SiteProfile};
pub use store::{sanitize_component, ArticleStore};

/// Outcome of extracting one article URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleRecord {
    /// The page was fetched; any field may be missing
    Article {
        url: String,
        date: Option<String>,
        title: Option<String>,
        content: Option<String>,
    },

    /// The page could not be fetched or answered non-2xx
    Failed {
        error: String,
        status_code: Option<u16>,
    },
}

impl ArticleRecord {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Returns true if an article record lacks any of its optional fields
    pub fn is_partial(&self) -> bool {
        match self {
            Self::Article {
                date,
                title,
                content,
                ..
            } => date.is_none() || title.is_none() || content.is_none(),
            Self::Failed { .. } => false,
        }
    }

    /// The keys present on this record with their cell values
    ///
    /// Absent optional fields contribute no key, so the export header is the
    /// union of what the records actually carry.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Article {
                url,
                date,
                title,
                content,
            } => {
                let mut fields = vec![("url", url.clone())];
                let optional = [("date", date), ("title", title), ("content", content)];
                for (key, value) in optional {
                    if let Some(value) = value {
                        fields.push((key, value.clone()));
                    }
                }
                fields
            }
            Self::Failed { error, status_code } => {
                let mut fields = vec![("error", error.clone())];
                if let Some(code) = status_code {
                    fields.push(("status_code", code.to_string()));
                }
                fields
            }
        }
    }
}
