//! Output module: the export stage of a harvest
//!
//! This module handles:
//! - Selecting the visited URLs that belong to the target site
//! - Extracting one record per selected URL
//! - Writing the record collection as a CSV table

mod table;

pub use table::{escape_column, header_for, write_table, ExportError};

use crate::article::{ArticleExtractor, ArticleRecord, SiteProfile};
use crate::crawler::Fetcher;
use crate::url::SiteFilter;
use std::path::PathBuf;

/// Export stage over an [`ArticleExtractor`]
pub struct Exporter<'a, F, P> {
    extractor: ArticleExtractor<'a, F, P>,
    table_path: PathBuf,
}

impl<'a, F: Fetcher, P: SiteProfile> Exporter<'a, F, P> {
    pub fn new(extractor: ArticleExtractor<'a, F, P>, table_path: impl Into<PathBuf>) -> Self {
        Self {
            extractor,
            table_path: table_path.into(),
        }
    }

    /// Extracts the site's visited URLs in order
    ///
    /// Returns the filtered URLs alongside one record per URL.
    pub async fn collect(
        &self,
        visited: &[String],
        filter: &SiteFilter,
    ) -> (Vec<String>, Vec<ArticleRecord>) {
        let urls: Vec<String> = filter.apply(visited).cloned().collect();

        tracing::info!(
            "Extracting {} of {} visited URLs matching {}",
            urls.len(),
            visited.len(),
            filter.pattern()
        );

        let mut records = Vec::with_capacity(urls.len());
        for url in &urls {
            records.push(self.extractor.extract(url).await);
        }

        (urls, records)
    }

    /// Runs the export stage and returns the filtered URL list
    ///
    /// A failure to write the table is logged; the URL list is returned either
    /// way so the crawl result survives a persistence failure.
    pub async fn export(&self, visited: &[String], filter: &SiteFilter) -> Vec<String> {
        let (urls, records) = self.collect(visited, filter).await;

        let failed = records.iter().filter(|r| r.is_failed()).count();
        let partial = records.iter().filter(|r| r.is_partial()).count();

        match write_table(&self.table_path, &records) {
            Ok(rows) => tracing::info!(
                "Wrote {} rows ({} failed, {} partial) to {}",
                rows,
                failed,
                partial,
                self.table_path.display()
            ),
            Err(e) => tracing::error!(
                "Unable to save content from pages to {}: {}",
                self.table_path.display(),
                e
            ),
        }

        urls
    }
}
