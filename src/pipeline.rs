//! End-to-end harvest: crawl, then extract and export

use crate::article::{ArticleExtractor, ArticleStore, SelectorProfile};
use crate::config::Config;
use crate::crawler::{Crawler, HttpFetcher};
use crate::output::Exporter;
use crate::url::SiteFilter;
use crate::NewsError;

/// Runs a complete harvest
///
/// 1. Build the HTTP fetcher, article store and site profile
/// 2. Crawl breadth-first from the configured seeds
/// 3. Extract every visited URL of the target site
/// 4. Write the CSV table
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The crawled URLs that belong to the target site
/// * `Err(NewsError)` - Setup failed; nothing was crawled
///
/// Page-level failures never surface here.
///
/// # Example
///
/// ```no_run
/// use news_frontier::{harvest, Config};
///
/// # async fn example() -> Result<(), news_frontier::NewsError> {
/// let urls = harvest(&Config::default()).await?;
/// println!("{}", urls.len());
/// # Ok(())
/// # }
/// ```
pub async fn harvest(config: &Config) -> Result<Vec<String>, NewsError> {
    let fetcher = HttpFetcher::new(&config.fetcher)?;
    let profile = SelectorProfile::from_config(&config.site)?;
    let store =
        ArticleStore::new(&config.output.html_dir).map_err(|source| NewsError::ArticleStore {
            path: config.output.html_dir.clone(),
            source,
        })?;
    let filter = SiteFilter::from_config(&config.site);

    let report = Crawler::new(&fetcher, &config.crawler)
        .run(config.site.seeds.clone(), config.crawler.max_visits)
        .await;

    let extractor = ArticleExtractor::new(&fetcher, &profile, &store);
    let urls = Exporter::new(extractor, &config.output.table_path)
        .export(&report.visited, &filter)
        .await;

    tracing::info!(
        "Harvest complete: {} visited, {} matching {}",
        report.visited.len(),
        urls.len(),
        filter.pattern()
    );

    Ok(urls)
}
