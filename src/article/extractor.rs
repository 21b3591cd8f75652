use crate::article::profile::SiteProfile;
use crate::article::store::ArticleStore;
use crate::article::ArticleRecord;
use crate::crawler::Fetcher;
use scraper::Html;

/// Fetches article pages and turns them into [`ArticleRecord`]s
pub struct ArticleExtractor<'a, F, P> {
    fetcher: &'a F,
    profile: &'a P,
    store: &'a ArticleStore,
}

/// Fields read from one page
struct Fields {
    date: Option<String>,
    title: Option<String>,
    content: Option<String>,
}

impl<'a, F: Fetcher, P: SiteProfile> ArticleExtractor<'a, F, P> {
    pub fn new(fetcher: &'a F, profile: &'a P, store: &'a ArticleStore) -> Self {
        Self {
            fetcher,
            profile,
            store,
        }
    }

    /// Extracts one article
    ///
    /// # Outcomes
    ///
    /// | Condition | Record |
    /// |-----------|--------|
    /// | Transport error | `Failed` without status code |
    /// | Non-2xx response | `Failed` with reason and status code |
    /// | 2xx response | `Article`, with whichever fields were found |
    ///
    /// The raw body of every 2xx response is written to the store. A failed
    /// write is logged and does not alter the record.
    pub async fn extract(&self, url: &str) -> ArticleRecord {
        tracing::info!("Requesting article: {}", url);

        let page = match self.fetcher.fetch(url).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Failed to fetch article {}: {}", url, e);
                return ArticleRecord::Failed {
                    error: e.to_string(),
                    status_code: None,
                };
            }
        };

        tracing::info!("Response for {}: {} {}", url, page.status_code, page.reason);

        if !page.is_success() {
            return ArticleRecord::Failed {
                error: page.reason,
                status_code: Some(page.status_code),
            };
        }

        let fields = self.read_fields(url, &page.body);

        if let Err(e) = self.store.save(
            &page.final_url,
            fields.date.as_deref(),
            fields.title.as_deref(),
            &page.body,
        ) {
            tracing::error!("Failed to store article {}: {}", url, e);
        }

        ArticleRecord::Article {
            url: page.final_url,
            date: fields.date,
            title: fields.title,
            content: fields.content,
        }
    }

    fn read_fields(&self, url: &str, body: &str) -> Fields {
        let document = Html::parse_document(body);

        let date = self.profile.extract_date(&document);
        let title = self.profile.extract_title(&document);
        let content = self.profile.extract_body(&document);

        for (name, value) in [("date", &date), ("title", &title), ("content", &content)] {
            if value.is_none() {
                tracing::warn!("Missing {} in article {}", name, url);
            }
        }

        Fields {
            date,
            title,
            content,
        }
    }
}
