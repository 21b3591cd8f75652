//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - The [`Fetcher`] seam the crawl loop and article extractor are written against
//! - Building the HTTP client with the browser user agent and request timeout
//! - Optional retries for transient failures
//! - Error classification

use crate::config::FetcherConfig;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// A fetched HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// HTTP status code
    pub status_code: u16,

    /// Reason phrase for the status code
    pub reason: String,

    /// Final URL after redirects
    pub final_url: String,

    /// Response body
    pub body: String,
}

impl Page {
    /// Returns true for 2xx responses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Transport-level fetch failures
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {message}")]
    Connect { url: String, message: String },

    #[error("Failed to read body of {url}: {message}")]
    Body { url: String, message: String },

    #[error("HTTP error for {url}: {message}")]
    Http { url: String, message: String },
}

impl FetchError {
    fn classify(url: &str, error: reqwest::Error) -> Self {
        let url = url.to_string();
        if error.is_timeout() {
            FetchError::Timeout { url }
        } else if error.is_connect() {
            FetchError::Connect {
                url,
                message: error.to_string(),
            }
        } else {
            FetchError::Http {
                url,
                message: error.to_string(),
            }
        }
    }
}

/// Capability to retrieve a page by URL
///
/// Non-2xx responses are returned as a [`Page`]; only transport failures are
/// errors. Callers decide what a non-2xx status means for them.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Page, FetchError>> + Send;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetcher configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// [`Fetcher`] backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    max_retries: u32,
    retry_delay: Duration,
}

impl HttpFetcher {
    /// Creates a fetcher from configuration
    pub fn new(config: &FetcherConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
            max_retries: config.max_retries,
            retry_delay: Duration::from_millis(config.retry_delay_ms),
        })
    }

    async fn fetch_once(&self, url: &str) -> Result<Page, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::classify(url, e))?;

        let status = response.status();
        let final_url = response.url().to_string();

        let body = response.text().await.map_err(|e| FetchError::Body {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        Ok(Page {
            status_code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
            final_url,
            body,
        })
    }
}

impl Fetcher for HttpFetcher {
    /// Fetches a URL, retrying transport errors and 5xx responses
    ///
    /// # Retry Logic
    ///
    /// | Condition | Action |
    /// |-----------|--------|
    /// | 2xx, 3xx, 4xx | Returned immediately |
    /// | HTTP 5xx | Retry up to `max-retries` times |
    /// | Timeout / connection error | Retry up to `max-retries` times |
    ///
    /// With the default of zero retries every URL is requested exactly once.
    async fn fetch(&self, url: &str) -> Result<Page, FetchError> {
        let mut attempt = 0;
        loop {
            let result = self.fetch_once(url).await;

            let retryable = match &result {
                Ok(page) => page.status_code >= 500,
                Err(_) => true,
            };
            if !retryable || attempt >= self.max_retries {
                return result;
            }

            attempt += 1;
            match &result {
                Ok(page) => tracing::warn!(
                    "HTTP {} from {}, retry {}/{}",
                    page.status_code,
                    url,
                    attempt,
                    self.max_retries
                ),
                Err(e) => tracing::warn!("{}, retry {}/{}", e, attempt, self.max_retries),
            }
            tokio::time::sleep(self.retry_delay).await;
        }
    }
}
