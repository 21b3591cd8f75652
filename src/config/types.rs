use serde::Deserialize;

/// Browser-like user agent sent with every request
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:128.0) Gecko/20100101 Firefox/128.0";

/// Main configuration structure for News-Frontier
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawl loop configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of fetch attempts in the crawl phase
    #[serde(rename = "max-visits")]
    pub max_visits: usize,

    /// Pause after this many iterations (0 disables the pause)
    #[serde(rename = "throttle-every")]
    pub throttle_every: usize,

    /// Length of the periodic pause (milliseconds)
    #[serde(rename = "throttle-pause-ms")]
    pub throttle_pause_ms: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_visits: 500,
            throttle_every: 200,
            throttle_pause_ms: 10_000,
        }
    }
}

/// HTTP fetch configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// User-Agent header value
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Extra attempts after a transport error or 5xx response
    #[serde(rename = "max-retries")]
    pub max_retries: u32,

    /// Delay between attempts (milliseconds)
    #[serde(rename = "retry-delay-ms")]
    pub retry_delay_ms: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 5,
            max_retries: 0,
            retry_delay_ms: 1_000,
        }
    }
}

/// Target site: seeds, export filter and extraction selectors
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Domain pattern (e.g., "example.com" or "*.example.com")
    pub domain: String,

    /// Only export URLs served over HTTPS
    #[serde(rename = "require-https")]
    pub require_https: bool,

    /// URLs the crawl starts from
    pub seeds: Vec<String>,

    #[serde(rename = "date-selector")]
    pub date_selector: String,

    #[serde(rename = "title-selector")]
    pub title_selector: String,

    #[serde(rename = "content-selector")]
    pub content_selector: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            domain: "*.elfinanciero.com.mx".to_string(),
            require_https: true,
            seeds: vec!["https://www.elfinanciero.com.mx/".to_string()],
            date_selector: "time".to_string(),
            title_selector: "title".to_string(),
            content_selector: "article".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving one raw HTML file per article
    #[serde(rename = "html-dir")]
    pub html_dir: String,

    /// Path to the CSV export
    #[serde(rename = "table-path")]
    pub table_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            html_dir: "data/html".to_string(),
            table_path: "data/table/financiero.csv".to_string(),
        }
    }
}
