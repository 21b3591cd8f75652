//! Integration tests for the harvester
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl → extract → export cycle end-to-end.

use news_frontier::config::{
    Config, CrawlerConfig, FetcherConfig, OutputConfig, SiteConfig, DEFAULT_USER_AGENT,
};
use news_frontier::crawler::{Crawler, Fetcher, HttpFetcher, Termination};
use news_frontier::{harvest, ArticleStore, NewsError};
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Creates a test configuration targeting the mock server
fn create_test_config(base_url: &str, dir: &Path) -> Config {
    let host = url::Url::parse(base_url)
        .expect("Failed to parse base URL")
        .host_str()
        .expect("Failed to extract host")
        .to_string();

    Config {
        crawler: CrawlerConfig {
            max_visits: 50,
            throttle_every: 2,
            throttle_pause_ms: 0,
        },
        fetcher: FetcherConfig {
            timeout_secs: 5,
            retry_delay_ms: 0,
            ..FetcherConfig::default()
        },
        site: SiteConfig {
            domain: host,
            require_https: false,
            seeds: vec![format!("{}/", base_url)],
            ..SiteConfig::default()
        },
        output: OutputConfig {
            html_dir: dir.join("html").to_string_lossy().into_owned(),
            table_path: dir.join("table").join("articles.csv").to_string_lossy().into_owned(),
        },
    }
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body.to_string())
        .insert_header("content-type", "text/html; charset=utf-8")
}

/// Mounts a small news site: a home page, two articles and a dead link
async fn mount_news_site(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r##"<html><head><title>Portada</title></head><body>
                <a href="/ok">Nota</a>
                <a href="/broken">Rota</a>
                <a href="/ok2">Otra nota</a>
                <a href="mailto:redaccion@example.com">Contacto</a>
                <a href="#top">Arriba</a>
            </body></html>"##,
        ))
        .mount(server)
        .await;

    // Fetched once by the crawl and once by the extractor
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(html(
            r#"<html><head><title>Sube el peso</title></head><body>
                <time>05/08/2024</time>
                <article>El peso ganó terreno.</article>
                <a href="/">Portada</a>
            </body></html>"#,
        ))
        .expect(2)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/ok2"))
        .respond_with(html(
            r#"<html><head><title>Sin fecha</title></head><body>
                <article>Nota sin fecha.</article>
                <a href="/ok">Nota</a>
            </body></html>"#,
        ))
        .expect(2)
        .mount(server)
        .await;
}

fn read_table(path: &Path) -> (Vec<String>, Vec<csv::StringRecord>) {
    let mut reader = csv::Reader::from_path(path).expect("Failed to open export");
    let headers = reader
        .headers()
        .expect("Missing header")
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .expect("Malformed row");
    (headers, rows)
}

fn column(headers: &[String], name: &str) -> usize {
    headers
        .iter()
        .position(|h| h == name)
        .unwrap_or_else(|| panic!("no column {}", name))
}

#[tokio::test]
async fn test_full_harvest_of_news_site() {
    let server = MockServer::start().await;
    mount_news_site(&server).await;
    let base = server.uri();

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&base, dir.path());

    let urls = harvest(&config).await.expect("Harvest failed");

    assert_eq!(
        urls,
        vec![
            format!("{}/", base),
            format!("{}/ok", base),
            format!("{}/broken", base),
            format!("{}/ok2", base),
        ]
    );

    // One row per matching URL, failed extraction included
    let (headers, rows) = read_table(Path::new(&config.output.table_path));
    assert_eq!(rows.len(), urls.len());

    let error = column(&headers, "error");
    let status = column(&headers, "status_code");
    let date = column(&headers, "date");
    let title = column(&headers, "title");
    let content = column(&headers, "content");

    assert_eq!(&rows[1][date], "05/08/2024");
    assert_eq!(&rows[1][title], "Sube el peso");
    assert_eq!(&rows[1][content], "El peso ganó terreno.");

    assert_eq!(&rows[2][error], "Not Found");
    assert_eq!(&rows[2][status], "404");
    assert_eq!(&rows[2][title], "");

    assert_eq!(&rows[3][date], "");
    assert_eq!(&rows[3][title], "Sin fecha");
    assert_eq!(&rows[3][content], "Nota sin fecha.");

    // Home, /ok and /ok2 stored; the 404 is not
    let html_dir = Path::new(&config.output.html_dir);
    assert_eq!(std::fs::read_dir(html_dir).unwrap().count(), 3);
    let store = ArticleStore::new(html_dir).unwrap();
    let article = store.path_for(&format!("{}/ok", base), Some("05/08/2024"), Some("Sube el peso"));
    assert!(article.exists());
    assert!(article
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with("05_08_2024_Sube_el_peso_")));
}

#[tokio::test]
async fn test_harvest_survives_unwritable_table() {
    let server = MockServer::start().await;
    mount_news_site(&server).await;

    let dir = TempDir::new().unwrap();
    let mut config = create_test_config(&server.uri(), dir.path());
    config.output.table_path = dir.path().to_string_lossy().into_owned();

    let urls = harvest(&config).await.expect("Harvest failed");
    assert_eq!(urls.len(), 4);
}

#[tokio::test]
async fn test_https_filter_excludes_plain_http_site() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html("<html><body>home</body></html>"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut config = create_test_config(&server.uri(), dir.path());
    config.site.require_https = true;

    let urls = harvest(&config).await.expect("Harvest failed");
    assert!(urls.is_empty());

    let (_, rows) = read_table(Path::new(&config.output.table_path));
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_uncreatable_article_directory_is_fatal() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file").unwrap();

    let mut config = create_test_config("http://127.0.0.1:9", dir.path());
    config.output.html_dir = blocker.join("html").to_string_lossy().into_owned();

    let result = harvest(&config).await;
    assert!(matches!(result, Err(NewsError::ArticleStore { .. })));
}

#[tokio::test]
async fn test_crawl_of_endless_site_is_bounded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(|request: &Request| {
            let here = request.url.path().trim_end_matches('/').to_string();
            html(&format!(
                r#"<a href="{0}/a">a</a><a href="{0}/b">b</a><a href="/">home</a>"#,
                here
            ))
        })
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(&FetcherConfig::default()).unwrap();
    let config = CrawlerConfig {
        max_visits: 12,
        throttle_every: 5,
        throttle_pause_ms: 1,
    };

    let report = Crawler::new(&fetcher, &config)
        .run(vec![format!("{}/", server.uri())], config.max_visits)
        .await;

    assert_eq!(report.visited.len(), 12);
    assert_eq!(report.termination, Termination::Bounded);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 12);

    // Breadth-first: depth-one pages come right after the seed
    assert_eq!(report.visited[1], format!("{}/a", server.uri()));
    assert_eq!(report.visited[2], format!("{}/b", server.uri()));
    assert_eq!(report.visited[3], format!("{}/a/a", server.uri()));
}

#[tokio::test]
async fn test_cycle_is_crawled_once_per_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(html(r#"<a href="/b">B</a>"#))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(html(r#"<a href="/a">A</a>"#))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(&FetcherConfig::default()).unwrap();
    let report = Crawler::new(&fetcher, &CrawlerConfig::default())
        .run(vec![format!("{}/a", server.uri())], 500)
        .await;

    assert_eq!(report.visited.len(), 2);
    assert_eq!(report.termination, Termination::Drained);
}

#[tokio::test]
async fn test_fetcher_sends_browser_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(html("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(&FetcherConfig::default()).unwrap();
    let page = fetcher
        .fetch(&format!("{}/", server.uri()))
        .await
        .expect("Fetch failed");

    assert_eq!(page.status_code, 200);
    assert_eq!(page.reason, "OK");
    assert_eq!(page.body, "ok");
}

#[tokio::test]
async fn test_no_retry_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(&FetcherConfig::default()).unwrap();
    let page = fetcher.fetch(&server.uri()).await.unwrap();

    assert_eq!(page.status_code, 503);
    assert_eq!(page.reason, "Service Unavailable");
}

#[tokio::test]
async fn test_configured_retries_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let config = FetcherConfig {
        max_retries: 2,
        retry_delay_ms: 0,
        ..FetcherConfig::default()
    };
    let fetcher = HttpFetcher::new(&config).unwrap();
    let page = fetcher.fetch(&server.uri()).await.unwrap();

    assert_eq!(page.status_code, 503);
}

#[tokio::test]
async fn test_client_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let config = FetcherConfig {
        max_retries: 3,
        retry_delay_ms: 0,
        ..FetcherConfig::default()
    };
    let fetcher = HttpFetcher::new(&config).unwrap();
    let page = fetcher.fetch(&server.uri()).await.unwrap();

    assert_eq!(page.status_code, 404);
    assert!(!page.is_success());
}
