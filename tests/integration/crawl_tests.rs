//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full fetch-parse-resolve cycle end-to-end.

use depth_crawler::config::{Config, CrawlerConfig, HttpConfig};
use depth_crawler::crawl_webpage;
use depth_crawler::crawler::{Crawler, HttpFetcher, NoopObserver};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration for the given root and depth
fn create_test_config(root_url: String, max_depth: u32) -> Config {
    Config {
        crawler: CrawlerConfig {
            root_url,
            max_depth,
        },
        http: HttpConfig {
            user_agent: "TestCrawler/1.0".to_string(),
            timeout_secs: 5,
            connect_timeout_secs: 2,
            max_redirects: 5,
        },
    }
}

/// Builds a well-formed HTML page containing one anchor per href
fn html_page(hrefs: &[&str]) -> String {
    let anchors: String = hrefs
        .iter()
        .map(|href| format!(r#"<li><a href="{}">{}</a></li>"#, href, href))
        .collect();
    format!(
        "<!DOCTYPE html><html><head><title>Test</title></head><body><ul>{}</ul></body></html>",
        anchors
    )
}

async fn mount_page(server: &MockServer, page_path: &str, hrefs: &[&str]) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html_page(hrefs))
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_with_relative_links() {
    let site = MockServer::start().await;
    let external = MockServer::start().await;
    let base = site.uri();
    let external_link = format!("{}/c", external.uri());

    mount_page(&site, "/index", &["/a", "./b", external_link.as_str()]).await;
    mount_page(&site, "/a", &[]).await;
    mount_page(&site, "/index/b", &["../sibling"]).await;
    mount_page(&external, "/c", &[]).await;

    let config = create_test_config(format!("{}/index", base), 2);
    let outcome = crawl_webpage(&config).await.expect("crawl failed");

    assert_eq!(
        outcome.links,
        vec![
            format!("{}/index", base),
            external_link.clone(),
            format!("{}/index/b", base),
            format!("{}/a", base),
        ]
    );

    // "../sibling" was found at depth 2 and never fetched
    assert_eq!(outcome.stats.depth_cutoffs, 1);
    assert_eq!(outcome.stats.fetch_failures, 0);
    assert_eq!(outcome.stats.items_pushed, 5);
}

#[tokio::test]
async fn test_zero_depth_makes_no_requests() {
    let site = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page(&["/a"])))
        .expect(0)
        .mount(&site)
        .await;

    let config = create_test_config(format!("{}/", site.uri()), 0);
    let outcome = crawl_webpage(&config).await.expect("crawl failed");

    assert!(outcome.links.is_empty());
}

#[tokio::test]
async fn test_empty_root_produces_empty_result() {
    let config = create_test_config(String::new(), 3);
    let outcome = crawl_webpage(&config).await.expect("crawl failed");

    assert!(outcome.links.is_empty());
    assert_eq!(outcome.stats.items_pushed, 0);
}

#[tokio::test]
async fn test_user_agent_is_sent() {
    let site = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "TestCrawler/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page(&[])))
        .expect(1)
        .mount(&site)
        .await;

    let config = create_test_config(format!("{}/", site.uri()), 1);
    let outcome = crawl_webpage(&config).await.expect("crawl failed");

    assert_eq!(outcome.links.len(), 1);
}

#[tokio::test]
async fn test_error_status_body_is_still_crawled() {
    let site = MockServer::start().await;
    let base = site.uri();

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string(html_page(&["/home"])))
        .mount(&site)
        .await;
    mount_page(&site, "/home", &[]).await;

    let config = create_test_config(format!("{}/gone", base), 2);
    let outcome = crawl_webpage(&config).await.expect("crawl failed");

    assert_eq!(
        outcome.links,
        vec![format!("{}/gone", base), format!("{}/home", base)]
    );
    assert_eq!(outcome.stats.fetch_failures, 0);
}

#[tokio::test]
async fn test_unreachable_link_is_recorded_and_crawl_continues() {
    let site = MockServer::start().await;
    let base = site.uri();

    mount_page(&site, "/", &["/after", "http://127.0.0.1:9/unreachable"]).await;
    mount_page(&site, "/after", &[]).await;

    let config = create_test_config(format!("{}/", base), 2);
    let outcome = crawl_webpage(&config).await.expect("crawl failed");

    assert_eq!(
        outcome.links,
        vec![
            format!("{}/", base),
            "http://127.0.0.1:9/unreachable".to_string(),
            format!("{}/after", base),
        ]
    );
    assert_eq!(outcome.stats.fetch_failures, 1);
    assert_eq!(outcome.stats.pages_fetched(), 2);
}

#[tokio::test]
async fn test_redirect_is_followed() {
    let site = MockServer::start().await;
    let base = site.uri();

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/new"))
        .mount(&site)
        .await;
    mount_page(&site, "/new", &["/linked"]).await;
    mount_page(&site, "/linked", &[]).await;

    let config = create_test_config(format!("{}/old", base), 2);
    let outcome = crawl_webpage(&config).await.expect("crawl failed");

    // The requested URL is reported, and links resolve against it
    assert_eq!(
        outcome.links,
        vec![format!("{}/old", base), format!("{}/linked", base)]
    );
}

#[tokio::test]
async fn test_invalid_links_are_not_requested() {
    let site = MockServer::start().await;
    let base = site.uri();

    mount_page(
        &site,
        "/",
        &["mailto:someone@example.com", "javascript:void(0)", "relative.html"],
    )
    .await;

    let config = create_test_config(format!("{}/", base), 3);
    let outcome = crawl_webpage(&config).await.expect("crawl failed");

    assert_eq!(outcome.links, vec![format!("{}/", base)]);
    assert_eq!(outcome.stats.invalid_links, 3);

    let requests = site.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_cycles_are_revisited_until_depth_limit() {
    let site = MockServer::start().await;
    let base = site.uri();

    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page(&["/b"])))
        .expect(2)
        .mount(&site)
        .await;
    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page(&["/a"])))
        .expect(2)
        .mount(&site)
        .await;

    let config = create_test_config(format!("{}/a", base), 4);
    let outcome = crawl_webpage(&config).await.expect("crawl failed");

    let a = format!("{}/a", base);
    let b = format!("{}/b", base);
    assert_eq!(outcome.links, vec![a.clone(), b.clone(), a, b]);
    assert_eq!(outcome.stats.depth_cutoffs, 1);
}

#[tokio::test]
async fn test_crawler_with_http_fetcher_and_custom_observer() {
    let site = MockServer::start().await;
    let base = site.uri();

    mount_page(&site, "/docs/guide/", &["../api", "./intro"]).await;
    mount_page(&site, "/docs/api", &[]).await;
    mount_page(&site, "/docs/guide/intro", &[]).await;

    let config = create_test_config(String::new(), 2);
    let fetcher = HttpFetcher::new(&config.http).expect("client");
    let mut crawler = Crawler::with_observer(fetcher, NoopObserver);

    let root = format!("{}/docs/guide/", base);
    let links = crawler.crawl(&root, 2).await;

    assert_eq!(
        links,
        vec![
            root.clone(),
            // "./intro" appends to the page URL as written, trailing slash included
            format!("{}/docs/guide//intro", base),
            format!("{}/docs/api", base),
        ]
    );
    // The double-slash path misses the "/docs/guide/intro" mock; a 404 is not a fetch failure
    assert_eq!(crawler.stats().fetch_failures, 0);
    assert_eq!(crawler.stats().pages_visited, 3);
}

#[tokio::test]
async fn test_schemeless_root_is_reported_as_failed_fetch() {
    let config = create_test_config("site.com/page".to_string(), 1);
    let outcome = crawl_webpage(&config).await.expect("crawl failed");

    assert_eq!(outcome.links, vec!["site.com/page".to_string()]);
    assert_eq!(outcome.stats.fetch_failures, 1);
}
