//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - The `PageFetcher` seam the traversal engine fetches through
//! - Building HTTP clients from the configuration
//! - Plain GET requests returning the page body

use crate::config::HttpConfig;
use crate::CrawlError;
use reqwest::{redirect::Policy, Client};
use std::future::Future;
use std::time::Duration;

/// Source of page bodies for the traversal engine
///
/// A fetch failure is never fatal to a crawl; the engine reports it and moves
/// on to the next item.
pub trait PageFetcher {
    /// Fetches `url` and returns the full response body
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, CrawlError>> + Send;
}

/// [`PageFetcher`] backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher with a client configured from `config`
    pub fn new(config: &HttpConfig) -> Result<Self, CrawlError> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }

    /// Wraps an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, CrawlError> {
        fetch_url(&self.client, url).await
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The HTTP configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use depth_crawler::config::HttpConfig;
/// use depth_crawler::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .redirect(Policy::limited(config.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with a single GET request
///
/// # Request Flow
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx | body |
/// | Other status | body (logged at debug) |
/// | Timeout, connection or redirect error | `CrawlError::Fetch` |
/// | Body read error | `CrawlError::Fetch` |
///
/// The body is read to the end before returning, so the connection goes back
/// to the pool whatever the caller does with the text.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_url(client: &Client, url: &str) -> Result<String, CrawlError> {
    let response = client.get(url).send().await.map_err(|source| {
        let kind = if source.is_timeout() {
            "timeout"
        } else if source.is_connect() {
            "connect"
        } else if source.is_redirect() {
            "redirect"
        } else {
            "request"
        };
        tracing::debug!("GET {} failed ({})", url, kind);
        CrawlError::Fetch {
            url: url.to_string(),
            source,
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::debug!("GET {} returned {}, parsing body anyway", url, status);
    }

    response.text().await.map_err(|source| CrawlError::Fetch {
        url: url.to_string(),
        source,
    })
}
