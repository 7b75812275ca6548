//! Crawler module for web page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching
//! - HTML parsing and anchor extraction
//! - The depth-bounded traversal loop
//! - Crawl event reporting

mod engine;
mod fetcher;
mod observer;
mod parser;

pub use engine::{Crawler, WorkItem, WorkQueue};
pub use fetcher::{build_http_client, fetch_url, HttpFetcher, PageFetcher};
pub use observer::{CrawlObserver, NoopObserver, TracingObserver};
pub use parser::{extract_anchors, extract_hrefs, links_on_page, parse_page, Anchor, ParsedPage};

use crate::config::Config;
use crate::output::CrawlStats;
use crate::CrawlError;

/// Result of a complete crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlOutcome {
    /// Visited URLs in visitation order
    pub links: Vec<String>,

    /// Counters for the crawl
    pub stats: CrawlStats,
}

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client from the configuration
/// 2. Crawl from the configured root up to the configured depth
/// 3. Return the visited URLs with the crawl statistics
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlOutcome)` - Crawl completed; individual page failures are
///   reported through logging and counted in the statistics
/// * `Err(CrawlError)` - The HTTP client could not be built
pub async fn crawl_webpage(config: &Config) -> Result<CrawlOutcome, CrawlError> {
    let fetcher = HttpFetcher::new(&config.http)?;
    let mut crawler = Crawler::new(fetcher);

    tracing::info!(
        "Starting crawl of {:?} with max depth {}",
        config.crawler.root_url,
        config.crawler.max_depth
    );

    let links = crawler
        .crawl(&config.crawler.root_url, config.crawler.max_depth)
        .await;
    let stats = *crawler.stats();

    tracing::info!("Crawl completed: {}", stats);

    Ok(CrawlOutcome { links, stats })
}
