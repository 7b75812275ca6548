//! Traversal engine - depth-bounded crawl loop
//!
//! This module contains the crawl loop that coordinates:
//! - The last-in-first-out work queue and depth accounting
//! - Fetching through a [`PageFetcher`]
//! - Link extraction and resolution
//! - Event reporting through a [`CrawlObserver`]

use crate::crawler::fetcher::PageFetcher;
use crate::crawler::observer::{CrawlObserver, TracingObserver};
use crate::crawler::parser::links_on_page;
use crate::output::CrawlStats;
use crate::url::{resolve, site_root};

/// A pending page: its URL and how many link hops it is from the root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkItem {
    pub url: String,
    pub depth: u32,
}

impl WorkItem {
    /// Creates the depth-0 item for the crawl root
    pub fn root(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            depth: 0,
        }
    }

    /// Creates an item for a link found on this item's page
    pub fn child(&self, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            depth: self.depth + 1,
        }
    }
}

/// Stack of pending work items
///
/// Items are popped in reverse push order, which makes the crawl depth-first.
#[derive(Debug, Default)]
pub struct WorkQueue {
    items: Vec<WorkItem>,
    pushed: u64,
}

impl WorkQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: WorkItem) {
        self.pushed += 1;
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<WorkItem> {
        self.items.pop()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items ever pushed
    pub fn total_pushed(&self) -> u64 {
        self.pushed
    }
}

/// Depth-bounded crawler
///
/// The crawler owns its fetcher and observer. It is strictly sequential:
/// each fetch completes before the next item is taken off the queue.
pub struct Crawler<F, O = TracingObserver> {
    fetcher: F,
    observer: O,
    stats: CrawlStats,
}

impl<F: PageFetcher> Crawler<F> {
    /// Creates a crawler that reports through `tracing`
    pub fn new(fetcher: F) -> Self {
        Self::with_observer(fetcher, TracingObserver)
    }
}

impl<F: PageFetcher, O: CrawlObserver> Crawler<F, O> {
    /// Creates a crawler with a custom observer
    pub fn with_observer(fetcher: F, observer: O) -> Self {
        Self {
            fetcher,
            observer,
            stats: CrawlStats::default(),
        }
    }

    /// Statistics of the most recent crawl
    pub fn stats(&self) -> &CrawlStats {
        &self.stats
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Crawls from `root_url`, following links up to `max_depth` hops
    ///
    /// # Algorithm
    ///
    /// 1. Push the root at depth 0 (nothing is pushed for an empty root)
    /// 2. Pop the most recently pushed item
    ///    - depth >= `max_depth`: discard it, no fetch, not recorded
    ///    - otherwise record it, fetch it, and push every valid link found
    ///      on the page at depth + 1
    /// 3. Repeat until the queue is empty
    ///
    /// A URL is recorded before it is fetched, so pages that fail to load
    /// are still reported. URLs are not deduplicated.
    ///
    /// # Returns
    ///
    /// Visited URLs in visitation order
    pub async fn crawl(&mut self, root_url: &str, max_depth: u32) -> Vec<String> {
        self.stats = CrawlStats::default();

        let mut queue = WorkQueue::new();
        let mut visited = Vec::new();

        if !root_url.is_empty() {
            self.enqueue(&mut queue, WorkItem::root(root_url));
        }

        while let Some(item) = queue.pop() {
            self.observer.on_pop(&item);

            if item.depth >= max_depth {
                self.stats.depth_cutoffs += 1;
                self.observer.on_depth_cutoff(&item);
                continue;
            }

            visited.push(item.url.clone());
            self.stats.pages_visited += 1;
            self.observer.on_visit(&item);

            let body = match self.fetcher.fetch(&item.url).await {
                Ok(body) => body,
                Err(e) => {
                    self.stats.fetch_failures += 1;
                    self.observer.on_fetch_failed(&item, &e);
                    continue;
                }
            };

            let (hrefs, parse_errors) = links_on_page(&body);
            if !parse_errors.is_empty() {
                self.stats.pages_with_parse_errors += 1;
                self.observer.on_parse_errors(&item, &parse_errors);
            }

            for href in &hrefs {
                self.follow(&mut queue, &item, href);
            }
        }

        self.stats.items_pushed = queue.total_pushed();
        visited
    }

    /// Resolves one link found on `item`'s page and queues it if valid
    fn follow(&mut self, queue: &mut WorkQueue, item: &WorkItem, href: &str) {
        match resolve(&item.url, href) {
            Ok(resolved) => {
                let url = if resolved.is_empty() {
                    site_root(&item.url).url
                } else {
                    resolved
                };
                self.enqueue(queue, item.child(url));
            }
            Err(e) => {
                self.stats.invalid_links += 1;
                self.observer.on_invalid_link(item, href, &e);
            }
        }
    }

    fn enqueue(&mut self, queue: &mut WorkQueue, item: WorkItem) {
        self.observer.on_enqueue(&item);
        queue.push(item);
    }
}
