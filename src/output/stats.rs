//! Crawl statistics
//!
//! Counters accumulated by the traversal engine during a single crawl.

use std::fmt;

/// Crawl statistics summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Items recorded as visited (fetch attempted)
    pub pages_visited: u64,

    /// Visited items whose fetch failed
    pub fetch_failures: u64,

    /// Fetched pages whose HTML produced parser diagnostics
    pub pages_with_parse_errors: u64,

    /// Links rejected by the resolver
    pub invalid_links: u64,

    /// Items pushed onto the work queue, root included
    pub items_pushed: u64,

    /// Items discarded because they reached the depth limit
    pub depth_cutoffs: u64,
}

impl CrawlStats {
    /// Pages whose body was fetched successfully
    pub fn pages_fetched(&self) -> u64 {
        self.pages_visited - self.fetch_failures
    }
}

impl fmt::Display for CrawlStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pages visited ({} fetched, {} failed), {} items queued, {} cut at depth limit, {} invalid links, {} pages with HTML errors",
            self.pages_visited,
            self.pages_fetched(),
            self.fetch_failures,
            self.items_pushed,
            self.depth_cutoffs,
            self.invalid_links,
            self.pages_with_parse_errors
        )
    }
}
