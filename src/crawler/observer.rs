//! Crawl event reporting
//!
//! The traversal engine reports everything that happens to a work item
//! through a [`CrawlObserver`] instead of writing to the log directly, so a
//! crawl can be inspected in tests without capturing process output.

use crate::crawler::engine::WorkItem;
use crate::{CrawlError, UrlError};

/// Receiver of traversal events
///
/// Every method has an empty default, so implementors only override the
/// events they care about.
pub trait CrawlObserver {
    /// An item was taken off the work queue
    fn on_pop(&mut self, _item: &WorkItem) {}

    /// An item was discarded because it reached the depth limit
    fn on_depth_cutoff(&mut self, _item: &WorkItem) {}

    /// An item was recorded as visited and is about to be fetched
    fn on_visit(&mut self, _item: &WorkItem) {}

    /// Fetching an item failed; its links will not be followed
    fn on_fetch_failed(&mut self, _item: &WorkItem, _error: &CrawlError) {}

    /// The item's page parsed with diagnostics; extraction still runs
    fn on_parse_errors(&mut self, _item: &WorkItem, _errors: &[String]) {}

    /// A link on the item's page was rejected by the resolver
    fn on_invalid_link(&mut self, _item: &WorkItem, _href: &str, _error: &UrlError) {}

    /// A new item was pushed onto the work queue
    fn on_enqueue(&mut self, _item: &WorkItem) {}
}

impl<O: CrawlObserver + ?Sized> CrawlObserver for &mut O {
    fn on_pop(&mut self, item: &WorkItem) {
        (**self).on_pop(item)
    }

    fn on_depth_cutoff(&mut self, item: &WorkItem) {
        (**self).on_depth_cutoff(item)
    }

    fn on_visit(&mut self, item: &WorkItem) {
        (**self).on_visit(item)
    }

    fn on_fetch_failed(&mut self, item: &WorkItem, error: &CrawlError) {
        (**self).on_fetch_failed(item, error)
    }

    fn on_parse_errors(&mut self, item: &WorkItem, errors: &[String]) {
        (**self).on_parse_errors(item, errors)
    }

    fn on_invalid_link(&mut self, item: &WorkItem, href: &str, error: &UrlError) {
        (**self).on_invalid_link(item, href, error)
    }

    fn on_enqueue(&mut self, item: &WorkItem) {
        (**self).on_enqueue(item)
    }
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CrawlObserver for NoopObserver {}

/// Observer that turns events into `tracing` log lines
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CrawlObserver for TracingObserver {
    fn on_pop(&mut self, item: &WorkItem) {
        tracing::debug!("Popped {} (depth {})", item.url, item.depth);
    }

    fn on_depth_cutoff(&mut self, item: &WorkItem) {
        tracing::trace!("Depth limit reached for {} (depth {})", item.url, item.depth);
    }

    fn on_visit(&mut self, item: &WorkItem) {
        tracing::info!("Visiting {} (depth {})", item.url, item.depth);
    }

    fn on_fetch_failed(&mut self, item: &WorkItem, error: &CrawlError) {
        tracing::warn!("Failed: {} (depth {})", error, item.depth);
    }

    fn on_parse_errors(&mut self, item: &WorkItem, errors: &[String]) {
        tracing::debug!(
            "{} HTML parse diagnostics for {}, extracting links anyway",
            errors.len(),
            item.url
        );
        for error in errors {
            tracing::trace!("  {}", error);
        }
    }

    fn on_invalid_link(&mut self, item: &WorkItem, href: &str, error: &UrlError) {
        tracing::info!("Skipping link {:?} on {}: {}", href, item.url, error);
    }

    fn on_enqueue(&mut self, item: &WorkItem) {
        tracing::trace!("Queued {} (depth {})", item.url, item.depth);
    }
}
