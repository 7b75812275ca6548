//! Output module for presenting crawl results
//!
//! This module handles:
//! - Writing the numbered list of discovered URLs
//! - Recording crawl statistics

mod listing;
pub mod stats;

pub use listing::write_link_listing;
pub use stats::CrawlStats;
