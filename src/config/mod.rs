//! Configuration module
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every field has a default, so the crawler runs without
//! any file at all and the command line only overrides what it is given.
//!
//! # Example
//!
//! ```no_run
//! use depth_crawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawler.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, HttpConfig, DEFAULT_MAX_DEPTH, DEFAULT_ROOT_URL, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
