//! URL handling module
//!
//! This module turns the raw `href` values found on a page into absolute URLs
//! that can be fetched, and reduces URLs to their site root.

mod resolve;
mod site_root;

// Re-export main functions
pub use resolve::{is_http_like, resolve};
pub use site_root::{site_root, SiteRoot};

/// Shape of a raw link, decided by its prefix
///
/// The prefixes are checked in the order the variants are declared, so
/// `./page` is a [`LinkKind::CurrentDirectory`] link even though it does not
/// start with `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// `./page`: relative to the URL of the current page
    CurrentDirectory,
    /// `/page`: relative to the site root of the current page
    RootRelative,
    /// `../page`: relative to the parent of the current page
    ParentRelative,
    /// Anything else is taken as-is
    Absolute,
}

impl LinkKind {
    /// Classifies a raw link by its prefix
    ///
    /// # Examples
    ///
    /// ```
    /// use depth_crawler::url::LinkKind;
    ///
    /// assert_eq!(LinkKind::classify("./a"), LinkKind::CurrentDirectory);
    /// assert_eq!(LinkKind::classify("/a"), LinkKind::RootRelative);
    /// assert_eq!(LinkKind::classify("../a"), LinkKind::ParentRelative);
    /// assert_eq!(LinkKind::classify("https://example.com/a"), LinkKind::Absolute);
    /// ```
    pub fn classify(raw: &str) -> Self {
        if raw.starts_with("./") {
            Self::CurrentDirectory
        } else if raw.starts_with('/') {
            Self::RootRelative
        } else if raw.starts_with("../") {
            Self::ParentRelative
        } else {
            Self::Absolute
        }
    }
}
