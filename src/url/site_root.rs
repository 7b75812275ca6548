use crate::UrlError;
use url::Url;

/// A URL reduced to its scheme and authority
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRoot {
    /// The site root, e.g. `http://example.com`
    pub url: String,

    /// Set when the input could not be parsed and `url` is a best-effort guess
    pub warning: Option<UrlError>,
}

/// Computes the site root of a URL
///
/// Path, query and fragment are cleared; scheme, userinfo, host and port are
/// kept. The result never ends with `/`, so a relative path can be appended
/// with a single separator.
///
/// A malformed input is not an error: the failure is logged, recorded in
/// [`SiteRoot::warning`], and the input is cut at the first `/`, `?` or `#`
/// after its `scheme://`.
///
/// # Examples
///
/// ```
/// use depth_crawler::url::site_root;
///
/// let root = site_root("https://example.com:8080/a/b?q=1#top");
/// assert_eq!(root.url, "https://example.com:8080");
/// assert!(root.warning.is_none());
/// ```
pub fn site_root(link: &str) -> SiteRoot {
    match Url::parse(link) {
        Ok(mut url) => {
            url.set_path("");
            url.set_query(None);
            url.set_fragment(None);

            // Hierarchical schemes always serialize a "/" path
            let serialized = url.as_str();
            let trimmed = serialized.strip_suffix('/').unwrap_or(serialized);

            SiteRoot {
                url: trimmed.to_string(),
                warning: None,
            }
        }
        Err(e) => {
            tracing::warn!("Failed to parse {} while computing site root: {}", link, e);
            SiteRoot {
                url: fallback_site_root(link),
                warning: Some(UrlError::Parse(e.to_string())),
            }
        }
    }
}

fn fallback_site_root(link: &str) -> String {
    match link.find("://") {
        Some(idx) => {
            let authority_start = idx + 3;
            let end = link[authority_start..]
                .find(|c: char| matches!(c, '/' | '?' | '#'))
                .map_or(link.len(), |offset| authority_start + offset);
            link[..end].to_string()
        }
        None => link.to_string(),
    }
}
