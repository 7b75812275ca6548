use super::{site_root, LinkKind};
use crate::{UrlError, UrlResult};

/// Resolves a raw link found on `base` into an absolute URL
///
/// # Resolution Rules
///
/// | Link kind | Result |
/// |-----------|--------|
/// | `./page` | `base` + `/` + link without its leading `.`/`/` run |
/// | `/page` | site root of `base` + `/` + link without its leading `/` run |
/// | `../page` | `base` minus its last segment + `/` + link without its leading `.`/`/` run |
/// | other | the link unchanged |
///
/// Only one path segment of `base` is removed for a parent-relative link, no
/// matter how many `../` it starts with.
///
/// The result is accepted only if it contains `http` in any letter case (see
/// [`is_http_like`]). An empty link is taken as-is and therefore rejected.
///
/// # Arguments
///
/// * `base` - URL of the page the link was found on
/// * `raw` - The `href` value as written in the page
///
/// # Returns
///
/// * `Ok(String)` - The absolute URL
/// * `Err(UrlError::InvalidLink)` - The resolved candidate was rejected
///
/// # Examples
///
/// ```
/// use depth_crawler::url::resolve;
///
/// assert_eq!(resolve("http://site.com/a/b", "./c").unwrap(), "http://site.com/a/b/c");
/// assert_eq!(resolve("http://site.com/a/b", "/c").unwrap(), "http://site.com/c");
/// assert_eq!(resolve("http://site.com/a/b", "../c").unwrap(), "http://site.com/a/c");
/// assert!(resolve("http://site.com/a/b", "mailto:x@y.com").is_err());
/// ```
pub fn resolve(base: &str, raw: &str) -> UrlResult<String> {
    let candidate = match LinkKind::classify(raw) {
        LinkKind::CurrentDirectory => format!("{}/{}", base, strip_dot_prefix(raw)),
        LinkKind::RootRelative => {
            format!("{}/{}", site_root(base).url, raw.trim_start_matches('/'))
        }
        LinkKind::ParentRelative => format!("{}/{}", parent_of(base), strip_dot_prefix(raw)),
        LinkKind::Absolute => raw.to_string(),
    };

    if is_http_like(&candidate) {
        Ok(candidate)
    } else {
        Err(UrlError::InvalidLink { candidate })
    }
}

/// Loose scheme check: true if `candidate` contains `http` in any letter case
///
/// This accepts `https://...` as well as strings that merely mention `http`
/// somewhere, such as `foohttpbar`.
pub fn is_http_like(candidate: &str) -> bool {
    candidate.to_lowercase().contains("http")
}

/// Removes the whole leading run of `.` and `/` characters
fn strip_dot_prefix(raw: &str) -> &str {
    raw.trim_start_matches(|c: char| c == '.' || c == '/')
}

/// Drops trailing slashes, then the last path segment
///
/// `http://site.com/a/b/` and `http://site.com/a/b` both become
/// `http://site.com/a`. A base without any `/` is returned as-is.
fn parent_of(base: &str) -> &str {
    let trimmed = base.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[..idx],
        None => trimmed,
    }
}
