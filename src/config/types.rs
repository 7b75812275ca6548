use serde::Deserialize;

/// Root URL crawled when none is given
pub const DEFAULT_ROOT_URL: &str = "https://www.example.com/";

/// Number of link hops followed when none is given
pub const DEFAULT_MAX_DEPTH: u32 = 3;

/// User agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("depth-crawler/", env!("CARGO_PKG_VERSION"));

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Crawl traversal configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CrawlerConfig {
    /// Page the crawl starts from; an empty string crawls nothing
    #[serde(rename = "root-url")]
    pub root_url: String,

    /// Items at this depth or deeper are discarded without being fetched
    #[serde(rename = "max-depth")]
    pub max_depth: u32,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            root_url: DEFAULT_ROOT_URL.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpConfig {
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Total time allowed for one request (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Time allowed to establish a connection (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Redirects followed before a fetch fails
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            max_redirects: 10,
        }
    }
}
