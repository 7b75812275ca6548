use crate::config::types::{Config, CrawlerConfig, HttpConfig};
use crate::ConfigError;
use url::Url;

/// Upper bound accepted for `max-redirects`
const MAX_REDIRECT_LIMIT: usize = 20;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_http_config(&config.http)?;
    Ok(())
}

/// Validates crawl traversal configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    // An empty root is allowed and simply produces an empty crawl
    if config.root_url.is_empty() {
        return Ok(());
    }

    // An unparseable root is still crawled; its fetch fails and it is reported
    if let Err(e) = Url::parse(&config.root_url) {
        tracing::warn!(
            "root_url '{}' is not an absolute URL ({}), fetching it will fail",
            config.root_url,
            e
        );
    }

    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout_secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "connect_timeout_secs must be >= 1".to_string(),
        ));
    }

    if config.max_redirects > MAX_REDIRECT_LIMIT {
        return Err(ConfigError::Validation(format!(
            "max_redirects must be <= {}, got {}",
            MAX_REDIRECT_LIMIT, config.max_redirects
        )));
    }

    Ok(())
}
