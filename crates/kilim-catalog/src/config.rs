//! Public configuration for the catalog client.

use std::time::Duration;

/// Default base URL of the product catalog API.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Configuration for the catalog client.
///
/// # Example
///
/// ```
/// use kilim_catalog::CatalogConfig;
/// use std::time::Duration;
///
/// let config = CatalogConfig::new()
///     .with_base_url("http://localhost:3001")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog API.
    pub(crate) base_url: String,
    /// User agent string for HTTP requests.
    pub(crate) user_agent: String,
    /// Request timeout.
    pub(crate) timeout: Duration,
    /// Maximum number of retry attempts for transient errors.
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff.
    pub(crate) retry_base_delay: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("kilim-catalog/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}

impl CatalogConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the catalog API.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout. Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retry attempts for transient errors.
    /// Defaults to 3 retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries. Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.user_agent.contains("kilim-catalog"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_builder_pattern() {
        let config = CatalogConfig::new()
            .with_base_url("http://localhost:3001")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(5))
            .with_max_retries(1)
            .with_retry_delay(Duration::from_millis(10));

        assert_eq!(config.base_url, "http://localhost:3001");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_retries, 1);
        assert_eq!(config.retry_base_delay, Duration::from_millis(10));
    }
}
