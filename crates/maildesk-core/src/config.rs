//! Client configuration.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};
use crate::pagination::DEFAULT_PAGE_SIZE;

/// Base URL of the hosted mail service.
pub const DEFAULT_BASE_URL: &str = "http://68.183.74.14:4005/api";

/// Environment variable that overrides the configured base URL.
pub const BASE_URL_ENV: &str = "MAILDESK_API_URL";

/// Connection settings for [`crate::ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service root, e.g. `http://host:4005/api`.
    pub base_url: String,
    /// Emails per page. Shared by the client's default `limit` and the list's
    /// page count.
    pub page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ClientConfig {
    /// Creates a configuration for the given base URL with the default page size.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Applies the `MAILDESK_API_URL` override when it is set and non-empty.
    #[must_use]
    pub fn with_env_override(mut self) -> Self {
        if let Ok(url) = std::env::var(BASE_URL_ENV)
            && !url.trim().is_empty()
        {
            tracing::debug!("Using base URL from {BASE_URL_ENV}");
            self.base_url = url.trim().to_string();
        }
        self
    }

    /// Validates the configuration and returns the parsed base URL.
    ///
    /// The returned URL always ends with `/` so relative endpoint paths
    /// append to it instead of replacing its last segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse, is not http(s), or the
    /// page size is zero.
    pub fn base_url(&self) -> Result<Url> {
        if self.page_size == 0 {
            return Err(Error::Config("page size must be at least 1".to_string()));
        }

        let mut url = Url::parse(self.base_url.trim())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "unsupported URL scheme: {}",
                url.scheme()
            )));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.page_size, 5);
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let url = ClientConfig::new("http://localhost:4005/api").base_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:4005/api/");

        let url = ClientConfig::new("http://localhost:4005/api/").base_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:4005/api/");
    }

    #[test]
    fn test_invalid_config() {
        assert!(ClientConfig::new("not a url").base_url().is_err());
        assert!(ClientConfig::new("ftp://host/api").base_url().is_err());
        assert!(
            ClientConfig::default()
                .with_page_size(0)
                .base_url()
                .is_err()
        );
    }
}
