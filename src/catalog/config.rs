//! # Scraper Configuration Module
//!
//! Configuration for the catalog scraper: which site to read, how to identify
//! ourselves, how long to wait on a request and how cover images are named.
//! Uses the same builder pattern as the rest of the crate.

use std::time::Duration;

use url::Url;

use crate::catalog::error::ScrapeError;

/// Root of the catalog site; relative image paths are resolved against it
pub const DEFAULT_BASE_URL: &str = "https://books.toscrape.com/";

/// Default timeout for HTTP requests in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How the file extension of a downloaded cover image is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageExtension {
    /// Always `.jpg`
    #[default]
    Fixed,

    /// Derived from the response `Content-Type`, `.jpg` when unrecognised
    FromContentType,
}

/// Configuration for the scraper
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Site root, also the base for resolving relative image URLs
    pub base_url: String,

    /// User agent to use for requests
    pub user_agent: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Extension policy for cover images
    pub image_extension: ImageExtension,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("bookscrape/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            image_extension: ImageExtension::default(),
        }
    }
}

/// Builder for ScraperConfig
#[derive(Debug, Default)]
pub struct ScraperConfigBuilder {
    config: ScraperConfig,
}

impl ScraperConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: ScraperConfig::default(),
        }
    }

    /// Set the site root
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the user agent to use for requests
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout in seconds
    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.config.timeout_secs = timeout_secs;
        self
    }

    /// Set the cover image extension policy
    pub fn image_extension(mut self, image_extension: ImageExtension) -> Self {
        self.config.image_extension = image_extension;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ScraperConfig {
        self.config
    }
}

impl ScraperConfig {
    /// Create a new builder
    pub fn builder() -> ScraperConfigBuilder {
        ScraperConfigBuilder::new()
    }

    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse the site root
    ///
    /// A root without a trailing slash is treated as a directory, so
    /// `https://host/shop` resolves relative links under `/shop/`.
    pub fn base(&self) -> Result<Url, ScrapeError> {
        if self.base_url.ends_with('/') {
            Ok(Url::parse(&self.base_url)?)
        } else {
            Ok(Url::parse(&format!("{}/", self.base_url))?)
        }
    }
}
