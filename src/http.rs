//! HTTP client for the catalog scraper
//!
//! Thin wrapper over a reqwest client: fetches pages and hands back a parsed
//! document, or the raw response for binary downloads.

use reqwest::{Client as ReqwestClient, Response};
use scraper::Html;
use tracing::{debug, instrument, warn};

use crate::catalog::{ScrapeError, ScraperConfig};

/// HTTP client used for every request the scraper makes
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// The underlying reqwest client
    client: ReqwestClient,
}

impl HttpClient {
    /// Create a new HTTP client from the scraper configuration
    pub fn new(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        let client = ReqwestClient::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;

        Ok(Self { client })
    }

    /// Send a GET request and return the response whatever its status
    #[instrument(skip(self), level = "debug")]
    pub async fn get(&self, url: &str) -> Result<Response, ScrapeError> {
        debug!("Sending GET request to {}", url);
        Ok(self.client.get(url).send().await?)
    }

    /// Fetch a page and return its body, failing on a non-success status
    pub async fn fetch_text(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self.get(url).await?;

        let status = response.status();
        if !status.is_success() {
            warn!("GET {} returned {}", url, status);
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    /// Fetch a page and parse it into a navigable document
    pub async fn fetch_document(&self, url: &str) -> Result<Html, ScrapeError> {
        let body = self.fetch_text(url).await?;
        Ok(Html::parse_document(&body))
    }
}
