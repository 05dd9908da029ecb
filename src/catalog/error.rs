//! Error types for the catalog module

use crate::error::Error as CrateError;
use thiserror::Error;

/// Error type for scraping operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// HTTP client or transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP {status} fetching {url}")]
    Status {
        /// URL that was requested
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Rating word outside the One..Five scale
    #[error("Unknown review rating: {0:?}")]
    UnknownRating(String),

    /// Pager text that does not read "Page X of N"
    #[error("Unreadable pager: {0:?}")]
    Pagination(String),

    /// Filesystem error while writing downloaded content
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ScrapeError> for CrateError {
    fn from(err: ScrapeError) -> Self {
        match err {
            ScrapeError::Http(e) => CrateError::Http(e),
            ScrapeError::Status { url, status } => CrateError::Status {
                url,
                status_code: status,
            },
            _ => CrateError::Scrape(err.to_string()),
        }
    }
}
