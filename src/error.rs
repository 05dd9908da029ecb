//! Error types for the bookscrape crate

use thiserror::Error;

/// Result type for bookscrape operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for bookscrape operations
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A page answered with a non-success status
    #[error("HTTP {status_code} fetching {url}")]
    Status {
        /// URL that was requested
        url: String,
        /// HTTP status code
        status_code: u16,
    },

    /// Scraping or transformation error
    #[error("Scrape error: {0}")]
    Scrape(String),

    /// CSV or filesystem output error
    #[error("Storage error: {0}")]
    Storage(String),

    /// The output directory supplied by the user does not exist
    #[error("Output directory does not exist: {0}")]
    MissingDirectory(std::path::PathBuf),
}
