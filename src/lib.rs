//! # bookscrape - Book Catalog Scraper
//!
//! This crate scrapes the [Books to Scrape](https://books.toscrape.com/) catalog
//! into one CSV file and one folder of cover images per category.
//!
//! ## Features
//!
//! - Product page extraction with an `Unknown` placeholder for missing fields
//! - Normalisation of prices, stock counts, ratings and image URLs
//! - Pagination-aware category resolution
//! - Whole-site runs driven by the category navigation
//! - CSV output with every field quoted, plus cover image downloads
//! - Best-effort runs: failed products and categories are reported, not fatal
//!
//! ## Example
//!
//! ```rust,no_run
//! use bookscrape::catalog::ScraperConfig;
//! use bookscrape::http::HttpClient;
//! use bookscrape::pipeline::run_category;
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ScraperConfig::default();
//!     let http = HttpClient::new(&config)?;
//!
//!     let report = run_category(
//!         &http,
//!         &config,
//!         None,
//!         "https://books.toscrape.com/catalogue/category/books/poetry_23/index.html",
//!         Path::new("output"),
//!     )
//!     .await?;
//!
//!     println!("{} books written to {}", report.records_written, report.csv_path.display());
//!     Ok(())
//! }
//! ```

mod error;

pub mod catalog;
pub mod http;
pub mod images;
pub mod pipeline;
pub mod storage;

pub use error::Error;

/// Re-export of types module for public use
pub mod prelude {
    pub use crate::catalog::{CategoryJob, ProductRecord, ScraperConfig};
    pub use crate::error::Error;
    pub use crate::error::Result;
    pub use crate::http::HttpClient;
}
