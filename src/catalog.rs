//! # Book Catalog Scraping Module
//!
//! This module turns books.toscrape.com pages into normalised product records.
//! It is the core of the ETL pipeline: the category resolver enumerates product
//! pages, each product page is run through the field extractor and transformer,
//! and the record builder assembles the result in CSV column order.
//!
//! ## Key Components
//!
//! - `ScraperConfig`: site root, user agent, timeout and image naming policy
//! - `ProductRecord`: one scraped book, in the fixed ten-column order
//! - `CategoryJob`: the resolved product list of one category
//! - `scrape_product`, `resolve_category`, `discover_categories`: network entry points
//!
//! Extraction never fails: a node that cannot be found yields [`UNKNOWN`].
//! Only the rating lookup and network errors surface as [`ScrapeError`].

mod category;
mod config;
mod error;
pub mod extraction;
mod product;
mod site;
pub mod transform;

#[cfg(test)]
pub(crate) mod test_pages;

pub use category::{category_root, page_count, product_links, resolve_category};
pub use config::{DEFAULT_BASE_URL, ImageExtension, ScraperConfig, ScraperConfigBuilder};
pub use error::ScrapeError;
pub use product::{build_record, scrape_product};
pub use site::{CategoryLink, category_links, discover_categories};

use serde::{Deserialize, Serialize};

/// Placeholder used when a field cannot be located on the page
pub const UNKNOWN: &str = "Unknown";

/// CSV header, in the same order as the fields of [`ProductRecord`]
pub const COLUMNS: [&str; 10] = [
    "product_page_url",
    "universal_product_code",
    "title",
    "price_including_tax",
    "price_excluding_tax",
    "number_available",
    "product_description",
    "category",
    "review_rating",
    "image_url",
];

/// One scraped book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_page_url: String,
    pub universal_product_code: String,
    pub title: String,
    pub price_including_tax: String,
    pub price_excluding_tax: String,
    pub number_available: String,
    pub product_description: String,
    pub category: String,
    pub review_rating: String,
    pub image_url: String,
}

impl ProductRecord {
    /// Field values in column order
    pub fn as_row(&self) -> [&str; 10] {
        [
            &self.product_page_url,
            &self.universal_product_code,
            &self.title,
            &self.price_including_tax,
            &self.price_excluding_tax,
            &self.number_available,
            &self.product_description,
            &self.category,
            &self.review_rating,
            &self.image_url,
        ]
    }
}

/// The scraping unit for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryJob {
    /// Category name, used for the output directory and CSV file name
    pub name: String,

    /// Category root URL, without a trailing `index.html`
    pub url: String,

    /// Number of listing pages
    pub page_count: u32,

    /// Every product URL of the category, in site order
    pub product_urls: Vec<String>,
}
