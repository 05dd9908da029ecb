//! # Scrape Runs
//!
//! Drives the catalog scraper end to end for the three entry points: a single
//! product page, one category, or every category of the site.
//!
//! Runs are strictly sequential: each product is fetched and built before the
//! next request goes out, and each category is written before the next one
//! starts. A product that fails (unreachable page, unknown rating) is skipped
//! and listed in the category report; a category whose listing cannot be
//! resolved is skipped and listed in the site report.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::catalog::{self, CategoryLink, ProductRecord, ScraperConfig, UNKNOWN};
use crate::error::Result;
use crate::http::HttpClient;
use crate::images::{ImageNames, download_image};
use crate::storage::{self, CategoryLayout};

/// Something that could not be scraped, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub url: String,
    pub reason: String,
}

impl Failure {
    fn new(url: &str, reason: impl ToString) -> Self {
        Self {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Outcome of one category run
#[derive(Debug, Clone)]
pub struct CategoryReport {
    /// Category name as used for the output directory
    pub name: String,

    /// CSV file written for the category
    pub csv_path: PathBuf,

    /// Product URLs found across all listing pages
    pub products_found: usize,

    /// Rows written to the CSV
    pub records_written: usize,

    /// Cover images written
    pub images_written: usize,

    /// Products that were skipped
    pub failures: Vec<Failure>,

    /// Images that could not be downloaded
    pub missing_images: Vec<Failure>,
}

impl CategoryReport {
    /// Whether every product and image made it to disk
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.missing_images.is_empty()
    }
}

/// Outcome of a whole-site run
#[derive(Debug, Clone, Default)]
pub struct SiteReport {
    pub categories: Vec<CategoryReport>,
    pub failed_categories: Vec<Failure>,
}

impl SiteReport {
    /// Total CSV rows written across categories
    pub fn records_written(&self) -> usize {
        self.categories.iter().map(|c| c.records_written).sum()
    }
}

/// Scrape a single product page
#[instrument(skip(http, config))]
pub async fn run_product(
    http: &HttpClient,
    config: &ScraperConfig,
    url: &str,
) -> Result<ProductRecord> {
    let base = config.base()?;
    Ok(catalog::scrape_product(http, &base, url).await?)
}

/// Scrape one category into `<out_root>/<name>/`
///
/// `name` overrides the name read from the category page.
#[instrument(skip(http, config, out_root))]
pub async fn run_category(
    http: &HttpClient,
    config: &ScraperConfig,
    name: Option<&str>,
    url: &str,
    out_root: &Path,
) -> Result<CategoryReport> {
    storage::ensure_output_root(out_root)?;
    let base = config.base()?;

    let job = catalog::resolve_category(http, name, url).await?;
    let layout = CategoryLayout::create(out_root, &job.name)?;

    info!("Scraping books information from <{}> category", job.name);
    let mut records = Vec::with_capacity(job.product_urls.len());
    let mut failures = Vec::new();
    for product_url in &job.product_urls {
        match catalog::scrape_product(http, &base, product_url).await {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("Skipping {}: {}", product_url, e);
                failures.push(Failure::new(product_url, e));
            }
        }
    }

    let csv_path = layout.csv_path();
    storage::write_records(&csv_path, &records)?;
    info!("Generated <{}> category CSV file at {}", job.name, csv_path.display());

    let images_dir = layout.images_dir();
    let mut images_written = 0;
    let mut missing_images = Vec::new();
    let mut names = ImageNames::new();
    for (index, record) in records.iter().enumerate() {
        info!("({}/{}) Downloading <{}> image", index + 1, records.len(), record.title);
        let file_stem = names.claim(&record.title);
        match download_image(http, &record.image_url, &file_stem, &images_dir, config.image_extension).await {
            Ok(Some(_)) => images_written += 1,
            Ok(None) => missing_images.push(Failure::new(&record.image_url, missing_image_reason(record))),
            Err(e) => {
                warn!("Failed to save image for <{}>: {}", record.title, e);
                missing_images.push(Failure::new(&record.image_url, e));
            }
        }
    }

    let report = CategoryReport {
        name: job.name,
        csv_path,
        products_found: job.product_urls.len(),
        records_written: records.len(),
        images_written,
        failures,
        missing_images,
    };
    if !report.is_complete() {
        warn!(
            "<{}>: {} products skipped, {} images missing",
            report.name,
            report.failures.len(),
            report.missing_images.len()
        );
    }
    Ok(report)
}

fn missing_image_reason(record: &ProductRecord) -> &'static str {
    if record.image_url == UNKNOWN {
        "no image on product page"
    } else {
        "download failed"
    }
}

/// Scrape every category of the site into `out_root`
///
/// `on_category` is called after each category has been written.
#[instrument(skip(http, config, out_root, on_category))]
pub async fn run_site<F>(
    http: &HttpClient,
    config: &ScraperConfig,
    out_root: &Path,
    mut on_category: F,
) -> Result<SiteReport>
where
    F: FnMut(&CategoryLink, &CategoryReport),
{
    storage::ensure_output_root(out_root)?;
    let home = config.base()?;

    let categories = catalog::discover_categories(http, &home).await?;
    let mut report = SiteReport::default();

    for (index, category) in categories.iter().enumerate() {
        info!("[{}/{}] Scraping <{}> category", index + 1, categories.len(), category.name);
        match run_category(http, config, Some(&category.name), &category.url, out_root).await {
            Ok(category_report) => {
                on_category(category, &category_report);
                report.categories.push(category_report);
            }
            Err(e) => {
                warn!("Skipping <{}> category: {}", category.name, e);
                report.failed_categories.push(Failure::new(&category.url, e));
            }
        }
    }

    Ok(report)
}
