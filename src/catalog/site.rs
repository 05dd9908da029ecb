//! Category discovery from the site navigation

use scraper::Html;
use tracing::{info, instrument};
use url::Url;

use crate::catalog::ScrapeError;
use crate::catalog::extraction::selector;
use crate::catalog::transform::normalize_whitespace;
use crate::http::HttpClient;

/// A category link from the side navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLink {
    pub name: String,
    pub url: String,
}

/// Categories listed under the top-level "Books" entry of the navigation
pub fn category_links(document: &Html, home: &Url) -> Vec<CategoryLink> {
    let Some(links) = selector("ul.nav.nav-list ul a") else {
        return Vec::new();
    };

    document
        .select(&links)
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            let url = home.join(href).ok()?;
            Some(CategoryLink {
                name: normalize_whitespace(&a.text().collect::<String>()),
                url: url.to_string(),
            })
        })
        .collect()
}

/// Fetch the home page and list every category
#[instrument(skip(http, home), fields(home = %home))]
pub async fn discover_categories(
    http: &HttpClient,
    home: &Url,
) -> Result<Vec<CategoryLink>, ScrapeError> {
    let document = http.fetch_document(home.as_str()).await?;
    let categories = category_links(&document, home);
    info!("{} categories found", categories.len());
    Ok(categories)
}
