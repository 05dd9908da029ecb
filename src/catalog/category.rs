//! Category pagination and product list resolution

use scraper::Html;
use tracing::{debug, info, instrument};
use url::Url;

use crate::catalog::extraction::{element_text, select_first, selector};
use crate::catalog::{CategoryJob, ScrapeError, UNKNOWN, extraction};
use crate::http::HttpClient;

/// Category root URL: a listing URL without its `index.html` or `page-N.html`
pub fn category_root(url: &str) -> String {
    let Some((dir, file)) = url.rsplit_once('/') else {
        return url.to_string();
    };
    if file == "index.html" || is_listing_page(file) {
        format!("{dir}/")
    } else {
        url.to_string()
    }
}

fn is_listing_page(file: &str) -> bool {
    file.strip_prefix("page-")
        .and_then(|rest| rest.strip_suffix(".html"))
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

/// Number of listing pages, read from the pager's `Page X of N`
///
/// A page without a pager is a single-page category.
pub fn page_count(document: &Html) -> Result<u32, ScrapeError> {
    if select_first(document, "ul.pager").is_none() {
        return Ok(1);
    }

    let text = select_first(document, "ul.pager li.current")
        .map(element_text)
        .unwrap_or_default();

    let total = {
        let words: Vec<&str> = text.split_whitespace().collect();
        match words.as_slice() {
            ["Page", _, "of", total] => total.parse::<u32>().ok(),
            _ => None,
        }
    };
    total.ok_or(ScrapeError::Pagination(text))
}

/// Absolute product URLs listed on a category page, in page order
pub fn product_links(document: &Html, page_url: &Url) -> Vec<String> {
    let (Some(articles), Some(link)) = (selector("article"), selector("a")) else {
        return Vec::new();
    };

    document
        .select(&articles)
        .filter_map(|article| article.select(&link).next())
        .filter_map(|a| a.value().attr("href"))
        .filter_map(|href| page_url.join(href).ok())
        .map(|url| url.to_string())
        .collect()
}

/// Category name from the listing heading, else from the URL slug
fn category_name(document: &Html, root: &Url) -> String {
    let heading = extraction::title(document);
    if heading != UNKNOWN && !heading.is_empty() {
        return heading;
    }

    root.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Collect every product URL of a category
///
/// Page 1 is the root page itself; `page-1.html` is never requested, since
/// single-page categories do not have one. A failure on any listing page is
/// fatal for the category.
#[instrument(skip(http))]
pub async fn resolve_category(
    http: &HttpClient,
    name: Option<&str>,
    url: &str,
) -> Result<CategoryJob, ScrapeError> {
    let root = category_root(url);
    let root_url = Url::parse(&root)?;

    let (name, page_count, mut product_urls) = {
        let document = http.fetch_document(&root).await?;
        let name = match name {
            Some(name) => name.to_string(),
            None => category_name(&document, &root_url),
        };
        (name, page_count(&document)?, product_links(&document, &root_url))
    };
    info!("Scraping books URLs from <{}> category ({} pages)", name, page_count);

    for page in 2..=page_count {
        let page_url = root_url.join(&format!("page-{page}.html"))?;
        debug!("Fetching listing page {}", page_url);
        let document = http.fetch_document(page_url.as_str()).await?;
        product_urls.extend(product_links(&document, &page_url));
    }

    info!("{} books found in <{}> category", product_urls.len(), name);
    Ok(CategoryJob {
        name,
        url: root,
        page_count,
        product_urls,
    })
}
