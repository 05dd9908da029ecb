//! Product record assembly

use scraper::Html;
use tracing::{info, instrument};
use url::Url;

use crate::catalog::{ProductRecord, ScrapeError, extraction, transform};
use crate::http::HttpClient;

/// Build the record for one product page
///
/// Fails only when the rating word is not one of the five known values.
pub fn build_record(
    page_url: &str,
    document: &Html,
    base: &Url,
) -> Result<ProductRecord, ScrapeError> {
    let table = extraction::table_fields(document);
    let title = extraction::title(document);
    let category = extraction::category(document);

    let record = ProductRecord {
        product_page_url: page_url.to_string(),
        universal_product_code: table.upc,
        price_including_tax: transform::price(&table.price_incl_tax),
        price_excluding_tax: transform::price(&table.price_excl_tax),
        number_available: transform::availability(&table.availability),
        product_description: transform::description(&extraction::description(document)),
        review_rating: transform::rating(&extraction::review_rating_word(document))?.to_string(),
        image_url: transform::image_url(base, &extraction::image_url_relative(document))?,
        title,
        category,
    };

    info!(
        "Scraped <{}> from <{}> category",
        record.title, record.category
    );
    Ok(record)
}

/// Fetch a product page and build its record
#[instrument(skip(http, base))]
pub async fn scrape_product(
    http: &HttpClient,
    base: &Url,
    url: &str,
) -> Result<ProductRecord, ScrapeError> {
    let document = http.fetch_document(url).await?;
    build_record(url, &document, base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ScraperConfig;
    use crate::catalog::test_pages::{EMPTY_PAGE, PRODUCT_PAGE, PRODUCT_PAGE_SPARSE};
    use crate::catalog::{COLUMNS, UNKNOWN};
    use mockito::Server;

    const PAGE_URL: &str = "https://books.toscrape.com/catalogue/a-light-in-the-attic_1000/index.html";

    fn base() -> Url {
        Url::parse("https://books.toscrape.com/").unwrap()
    }

    #[test]
    fn test_build_full_record() {
        let document = Html::parse_document(PRODUCT_PAGE);
        let record = build_record(PAGE_URL, &document, &base()).unwrap();

        assert_eq!(record.product_page_url, PAGE_URL);
        assert_eq!(record.universal_product_code, "a897fe39b1053632");
        assert_eq!(record.title, "A Light in the Attic");
        assert_eq!(record.price_including_tax, "51.77");
        assert_eq!(record.price_excluding_tax, "51.77");
        assert_eq!(record.number_available, "22");
        assert!(record.product_description.contains("\"A Light in the Attic\""));
        assert_eq!(record.category, "Poetry");
        assert_eq!(record.review_rating, "3");
        assert_eq!(
            record.image_url,
            "https://books.toscrape.com/media/cache/fe/72/fe72f0532301ec28892ae79a629a293c.jpg"
        );
        assert_eq!(record.as_row().len(), COLUMNS.len());
    }

    #[test]
    fn test_build_sparse_record() {
        let document = Html::parse_document(PRODUCT_PAGE_SPARSE);
        let record = build_record(PAGE_URL, &document, &base()).unwrap();

        assert_eq!(record.price_including_tax, "55.53");
        assert_eq!(record.price_excluding_tax, UNKNOWN);
        assert_eq!(record.number_available, UNKNOWN);
        assert_eq!(record.product_description, UNKNOWN);
        assert_eq!(record.review_rating, "1");
        assert_eq!(record.category, "Default");
    }

    #[test]
    fn test_missing_rating_aborts_record() {
        let document = Html::parse_document(EMPTY_PAGE);
        let result = build_record(PAGE_URL, &document, &base());
        assert!(matches!(result, Err(ScrapeError::UnknownRating(w)) if w == UNKNOWN));
    }

    #[tokio::test]
    async fn test_scrape_product() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/catalogue/a-light-in-the-attic_1000/index.html")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(PRODUCT_PAGE)
            .expect(1)
            .create_async()
            .await;

        let config = ScraperConfig::builder().base_url(server.url()).build();
        let http = HttpClient::new(&config).unwrap();
        let base = config.base().unwrap();
        let url = format!("{}/catalogue/a-light-in-the-attic_1000/index.html", server.url());

        let record = scrape_product(&http, &base, &url).await.unwrap();
        assert_eq!(record.product_page_url, url);
        assert_eq!(
            record.image_url,
            format!(
                "{}/media/cache/fe/72/fe72f0532301ec28892ae79a629a293c.jpg",
                server.url()
            )
        );

        mock.assert_async().await;
    }
}
