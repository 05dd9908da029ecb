//! Raw field extraction from product pages
//!
//! Every function returns the text as found on the page, or [`UNKNOWN`] when
//! the node holding it is missing. Nothing here fails.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::catalog::UNKNOWN;

pub const UPC: &str = "UPC";
pub const PRICE_INCL_TAX: &str = "Price (incl. tax)";
pub const PRICE_EXCL_TAX: &str = "Price (excl. tax)";
pub const AVAILABILITY: &str = "Availability";

/// Table labels read from the product information table, in page order
pub const TABLE_LABELS: [&str; 4] = [UPC, PRICE_INCL_TAX, PRICE_EXCL_TAX, AVAILABILITY];

/// Raw cells of the product information table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductTable {
    pub upc: String,
    pub price_incl_tax: String,
    pub price_excl_tax: String,
    pub availability: String,
}

impl Default for ProductTable {
    fn default() -> Self {
        Self {
            upc: UNKNOWN.to_string(),
            price_incl_tax: UNKNOWN.to_string(),
            price_excl_tax: UNKNOWN.to_string(),
            availability: UNKNOWN.to_string(),
        }
    }
}

impl ProductTable {
    /// Value for one of [`TABLE_LABELS`]
    pub fn get(&self, label: &str) -> Option<&str> {
        match label {
            UPC => Some(&self.upc),
            PRICE_INCL_TAX => Some(&self.price_incl_tax),
            PRICE_EXCL_TAX => Some(&self.price_excl_tax),
            AVAILABILITY => Some(&self.availability),
            _ => None,
        }
    }

    fn slot_mut(&mut self, label: &str) -> Option<&mut String> {
        match label {
            UPC => Some(&mut self.upc),
            PRICE_INCL_TAX => Some(&mut self.price_incl_tax),
            PRICE_EXCL_TAX => Some(&mut self.price_excl_tax),
            AVAILABILITY => Some(&mut self.availability),
            _ => None,
        }
    }
}

/// Parse a selector, logging and returning `None` if it is invalid
pub(crate) fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            warn!("Failed to parse selector '{}': {}", css, e);
            None
        }
    }
}

/// First element matching `css`
pub(crate) fn select_first<'a>(document: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = selector(css)?;
    document.select(&selector).next()
}

/// Text content of an element, trimmed
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn text_or_unknown(element: Option<ElementRef<'_>>) -> String {
    element
        .map(element_text)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Text of the level-1 heading
pub fn title(document: &Html) -> String {
    text_or_unknown(select_first(document, "h1"))
}

/// Paragraph that follows the `product_description` anchor
pub fn description(document: &Html) -> String {
    text_or_unknown(select_first(document, "#product_description ~ p"))
}

/// Last link of the breadcrumb
pub fn category(document: &Html) -> String {
    let Some(selector) = selector("ul.breadcrumb a") else {
        return UNKNOWN.to_string();
    };
    text_or_unknown(document.select(&selector).last())
}

/// Second class token of the star-rating paragraph, e.g. `Three`
pub fn review_rating_word(document: &Html) -> String {
    select_first(document, "p.star-rating")
        .and_then(|p| p.value().attr("class"))
        .and_then(|classes| classes.split_whitespace().nth(1))
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// `src` of the image in the active carousel item, still relative
pub fn image_url_relative(document: &Html) -> String {
    select_first(document, "div.item.active img")
        .and_then(|img| img.value().attr("src"))
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Cells of the product information table for [`TABLE_LABELS`]
pub fn table_fields(document: &Html) -> ProductTable {
    let mut table = ProductTable::default();

    let (Some(rows), Some(th), Some(td)) = (
        selector("table.table-striped tr"),
        selector("th"),
        selector("td"),
    ) else {
        return table;
    };

    for row in document.select(&rows) {
        let (Some(header), Some(cell)) = (row.select(&th).next(), row.select(&td).next()) else {
            continue;
        };
        if let Some(slot) = table.slot_mut(&element_text(header)) {
            *slot = element_text(cell);
        }
    }

    table
}
