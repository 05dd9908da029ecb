//! Normalisation of raw extracted values into CSV-ready strings
//!
//! All functions are pure. [`UNKNOWN`] passes through every transform except
//! [`rating`], which only accepts the five rating words.

use std::str::FromStr;

use url::Url;

use crate::catalog::{ScrapeError, UNKNOWN};

/// Characters that cannot appear in a file name on common filesystems
const FORBIDDEN_FILENAME_CHARS: &[char] = &['\\', '/', '"', ':', '*', '?', '<', '>', '|'];

/// Star rating as written in the page's CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rating {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Rating {
    /// Digit written to the CSV
    pub fn digit(self) -> &'static str {
        match self {
            Rating::One => "1",
            Rating::Two => "2",
            Rating::Three => "3",
            Rating::Four => "4",
            Rating::Five => "5",
        }
    }
}

impl FromStr for Rating {
    type Err = ScrapeError;

    fn from_str(word: &str) -> Result<Self, Self::Err> {
        match word {
            "One" => Ok(Rating::One),
            "Two" => Ok(Rating::Two),
            "Three" => Ok(Rating::Three),
            "Four" => Ok(Rating::Four),
            "Five" => Ok(Rating::Five),
            _ => Err(ScrapeError::UnknownRating(word.to_string())),
        }
    }
}

/// Drop the currency symbol: `£51.77` becomes `51.77`
pub fn price(raw: &str) -> String {
    if raw == UNKNOWN {
        return raw.to_string();
    }
    let mut chars = raw.chars();
    chars.next();
    chars.as_str().to_string()
}

/// Stock count: `In stock (22 available)` becomes `22`
pub fn availability(raw: &str) -> String {
    let raw = raw.trim();
    let raw = raw.strip_prefix("In stock (").unwrap_or(raw);
    raw.strip_suffix(" available)").unwrap_or(raw).to_string()
}

/// Description text, trimmed; quoting is left to the CSV writer
pub fn description(raw: &str) -> String {
    raw.trim().to_string()
}

/// Rating word to digit, failing on anything outside One..Five
pub fn rating(word: &str) -> Result<&'static str, ScrapeError> {
    Ok(word.parse::<Rating>()?.digit())
}

/// Resolve a relative image path against the site root
pub fn image_url(base: &Url, relative: &str) -> Result<String, ScrapeError> {
    if relative == UNKNOWN {
        return Ok(relative.to_string());
    }
    Ok(base.join(relative)?.to_string())
}

/// Remove characters that are illegal in file names
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| !FORBIDDEN_FILENAME_CHARS.contains(c))
        .collect()
}

/// Collapse whitespace runs into single spaces and trim
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
