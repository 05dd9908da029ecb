//! Cover image downloads

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use reqwest::header::CONTENT_TYPE;
use tokio::fs;
use tracing::{debug, instrument, warn};

use crate::catalog::transform::sanitize_filename;
use crate::catalog::{ImageExtension, ScrapeError, UNKNOWN};
use crate::http::HttpClient;

/// Extension used when none can be derived
const DEFAULT_EXTENSION: &str = ".jpg";

/// File extension for an image MIME type; parameters after `;` are ignored
pub fn extension_for_content_type(content_type: &str) -> Option<&'static str> {
    let mime = content_type.split(';').next().unwrap_or_default().trim();
    match mime.to_ascii_lowercase().as_str() {
        "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(".jpg"),
        "image/png" => Some(".png"),
        "image/gif" => Some(".gif"),
        "image/webp" => Some(".webp"),
        "image/svg+xml" => Some(".svg"),
        "image/bmp" => Some(".bmp"),
        _ => None,
    }
}

/// File name stem for a book title
pub fn image_file_stem(title: &str) -> String {
    let stem = sanitize_filename(title);
    if stem.trim().is_empty() {
        UNKNOWN.to_string()
    } else {
        stem
    }
}

/// File stems handed out for one images directory
///
/// Titles that sanitise to the same stem get a ` (2)`, ` (3)`, ... suffix so
/// no cover overwrites another. Comparison ignores case.
#[derive(Debug, Default)]
pub struct ImageNames {
    used: HashSet<String>,
}

impl ImageNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a stem for `title`
    pub fn claim(&mut self, title: &str) -> String {
        let stem = image_file_stem(title);
        let mut candidate = stem.clone();
        let mut n = 2;
        while !self.used.insert(candidate.to_lowercase()) {
            candidate = format!("{stem} ({n})");
            n += 1;
        }
        if candidate != stem {
            debug!("Image name <{}> already taken, using <{}>", stem, candidate);
        }
        candidate
    }
}

/// Download an image into `directory` as `<file_stem><extension>`
///
/// Returns `Ok(None)` without writing anything when the URL is the sentinel or
/// the server answers with a non-success status.
#[instrument(skip(http, directory))]
pub async fn download_image(
    http: &HttpClient,
    url: &str,
    file_stem: &str,
    directory: &Path,
    extension: ImageExtension,
) -> Result<Option<PathBuf>, ScrapeError> {
    if url == UNKNOWN {
        warn!("No image URL for <{}>", file_stem);
        return Ok(None);
    }

    let response = http.get(url).await?;
    let status = response.status();
    if !status.is_success() {
        warn!("Couldn't download image at URL {} ({})", url, status);
        return Ok(None);
    }

    let extension = match extension {
        ImageExtension::Fixed => DEFAULT_EXTENSION,
        ImageExtension::FromContentType => response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(extension_for_content_type)
            .unwrap_or(DEFAULT_EXTENSION),
    };

    let content = response.bytes().await?;
    let path = directory.join(format!("{}{}", file_stem, extension));
    fs::write(&path, &content).await?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ScraperConfig;
    use mockito::Server;

    fn client() -> HttpClient {
        HttpClient::new(&ScraperConfig::default()).unwrap()
    }

    #[test]
    fn test_extension_for_content_type() {
        assert_eq!(extension_for_content_type("image/jpeg"), Some(".jpg"));
        assert_eq!(extension_for_content_type("image/PNG; charset=binary"), Some(".png"));
        assert_eq!(extension_for_content_type("text/html"), None);
        assert_eq!(extension_for_content_type(""), None);
    }

    #[test]
    fn test_image_file_stem() {
        assert_eq!(image_file_stem("A:B\"C"), "ABC");
        assert_eq!(image_file_stem("???"), UNKNOWN);
    }

    #[test]
    fn test_image_names_disambiguate_collisions() {
        let mut names = ImageNames::new();
        assert_eq!(names.claim("Who: Me?"), "Who Me");
        assert_eq!(names.claim("Who Me"), "Who Me (2)");
        assert_eq!(names.claim("who me"), "who me (3)");
        assert_eq!(names.claim("Other"), "Other");
        assert_eq!(names.claim("???"), UNKNOWN);
        assert_eq!(names.claim(""), "Unknown (2)");
    }

    #[tokio::test]
    async fn test_download_writes_sanitized_file() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/media/cover.jpg")
            .with_status(200)
            .with_header("content-type", "image/jpeg")
            .with_body(b"\xff\xd8\xff\xe0fake")
            .expect(1)
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let url = format!("{}/media/cover.jpg", server.url());
        let path = download_image(&client(), &url, &image_file_stem("A:B\"C"), dir.path(), ImageExtension::Fixed)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(path, dir.path().join("ABC.jpg"));
        assert_eq!(std::fs::read(&path).unwrap(), b"\xff\xd8\xff\xe0fake");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_extension_from_content_type() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/media/cover")
            .with_status(200)
            .with_header("content-type", "image/png")
            .with_body("png")
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let url = format!("{}/media/cover", server.url());
        let path = download_image(&client(), &url, "Cover", dir.path(), ImageExtension::FromContentType)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(path, dir.path().join("Cover.png"));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_failed_download_writes_nothing() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/media/missing.jpg")
            .with_status(404)
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let url = format!("{}/media/missing.jpg", server.url());
        let result = download_image(&client(), &url, "Missing", dir.path(), ImageExtension::Fixed)
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unknown_url_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let result = download_image(&client(), UNKNOWN, "Title", dir.path(), ImageExtension::Fixed)
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
