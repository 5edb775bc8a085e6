use std::time::Duration;

use serde::Deserialize;

use crate::application::errors::{AppError, Upstream};
use crate::domain::images::ImageResult;

pub const PEXELS_SEARCH_URL: &str = "https://api.pexels.com/v1/search";
const USER_AGENT: &str = "Bannerforge/1.0";
const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);
const PER_PAGE: u32 = 12;
const ORIENTATION: &str = "landscape";

/// Search Pexels for landscape photos matching `query`.
pub async fn search_photos(
    client: &reqwest::Client,
    url: &str,
    api_key: &str,
    query: &str,
) -> Result<Vec<ImageResult>, AppError> {
    let per_page = PER_PAGE.to_string();

    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .header("Authorization", api_key)
        .query(&[
            ("query", query),
            ("per_page", per_page.as_str()),
            ("orientation", ORIENTATION),
        ])
        .timeout(SEARCH_TIMEOUT)
        .send()
        .await
        .map_err(|e| AppError::external(Upstream::ImageSearch, e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "(unreadable body)".to_string());
        return Err(AppError::external(
            Upstream::ImageSearch,
            format!("returned status {status}: {body}"),
        ));
    }

    let body = response.text().await.map_err(|e| {
        AppError::external(
            Upstream::ImageSearch,
            format!("failed to read response body: {e}"),
        )
    })?;

    let parsed: SearchResponse = serde_json::from_str(&body).map_err(|e| {
        AppError::external(
            Upstream::ImageSearch,
            format!("failed to parse search response: {e}"),
        )
    })?;

    Ok(parsed.photos.into_iter().map(ImageResult::from).collect())
}

// --- Pexels API types ---

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    id: u64,
    photographer: Option<String>,
    alt: Option<String>,
    src: PhotoSources,
}

#[derive(Debug, Deserialize)]
struct PhotoSources {
    medium: String,
    landscape: String,
}

impl From<Photo> for ImageResult {
    fn from(photo: Photo) -> Self {
        Self {
            id: photo.id,
            thumb: photo.src.medium,
            full: photo.src.landscape,
            photographer: photo.photographer.unwrap_or_default(),
            alt: photo.alt.unwrap_or_default(),
        }
    }
}
