use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::application::errors::{ApiError, AppError};
use crate::application::routes::support::LenientJson;
use crate::application::state::AppState;
use crate::domain::images::ImageResult;
use crate::domain::suggestions::Suggestions;
use crate::infrastructure::{ai, pexels};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SuggestRequest {
    pub location: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub suggestions: Suggestions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub images: Vec<ImageResult>,
}

/// Suggest stock-photo search terms for an event location.
#[tracing::instrument(skip(state))]
pub(crate) async fn suggest_image(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<SuggestRequest>,
) -> Result<Json<SuggestResponse>, ApiError> {
    let location = request.location.trim();
    if location.is_empty() {
        return Ok(Json(SuggestResponse {
            suggestions: Vec::new(),
        }));
    }

    let api_key = state.settings.anthropic_api_key()?;
    let suggestions = ai::suggest_search_terms(
        &state.http_client,
        &state.anthropic_url,
        api_key,
        &state.anthropic_model,
        location,
    )
    .await?;

    Ok(Json(SuggestResponse { suggestions }))
}

/// Search stock photos and reduce each hit to an [`ImageResult`].
#[tracing::instrument(skip(state))]
pub(crate) async fn search_images(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = request.query.trim();
    if query.is_empty() {
        return Err(AppError::validation("Query is required").into());
    }

    let api_key = state.settings.pexels_api_key()?;
    let images = pexels::search_photos(&state.http_client, &state.pexels_url, api_key, query).await?;

    Ok(Json(SearchResponse { images }))
}
