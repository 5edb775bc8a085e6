use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::errors::{ApiError, AppError};
use crate::application::routes::support::LenientJson;
use crate::domain::banners::BannerFields;
use crate::presentation::web::templates;

#[derive(Debug, Serialize, Deserialize)]
pub struct RenderResponse {
    pub html: String,
}

#[tracing::instrument(skip(fields))]
pub(crate) async fn render_banner(
    LenientJson(fields): LenientJson<BannerFields>,
) -> Result<Json<RenderResponse>, ApiError> {
    let html = templates::render_banner(fields)
        .map_err(|err| AppError::unexpected(format!("failed to render banner: {err}")))?;

    Ok(Json(RenderResponse { html }))
}
