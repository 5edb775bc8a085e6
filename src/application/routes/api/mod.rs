pub(crate) mod banners;
pub(crate) mod images;

use axum::routing::post;

use crate::application::state::AppState;

pub(super) fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/render", post(banners::render_banner))
        .route("/suggest-image", post(images::suggest_image))
        .route("/search-images", post(images::search_images))
}
