mod home;

use std::time::Duration;

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::application::state::AppState;

/// Generate a static asset handler that serves an embedded file.
macro_rules! static_asset_str {
    ($name:ident, $path:literal, $content_type:literal) => {
        async fn $name() -> impl IntoResponse {
            ([("content-type", $content_type)], include_str!($path))
        }
    };
}

pub(super) fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", get(home::index_page))
        .route("/health", get(health))
}

/// Static assets stay no-store unless a max-age is configured.
pub(super) fn asset_router(max_age: Duration) -> axum::Router<AppState> {
    let router = axum::Router::new()
        .route("/static/css/styles.css", get(styles))
        .route("/static/js/app.js", get(app_js));

    match static_cache_control(max_age) {
        Some(value) => router.layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            value,
        )),
        None => router,
    }
}

fn static_cache_control(max_age: Duration) -> Option<HeaderValue> {
    let secs = max_age.as_secs();
    if secs == 0 {
        return None;
    }
    HeaderValue::from_str(&format!("public, max-age={secs}")).ok()
}

static_asset_str!(
    styles,
    "../../../../static/css/styles.css",
    "text/css; charset=utf-8"
);
static_asset_str!(
    app_js,
    "../../../../static/js/app.js",
    "application/javascript; charset=utf-8"
);

pub(super) async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn health() -> impl IntoResponse {
    ([("content-type", "application/json")], r#"{"status":"ok"}"#)
}
