pub mod api;
pub mod app;
pub mod support;

use askama::Template;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Request, Response, StatusCode, header};
use axum::response::Html;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::{MakeHeaderValue, SetResponseHeaderLayer};
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span, error};

use crate::application::state::AppState;
use crate::presentation::web::templates::render_template;

/// 10 MB request body limit. Uploaded images travel as data URLs.
const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Editors must never see a stale preview or suggestion list.
const NO_STORE: &str = "no-cache, no-store, must-revalidate";

pub fn app_router(state: AppState) -> axum::Router {
    let static_max_age = state.settings.static_max_age;

    axum::Router::new()
        .merge(app::router())
        .merge(app::asset_router(static_max_age))
        .nest(
            "/api",
            api::router().layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES)),
        )
        .fallback(app::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(BannerforgeMakeSpan)
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::CACHE_CONTROL,
                    HeaderValue::from_static(NO_STORE),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::PRAGMA,
                    UnlessCacheable(HeaderValue::from_static("no-cache")),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::EXPIRES,
                    UnlessCacheable(HeaderValue::from_static("0")),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::REFERRER_POLICY,
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                .layer(CompressionLayer::new().gzip(true))
                // Inside the header layers so a 413 still gets no-store
                .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES)),
        )
        .with_state(state)
}

/// Legacy no-cache header, skipped when an inner route already chose a
/// `Cache-Control` (static assets with a configured max-age).
#[derive(Clone)]
struct UnlessCacheable(HeaderValue);

impl<B> MakeHeaderValue<Response<B>> for UnlessCacheable {
    fn make_header_value(&mut self, response: &Response<B>) -> Option<HeaderValue> {
        if response.headers().contains_key(header::CACHE_CONTROL) {
            None
        } else {
            Some(self.0.clone())
        }
    }
}

#[derive(Clone)]
struct BannerforgeMakeSpan;

impl<B> MakeSpan<B> for BannerforgeMakeSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
        )
    }
}

pub(crate) fn render_html<T: Template>(template: T) -> Result<Html<String>, StatusCode> {
    render_template(template).map(Html).map_err(|err| {
        error!(error = %err, "failed to render template");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
