use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::routes::render_html;
use crate::presentation::web::templates::IndexTemplate;

#[tracing::instrument]
pub(crate) async fn index_page() -> Result<Response, StatusCode> {
    render_html(IndexTemplate::default()).map(IntoResponse::into_response)
}
