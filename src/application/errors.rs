use std::fmt;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

/// Third-party services the proxies call out to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Upstream {
    TextGeneration,
    ImageSearch,
}

impl Upstream {
    /// Message returned to the browser. Never includes upstream detail.
    pub fn public_message(self) -> &'static str {
        match self {
            Upstream::TextGeneration => "Failed to get suggestions. Please try again.",
            Upstream::ImageSearch => "Failed to search images. Please try again.",
        }
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Upstream::TextGeneration => f.write_str("text generation"),
            Upstream::ImageSearch => f.write_str("image search"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0} not configured")]
    Configuration(&'static str),
    #[error("{upstream} request failed: {detail}")]
    ExternalService { upstream: Upstream, detail: String },
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// `key` is the environment variable that should have been set.
    pub fn configuration(key: &'static str) -> Self {
        Self::Configuration(key)
    }

    pub fn external(upstream: Upstream, detail: impl Into<String>) -> Self {
        Self::ExternalService {
            upstream,
            detail: detail.into(),
        }
    }

    pub fn unexpected(detail: impl Into<String>) -> Self {
        Self::Unexpected(detail.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_)
            | AppError::ExternalService { .. }
            | AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// HTTP-facing wrapper: renders an [`AppError`] as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let message = match &self.0 {
            AppError::Validation(_) | AppError::Configuration(_) => self.0.to_string(),
            AppError::ExternalService { upstream, detail } => {
                error!(%upstream, detail = %detail, "external service call failed");
                upstream.public_message().to_string()
            }
            AppError::Unexpected(detail) => {
                error!(detail = %detail, "unexpected error");
                "Internal server error".to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
