use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// JSON body extractor that never rejects a malformed payload.
///
/// Anything that is not a JSON object, or an object that does not fit `T`,
/// becomes `T::default()`, so handlers apply their missing-field semantics
/// uniformly. Only an unreadable or oversized body is rejected.
#[derive(Debug)]
pub struct LenientJson<T>(pub T);

impl<S, T> FromRequest<S> for LenientJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = BytesRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await?;
        Ok(Self(lenient_json(&body)))
    }
}

/// Parse `body` as a JSON object into `T`, defaulting on any failure.
pub fn lenient_json<T>(body: &[u8]) -> T
where
    T: DeserializeOwned + Default,
{
    match serde_json::from_slice::<Value>(body) {
        Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_else(|err| {
            warn!(error = %err, "JSON payload did not match the expected shape");
            T::default()
        }),
        Ok(_) => {
            warn!("JSON payload is not an object");
            T::default()
        }
        Err(err) => {
            if !body.is_empty() {
                warn!(error = %err, "failed to parse JSON payload");
            }
            T::default()
        }
    }
}
