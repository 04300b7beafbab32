//! Request extraction helpers
//!
//! Bodies are read according to their `Content-Type`: JSON, URL-encoded
//! forms, and anything else (including no body at all) as an empty request.
//! Parse failures are answered with a failure envelope instead of axum's
//! plain-text rejection.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};
use crate::models::{parse_int_prefix, RecordId};

/// Request body decoded from JSON or a URL-encoded form.
///
/// Any other content type, and an empty JSON body, yield `T::default()`,
/// so missing fields surface through the handler's own checks.
#[derive(Debug)]
pub struct ApiBody<T>(pub T);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(headers: &HeaderMap) -> BodyKind {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return BodyKind::Other;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
    {
        BodyKind::Json
    } else if essence == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ApiBody<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        match body_kind(req.headers()) {
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))?;
                if bytes.is_empty() {
                    return Ok(Self(T::default()));
                }
                let Json(value) = Json::<T>::from_bytes(&bytes)?;
                Ok(Self(value))
            }
            BodyKind::Form => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))?;
                Ok(Self(value))
            }
            BodyKind::Other => Ok(Self(T::default())),
        }
    }
}

/// Turns a path segment into a record id.
///
/// Parsing is lenient (`"2abc"` is 2). A segment that yields no
/// non-negative id can never match a record, so it maps to `NotFound`
/// carrying `not_found` as message.
pub fn record_id(raw: &str, not_found: &str) -> Result<RecordId> {
    parse_int_prefix(raw)
        .and_then(|id| RecordId::try_from(id).ok())
        .ok_or_else(|| ApiError::NotFound(not_found.to_string()))
}
