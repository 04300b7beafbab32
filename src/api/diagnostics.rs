//! Diagnostic Handlers
//!
//! Endpoints under `/api/test` for exercising HTTP clients: echo a body,
//! answer after a delay, and validate a form.

use std::time::Duration;

use axum::{extract::Query, Json};
use tracing::{debug, warn};

use super::extract::ApiBody;
use crate::error::{ApiError, Result};
use crate::models::{DelayQuery, DelayResponse, EchoData, EchoPayload, Envelope, ValidateRequest};

/// Handler for POST /api/test/echo
///
/// JSON bodies must be an object or array; form bodies echo as an object
/// of strings. A missing body is echoed as `{}`.
pub async fn echo(ApiBody(payload): ApiBody<EchoPayload>) -> Json<Envelope<EchoData>> {
    Json(Envelope::ok(
        EchoData::now(payload.0),
        "Data received successfully",
    ))
}

/// Handler for GET /api/test/delay
///
/// Sleeps without holding any lock, so other requests proceed meanwhile.
/// There is no upper bound; negative values respond immediately.
pub async fn delay(Query(query): Query<DelayQuery>) -> Json<DelayResponse> {
    let delay_ms = query.delay_ms();
    debug!(delay_ms, "delaying response");

    tokio::time::sleep(Duration::from_millis(delay_ms.max(0) as u64)).await;

    Json(DelayResponse::new(delay_ms))
}

/// Handler for POST /api/test/validate
pub async fn validate(ApiBody(req): ApiBody<ValidateRequest>) -> Result<Json<Envelope<()>>> {
    let errors = req.validate();
    if !errors.is_empty() {
        warn!(count = errors.len(), "validation failed");
        return Err(ApiError::Validation(errors));
    }

    Ok(Json(Envelope::done("Validation passed")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::time::Instant;

    #[tokio::test]
    async fn test_echo_returns_body() {
        let response = echo(ApiBody(EchoPayload(json!({"a": 1})))).await;
        let data = response.0.data.unwrap();
        assert_eq!(data.received, json!({"a": 1}));
    }

    #[tokio::test]
    async fn test_echo_empty_body() {
        let response = echo(ApiBody(EchoPayload::default())).await;
        assert_eq!(response.0.data.unwrap().received, json!({}));
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_waits_requested_time() {
        let start = Instant::now();
        let query = DelayQuery {
            ms: Some("250".into()),
        };

        let response = delay(Query(query)).await;
        assert_eq!(response.delay, 250);
        assert!(start.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_default() {
        let start = Instant::now();
        let response = delay(Query(DelayQuery::default())).await;
        assert_eq!(response.delay, 1000);
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn test_validate_handler() {
        let ok = ValidateRequest {
            username: Some("abc".into()),
            password: Some("abcdef".into()),
        };
        assert!(validate(ApiBody(ok)).await.is_ok());

        let bad = ValidateRequest {
            username: Some("ab".into()),
            password: Some("abc".into()),
        };
        let result = validate(ApiBody(bad)).await;
        assert!(matches!(result, Err(ApiError::Validation(errors)) if errors.len() == 2));
    }
}
