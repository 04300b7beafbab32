//! Response DTOs for the API
//!
//! Every API handler answers with an [`Envelope`], except the delay
//! endpoint which reports its delay as a top-level field.

use serde::Serialize;
use serde_json::Value;

/// Message attached to every validation failure.
pub const VALIDATION_FAILED: &str = "Validation failed";

/// Uniform JSON wrapper `{ success, data?, message?, errors? }`.
///
/// Absent optional fields are omitted rather than serialized as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Payload of a successful request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human readable summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Every failed validation rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> Envelope<T> {
    /// Successful envelope carrying a payload.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            errors: None,
        }
    }

    /// Successful envelope with a message only.
    pub fn done(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            errors: None,
        }
    }

    /// Failure envelope with a message and no data.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            errors: None,
        }
    }

    /// Failure envelope listing every failed rule.
    pub fn invalid(errors: Vec<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(VALIDATION_FAILED.to_string()),
            errors: Some(errors),
        }
    }
}

/// Payload of the echo endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct EchoData {
    /// The request body exactly as received
    pub received: Value,
    /// RFC 3339 instant at which the request was handled
    pub timestamp: String,
}

impl EchoData {
    /// Wraps `received` with the current UTC instant.
    pub fn now(received: Value) -> Self {
        Self {
            received,
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }
    }
}

/// Response body of the delay endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct DelayResponse {
    pub success: bool,
    pub message: String,
    /// The requested delay in milliseconds
    pub delay: i64,
}

impl DelayResponse {
    pub fn new(delay: i64) -> Self {
        Self {
            success: true,
            message: format!("Responded after a delay of {}ms", delay),
            delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_envelope_omits_errors() {
        let json = serde_json::to_value(Envelope::ok(vec![1, 2], "listed")).unwrap();
        assert_eq!(json, json!({"success": true, "data": [1, 2], "message": "listed"}));
    }

    #[test]
    fn test_failure_envelope_has_no_data() {
        let json = serde_json::to_value(Envelope::<()>::failure("User not found")).unwrap();
        assert_eq!(json, json!({"success": false, "message": "User not found"}));
    }

    #[test]
    fn test_done_envelope() {
        let json = serde_json::to_value(Envelope::<()>::done("gone")).unwrap();
        assert_eq!(json, json!({"success": true, "message": "gone"}));
    }

    #[test]
    fn test_invalid_envelope() {
        let json = serde_json::to_value(Envelope::<()>::invalid(vec!["too short".into()])).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["errors"], json!(["too short"]));
        assert_eq!(json["message"], VALIDATION_FAILED);
    }

    #[test]
    fn test_echo_timestamp_is_rfc3339() {
        let echo = EchoData::now(json!({"a": 1}));
        assert!(chrono::DateTime::parse_from_rfc3339(&echo.timestamp).is_ok());
        assert!(echo.timestamp.ends_with('Z'));
    }

    #[test]
    fn test_delay_response_serialize() {
        let json = serde_json::to_value(DelayResponse::new(50)).unwrap();
        assert_eq!(json["delay"], 50);
        assert_eq!(json["success"], true);
        assert!(json["message"].as_str().unwrap().contains("50ms"));
    }
}
