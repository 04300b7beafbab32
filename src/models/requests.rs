//! Request DTOs for the API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.
//! Every field is optional at the serde level so presence checks produce
//! the API's own messages instead of deserialization errors.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Age given to users created without one.
pub const DEFAULT_AGE: u32 = 18;

/// Author assigned to posts created without one.
pub const DEFAULT_AUTHOR_ID: u64 = 1;

/// Delay used when `ms` is absent, unparsable or zero.
pub const DEFAULT_DELAY_MS: i64 = 1000;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, str::is_empty)
}

/// Request body for POST /api/users
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Absent or 0 falls back to [`DEFAULT_AGE`]
    #[serde(default)]
    pub age: Option<u32>,
}

impl CreateUserRequest {
    /// Returns an error message if a required field is missing or empty.
    pub fn validate(&self) -> Option<String> {
        if is_blank(&self.name) || is_blank(&self.email) {
            return Some("name and email required".to_string());
        }
        None
    }

    /// Age to store, applying the default.
    pub fn effective_age(&self) -> u32 {
        self.age.filter(|age| *age != 0).unwrap_or(DEFAULT_AGE)
    }
}

/// Request body for PUT /api/users/:id
///
/// Only the fields present in the body are written to the stored user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
}

/// Request body for POST /api/posts
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    /// Absent or 0 falls back to [`DEFAULT_AUTHOR_ID`]
    #[serde(default)]
    pub author_id: Option<u64>,
}

impl CreatePostRequest {
    /// Returns an error message if a required field is missing or empty.
    pub fn validate(&self) -> Option<String> {
        if is_blank(&self.title) || is_blank(&self.content) {
            return Some("title and content required".to_string());
        }
        None
    }

    pub fn effective_author_id(&self) -> u64 {
        self.author_id
            .filter(|id| *id != 0)
            .unwrap_or(DEFAULT_AUTHOR_ID)
    }
}

/// Request body for POST /api/test/validate
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl ValidateRequest {
    /// Checks every rule and collects one message per failure.
    ///
    /// A missing field counts as too short. Lengths are in characters.
    pub fn validate(&self) -> Vec<String> {
        let char_len = |field: &Option<String>| field.as_deref().map_or(0, |s| s.chars().count());
        let mut errors = Vec::new();

        if char_len(&self.username) < MIN_USERNAME_LEN {
            errors.push(format!(
                "Username must be at least {} characters",
                MIN_USERNAME_LEN
            ));
        }
        if char_len(&self.password) < MIN_PASSWORD_LEN {
            errors.push(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            ));
        }

        errors
    }
}

/// Query string of GET /api/test/delay
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DelayQuery {
    /// Kept as text so garbage falls back to the default instead of a 400
    #[serde(default)]
    pub ms: Option<String>,
}

impl DelayQuery {
    /// Requested delay in milliseconds, with the default applied.
    ///
    /// May be negative; callers sleep for zero in that case.
    pub fn delay_ms(&self) -> i64 {
        self.ms
            .as_deref()
            .and_then(parse_int_prefix)
            .filter(|ms| *ms != 0)
            .unwrap_or(DEFAULT_DELAY_MS)
    }
}

/// Body of POST /api/test/echo: a JSON object or array, echoed verbatim.
///
/// Top-level scalars and `null` are rejected. A missing body is `{}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EchoPayload(pub Value);

impl Default for EchoPayload {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl<'de> Deserialize<'de> for EchoPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            value @ (Value::Object(_) | Value::Array(_)) => Ok(Self(value)),
            other => Err(de::Error::custom(format!(
                "expected a JSON object or array, found `{}`",
                other
            ))),
        }
    }
}

/// Parses a leading integer: optional whitespace, an optional sign, then
/// digits. Anything after the digits is ignored (`"50ms"` is 50).
///
/// Returns `None` when there are no digits or the value overflows `i64`.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
