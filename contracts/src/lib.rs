//! Shared contracts for the job board `server`, its browser `client`, and the
//! remote REST API both of them talk to.
//!
//! This crate owns everything the two sides must agree on: the remote wire
//! schema, the failure shape returned to the browser, credential validation,
//! the login state machine, and the landing-page policy. It has no UI or HTTP
//! framework dependencies so it builds for native and WASM targets alike.

pub mod auth;
pub mod catalog;
pub mod cookies;
pub mod credentials;
pub mod flow;
pub mod redirect;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// =============================================================================
// FAILURES
// =============================================================================

/// Coarse classification of a failed call, used to pick user-facing copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The server is missing configuration (e.g. the remote API URL).
    Config,
    /// Email/password rejected by the remote API.
    InvalidCredentials,
    /// Missing, expired or insufficient session.
    Unauthorized,
    /// The chosen role has no organization attached.
    NoOrganization,
    /// The request or the remote payload did not match the contract.
    InvalidData,
    /// Client-side form validation failed before any call.
    Validation,
    /// The requested resource does not exist.
    NotFound,
    /// The remote API failed (5xx).
    Server,
    /// Transport failure or timeout.
    Network,
    /// Anything else.
    Other,
}

impl FailureKind {
    /// Default user-facing message when the remote API gave none.
    #[must_use]
    pub fn default_message(self) -> &'static str {
        match self {
            Self::Config => "The service is not configured correctly.",
            Self::InvalidCredentials => "Invalid email or password.",
            Self::Unauthorized => "Your session has expired. Please sign in again.",
            Self::NoOrganization => "No associated organization for this role.",
            Self::InvalidData => "The submitted data is not valid.",
            Self::Validation => "Please review the highlighted fields.",
            Self::NotFound => "The requested resource was not found.",
            Self::Server => "The server could not complete the request. Try again later.",
            Self::Network => "Could not reach the server. Check your connection.",
            Self::Other => "Something went wrong.",
        }
    }
}

/// The `{success: false, message}` shape every failed call is converted into.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiFailure {
    #[serde(default)]
    pub success: bool,
    pub kind: FailureKind,
    pub message: String,
}

impl ApiFailure {
    /// Build a failure, falling back to the kind's default copy for blank messages.
    #[must_use]
    pub fn new(kind: FailureKind, message: Option<String>) -> Self {
        let message = message
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| kind.default_message().to_owned());
        Self { success: false, kind, message }
    }

    #[must_use]
    pub fn of(kind: FailureKind) -> Self {
        Self::new(kind, None)
    }

    /// Classify a non-2xx remote status together with its optional message.
    #[must_use]
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        Self::new(kind_for_status(status), message)
    }
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiFailure {}

/// Map an HTTP status onto a failure kind.
#[must_use]
pub fn kind_for_status(status: u16) -> FailureKind {
    match status {
        400 | 409 | 422 => FailureKind::InvalidData,
        401 | 403 => FailureKind::Unauthorized,
        404 => FailureKind::NotFound,
        500..=599 => FailureKind::Server,
        _ => FailureKind::Other,
    }
}

/// Pull the `message` out of an error body.
///
/// The remote API returns either a string or a list of validation strings.
#[must_use]
pub fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Array(items) => {
            let joined = items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            (!joined.is_empty()).then_some(joined)
        }
        _ => None,
    }
}

// =============================================================================
// ENVELOPE & PAGING
// =============================================================================

/// Standard `{data, message, meta?}` response wrapper.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// Pagination metadata attached to list responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default, alias = "total_pages", alias = "lastPage")]
    pub total_pages: Option<u32>,
}

/// One page of a listing as handed to the browser.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub limit: u32,
    pub total_pages: Option<u32>,
}

impl<T> Page<T> {
    /// Whether another page can be requested after this one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        match self.total_pages {
            Some(total) => self.page < total,
            None => !self.items.is_empty() && self.items.len() >= self.limit as usize,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Wrapped(Envelope<Vec<T>>),
    Raw(Vec<T>),
}

/// Error raised when a remote body does not match the expected contract.
#[derive(Debug, thiserror::Error)]
#[error("unexpected response shape: {0}")]
pub struct DecodeError(pub String);

/// Decode a single-object body, accepting both the envelope and a bare object.
///
/// # Errors
///
/// Returns [`DecodeError`] if neither shape matches `T`.
pub fn decode_object<T: DeserializeOwned>(body: &str) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_str(body).map_err(|e| DecodeError(e.to_string()))?;
    if let Some(data) = value.get("data") {
        if let Ok(item) = serde_json::from_value::<T>(data.clone()) {
            return Ok(item);
        }
    }
    serde_json::from_value(value).map_err(|e| DecodeError(e.to_string()))
}

/// Decode a list body (envelope with `meta`, or a raw array) into a [`Page`].
///
/// `requested_page`/`limit` fill in what the remote did not echo back.
///
/// # Errors
///
/// Returns [`DecodeError`] if the body is neither shape.
pub fn decode_page<T: DeserializeOwned>(body: &str, requested_page: u32, limit: u32) -> Result<Page<T>, DecodeError> {
    let parsed: ListBody<T> = serde_json::from_str(body).map_err(|e| DecodeError(e.to_string()))?;
    let (items, meta) = match parsed {
        ListBody::Wrapped(env) => (env.data, env.meta.unwrap_or_default()),
        ListBody::Raw(items) => (items, Meta::default()),
    };
    Ok(Page {
        items,
        page: meta.page.unwrap_or(requested_page),
        limit: meta.limit.unwrap_or(limit),
        total_pages: meta.total_pages,
    })
}

// =============================================================================
// ID HELPERS
// =============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Number(i64),
}

impl From<IdRepr> for String {
    fn from(value: IdRepr) -> Self {
        match value {
            IdRepr::Text(s) => s,
            IdRepr::Number(n) => n.to_string(),
        }
    }
}

/// Accept identifiers encoded either as JSON strings or integers.
pub(crate) fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    IdRepr::deserialize(deserializer).map(String::from)
}

pub(crate) fn deserialize_opt_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Option::<IdRepr>::deserialize(deserializer).map(|id| id.map(String::from))
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
