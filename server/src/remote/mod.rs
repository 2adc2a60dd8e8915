//! Remote REST API adapter.
//!
//! DESIGN
//! ======
//! Every business operation lives behind the remote API; this server only
//! forwards. [`RemoteApi`] is the single seam: the production
//! [`http::HttpRemote`] speaks HTTP through `reqwest`, while tests script
//! replies. Non-2xx statuses are returned as data so services decide how to
//! classify them.

pub mod http;

use contracts::{ApiFailure, DecodeError, FailureKind, extract_message};
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// Caller identity forwarded on authenticated calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    /// Active organization for company-mode calls (`X-Company-Id`).
    pub company_id: Option<String>,
}

/// One call against the remote API, relative to its base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct RemoteRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub auth: Option<Credentials>,
}

impl RemoteRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None, auth: None }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    #[must_use]
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_owned(), value.to_string()));
        self
    }

    /// Attach a JSON body. Serialization of plain data structs cannot fail;
    /// a failure would surface as a `null` body rejected by the remote.
    #[must_use]
    pub fn json<T: Serialize>(mut self, body: &T) -> Self {
        self.body = Some(serde_json::to_value(body).unwrap_or(Value::Null));
        self
    }

    #[must_use]
    pub fn auth(mut self, credentials: &Credentials) -> Self {
        self.auth = Some(credentials.clone());
        self
    }
}

/// Raw status + body of a remote response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteReply {
    pub status: u16,
    pub body: String,
}

impl RemoteReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body of a 2xx reply, or a [`RemoteError::Status`] carrying the remote message.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Status`] for non-2xx statuses.
    pub fn into_body(self) -> Result<String, RemoteError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(RemoteError::Status { status: self.status, message: extract_message(&self.body) })
        }
    }
}

/// Errors produced talking to the remote API.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
    /// Connection-level failure.
    #[error("remote request failed: {0}")]
    Transport(String),
    /// No response within the configured timeout.
    #[error("remote request timed out")]
    Timeout,
    /// The remote API answered with a non-2xx status.
    #[error("remote API returned status {status}")]
    Status { status: u16, message: Option<String> },
    /// The body did not match the expected contract.
    #[error("remote response decode failed: {0}")]
    Decode(String),
}

impl From<DecodeError> for RemoteError {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err.0)
    }
}

impl From<RemoteError> for ApiFailure {
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::ClientBuild(_) => ApiFailure::of(FailureKind::Config),
            RemoteError::Transport(_) | RemoteError::Timeout => ApiFailure::of(FailureKind::Network),
            RemoteError::Status { status, message } => ApiFailure::from_status(status, message),
            RemoteError::Decode(_) => ApiFailure::of(FailureKind::InvalidData),
        }
    }
}

/// Transport to the remote API.
#[async_trait::async_trait]
pub trait RemoteApi: Send + Sync {
    /// Perform one call. Any HTTP status is `Ok`; only transport problems are `Err`.
    async fn send(&self, request: RemoteRequest) -> Result<RemoteReply, RemoteError>;
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
