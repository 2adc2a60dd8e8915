//! Server configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` through `dotenvy` before [`AppConfig::from_env`]
//! runs, so local development and deployment share one code path.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REMOTE_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_REMOTE_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API_URL is required")]
    MissingApiUrl,
    #[error("API_URL must be an http(s) URL, got {0:?}")]
    InvalidApiUrl(String),
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Remote REST API base URL, without trailing slash.
    pub api_url: String,
    pub port: u16,
    /// Whether session cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
    pub timeouts: RemoteTimeouts,
}

impl AppConfig {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `API_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `COOKIE_SECURE`: bool; inferred from an `https://` `PUBLIC_URL` when unset
    /// - `REMOTE_REQUEST_TIMEOUT_SECS`: default 15
    /// - `REMOTE_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `API_URL` is missing/malformed or `PORT` is not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup("API_URL")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingApiUrl)?;
        if !(raw_url.starts_with("http://") || raw_url.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(raw_url));
        }
        let api_url = raw_url.trim_end_matches('/').to_owned();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let cookie_secure = lookup("COOKIE_SECURE")
            .as_deref()
            .and_then(parse_bool)
            .unwrap_or_else(|| lookup("PUBLIC_URL").is_some_and(|url| url.starts_with("https://")));

        let timeouts = RemoteTimeouts {
            request_secs: parse_u64(lookup("REMOTE_REQUEST_TIMEOUT_SECS"), DEFAULT_REMOTE_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(lookup("REMOTE_CONNECT_TIMEOUT_SECS"), DEFAULT_REMOTE_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { api_url, port, cookie_secure, timeouts })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
