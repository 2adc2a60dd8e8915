//! `reqwest` transport for the remote REST API.

use std::time::Duration;

use super::{Method, RemoteApi, RemoteError, RemoteReply, RemoteRequest};
use crate::config::RemoteTimeouts;

const COMPANY_HEADER: &str = "X-Company-Id";

pub struct HttpRemote {
    http: reqwest::Client,
    base_url: String,
}

impl HttpRemote {
    /// # Errors
    ///
    /// Returns [`RemoteError::ClientBuild`] if the TLS backend cannot initialize.
    pub fn new(base_url: &str, timeouts: RemoteTimeouts) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| RemoteError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }
}

#[async_trait::async_trait]
impl RemoteApi for HttpRemote {
    async fn send(&self, request: RemoteRequest) -> Result<RemoteReply, RemoteError> {
        let url = url_with_query(&self.base_url, &request.path, &request.query);
        let mut builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Patch => self.http.patch(&url),
            Method::Delete => self.http.delete(&url),
        };
        if let Some(auth) = &request.auth {
            builder = builder.bearer_auth(&auth.token);
            if let Some(company_id) = &auth.company_id {
                builder = builder.header(COMPANY_HEADER, company_id);
            }
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(classify_transport)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify_transport)?;
        tracing::debug!(method = ?request.method, path = %request.path, status, "remote call");
        Ok(RemoteReply { status, body })
    }
}

fn classify_transport(err: reqwest::Error) -> RemoteError {
    if err.is_timeout() {
        RemoteError::Timeout
    } else {
        RemoteError::Transport(err.to_string())
    }
}

/// Join base URL, relative path and percent-encoded query pairs.
pub(crate) fn url_with_query(base: &str, path: &str, query: &[(String, String)]) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    for (i, (key, value)) in query.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(&urlencoding::encode(key));
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
