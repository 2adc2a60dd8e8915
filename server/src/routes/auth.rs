//! Auth routes: login forwarding, session cookies, logout, identity lookup.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use contracts::auth::{Identity, LoginReply, LoginRequest};
use contracts::cookies::{
    ACTIVE_COMPANY_ID, AUTH_TOKEN, SELECTED_COMPANY_ID, SESSION_MAX_AGE_DAYS, USER_INFO, decode_identity,
    encode_identity,
};
use contracts::{ApiFailure, FailureKind};
use time::Duration;

use super::{ApiError, failure_status};
use crate::remote::Credentials;
use crate::services::auth as auth_svc;
use crate::state::AppState;

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated caller extracted from the session cookies.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub identity: Identity,
    pub token: String,
    pub company_id: Option<String>,
}

impl AuthUser {
    /// Credentials forwarded to the remote API.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials { token: self.token.clone(), company_id: self.company_id.clone() }
    }
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let unauthorized = || ApiError(ApiFailure::of(FailureKind::Unauthorized));

        let token = jar.get(AUTH_TOKEN).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(unauthorized());
        }
        let identity = jar
            .get(USER_INFO)
            .and_then(|c| decode_identity(c.value()))
            .ok_or_else(unauthorized)?;
        let company_id = jar
            .get(ACTIVE_COMPANY_ID)
            .map(|c| c.value().to_owned())
            .filter(|v| !v.is_empty())
            .or_else(|| identity.active_company_id.clone());

        Ok(Self { identity, token: token.to_owned(), company_id })
    }
}

// =============================================================================
// COOKIES
// =============================================================================

fn session_cookie(name: &'static str, value: String, secure: bool, http_only: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(http_only)
        .same_site(SameSite::Strict)
        .secure(secure)
        .max_age(Duration::days(SESSION_MAX_AGE_DAYS))
        .build()
}

fn expired_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .same_site(SameSite::Strict)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

/// Readable identity mirror used for client hydration.
pub(crate) fn identity_cookie(identity: &Identity, secure: bool) -> Cookie<'static> {
    session_cookie(USER_INFO, encode_identity(identity), secure, false)
}

/// Cookies written once a login resolves.
pub(crate) fn resolved_cookies(identity: &Identity, token: &str, secure: bool) -> Vec<Cookie<'static>> {
    let mut cookies = vec![
        session_cookie(AUTH_TOKEN, token.to_owned(), secure, true),
        identity_cookie(identity, secure),
    ];
    cookies.push(match &identity.active_company_id {
        Some(id) => session_cookie(ACTIVE_COMPANY_ID, id.clone(), secure, false),
        None => expired_cookie(ACTIVE_COMPANY_ID, secure),
    });
    cookies.push(expired_cookie(SELECTED_COMPANY_ID, secure));
    cookies
}

/// Cookies that end a session.
pub(crate) fn cleared_cookies(secure: bool) -> Vec<Cookie<'static>> {
    [AUTH_TOKEN, USER_INFO, ACTIVE_COMPANY_ID, SELECTED_COMPANY_ID]
        .into_iter()
        .map(|name| expired_cookie(name, secure))
        .collect()
}

fn with_cookies(jar: CookieJar, cookies: Vec<Cookie<'static>>) -> CookieJar {
    cookies.into_iter().fold(jar, |jar, cookie| jar.add(cookie))
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/login`: forward, classify, set cookies on resolution.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(error = %e, "malformed login body");
            let reply = LoginReply::from(ApiFailure::of(FailureKind::Validation));
            return (StatusCode::BAD_REQUEST, Json(reply)).into_response();
        }
    };

    let reply = auth_svc::login(state.remote.as_ref(), &request).await;
    match &reply {
        LoginReply::Resolved { identity, token } => {
            let jar = with_cookies(jar, resolved_cookies(identity, token, state.config.cookie_secure));
            (jar, Json(reply)).into_response()
        }
        LoginReply::Failed { kind, .. } => (failure_status(*kind), Json(reply)).into_response(),
        LoginReply::ChooseRole { .. } | LoginReply::ChooseCompany { .. } => Json(reply).into_response(),
    }
}

/// `POST /api/auth/logout`: expire every session cookie. Idempotent.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = with_cookies(jar, cleared_cookies(state.config.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

/// `GET /api/auth/me`: identity mirrored in the session cookies.
pub async fn me(auth: AuthUser) -> Json<Identity> {
    Json(auth.identity)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
