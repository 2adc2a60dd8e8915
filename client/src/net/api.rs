//! REST API helpers for communicating with the server's `/api` routes.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each raced against
//! a `gloo-timers` timeout. Server-side (SSR): every call fails with a
//! `Network` failure since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiFailure>`. Non-2xx replies carry the
//! server's `{success: false, kind, message}` body; anything unreadable falls
//! back to the status-derived kind so pages always have a message to show.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use contracts::auth::{Identity, LoginReply, LoginRequest};
use contracts::catalog::{
    Applicant, ApplicationStatus, CandidateProfile, Employee, EmployeeDraft, Offer, OfferDraft, ProfileDraft,
    StatusChange,
};
use contracts::{ApiFailure, FailureKind, Page, extract_message};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Upper bound for one browser round trip.
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

// =============================================================================
// ENDPOINTS
// =============================================================================

fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

fn offers_endpoint(page: u32, limit: u32) -> String {
    format!("/api/offers?page={page}&limit={limit}")
}

fn offer_endpoint(id: &str) -> String {
    format!("/api/offers/{}", segment(id))
}

fn apply_endpoint(id: &str) -> String {
    format!("/api/offers/{}/apply", segment(id))
}

fn company_offer_endpoint(id: &str) -> String {
    format!("/api/company/offers/{}", segment(id))
}

fn applicants_endpoint(offer_id: &str) -> String {
    format!("/api/company/offers/{}/applicants", segment(offer_id))
}

fn application_endpoint(id: &str) -> String {
    format!("/api/company/applications/{}", segment(id))
}

fn employee_endpoint(id: &str) -> String {
    format!("/api/company/employees/{}", segment(id))
}

fn candidates_endpoint(page: u32, limit: u32) -> String {
    format!("/api/candidates?page={page}&limit={limit}")
}

// =============================================================================
// REPLY DECODING
// =============================================================================

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Failure carried by a non-2xx reply.
fn failure_from_body(status: u16, body: &str) -> ApiFailure {
    serde_json::from_str::<ApiFailure>(body).unwrap_or_else(|_| ApiFailure::from_status(status, extract_message(body)))
}

fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiFailure> {
    if !is_success(status) {
        return Err(failure_from_body(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiFailure::new(FailureKind::InvalidData, Some(format!("unreadable reply: {e}"))))
}

fn expect_empty(status: u16, body: &str) -> Result<(), ApiFailure> {
    if is_success(status) { Ok(()) } else { Err(failure_from_body(status, body)) }
}

/// The login route always answers with a `LoginReply`, whatever its status.
fn login_reply(status: u16, body: &str) -> LoginReply {
    serde_json::from_str(body).unwrap_or_else(|_| {
        let failure = failure_from_body(status, body);
        LoginReply::Failed { kind: failure.kind, message: failure.message }
    })
}

// =============================================================================
// TRANSPORT
// =============================================================================

/// One round trip; returns status and raw body text.
async fn send(method: Method, url: &str, body: Option<serde_json::Value>) -> Result<(u16, String), ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};
        use gloo_net::http::Request;

        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        };
        let request = match body {
            Some(body) => builder.json(&body),
            None => builder.build(),
        }
        .map_err(|e| ApiFailure::new(FailureKind::Other, Some(e.to_string())))?;

        let exchange = Box::pin(async move {
            let response = request.send().await?;
            let status = response.status();
            let text = response.text().await?;
            Ok::<_, gloo_net::Error>((status, text))
        });
        let timer = Box::pin(gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS));

        match select(exchange, timer).await {
            Either::Left((Ok(reply), _)) => Ok(reply),
            Either::Left((Err(e), _)) => {
                leptos::logging::warn!("request to {url} failed: {e}");
                Err(ApiFailure::of(FailureKind::Network))
            }
            Either::Right(_) => {
                leptos::logging::warn!("request to {url} timed out");
                Err(ApiFailure::new(FailureKind::Network, Some("The request timed out. Try again.".to_owned())))
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url, body);
        Err(ApiFailure::new(FailureKind::Network, Some("not available on server".to_owned())))
    }
}

fn json_body<T: Serialize>(value: &T) -> Option<serde_json::Value> {
    serde_json::to_value(value).ok()
}

async fn fetch<T: DeserializeOwned>(method: Method, url: &str, body: Option<serde_json::Value>) -> Result<T, ApiFailure> {
    let (status, text) = send(method, url, body).await?;
    decode(status, &text)
}

async fn execute(method: Method, url: &str, body: Option<serde_json::Value>) -> Result<(), ApiFailure> {
    let (status, text) = send(method, url, body).await?;
    expect_empty(status, &text)
}

// =============================================================================
// AUTH
// =============================================================================

/// Submit one login step. Transport problems come back as `Failed`.
pub async fn login(request: &LoginRequest) -> LoginReply {
    match send(Method::Post, "/api/auth/login", json_body(request)).await {
        Ok((status, body)) => login_reply(status, &body),
        Err(failure) => LoginReply::Failed { kind: failure.kind, message: failure.message },
    }
}

/// Expire the session cookies, including the http-only token.
pub async fn logout() {
    if let Err(failure) = execute(Method::Post, "/api/auth/logout", None).await {
        #[cfg(feature = "hydrate")]
        leptos::logging::warn!("logout failed: {failure}");
        #[cfg(not(feature = "hydrate"))]
        let _ = failure;
    }
}

/// Identity behind the current cookies; `None` when signed out.
pub async fn fetch_me() -> Option<Identity> {
    fetch(Method::Get, "/api/auth/me", None).await.ok()
}

// =============================================================================
// OFFERS
// =============================================================================

/// # Errors
///
/// Returns the failure reported by the server or transport.
pub async fn list_offers(page: u32, limit: u32) -> Result<Page<Offer>, ApiFailure> {
    fetch(Method::Get, &offers_endpoint(page, limit), None).await
}

/// # Errors
///
/// Returns the failure reported by the server or transport.
pub async fn get_offer(id: &str) -> Result<Offer, ApiFailure> {
    fetch(Method::Get, &offer_endpoint(id), None).await
}

/// # Errors
///
/// Returns the failure reported by the server or transport.
pub async fn apply_to_offer(id: &str) -> Result<(), ApiFailure> {
    execute(Method::Post, &apply_endpoint(id), None).await
}

// =============================================================================
// COMPANY
// =============================================================================

/// # Errors
///
/// Returns the failure reported by the server or transport.
pub async fn company_offers() -> Result<Vec<Offer>, ApiFailure> {
    fetch(Method::Get, "/api/company/offers", None).await
}

/// # Errors
///
/// Returns the failure reported by the server or transport.
pub async fn create_offer(draft: &OfferDraft) -> Result<Offer, ApiFailure> {
    fetch(Method::Post, "/api/company/offers", json_body(draft)).await
}

/// # Errors
///
/// Returns the failure reported by the server or transport.
pub async fn update_offer(id: &str, draft: &OfferDraft) -> Result<Offer, ApiFailure> {
    fetch(Method::Patch, &company_offer_endpoint(id), json_body(draft)).await
}

/// # Errors
///
/// Returns the failure reported by the server or transport.
pub async fn delete_offer(id: &str) -> Result<(), ApiFailure> {
    execute(Method::Delete, &company_offer_endpoint(id), None).await
}

/// # Errors
///
/// Returns the failure reported by the server or transport.
pub async fn applicants(offer_id: &str) -> Result<Vec<Applicant>, ApiFailure> {
    fetch(Method::Get, &applicants_endpoint(offer_id), None).await
}

/// # Errors
///
/// Returns the failure reported by the server or transport.
pub async fn change_status(application_id: &str, status: ApplicationStatus) -> Result<(), ApiFailure> {
    execute(Method::Patch, &application_endpoint(application_id), json_body(&StatusChange { status })).await
}

/// # Errors
///
/// Returns the failure reported by the server or transport.
pub async fn employees() -> Result<Vec<Employee>, ApiFailure> {
    fetch(Method::Get, "/api/company/employees", None).await
}

/// # Errors
///
/// Returns the failure reported by the server or transport.
pub async fn invite_employee(draft: &EmployeeDraft) -> Result<Employee, ApiFailure> {
    fetch(Method::Post, "/api/company/employees", json_body(draft)).await
}

/// # Errors
///
/// Returns the failure reported by the server or transport.
pub async fn remove_employee(id: &str) -> Result<(), ApiFailure> {
    execute(Method::Delete, &employee_endpoint(id), None).await
}

// =============================================================================
// CANDIDATES
// =============================================================================

/// # Errors
///
/// Returns the failure reported by the server or transport.
pub async fn candidates(page: u32, limit: u32) -> Result<Page<CandidateProfile>, ApiFailure> {
    fetch(Method::Get, &candidates_endpoint(page, limit), None).await
}

/// # Errors
///
/// Returns the failure reported by the server or transport.
pub async fn my_profile() -> Result<CandidateProfile, ApiFailure> {
    fetch(Method::Get, "/api/profile", None).await
}

/// # Errors
///
/// Returns the failure reported by the server or transport.
pub async fn update_profile(draft: &ProfileDraft) -> Result<CandidateProfile, ApiFailure> {
    fetch(Method::Patch, "/api/profile", json_body(draft)).await
}
