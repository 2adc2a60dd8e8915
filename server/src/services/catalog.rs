//! Offers, applicant tracking, employees and candidate profiles.
//!
//! Each function is one remote round trip. Drafts are validated before the
//! call; every failure is converted into an [`ApiFailure`] at this boundary.

use contracts::catalog::{
    Applicant, CandidateProfile, Employee, EmployeeDraft, Offer, OfferDraft, ProfileDraft, StatusChange,
};
use contracts::{ApiFailure, FailureKind, Page, decode_object, decode_page};
use serde::de::DeserializeOwned;

use crate::remote::{Credentials, RemoteApi, RemoteRequest};

// =============================================================================
// HELPERS
// =============================================================================

async fn call(remote: &dyn RemoteApi, request: RemoteRequest) -> Result<String, ApiFailure> {
    let path = request.path.clone();
    let reply = remote.send(request).await.map_err(|e| {
        tracing::warn!(error = %e, %path, "remote call failed");
        ApiFailure::from(e)
    })?;
    reply.into_body().map_err(ApiFailure::from)
}

fn object<T: DeserializeOwned>(body: &str) -> Result<T, ApiFailure> {
    decode_object(body).map_err(|e| {
        tracing::warn!(error = %e, "unexpected remote object");
        ApiFailure::of(FailureKind::InvalidData)
    })
}

fn page<T: DeserializeOwned>(body: &str, requested: u32, limit: u32) -> Result<Page<T>, ApiFailure> {
    decode_page(body, requested, limit).map_err(|e| {
        tracing::warn!(error = %e, "unexpected remote list");
        ApiFailure::of(FailureKind::InvalidData)
    })
}

fn list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiFailure> {
    page(body, 1, 0).map(|p| p.items)
}

fn validation(err: &impl std::fmt::Display) -> ApiFailure {
    ApiFailure::new(FailureKind::Validation, Some(err.to_string()))
}

fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Organization scope of a company-mode caller.
fn company_id(auth: &Credentials) -> Result<String, ApiFailure> {
    auth.company_id
        .as_deref()
        .map(segment)
        .ok_or_else(|| ApiFailure::of(FailureKind::NoOrganization))
}

// =============================================================================
// PUBLIC OFFERS
// =============================================================================

/// # Errors
///
/// Any remote or decode failure.
pub async fn list_offers(remote: &dyn RemoteApi, page_no: u32, limit: u32) -> Result<Page<Offer>, ApiFailure> {
    let body = call(remote, RemoteRequest::get("offers").query("page", page_no).query("limit", limit)).await?;
    page(&body, page_no, limit)
}

/// # Errors
///
/// Any remote or decode failure; unknown ids are `NotFound`.
pub async fn get_offer(remote: &dyn RemoteApi, id: &str) -> Result<Offer, ApiFailure> {
    let body = call(remote, RemoteRequest::get(format!("offers/{}", segment(id)))).await?;
    object(&body)
}

/// Submit the caller's application to an offer.
///
/// # Errors
///
/// Any remote failure (e.g. duplicate application → `InvalidData`).
pub async fn apply_to_offer(remote: &dyn RemoteApi, auth: &Credentials, offer_id: &str) -> Result<(), ApiFailure> {
    let path = format!("offers/{}/applications", segment(offer_id));
    call(remote, RemoteRequest::post(path).auth(auth)).await.map(drop)
}

// =============================================================================
// COMPANY OFFERS & APPLICANTS
// =============================================================================

/// # Errors
///
/// `NoOrganization` without an active company, else any remote failure.
pub async fn company_offers(remote: &dyn RemoteApi, auth: &Credentials) -> Result<Vec<Offer>, ApiFailure> {
    let path = format!("companies/{}/offers", company_id(auth)?);
    let body = call(remote, RemoteRequest::get(path).auth(auth)).await?;
    list(&body)
}

/// # Errors
///
/// `Validation` for a bad draft, else any remote failure.
pub async fn create_offer(remote: &dyn RemoteApi, auth: &Credentials, draft: &OfferDraft) -> Result<Offer, ApiFailure> {
    draft.validate().map_err(|e| validation(&e))?;
    company_id(auth)?;
    let body = call(remote, RemoteRequest::post("offers").json(draft).auth(auth)).await?;
    object(&body)
}

/// # Errors
///
/// `Validation` for a bad draft, else any remote failure.
pub async fn update_offer(
    remote: &dyn RemoteApi,
    auth: &Credentials,
    id: &str,
    draft: &OfferDraft,
) -> Result<Offer, ApiFailure> {
    draft.validate().map_err(|e| validation(&e))?;
    let path = format!("offers/{}", segment(id));
    let body = call(remote, RemoteRequest::patch(path).json(draft).auth(auth)).await?;
    object(&body)
}

/// # Errors
///
/// Any remote failure.
pub async fn delete_offer(remote: &dyn RemoteApi, auth: &Credentials, id: &str) -> Result<(), ApiFailure> {
    let path = format!("offers/{}", segment(id));
    call(remote, RemoteRequest::delete(path).auth(auth)).await.map(drop)
}

/// # Errors
///
/// Any remote or decode failure.
pub async fn applicants(remote: &dyn RemoteApi, auth: &Credentials, offer_id: &str) -> Result<Vec<Applicant>, ApiFailure> {
    let path = format!("offers/{}/applications", segment(offer_id));
    let body = call(remote, RemoteRequest::get(path).auth(auth)).await?;
    list(&body)
}

/// # Errors
///
/// Any remote failure.
pub async fn change_status(
    remote: &dyn RemoteApi,
    auth: &Credentials,
    application_id: &str,
    change: &StatusChange,
) -> Result<(), ApiFailure> {
    let path = format!("applications/{}", segment(application_id));
    call(remote, RemoteRequest::patch(path).json(change).auth(auth)).await.map(drop)
}

// =============================================================================
// EMPLOYEES
// =============================================================================

/// # Errors
///
/// `NoOrganization` without an active company, else any remote failure.
pub async fn employees(remote: &dyn RemoteApi, auth: &Credentials) -> Result<Vec<Employee>, ApiFailure> {
    let path = format!("companies/{}/employees", company_id(auth)?);
    let body = call(remote, RemoteRequest::get(path).auth(auth)).await?;
    list(&body)
}

/// # Errors
///
/// `Validation` for a bad draft, `NoOrganization`, else any remote failure.
pub async fn invite_employee(
    remote: &dyn RemoteApi,
    auth: &Credentials,
    draft: &EmployeeDraft,
) -> Result<Employee, ApiFailure> {
    draft.validate().map_err(|e| validation(&e))?;
    let path = format!("companies/{}/employees", company_id(auth)?);
    let body = call(remote, RemoteRequest::post(path).json(draft).auth(auth)).await?;
    object(&body)
}

/// # Errors
///
/// `NoOrganization` without an active company, else any remote failure.
pub async fn remove_employee(remote: &dyn RemoteApi, auth: &Credentials, id: &str) -> Result<(), ApiFailure> {
    let path = format!("companies/{}/employees/{}", company_id(auth)?, segment(id));
    call(remote, RemoteRequest::delete(path).auth(auth)).await.map(drop)
}

// =============================================================================
// CANDIDATES
// =============================================================================

/// Admin candidate listing.
///
/// # Errors
///
/// Any remote or decode failure.
pub async fn candidates(
    remote: &dyn RemoteApi,
    auth: &Credentials,
    page_no: u32,
    limit: u32,
) -> Result<Page<CandidateProfile>, ApiFailure> {
    let request = RemoteRequest::get("candidates").query("page", page_no).query("limit", limit).auth(auth);
    let body = call(remote, request).await?;
    page(&body, page_no, limit)
}

/// # Errors
///
/// Any remote or decode failure.
pub async fn my_profile(remote: &dyn RemoteApi, auth: &Credentials) -> Result<CandidateProfile, ApiFailure> {
    let body = call(remote, RemoteRequest::get("candidates/me").auth(auth)).await?;
    object(&body)
}

/// # Errors
///
/// `Validation` for a bad draft, else any remote or decode failure.
pub async fn update_profile(
    remote: &dyn RemoteApi,
    auth: &Credentials,
    draft: &ProfileDraft,
) -> Result<CandidateProfile, ApiFailure> {
    draft.validate().map_err(|e| validation(&e))?;
    let body = call(remote, RemoteRequest::patch("candidates/me").json(draft).auth(auth)).await?;
    object(&body)
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
