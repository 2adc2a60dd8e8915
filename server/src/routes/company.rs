//! Company-mode routes: offer CRUD, applicant tracking, employees.
//!
//! Calls are scoped by the `active_company_id` cookie, forwarded to the
//! remote API as `X-Company-Id`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use contracts::catalog::{Applicant, Employee, EmployeeDraft, Offer, OfferDraft, StatusChange};

use super::auth::AuthUser;
use super::{ApiError, ApiResult, JsonBody};
use crate::services::catalog;
use crate::state::AppState;

/// `GET /api/company/offers`
pub async fn list_offers(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Vec<Offer>> {
    Ok(Json(catalog::company_offers(state.remote.as_ref(), &auth.credentials()).await?))
}

/// `POST /api/company/offers`
pub async fn create_offer(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(draft): JsonBody<OfferDraft>,
) -> Result<(StatusCode, Json<Offer>), ApiError> {
    let offer = catalog::create_offer(state.remote.as_ref(), &auth.credentials(), &draft).await?;
    tracing::info!(offer_id = %offer.id, company_id = ?auth.company_id, "offer created");
    Ok((StatusCode::CREATED, Json(offer)))
}

/// `PATCH /api/company/offers/{id}`
pub async fn update_offer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(draft): JsonBody<OfferDraft>,
) -> ApiResult<Offer> {
    Ok(Json(catalog::update_offer(state.remote.as_ref(), &auth.credentials(), &id, &draft).await?))
}

/// `DELETE /api/company/offers/{id}`
pub async fn delete_offer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    catalog::delete_offer(state.remote.as_ref(), &auth.credentials(), &id).await?;
    tracing::info!(offer_id = %id, "offer deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/company/offers/{id}/applicants`
pub async fn applicants(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Vec<Applicant>> {
    Ok(Json(catalog::applicants(state.remote.as_ref(), &auth.credentials(), &id).await?))
}

/// `PATCH /api/company/applications/{id}`
pub async fn change_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(change): JsonBody<StatusChange>,
) -> Result<StatusCode, ApiError> {
    catalog::change_status(state.remote.as_ref(), &auth.credentials(), &id, &change).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/company/employees`
pub async fn employees(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Vec<Employee>> {
    Ok(Json(catalog::employees(state.remote.as_ref(), &auth.credentials()).await?))
}

/// `POST /api/company/employees`
pub async fn invite_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(draft): JsonBody<EmployeeDraft>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let employee = catalog::invite_employee(state.remote.as_ref(), &auth.credentials(), &draft).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// `DELETE /api/company/employees/{id}`
pub async fn remove_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    catalog::remove_employee(state.remote.as_ref(), &auth.credentials(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "company_test.rs"]
mod tests;
