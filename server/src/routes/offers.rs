//! Public offer listing, detail and candidate applications.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use contracts::Page;
use contracts::catalog::{DEFAULT_PAGE_SIZE, Offer};
use serde::Deserialize;

use super::auth::AuthUser;
use super::{ApiError, ApiResult};
use crate::services::catalog;
use crate::state::AppState;

const MAX_PAGE_SIZE: u32 = 50;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PageQuery {
    /// Page number (1-based) and a limit clamped to `1..=50`.
    #[must_use]
    pub fn resolve(&self) -> (u32, u32) {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
        (page, limit)
    }
}

/// `GET /api/offers?page&limit`
pub async fn list(State(state): State<AppState>, Query(query): Query<PageQuery>) -> ApiResult<Page<Offer>> {
    let (page, limit) = query.resolve();
    let offers = catalog::list_offers(state.remote.as_ref(), page, limit).await?;
    Ok(Json(offers))
}

/// `GET /api/offers/{id}`
pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Offer> {
    Ok(Json(catalog::get_offer(state.remote.as_ref(), &id).await?))
}

/// `POST /api/offers/{id}/apply`
pub async fn apply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    catalog::apply_to_offer(state.remote.as_ref(), &auth.credentials(), &id).await?;
    tracing::info!(user_id = %auth.identity.id, offer_id = %id, "application submitted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "offers_test.rs"]
mod tests;
