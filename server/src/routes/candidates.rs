//! Admin candidate listing and the caller's own candidate profile.

use axum::extract::{Query, State};
use axum::response::Json;
use axum_extra::extract::cookie::CookieJar;
use contracts::Page;
use contracts::catalog::{CandidateProfile, ProfileDraft};

use super::auth::{AuthUser, identity_cookie};
use super::offers::PageQuery;
use super::{ApiError, ApiResult, JsonBody};
use crate::services::catalog;
use crate::state::AppState;

/// `GET /api/candidates?page&limit`
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<PageQuery>,
) -> ApiResult<Page<CandidateProfile>> {
    let (page, limit) = query.resolve();
    Ok(Json(catalog::candidates(state.remote.as_ref(), &auth.credentials(), page, limit).await?))
}

/// `GET /api/profile`
pub async fn profile(State(state): State<AppState>, auth: AuthUser) -> ApiResult<CandidateProfile> {
    Ok(Json(catalog::my_profile(state.remote.as_ref(), &auth.credentials()).await?))
}

/// `PATCH /api/profile`: also refreshes the `user_info` mirror so the
/// completion flag survives a reload. A stored draft has passed validation,
/// so the profile counts as complete even if the remote omits the flag.
pub async fn update_profile(
    State(state): State<AppState>,
    jar: CookieJar,
    auth: AuthUser,
    JsonBody(draft): JsonBody<ProfileDraft>,
) -> Result<(CookieJar, Json<CandidateProfile>), ApiError> {
    let profile = catalog::update_profile(state.remote.as_ref(), &auth.credentials(), &draft).await?;
    tracing::info!(user_id = %auth.identity.id, "profile updated");

    let mut identity = auth.identity;
    identity.profile_complete = true;
    let jar = jar.add(identity_cookie(&identity, state.config.cookie_secure));
    Ok((jar, Json(profile)))
}

#[cfg(test)]
#[path = "candidates_test.rs"]
mod tests;
