//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the backend-for-frontend JSON endpoints under `/api` and
//! stitches them with Leptos SSR rendering under a single Axum router. The
//! browser never talks to the remote REST API directly: every call goes
//! through these handlers, which own the session cookies.

pub mod auth;
pub mod candidates;
pub mod company;
pub mod offers;

use std::path::PathBuf;

use axum::Router;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, patch, post};
use contracts::{ApiFailure, FailureKind};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde::de::DeserializeOwned;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// BFF routes consumed by the hydrated client.
pub(crate) fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/offers", get(offers::list))
        .route("/api/offers/{id}", get(offers::detail))
        .route("/api/offers/{id}/apply", post(offers::apply))
        .route("/api/company/offers", get(company::list_offers).post(company::create_offer))
        .route(
            "/api/company/offers/{id}",
            patch(company::update_offer).delete(company::delete_offer),
        )
        .route("/api/company/offers/{id}/applicants", get(company::applicants))
        .route("/api/company/applications/{id}", patch(company::change_status))
        .route("/api/company/employees", get(company::employees).post(company::invite_employee))
        .route("/api/company/employees/{id}", axum::routing::delete(company::remove_employee))
        .route("/api/candidates", get(candidates::list))
        .route("/api/profile", get(candidates::profile).patch(candidates::update_profile))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application: API routes + Leptos SSR + static `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

// =============================================================================
// FAILURE RESPONSES
// =============================================================================

/// Handler error: serialized as the `{success: false, kind, message}` body.
#[derive(Debug)]
pub struct ApiError(pub ApiFailure);

impl From<ApiFailure> for ApiError {
    fn from(failure: ApiFailure) -> Self {
        Self(failure)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (failure_status(self.0.kind), Json(self.0)).into_response()
    }
}

pub(crate) type ApiResult<T> = Result<Json<T>, ApiError>;

/// JSON request body whose rejection uses the `ApiFailure` shape instead of
/// axum's plain-text error.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(e) => {
                tracing::debug!(error = %e, "malformed request body");
                Err(ApiError(ApiFailure::new(
                    FailureKind::Validation,
                    Some("The request body is not valid JSON for this endpoint.".to_owned()),
                )))
            }
        }
    }
}

pub(crate) fn failure_status(kind: FailureKind) -> StatusCode {
    match kind {
        FailureKind::Config => StatusCode::SERVICE_UNAVAILABLE,
        FailureKind::InvalidCredentials | FailureKind::Unauthorized => StatusCode::UNAUTHORIZED,
        FailureKind::NoOrganization | FailureKind::InvalidData => StatusCode::UNPROCESSABLE_ENTITY,
        FailureKind::Validation => StatusCode::BAD_REQUEST,
        FailureKind::NotFound => StatusCode::NOT_FOUND,
        FailureKind::Server | FailureKind::Network => StatusCode::BAD_GATEWAY,
        FailureKind::Other => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub(crate) mod test_helpers {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, header};
    use contracts::auth::{CompanyOption, Identity, Role};
    use contracts::cookies::encode_identity;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::remote::test_helpers::ScriptedRemote;
    use crate::state::test_helpers::test_app_state;

    /// Run one request through the API router; returns status, `Set-Cookie` values and JSON body.
    pub async fn send(remote: Arc<ScriptedRemote>, request: Request<Body>) -> (StatusCode, Vec<String>, Value) {
        let app = api_routes(test_app_state(remote));
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let cookies = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_owned())
            .collect();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
        (status, cookies, body)
    }

    #[must_use]
    pub fn identity(role: Role, company_id: Option<&str>) -> Identity {
        Identity {
            id: "u1".to_owned(),
            name: "Ana".to_owned(),
            email: Some("ana@acme.com".to_owned()),
            role,
            companies: company_id
                .map(|id| vec![CompanyOption { id: id.to_owned(), name: "Acme".to_owned() }])
                .unwrap_or_default(),
            active_company_id: company_id.map(str::to_owned),
            profile_complete: false,
        }
    }

    /// `Cookie` header for a signed-in session.
    #[must_use]
    pub fn session_header(identity: &Identity) -> String {
        let mut header = format!("auth_token=tok; user_info={}", encode_identity(identity));
        if let Some(id) = &identity.active_company_id {
            header.push_str(&format!("; active_company_id={id}"));
        }
        header
    }

    #[must_use]
    pub fn authed(method: &str, uri: &str, identity: &Identity, body: Option<&Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::COOKIE, session_header(identity))
            .header(header::CONTENT_TYPE, "application/json");
        let body = body.map_or_else(Body::empty, |b| Body::from(b.to_string()));
        builder.body(body).unwrap()
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
