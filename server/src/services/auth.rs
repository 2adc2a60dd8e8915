//! Session resolution against the remote `auth/login` endpoint.
//!
//! The remote payload is classified exactly once here, so the browser only
//! ever sees a [`LoginReply`].

use contracts::auth::{LoginData, LoginReply, LoginRequest, classify_login};
use contracts::credentials::Credentials;
use contracts::{ApiFailure, FailureKind, decode_object, extract_message};

use crate::remote::{RemoteApi, RemoteRequest};

const LOGIN_PATH: &str = "auth/login";

/// Forward one login attempt and classify the outcome.
///
/// Malformed credentials are rejected locally without a remote call.
pub async fn login(remote: &dyn RemoteApi, request: &LoginRequest) -> LoginReply {
    let creds = match Credentials::new(&request.email, &request.password) {
        Ok(creds) => creds,
        Err(e) => return ApiFailure::new(FailureKind::Validation, Some(e.to_string())).into(),
    };
    let request = LoginRequest { email: creds.email, ..request.clone() };

    let reply = match remote.send(RemoteRequest::post(LOGIN_PATH).json(&request)).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!(error = %e, "login request failed");
            return ApiFailure::from(e).into();
        }
    };

    if !reply.is_success() {
        let message = extract_message(&reply.body);
        tracing::info!(status = reply.status, "login rejected by remote");
        return login_failure(reply.status, message).into();
    }

    match decode_object::<LoginData>(&reply.body) {
        Ok(data) => {
            let outcome = classify_login(&request, data);
            log_outcome(&outcome);
            outcome
        }
        Err(e) => {
            tracing::warn!(error = %e, "login payload did not match contract");
            ApiFailure::of(FailureKind::InvalidData).into()
        }
    }
}

/// On the login endpoint a 401 means bad credentials, not an expired session.
pub(crate) fn login_failure(status: u16, message: Option<String>) -> ApiFailure {
    if status == 401 {
        ApiFailure::new(FailureKind::InvalidCredentials, message)
    } else {
        ApiFailure::from_status(status, message)
    }
}

fn log_outcome(outcome: &LoginReply) {
    match outcome {
        LoginReply::ChooseRole { roles } => tracing::info!(roles = roles.len(), "login needs role selection"),
        LoginReply::ChooseCompany { role, companies } => {
            tracing::info!(%role, companies = companies.len(), "login needs company selection");
        }
        LoginReply::Resolved { identity, .. } => {
            tracing::info!(user_id = %identity.id, role = %identity.role, "login resolved");
        }
        LoginReply::Failed { kind, .. } => tracing::info!(?kind, "login failed"),
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
