//! Multi-step login state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login, role and company screens all drive one [`LoginFlow`]. Each user
//! action goes through a transition method that checks the current state,
//! arms the `submitting` guard and hands back exactly one [`LoginRequest`] to
//! send. The server's [`LoginReply`] is then fed to [`LoginFlow::apply`].
//!
//! States:
//!
//! ```text
//! AwaitingCredentials --submit--> (reply) --ChooseRole----> AwaitingRole
//!                                         --ChooseCompany-> AwaitingCompany
//!                                         --Resolved------> Resolved
//!                                         --Failed--------> Failed{Credentials}
//! AwaitingRole --choose_role--> (reply) --ChooseCompany--> AwaitingCompany
//!                                       --Resolved-------> Resolved
//!                                       --Failed---------> Failed{Role}
//! AwaitingCompany --choose_company--> (reply) --Resolved--> Resolved
//!                                             --Failed----> Failed{Company}
//! any --back/abandon--> AwaitingCredentials
//! ```
//!
//! [`PendingLogin`] only exists in the role, company and failed-mid-flow
//! states; `Resolved` and `AwaitingCredentials` never carry it.

use serde::{Deserialize, Serialize};

use crate::FailureKind;
use crate::auth::{CompanyOption, Identity, LoginReply, LoginRequest, Role};
use crate::credentials::{CredentialError, Credentials};

/// Credentials and choices held while the user disambiguates role/company.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingLogin {
    pub email: String,
    pub password: String,
    pub roles: Vec<Role>,
    #[serde(default)]
    pub selected_role: Option<Role>,
    #[serde(default)]
    pub companies: Vec<CompanyOption>,
}

impl std::fmt::Debug for PendingLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingLogin")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("roles", &self.roles)
            .field("selected_role", &self.selected_role)
            .field("companies", &self.companies)
            .finish()
    }
}

impl PendingLogin {
    fn request(&self, selected_role: Option<Role>, selected_company_id: Option<String>) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            selected_role,
            selected_company_id,
        }
    }
}

/// Screen a state belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Credentials,
    Role,
    Company,
}

impl Stage {
    /// Route of the screen that renders this stage.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Credentials => "/login",
            Self::Role => "/login/role",
            Self::Company => "/login/company",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FlowState {
    #[default]
    AwaitingCredentials,
    AwaitingRole {
        pending: PendingLogin,
    },
    AwaitingCompany {
        pending: PendingLogin,
    },
    Resolved {
        identity: Identity,
        token: String,
    },
    Failed {
        stage: Stage,
        kind: FailureKind,
        message: String,
        pending: Option<PendingLogin>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error(transparent)]
    Credentials(#[from] CredentialError),
    #[error("A login request is already in progress.")]
    Busy,
    #[error("This step is not available right now.")]
    WrongStage,
    #[error("Unknown role: {0}")]
    UnknownRole(String),
    #[error("Unknown company: {0}")]
    UnknownCompany(String),
    #[error("No login request is in progress.")]
    NotSubmitting,
}

/// The login flow: current state plus the in-flight request, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFlow {
    state: FlowState,
    in_flight: Option<LoginRequest>,
}

impl LoginFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the flow from a stored [`PendingLogin`] after a page reload.
    ///
    /// Falls back to `AwaitingCredentials` when the snapshot cannot support
    /// the role or company screen.
    #[must_use]
    pub fn resume(pending: Option<PendingLogin>) -> Self {
        let state = match pending {
            Some(p) if p.selected_role.is_some() && p.companies.len() > 1 => FlowState::AwaitingCompany { pending: p },
            Some(p) if p.roles.len() >= 2 => FlowState::AwaitingRole { pending: p },
            _ => FlowState::AwaitingCredentials,
        };
        Self { state, in_flight: None }
    }

    #[must_use]
    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// `true` while a request is out; further transitions are refused.
    #[must_use]
    pub fn submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Screen the current state is displayed on; `None` once resolved.
    #[must_use]
    pub fn stage(&self) -> Option<Stage> {
        match &self.state {
            FlowState::AwaitingCredentials => Some(Stage::Credentials),
            FlowState::AwaitingRole { .. } => Some(Stage::Role),
            FlowState::AwaitingCompany { .. } => Some(Stage::Company),
            FlowState::Failed { stage, .. } => Some(*stage),
            FlowState::Resolved { .. } => None,
        }
    }

    #[must_use]
    pub fn pending(&self) -> Option<&PendingLogin> {
        match &self.state {
            FlowState::AwaitingRole { pending } | FlowState::AwaitingCompany { pending } => Some(pending),
            FlowState::Failed { pending, .. } => pending.as_ref(),
            FlowState::AwaitingCredentials | FlowState::Resolved { .. } => None,
        }
    }

    /// Error text to show on the current screen, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FlowState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Roles offered on the role screen.
    #[must_use]
    pub fn role_choices(&self) -> &[Role] {
        match self.stage() {
            Some(Stage::Role) => self.pending().map_or(&[], |p| p.roles.as_slice()),
            _ => &[],
        }
    }

    /// Companies offered on the company screen.
    #[must_use]
    pub fn company_choices(&self) -> &[CompanyOption] {
        match self.stage() {
            Some(Stage::Company) => self.pending().map_or(&[], |p| p.companies.as_slice()),
            _ => &[],
        }
    }

    fn ensure_idle(&self, stage: Stage) -> Result<(), FlowError> {
        if self.submitting() {
            return Err(FlowError::Busy);
        }
        if self.stage() != Some(stage) {
            return Err(FlowError::WrongStage);
        }
        Ok(())
    }

    /// Validate credentials and produce the initial login request.
    ///
    /// # Errors
    ///
    /// [`FlowError::Credentials`] on invalid input (no request is produced),
    /// [`FlowError::Busy`] while a request is out, [`FlowError::WrongStage`]
    /// outside the credential screen.
    pub fn submit_credentials(&mut self, email: &str, password: &str) -> Result<LoginRequest, FlowError> {
        self.ensure_idle(Stage::Credentials)?;
        let creds = Credentials::new(email, password)?;
        let request = LoginRequest {
            email: creds.email,
            password: creds.password,
            selected_role: None,
            selected_company_id: None,
        };
        self.in_flight = Some(request.clone());
        Ok(request)
    }

    /// Re-issue the login with the chosen role.
    ///
    /// # Errors
    ///
    /// [`FlowError::UnknownRole`] if `role` was not offered, plus the
    /// busy/stage errors of [`Self::submit_credentials`].
    pub fn choose_role(&mut self, role: &Role) -> Result<LoginRequest, FlowError> {
        self.ensure_idle(Stage::Role)?;
        let pending = self.pending().ok_or(FlowError::WrongStage)?;
        if !pending.roles.contains(role) {
            return Err(FlowError::UnknownRole(role.to_string()));
        }
        let request = pending.request(Some(role.clone()), None);
        self.in_flight = Some(request.clone());
        Ok(request)
    }

    /// Re-issue the login with the chosen role and organization.
    ///
    /// # Errors
    ///
    /// [`FlowError::UnknownCompany`] if `company_id` was not offered, plus the
    /// busy/stage errors of [`Self::submit_credentials`].
    pub fn choose_company(&mut self, company_id: &str) -> Result<LoginRequest, FlowError> {
        self.ensure_idle(Stage::Company)?;
        let pending = self.pending().ok_or(FlowError::WrongStage)?;
        if !pending.companies.iter().any(|c| c.id == company_id) {
            return Err(FlowError::UnknownCompany(company_id.to_owned()));
        }
        let request = pending.request(pending.selected_role.clone(), Some(company_id.to_owned()));
        self.in_flight = Some(request.clone());
        Ok(request)
    }

    /// Advance on the server's reply to the in-flight request.
    ///
    /// # Errors
    ///
    /// [`FlowError::NotSubmitting`] if no request is out.
    pub fn apply(&mut self, reply: LoginReply) -> Result<&FlowState, FlowError> {
        let request = self.in_flight.take().ok_or(FlowError::NotSubmitting)?;
        let stage = self.stage().unwrap_or(Stage::Credentials);
        let carried = self.pending().cloned();

        self.state = match reply {
            LoginReply::ChooseRole { roles } if roles.len() >= 2 => FlowState::AwaitingRole {
                pending: PendingLogin {
                    email: request.email,
                    password: request.password,
                    roles,
                    selected_role: None,
                    companies: Vec::new(),
                },
            },
            LoginReply::ChooseRole { .. } => FlowState::Failed {
                stage,
                kind: FailureKind::InvalidData,
                message: FailureKind::InvalidData.default_message().to_owned(),
                pending: carried,
            },
            LoginReply::ChooseCompany { role, companies } => {
                let roles = carried.map_or_else(|| vec![role.clone()], |p| p.roles);
                FlowState::AwaitingCompany {
                    pending: PendingLogin {
                        email: request.email,
                        password: request.password,
                        roles,
                        selected_role: Some(role),
                        companies,
                    },
                }
            }
            LoginReply::Resolved { identity, token } => FlowState::Resolved { identity, token },
            LoginReply::Failed { kind, message } => FlowState::Failed { stage, kind, message, pending: carried },
        };
        Ok(&self.state)
    }

    /// Leave the role/company screens, discarding the pending login.
    pub fn back(&mut self) {
        self.abandon();
    }

    /// Drop any pending login and in-flight request.
    pub fn abandon(&mut self) {
        self.state = FlowState::AwaitingCredentials;
        self.in_flight = None;
    }

    /// Consume a resolved flow, returning the identity and token and resetting.
    pub fn take_resolved(&mut self) -> Option<(Identity, String)> {
        if !matches!(self.state, FlowState::Resolved { .. }) {
            return None;
        }
        match std::mem::take(&mut self.state) {
            FlowState::Resolved { identity, token } => Some((identity, token)),
            _ => None,
        }
    }
}

/// Whether `path` belongs to the login flow screens.
#[must_use]
pub fn is_flow_path(path: &str) -> bool {
    path == "/login" || path.starts_with("/login/")
}

#[cfg(test)]
#[path = "flow_test.rs"]
mod tests;
