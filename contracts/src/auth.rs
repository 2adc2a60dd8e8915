//! Login wire schema and its classification into a [`LoginReply`].
//!
//! DESIGN
//! ======
//! The remote `POST auth/login` payload is loosely shaped: roles may arrive
//! as a single `rol` or a `roles` list, organizations either as
//! `companyOptions` or as a plain membership list. [`classify_login`] folds
//! all of that into one tagged union at the server boundary, so the browser
//! flow only ever branches on [`LoginReply`] variants.

use serde::{Deserialize, Serialize};

use crate::{ApiFailure, FailureKind, deserialize_id, deserialize_opt_id};

// =============================================================================
// ROLES
// =============================================================================

/// Account role as named by the remote API.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    AdminEmployee,
    RecruitingAdmin,
    Owner,
    Employee,
    Company,
    Candidate,
    /// Unrecognised code, kept verbatim so it can be sent back unchanged.
    Other(String),
}

impl Role {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "ADMIN",
            Self::AdminEmployee => "ADMIN_EMPLOYEE",
            Self::RecruitingAdmin => "RECRUITING_ADMIN",
            Self::Owner => "OWNER",
            Self::Employee => "EMPLOYEE",
            Self::Company => "EMPRESA",
            Self::Candidate => "CANDIDATO",
            Self::Other(code) => code,
        }
    }

    /// Roles that act on behalf of a company and need an active organization.
    #[must_use]
    pub fn is_org_scoped(&self) -> bool {
        matches!(self, Self::Owner | Self::Employee | Self::Company)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin | Self::AdminEmployee | Self::RecruitingAdmin)
    }

    /// Human label for role pickers.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Admin => "Administrator",
            Self::AdminEmployee => "Administrative staff",
            Self::RecruitingAdmin => "Recruiting administrator",
            Self::Owner => "Company owner",
            Self::Employee => "Company employee",
            Self::Company => "Company",
            Self::Candidate => "Candidate",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for Role {
    fn from(code: String) -> Self {
        match code.as_str() {
            "ADMIN" => Self::Admin,
            "ADMIN_EMPLOYEE" => Self::AdminEmployee,
            "RECRUITING_ADMIN" => Self::RecruitingAdmin,
            "OWNER" => Self::Owner,
            "EMPLOYEE" => Self::Employee,
            "EMPRESA" => Self::Company,
            "CANDIDATO" => Self::Candidate,
            _ => Self::Other(code),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(code) => code,
            known => known.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// REMOTE WIRE TYPES
// =============================================================================

/// Body of `POST auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "contrasena")]
    pub password: String,
    #[serde(rename = "selectedRole", default, skip_serializing_if = "Option::is_none")]
    pub selected_role: Option<Role>,
    #[serde(rename = "selectedCompanyId", default, skip_serializing_if = "Option::is_none")]
    pub selected_company_id: Option<String>,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("selected_role", &self.selected_role)
            .field("selected_company_id", &self.selected_company_id)
            .finish()
    }
}

/// An organization offered during company selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyOption {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, alias = "nombre")]
    pub name: String,
}

/// `usuario.companyOptions` from the login response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyOptions {
    /// Remote hint only. The company screen is decided from the role and
    /// the number of companies offered for it.
    #[serde(default)]
    pub needs_company_selection: bool,
    #[serde(default)]
    pub companies: Vec<CompanyOption>,
    #[serde(default)]
    pub role: Option<Role>,
}

/// `usuario` from the login response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteUser {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "correo")]
    pub email: Option<String>,
    #[serde(default, alias = "rol")]
    pub role: Option<Role>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default, alias = "empresas")]
    pub companies: Vec<CompanyOption>,
    #[serde(default, alias = "empresaId", deserialize_with = "deserialize_opt_id")]
    pub company_id: Option<String>,
    #[serde(default, alias = "perfilCompleto")]
    pub profile_complete: bool,
    #[serde(default)]
    pub company_options: Option<CompanyOptions>,
}

impl RemoteUser {
    /// Distinct roles in first-seen order, combining `roles` and `role`.
    #[must_use]
    pub fn distinct_roles(&self) -> Vec<Role> {
        let mut out: Vec<Role> = Vec::new();
        for role in self.roles.iter().chain(self.role.iter()) {
            if !out.contains(role) {
                out.push(role.clone());
            }
        }
        out
    }

    /// Companies reachable under `role`. `companyOptions` only counts when it
    /// was computed for that role.
    fn offered_companies(&self, role: &Role) -> Vec<CompanyOption> {
        match &self.company_options {
            Some(opts) if !opts.companies.is_empty() && opts.role.as_ref().is_none_or(|r| r == role) => {
                opts.companies.clone()
            }
            _ => self.companies.clone(),
        }
    }
}

/// `data` of a successful login response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginData {
    pub usuario: RemoteUser,
    #[serde(rename = "accessToken", alias = "access_token", alias = "token", default)]
    pub access_token: Option<String>,
}

// =============================================================================
// RESOLVED IDENTITY
// =============================================================================

/// Fully resolved user, mirrored in the session store and `user_info` cookie.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub companies: Vec<CompanyOption>,
    #[serde(default)]
    pub active_company_id: Option<String>,
    #[serde(default)]
    pub profile_complete: bool,
}

impl Identity {
    #[must_use]
    pub fn active_company(&self) -> Option<&CompanyOption> {
        let id = self.active_company_id.as_deref()?;
        self.companies.iter().find(|c| c.id == id)
    }
}

// =============================================================================
// REPLY
// =============================================================================

/// Outcome of one login round trip, as returned by the server to the browser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoginReply {
    /// Account has several roles; the user must pick one.
    ChooseRole { roles: Vec<Role> },
    /// Role is organization-scoped with several organizations.
    ChooseCompany { role: Role, companies: Vec<CompanyOption> },
    /// Identity fully resolved.
    Resolved { identity: Identity, token: String },
    /// Rejected; the flow stays on its current screen.
    Failed { kind: FailureKind, message: String },
}

impl From<ApiFailure> for LoginReply {
    fn from(failure: ApiFailure) -> Self {
        Self::Failed { kind: failure.kind, message: failure.message }
    }
}

impl LoginReply {
    fn failed(kind: FailureKind) -> Self {
        ApiFailure::of(kind).into()
    }
}

/// Fold a successful remote login payload into the next step of the flow.
#[must_use]
pub fn classify_login(request: &LoginRequest, data: LoginData) -> LoginReply {
    let user = data.usuario;
    let roles = user.distinct_roles();

    if request.selected_role.is_none() && roles.len() >= 2 {
        return LoginReply::ChooseRole { roles };
    }

    let options = user.company_options.clone().unwrap_or_default();
    let role = request
        .selected_role
        .clone()
        .or_else(|| user.role.clone())
        .or_else(|| options.role.clone())
        .or_else(|| roles.first().cloned());
    let Some(role) = role else {
        return LoginReply::Failed {
            kind: FailureKind::InvalidData,
            message: "The account has no role assigned.".to_owned(),
        };
    };

    let companies = user.offered_companies(&role);
    // Company scope only applies to organization roles.
    let mut active_company_id = request.selected_company_id.clone().filter(|_| role.is_org_scoped());

    if active_company_id.is_none() && role.is_org_scoped() {
        if companies.len() > 1 {
            return LoginReply::ChooseCompany { role, companies };
        }
        active_company_id = user
            .company_id
            .clone()
            .or_else(|| companies.first().map(|c| c.id.clone()));
        if active_company_id.is_none() {
            return LoginReply::failed(FailureKind::NoOrganization);
        }
    }

    let Some(token) = data.access_token.filter(|t| !t.is_empty()) else {
        return LoginReply::Failed {
            kind: FailureKind::InvalidData,
            message: "The login response did not include a session token.".to_owned(),
        };
    };

    LoginReply::Resolved {
        identity: Identity {
            id: user.id,
            name: user.name,
            email: user.email,
            role,
            companies,
            active_company_id,
            profile_complete: user.profile_complete,
        },
        token,
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
