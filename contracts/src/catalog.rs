//! Offers, applications, employees and candidate profiles.
//!
//! These screens are plain list/fetch/mutate/refetch views over the remote
//! API; this module only fixes the shapes and the client-side draft checks.

use serde::{Deserialize, Serialize};

use crate::auth::Role;
use crate::credentials::is_valid_email;
use crate::{deserialize_id, deserialize_opt_id};

pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const MAX_TITLE_LEN: usize = 120;
pub const MIN_DESCRIPTION_LEN: usize = 20;
pub const MIN_SUMMARY_LEN: usize = 30;

/// Draft validation failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("{0} is required.")]
    Missing(&'static str),
    #[error("{field} must be at most {max} characters.")]
    TooLong { field: &'static str, max: usize },
    #[error("{field} must be at least {min} characters.")]
    TooShort { field: &'static str, min: usize },
    #[error("Enter a valid email address.")]
    InvalidEmail,
    #[error("Enter a valid phone number.")]
    InvalidPhone,
}

fn required(field: &'static str, value: &str) -> Result<(), DraftError> {
    if value.trim().is_empty() { Err(DraftError::Missing(field)) } else { Ok(()) }
}

fn min_len(field: &'static str, value: &str, min: usize) -> Result<(), DraftError> {
    if value.trim().chars().count() < min { Err(DraftError::TooShort { field, min }) } else { Ok(()) }
}

// =============================================================================
// OFFERS
// =============================================================================

/// Work arrangement of an offer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modality {
    #[default]
    #[serde(alias = "PRESENCIAL")]
    OnSite,
    #[serde(alias = "REMOTO")]
    Remote,
    #[serde(alias = "HIBRIDO")]
    Hybrid,
}

impl Modality {
    pub const ALL: [Self; 3] = [Self::OnSite, Self::Remote, Self::Hybrid];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::OnSite => "On site",
            Self::Remote => "Remote",
            Self::Hybrid => "Hybrid",
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::OnSite => "ON_SITE",
            Self::Remote => "REMOTE",
            Self::Hybrid => "HYBRID",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }
}

/// A job posting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(alias = "titulo")]
    pub title: String,
    #[serde(default, alias = "descripcion")]
    pub description: String,
    #[serde(default, alias = "ubicacion")]
    pub location: Option<String>,
    #[serde(default, alias = "modalidad")]
    pub modality: Modality,
    #[serde(default, alias = "empresaNombre")]
    pub company_name: Option<String>,
    #[serde(default, alias = "salario")]
    pub salary: Option<String>,
    #[serde(default, alias = "fechaPublicacion")]
    pub published_at: Option<String>,
    #[serde(default = "default_true", alias = "activa")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

/// Create/edit form for an offer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferDraft {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub modality: Modality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
}

impl OfferDraft {
    /// Prefill the edit form from an existing offer.
    #[must_use]
    pub fn from_offer(offer: &Offer) -> Self {
        Self {
            title: offer.title.clone(),
            description: offer.description.clone(),
            location: offer.location.clone(),
            modality: offer.modality,
            salary: offer.salary.clone(),
        }
    }

    /// # Errors
    ///
    /// Returns the first failing field rule.
    pub fn validate(&self) -> Result<(), DraftError> {
        required("Title", &self.title)?;
        if self.title.trim().chars().count() > MAX_TITLE_LEN {
            return Err(DraftError::TooLong { field: "Title", max: MAX_TITLE_LEN });
        }
        required("Description", &self.description)?;
        min_len("Description", &self.description, MIN_DESCRIPTION_LEN)
    }
}

// =============================================================================
// APPLICATIONS
// =============================================================================

/// Applicant tracking status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApplicationStatus {
    Pending,
    Reviewing,
    Interview,
    Accepted,
    Rejected,
    Other(String),
}

impl ApplicationStatus {
    /// Statuses a company can move an applicant to.
    pub const TRACKED: [Self; 5] = [Self::Pending, Self::Reviewing, Self::Interview, Self::Accepted, Self::Rejected];

    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::Reviewing => "REVIEWING",
            Self::Interview => "INTERVIEW",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
            Self::Other(code) => code,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Reviewing => "In review",
            Self::Interview => "Interview",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for ApplicationStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            "PENDING" | "PENDIENTE" => Self::Pending,
            "REVIEWING" | "EN_REVISION" => Self::Reviewing,
            "INTERVIEW" | "ENTREVISTA" => Self::Interview,
            "ACCEPTED" | "ACEPTADO" => Self::Accepted,
            "REJECTED" | "RECHAZADO" => Self::Rejected,
            _ => Self::Other(code),
        }
    }
}

impl From<ApplicationStatus> for String {
    fn from(status: ApplicationStatus) -> Self {
        match status {
            ApplicationStatus::Other(code) => code,
            known => known.code().to_owned(),
        }
    }
}

/// One candidate's application to an offer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, alias = "candidatoId", deserialize_with = "deserialize_opt_id")]
    pub candidate_id: Option<String>,
    #[serde(default, alias = "nombre")]
    pub candidate_name: String,
    #[serde(default, alias = "correo")]
    pub email: Option<String>,
    #[serde(alias = "estado")]
    pub status: ApplicationStatus,
    #[serde(default, alias = "fechaPostulacion")]
    pub applied_at: Option<String>,
}

/// Body of a status change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub status: ApplicationStatus,
}

// =============================================================================
// EMPLOYEES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "correo")]
    pub email: String,
    #[serde(alias = "rol")]
    pub role: Role,
}

/// Invite form for a new employee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Default for EmployeeDraft {
    fn default() -> Self {
        Self { name: String::new(), email: String::new(), role: Role::Employee }
    }
}

impl EmployeeDraft {
    /// # Errors
    ///
    /// Returns the first failing field rule.
    pub fn validate(&self) -> Result<(), DraftError> {
        required("Name", &self.name)?;
        if !is_valid_email(self.email.trim()) {
            return Err(DraftError::InvalidEmail);
        }
        Ok(())
    }
}

// =============================================================================
// CANDIDATE PROFILE
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "correo")]
    pub email: Option<String>,
    #[serde(default, alias = "telefono")]
    pub phone: Option<String>,
    #[serde(default, alias = "titular")]
    pub headline: Option<String>,
    #[serde(default, alias = "resumen")]
    pub summary: Option<String>,
    #[serde(default, alias = "habilidades")]
    pub skills: Vec<String>,
    #[serde(default, alias = "perfilCompleto")]
    pub profile_complete: bool,
}

/// Profile completion form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub headline: String,
    pub summary: String,
    pub phone: String,
    pub skills: Vec<String>,
}

impl ProfileDraft {
    #[must_use]
    pub fn from_profile(profile: &CandidateProfile) -> Self {
        Self {
            headline: profile.headline.clone().unwrap_or_default(),
            summary: profile.summary.clone().unwrap_or_default(),
            phone: profile.phone.clone().unwrap_or_default(),
            skills: profile.skills.clone(),
        }
    }

    /// # Errors
    ///
    /// Returns the first failing field rule.
    pub fn validate(&self) -> Result<(), DraftError> {
        required("Headline", &self.headline)?;
        required("Summary", &self.summary)?;
        min_len("Summary", &self.summary, MIN_SUMMARY_LEN)?;
        let digits = self.phone.chars().filter(char::is_ascii_digit).count();
        let allowed = self
            .phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')'));
        if !allowed || !(7..=15).contains(&digits) {
            return Err(DraftError::InvalidPhone);
        }
        if self.skills.iter().all(|s| s.trim().is_empty()) {
            return Err(DraftError::Missing("Skills"));
        }
        Ok(())
    }
}

/// Split a comma-separated skills field, dropping blanks and duplicates.
#[must_use]
pub fn parse_skills(raw: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for skill in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !out.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
            out.push(skill.to_owned());
        }
    }
    out
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
