//! Login form validation.
//!
//! Runs before any network call so malformed input never reaches the API.

pub const MIN_PASSWORD_LEN: usize = 6;

/// Validation failure for the credential form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("Enter a valid email address.")]
    InvalidEmail,
    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,
}

/// Validated email/password pair. Never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Trim the email and check both fields.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule, email first.
    pub fn new(email: &str, password: &str) -> Result<Self, CredentialError> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(CredentialError::InvalidEmail);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CredentialError::PasswordTooShort);
        }
        Ok(Self { email: email.to_owned(), password: password.to_owned() })
    }
}

/// Structural email check: `local@domain.tld`, no whitespace, one `@`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

#[cfg(test)]
#[path = "credentials_test.rs"]
mod tests;
