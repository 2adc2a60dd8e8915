//! Post-login landing policy.

use crate::auth::Identity;
use crate::flow::is_flow_path;

pub const COMPANY_DASHBOARD: &str = "/companies/dashboard";
pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
pub const PROFILE_COMPLETION: &str = "/profile/complete";
pub const OFFER_LISTING: &str = "/offers";
pub const LOGIN: &str = "/login";

/// Role-appropriate landing page for a resolved identity.
#[must_use]
pub fn landing_path(identity: &Identity) -> &'static str {
    if identity.role.is_org_scoped() {
        COMPANY_DASHBOARD
    } else if identity.role.is_admin() {
        ADMIN_DASHBOARD
    } else if !identity.profile_complete {
        PROFILE_COMPLETION
    } else {
        OFFER_LISTING
    }
}

/// Same-site absolute path that is not itself part of the login flow.
#[must_use]
pub fn is_safe_target(target: &str) -> bool {
    target.starts_with('/') && !target.starts_with("//") && !target.contains('\\') && !is_flow_path(target)
}

/// Where to send a freshly resolved user.
///
/// A stored redirect-after-login target wins over [`landing_path`]; the
/// caller is responsible for clearing it once this returns.
#[must_use]
pub fn destination(identity: &Identity, stored: Option<&str>) -> String {
    match stored.map(str::trim) {
        Some(target) if is_safe_target(target) => target.to_owned(),
        _ => landing_path(identity).to_owned(),
    }
}

#[cfg(test)]
#[path = "redirect_test.rs"]
mod tests;
