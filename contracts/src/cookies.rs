//! Cookie and browser-storage names plus the `user_info` cookie codec.
//!
//! The server writes `user_info` and the client reads it back as a hydration
//! fallback, so both sides go through the same encode/decode pair.

use crate::auth::Identity;

/// Bearer token, http-only.
pub const AUTH_TOKEN: &str = "auth_token";
/// Readable identity mirror.
pub const USER_INFO: &str = "user_info";
/// Organization scope for company-mode requests.
pub const ACTIVE_COMPANY_ID: &str = "active_company_id";
/// Legacy selection hint; only ever expired.
pub const SELECTED_COMPANY_ID: &str = "selected_company_id";

/// Lifetime of `auth_token` and `user_info`.
pub const SESSION_MAX_AGE_DAYS: i64 = 7;

/// `localStorage` key for the remembered login email.
pub const REMEMBERED_EMAIL_KEY: &str = "remembered_email";
/// `sessionStorage` key for the in-progress login.
pub const PENDING_LOGIN_KEY: &str = "pending_login";
/// `sessionStorage` key for the post-login redirect target.
pub const REDIRECT_AFTER_LOGIN_KEY: &str = "redirect_after_login";

/// Serialize an identity for the `user_info` cookie value.
///
/// Only the active company is mirrored; the full membership list can push
/// the cookie past the browser's 4 KB limit.
#[must_use]
pub fn encode_identity(identity: &Identity) -> String {
    let mirrored = Identity {
        companies: identity.active_company().cloned().into_iter().collect(),
        ..identity.clone()
    };
    let raw = serde_json::to_string(&mirrored).unwrap_or_default();
    urlencoding::encode(&raw).into_owned()
}

/// Parse a `user_info` cookie value. Returns `None` on any malformed input.
///
/// Cookie jars may add or strip one layer of percent-encoding on top of
/// [`encode_identity`], so up to two decode passes are attempted.
#[must_use]
pub fn decode_identity(value: &str) -> Option<Identity> {
    let mut current = value.to_owned();
    for _ in 0..3 {
        if let Ok(identity) = serde_json::from_str(&current) {
            return Some(identity);
        }
        let decoded = urlencoding::decode(&current).ok()?.into_owned();
        if decoded == current {
            return None;
        }
        current = decoded;
    }
    None
}

/// Find `name` in a `Cookie` header / `document.cookie` string.
#[must_use]
pub fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name && !value.is_empty()).then_some(value)
    })
}

#[cfg(test)]
#[path = "cookies_test.rs"]
mod tests;
