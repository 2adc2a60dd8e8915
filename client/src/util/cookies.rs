//! Readable session cookies (`user_info`, `active_company_id`).
//!
//! The http-only `auth_token` is invisible here; the server expires it on
//! logout. These helpers only cover what `document.cookie` can see.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

use contracts::auth::Identity;
#[cfg(feature = "hydrate")]
use contracts::cookies::{USER_INFO, decode_identity, find_cookie};
use contracts::cookies::{ACTIVE_COMPANY_ID, SELECTED_COMPANY_ID};

/// Cookies the browser may clear on its own.
const READABLE: [&str; 3] = [contracts::cookies::USER_INFO, ACTIVE_COMPANY_ID, SELECTED_COMPANY_ID];

#[cfg(feature = "hydrate")]
fn document_cookie() -> Option<String> {
    use wasm_bindgen::JsCast as _;
    let document = web_sys::window()?.document()?;
    document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()
}

#[cfg(feature = "hydrate")]
fn write_cookie(value: &str) {
    use wasm_bindgen::JsCast as _;
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Ok(html) = document.dyn_into::<web_sys::HtmlDocument>() {
        let _ = html.set_cookie(value);
    }
}

/// Identity mirrored in the readable `user_info` cookie.
pub fn read_identity() -> Option<Identity> {
    #[cfg(feature = "hydrate")]
    {
        let header = document_cookie()?;
        decode_identity(find_cookie(&header, USER_INFO)?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// `document.cookie` assignment that expires `name`.
pub(crate) fn expiry_directive(name: &str) -> String {
    format!("{name}=; Path=/; Max-Age=0; SameSite=Strict")
}

/// Expire the readable session cookies locally.
pub fn clear_readable() {
    #[cfg(feature = "hydrate")]
    {
        for name in READABLE {
            write_cookie(&expiry_directive(name));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = READABLE;
    }
}
