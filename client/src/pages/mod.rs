//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, fetches, form state) and
//! delegates rendering details to `components`. The three login screens share
//! their request/reply handling through `login_flow`.

pub mod admin_dashboard;
pub mod company_dashboard;
pub mod employees;
pub mod home;
pub mod login;
pub(crate) mod login_flow;
pub mod offer_detail;
pub mod offers;
pub(crate) mod paged;
pub mod profile_complete;
pub mod select_company;
pub mod select_role;
