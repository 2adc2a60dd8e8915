//! Client state provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! `session` is the app-wide identity store; `listing` is the per-page
//! paginated collection used by infinite scroll. The login state machine
//! itself lives in `contracts::flow` and is wrapped in an `RwSignal` by `app`.

pub mod listing;
pub mod session;
