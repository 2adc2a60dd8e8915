//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the remote-API conversations (request shape, decode,
//! failure classification) so route handlers stay focused on cookies and
//! status codes.

pub mod auth;
pub mod catalog;
