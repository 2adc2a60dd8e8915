//! Networking: typed calls to the server's `/api` routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser never reaches the remote REST API directly. `api` wraps each
//! BFF endpoint and converts every outcome into `contracts` types.

pub mod api;
