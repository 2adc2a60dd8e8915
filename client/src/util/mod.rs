//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, readable
//! cookies, route guards) from page and component logic.

pub mod auth;
pub mod cookies;
pub mod storage;
