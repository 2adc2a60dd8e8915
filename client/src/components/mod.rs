//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and listing surfaces while reading shared
//! session state from Leptos context providers.

pub mod infinite_scroll;
pub mod offer_card;
pub mod site_header;
