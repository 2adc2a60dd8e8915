//! # client
//!
//! Leptos frontend for the job board. Compiled with `ssr` into the server
//! binary for rendering and with `hydrate` into WASM for the browser.
//!
//! This crate contains pages, components, session/listing state, browser
//! storage and cookie helpers, and the typed calls to the server's `/api`
//! endpoints. Wire types and the login state machine live in `contracts`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
