//! # client
//!
//! Leptos + WASM frontend for the rave event listing.
//!
//! This crate contains pages, components, application state, network types,
//! and the interest/attendance toggle flow: local sets persisted in browser
//! storage, optimistic counter updates across every rendered copy of an
//! event, and a best-effort backend sync.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
