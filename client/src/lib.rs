//! # client
//!
//! Leptos + WASM frontend for the DataHex media gallery.
//!
//! This crate contains pages, components, session state, the REST client for
//! the media backend, and the small utilities (route policy, debounce, token
//! inspection, validation) the pages share. All persistence and authorization
//! live in the external backend; this crate only presents and routes.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM hydration entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
