//! Fully Stacked: the blog's pages, site metadata and its copy-to-clipboard
//! button.
//!
//! Built by cargo-leptos twice: with `ssr` for the axum server binary and with
//! `hydrate` for the wasm bundle that makes the copy buttons live.

pub mod app;
pub mod components;
pub mod config;
pub mod copy;
pub mod legacy;
pub mod pages;
pub mod settings;
pub mod sitemap;
pub mod telemetry;

/// wasm entry point: attach to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
