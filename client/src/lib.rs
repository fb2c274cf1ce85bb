//! # client
//!
//! Leptos frontend for the BookIt salon dashboard. Renders the `scheduling`
//! domain core: dashboard, calendar, appointment and directory pages, and the
//! public booking wizard.
//!
//! Compiled twice: with `ssr` for server rendering inside the Axum binary and
//! with `hydrate` for the WASM bundle that takes over in the browser.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered
/// document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
