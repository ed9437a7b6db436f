//! # portfolio
//!
//! Leptos + WASM personal portfolio page.
//!
//! The page is a projection of a static profile record (`state::profile`)
//! plus one piece of interactive state: the light/dark theme
//! (`state::theme`), resolved from `localStorage` or the system color-scheme
//! preference and persisted on every toggle.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
