//! # client
//!
//! Leptos + WASM frontend for TradeVision, an AI-assisted trading dashboard
//! for NSE/BSE equities.
//!
//! This crate contains pages, components, application state, the REST API
//! wrapper, and the small display utilities they share. All data comes from
//! the backend through the host's `/api` proxy.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
