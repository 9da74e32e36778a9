//! # facility-console
//!
//! Leptos + WASM administrative console for a healthcare-facility
//! management organization: incident reports, warehouse inventory,
//! direct-purchase tracking, dental contracts and assets, transaction
//! logging, and staff/facility settings.
//!
//! The core of the crate is the authenticated API-access and session
//! layer: `net` (transport, error taxonomy, client), `session` (credential
//! slots and the login/logout/verify lifecycle), and the route guard in
//! `components`. The `api` modules are pass-through endpoint catalogs;
//! `pages` and `app` are the thin view shell on top.

pub mod api;
pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;

#[cfg(test)]
mod test_support;

/// Client-side entry point: wires up logging and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::hydrate_body(App);
}
