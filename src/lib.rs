//! # clinica-client
//!
//! Leptos + WASM frontend for the Centro Médico clinic-management system.
//!
//! This crate contains pages, the session store, the navigation guard,
//! the REST resource clients, and the localStorage-backed session
//! persistence. The access-control core (guard + session store) is plain
//! Rust with no browser dependency so it is tested natively; everything
//! that touches the browser sits behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod storage;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
