//! Property Dashboard - Leptos frontend
//!
//! Lets a user pick one of their properties and shows its revenue summary.
//! When the backend cannot provide the property list, a built-in sample
//! table is filtered by a tenant guessed from browser storage.

#[cfg(all(target_arch = "wasm32", not(feature = "csr")))]
compile_error!("building for wasm32 requires the `csr` feature");

pub mod api;
pub mod app;
pub mod components;
pub mod error;
pub mod fallback;
pub mod io;
pub mod loader;
pub mod selection;
pub mod tenant;

pub use app::App;
pub use error::{DashboardError, Result};

/// Client-side entry point for the WASM bundle
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    leptos::mount::mount_to_body(App);
}
