pub mod api;
pub mod common;
pub mod config;
pub mod frontend;
pub mod manager;
pub mod models;
pub mod router;
pub mod services;
pub mod types;

/// Browser entry point
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    frontend::mount();
}
