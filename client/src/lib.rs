//! # client
//!
//! Leptos + WASM front end for sketch-guesser.
//!
//! This crate holds the page shell, the canvas host component, and the
//! bridge to the in-browser image classifier. All capture, throttling, and
//! guess bookkeeping lives in the `canvas` crate; this layer maps DOM events
//! into `canvas::engine::Engine` calls, spawns classification work, and
//! renders the resulting session snapshot.

pub mod app;
pub mod components;
pub mod model;
pub mod state;
pub mod util;

use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: install logging and mount the app.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }

    leptos::mount::mount_to_body(app::App);
}
