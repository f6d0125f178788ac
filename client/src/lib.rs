//! Marketing site for Supreme Group: header, hero banner, product video
//! showcase, contact form and footer.
//!
//! ARCHITECTURE
//! ============
//! `state` holds the view-state rules as plain structs, `components` wire them
//! to the DOM, `content` holds static copy and media paths, and `util` wraps
//! browser APIs behind the `hydrate` feature.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point, called by the generated JS loader.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
