//! # portfolio
//!
//! Leptos + WASM single-page portfolio site. Renders a profile, a skills
//! list, a searchable project gallery, and a mailto-based contact form, with
//! dark-mode persistence and scroll-triggered navigation affordances.
//!
//! All browser access (DOM, localStorage, clipboard, viewport metrics) sits
//! behind the `browser` cargo feature, so the presentation logic in
//! `content`, `state`, and `util` compiles and tests natively.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point — Trunk invokes this when the module loads.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
