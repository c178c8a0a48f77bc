//! Administrative dashboard frontend for the JokeHub API

pub mod app;
pub mod components;
pub mod fetch;
pub mod session;
pub mod state;

pub use app::App;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    #[cfg(target_arch = "wasm32")]
    session::install(std::sync::Arc::new(session::BrowserSession));
    leptos::mount::hydrate_body(App);
}
