//! # bright-ethiopia
//!
//! Leptos + WASM browser client for the Bright Ethiopia donation platform.
//!
//! Donors browse campaigns and manage their giving; NGOs follow their
//! campaigns and donations. Login state lives in the `session` crate and is
//! exposed to the UI through [`state::session::SessionContext`].
//!
//! Browser-only code is behind the `csr` feature. Without it the crate
//! builds natively so page helpers and state can be unit tested.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: logging, session hydration, then mount.
///
/// The session is hydrated before the first render so guarded routes never
/// see a logged-out flash.
#[cfg(feature = "csr")]
pub fn start() {
    use leptos::prelude::*;
    use session::SessionStore;

    use crate::app::App;
    use crate::config::{AppConfig, DEFAULT_LOG_LEVEL};
    use crate::state::session::SessionContext;
    use crate::util::browser_storage::BrowserStorage;

    console_error_panic_hook::set_once();

    let (config, config_error) = AppConfig::from_build_env();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::error_1(&format!("logger init failed: {e}").into());
    }
    if let Some(e) = config_error {
        log::warn!("{e}; using log level {DEFAULT_LOG_LEVEL}");
    }

    let mut store = SessionStore::new(BrowserStorage);
    store.initialize();
    log::debug!("session ready, logged in: {}", store.is_logged_in());
    let session = SessionContext::new(store);

    leptos::mount::mount_to_body(move || view! { <App session=session/> });
}
