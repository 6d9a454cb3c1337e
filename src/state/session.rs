//! Reactive session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App`; read with `expect_context::<SessionContext>()` by
//! route guards, the navbar and every page that calls an authenticated
//! endpoint.
//!
//! DESIGN
//! ======
//! The [`SessionStore`] lives in a `StoredValue` and is the only place
//! session state changes. After every mutation the context publishes a fresh
//! [`SessionSnapshot`] into an `RwSignal`, so observers re-run exactly once
//! per completed `login`/`logout`/`expire` and never see a half-applied
//! state.

#[cfg(all(test, not(feature = "csr")))]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use session::{AccessDecision, SessionError, SessionSnapshot, SessionStore, Token, User};

use crate::net::api::ApiError;

/// Durable storage backing the session in this build.
#[cfg(feature = "csr")]
pub type AppStorage = crate::util::browser_storage::BrowserStorage;
/// Durable storage backing the session in this build.
#[cfg(not(feature = "csr"))]
pub type AppStorage = session::MemoryStorage;

#[derive(Clone, Copy)]
pub struct SessionContext {
    store: StoredValue<SessionStore<AppStorage>>,
    snapshot: RwSignal<SessionSnapshot>,
}

impl SessionContext {
    /// Wrap an (ideally already initialized) store.
    pub fn new(store: SessionStore<AppStorage>) -> Self {
        let snapshot = RwSignal::new(store.snapshot());
        Self { store: StoredValue::new(store), snapshot }
    }

    /// Current state; tracked.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot.get()
    }

    pub fn user(&self) -> Option<User> {
        self.snapshot.with(|s| s.user().cloned())
    }

    pub fn user_untracked(&self) -> Option<User> {
        self.snapshot.with_untracked(|s| s.user().cloned())
    }

    pub fn token(&self) -> Option<Token> {
        self.snapshot.with(|s| s.token().cloned())
    }

    /// Token for an API call made from an event handler or task.
    pub fn token_untracked(&self) -> Option<Token> {
        self.snapshot.with_untracked(|s| s.token().cloned())
    }

    pub fn is_ready(&self) -> bool {
        self.snapshot.with(|s| s.ready)
    }

    pub fn is_logged_in(&self) -> bool {
        self.snapshot.with(SessionSnapshot::is_logged_in)
    }

    pub fn access(&self) -> AccessDecision {
        self.snapshot.with(SessionSnapshot::access)
    }

    /// Establish a session and publish it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyToken`] for a blank token; nothing is
    /// published in that case.
    pub fn login(&self, user: User, token: &str) -> Result<(), SessionError> {
        let mut result = Ok(());
        self.store.update_value(|store| result = store.login(user, token));
        if result.is_ok() {
            self.publish();
        }
        result
    }

    pub fn logout(&self) {
        self.store.update_value(SessionStore::logout);
        self.publish();
    }

    /// Drop a credential the backend no longer accepts.
    pub fn expire(&self) {
        self.store.update_value(SessionStore::expire);
        self.publish();
    }

    /// Expire the session when `error` is an HTTP 401. Returns whether it did.
    pub fn handle_api_error(&self, error: &ApiError) -> bool {
        if error.is_unauthorized() {
            self.expire();
            true
        } else {
            false
        }
    }

    fn publish(&self) {
        let next = self.store.with_value(SessionStore::snapshot);
        self.snapshot.set(next);
    }
}
