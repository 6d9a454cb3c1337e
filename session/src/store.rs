//! Session store: the single source of truth for who is logged in.
//!
//! DESIGN
//! ======
//! `user` and `token` live together in one `Option<Session>`, so a state with
//! only one of them cannot be represented. Every mutation writes through to
//! durable storage first and only then swaps the in-memory session, so
//! observers never see a state storage does not (best-effort) reflect.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures never escape: reads fail open to "logged out", writes
//! are logged and dropped, and the in-memory session stays authoritative for
//! the rest of the process. The only caller-visible error is an invalid
//! `login` argument.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::guard::{AccessDecision, decide};
use crate::storage::{Storage, StorageError, TOKEN_KEY, USER_KEY};
use crate::token::Token;
use crate::user::User;

/// Error returned by [`SessionStore::login`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The token was empty or whitespace-only.
    #[error("login requires a non-empty token")]
    EmptyToken,
}

/// Why a persisted session was discarded during hydration.
#[derive(Debug, thiserror::Error)]
enum HydrateError {
    #[error("malformed user record: {0}")]
    MalformedUser(#[from] serde_json::Error),
    #[error("persisted token is empty")]
    EmptyToken,
    #[error("only one of user/token is persisted")]
    Partial,
}

/// An established session. Both halves are always present together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub token: Token,
}

/// Owned copy of the store's observable state.
///
/// The reactive UI layer publishes one snapshot per completed mutation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub session: Option<Session>,
    pub ready: bool,
}

impl SessionSnapshot {
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    #[must_use]
    pub fn token(&self) -> Option<&Token> {
        self.session.as_ref().map(|s| &s.token)
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn access(&self) -> AccessDecision {
        decide(self.ready, self.is_logged_in())
    }
}

/// Session state with write-through persistence to a [`Storage`] backend.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Option<Session>,
    ready: bool,
}

impl<S: Storage> SessionStore<S> {
    /// Create an empty, not-yet-ready store. Call [`Self::initialize`] next.
    pub fn new(storage: S) -> Self {
        Self { storage, session: None, ready: false }
    }

    /// Hydrate from durable storage and mark the store ready.
    ///
    /// One-shot: later calls do nothing. Missing, partial or corrupt
    /// persisted data yields an empty session and is removed from storage.
    /// A session established by [`Self::login`] before this call is kept.
    pub fn initialize(&mut self) {
        if self.ready {
            log::debug!("session store already initialized");
            return;
        }
        if self.session.is_none() {
            self.session = self.hydrate();
        }
        self.ready = true;
        log::debug!("session store ready (logged_in={})", self.session.is_some());
    }

    /// Establish a session for `user` with bearer `token`.
    ///
    /// Storage is written before the in-memory session changes. If storage
    /// refuses the write the session still takes effect for this process and
    /// any half-written persisted copy is removed.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyToken`] for an empty or blank token; the
    /// current session is left untouched.
    pub fn login(&mut self, user: User, token: &str) -> Result<(), SessionError> {
        let token = Token::new(token)?;
        let session = Session { user, token };
        if let Err(e) = self.persist(&session) {
            log::warn!("session not persisted, it will be lost on reload: {e}");
            self.clear_persisted();
        }
        log::debug!("session established for {} user {}", session.user.role(), session.user.id());
        self.session = Some(session);
        Ok(())
    }

    /// Clear the session in storage and memory. Idempotent.
    pub fn logout(&mut self) {
        self.clear_persisted();
        self.session = None;
    }

    /// Clear the session because the backend rejected its credential.
    pub fn expire(&mut self) {
        if self.session.is_some() {
            log::info!("backend rejected the session credential, clearing session");
        }
        self.logout();
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    #[must_use]
    pub fn token(&self) -> Option<&Token> {
        self.session.as_ref().map(|s| &s.token)
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot { session: self.session.clone(), ready: self.ready }
    }

    /// Route access decision for the current state.
    #[must_use]
    pub fn access(&self) -> AccessDecision {
        decide(self.ready, self.is_logged_in())
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage backend, e.g. to start a fresh store on it.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn hydrate(&mut self) -> Option<Session> {
        let raw_user = read_key(&self.storage, USER_KEY);
        let raw_token = read_key(&self.storage, TOKEN_KEY);
        if raw_user.is_none() && raw_token.is_none() {
            log::debug!("no persisted session");
            return None;
        }
        match parse_session(raw_user.as_deref(), raw_token.as_deref()) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("discarding persisted session: {e}");
                self.clear_persisted();
                None
            }
        }
    }

    fn persist(&mut self, session: &Session) -> Result<(), StorageError> {
        let raw_user = serde_json::to_string(&session.user)
            .map_err(|e| StorageError::Write { key: USER_KEY.to_owned(), reason: e.to_string() })?;
        self.storage.set(USER_KEY, &raw_user)?;
        self.storage.set(TOKEN_KEY, session.token.as_str())
    }

    fn clear_persisted(&mut self) {
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(e) = self.storage.remove(key) {
                log::warn!("failed to remove persisted {key}: {e}");
            }
        }
    }
}

fn read_key<S: Storage>(storage: &S, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("failed to read persisted {key}: {e}");
            None
        }
    }
}

fn parse_session(raw_user: Option<&str>, raw_token: Option<&str>) -> Result<Session, HydrateError> {
    let (Some(raw_user), Some(raw_token)) = (raw_user, raw_token) else {
        return Err(HydrateError::Partial);
    };
    let user: User = serde_json::from_str(raw_user)?;
    let token = Token::new(raw_token).map_err(|_| HydrateError::EmptyToken)?;
    Ok(Session { user, token })
}
