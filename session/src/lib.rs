//! Client-side session state and route access decisions.
//!
//! This crate owns who is logged in: the signed-in [`User`], the bearer
//! [`Token`] issued by the backend, and the `ready` flag that tells route
//! guards hydration has finished. It has no browser dependencies; the web
//! client plugs in a `localStorage`-backed [`Storage`] while tests use
//! [`MemoryStorage`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The web client constructs one [`SessionStore`] at start-up, calls
//! [`SessionStore::initialize`] before mounting, and injects the store into
//! the component tree. Protected routes evaluate [`decide`] (or
//! [`SessionStore::access`]) on every render.

pub mod guard;
pub mod storage;
pub mod store;
pub mod token;
pub mod user;

pub use guard::{AccessDecision, LOGIN_ROUTE, decide};
pub use storage::{MemoryStorage, Storage, StorageError, TOKEN_KEY, USER_KEY};
pub use store::{Session, SessionError, SessionSnapshot, SessionStore};
pub use token::Token;
pub use user::{DonorProfile, NgoProfile, Role, User};
