//! Reactive application state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` wraps the `session` crate's store so pages, the navbar and
//! route guards observe login state as a signal.

pub mod session;
