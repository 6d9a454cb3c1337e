//! Networking modules for the donation backend's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and maps failures to `ApiError`; `types`
//! defines the wire schema those calls exchange.

pub mod api;
pub mod types;
