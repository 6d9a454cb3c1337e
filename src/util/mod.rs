//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (localStorage, timers, file
//! downloads) from page and component logic so that logic stays testable
//! natively.

pub mod browser_storage;
pub mod browser;
pub mod liveness;
pub mod notice;
pub mod task;
