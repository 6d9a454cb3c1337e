//! Liveness flag for async work started by a component.
//!
//! A fetch spawned from a page can finish after the page has unmounted.
//! Tasks check [`Liveness::is_alive`] before writing results; the flag is
//! cleared by `on_cleanup`.

#[cfg(test)]
#[path = "liveness_test.rs"]
mod liveness_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn kill(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// A flag that goes dead when the current reactive owner is cleaned up.
pub fn use_liveness() -> Liveness {
    let liveness = Liveness::new();
    let on_drop = liveness.clone();
    leptos::prelude::on_cleanup(move || on_drop.kill());
    liveness
}
