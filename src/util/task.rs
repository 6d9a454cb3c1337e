//! Fire-and-forget async tasks for component code.

use std::future::Future;

/// Run `task` on the browser's microtask queue.
///
/// Native builds have no executor and no browser to talk to, so the task is
/// dropped unpolled.
pub fn spawn<F>(task: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "csr"))]
    drop(task);
}
