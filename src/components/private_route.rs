//! Route guard wrapping protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the view of every protected route in `App`. The decision itself is
//! `session::decide`; this component only turns it into rendering and a
//! history-replacing redirect.

#[cfg(test)]
#[path = "private_route_test.rs"]
mod private_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::AccessDecision;

use crate::state::session::SessionContext;

/// Navigation a decision calls for, if any.
pub(crate) fn redirect_for(decision: AccessDecision) -> Option<(&'static str, NavigateOptions)> {
    let target = decision.redirect_target()?;
    Some((target, NavigateOptions { replace: decision.replaces_history(), ..NavigateOptions::default() }))
}

/// Placeholder text shown instead of the guarded page, if any.
pub(crate) fn placeholder(decision: AccessDecision) -> Option<&'static str> {
    match decision {
        AccessDecision::Allow => None,
        AccessDecision::Pending => Some("Loading..."),
        AccessDecision::RedirectToLogin => Some("Redirecting to login..."),
    }
}

/// Navigate as `decision` requires. Pending and allowed routes stay put.
pub(crate) fn follow(decision: AccessDecision, navigate: impl Fn(&str, NavigateOptions)) {
    if let Some((target, options)) = redirect_for(decision) {
        log::debug!("guarded route requires login, redirecting to {target}");
        navigate(target, options);
    }
}

/// Renders `children` only for a logged-in session.
///
/// While the session is still hydrating a placeholder is shown and no
/// redirect happens; once ready without a session it redirects to `/login`.
#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let access = Memo::new(move |_| session.access());

    Effect::new(move || follow(access.get(), &navigate));

    move || match placeholder(access.get()) {
        None => children().into_any(),
        Some(text) => view! { <div class="route-placeholder">{text}</div> }.into_any(),
    }
}
