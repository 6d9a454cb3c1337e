//! Access decision for protected routes.
//!
//! The guard is a pure function of `(ready, logged_in)`. Checking `ready`
//! first keeps a reload from bouncing an already-logged-in user to the login
//! page before hydration finished. Role-based redirects are not its concern.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Route identifier of the login entry point.
pub const LOGIN_ROUTE: &str = "/login";

/// What a protected route should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    /// Hydration has not finished: show a placeholder, neither content nor redirect.
    Pending,
    /// Not logged in: replace the current history entry with [`LOGIN_ROUTE`].
    RedirectToLogin,
    /// Logged in: render the protected content.
    Allow,
}

/// Decide what a protected route renders for the given session state.
#[must_use]
pub fn decide(ready: bool, logged_in: bool) -> AccessDecision {
    match (ready, logged_in) {
        (false, _) => AccessDecision::Pending,
        (true, false) => AccessDecision::RedirectToLogin,
        (true, true) => AccessDecision::Allow,
    }
}

impl AccessDecision {
    /// Route to navigate to, if any.
    #[must_use]
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::RedirectToLogin => Some(LOGIN_ROUTE),
            Self::Pending | Self::Allow => None,
        }
    }

    /// Redirects replace history so "back" does not return to the guarded page.
    #[must_use]
    pub fn replaces_history(self) -> bool {
        matches!(self, Self::RedirectToLogin)
    }

    #[must_use]
    pub fn renders_content(self) -> bool {
        matches!(self, Self::Allow)
    }
}
