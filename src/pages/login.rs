//! Login page: email + password against `POST /api/auth/login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only place a session is established. On success the user lands on
//! their role's dashboard; an already-logged-in visitor is sent there
//! straight away without a history entry for `/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::User;

use crate::net::api::{self, LoginFailure};
use crate::pages::form::{is_blank, is_plausible_email};
use crate::state::session::SessionContext;
use crate::util::liveness::use_liveness;
use crate::util::task::spawn;

/// Which input a login error should highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FieldError {
    None,
    Email,
    Password,
}

pub(crate) fn field_for(failure: LoginFailure) -> FieldError {
    match failure {
        LoginFailure::NotFound => FieldError::Email,
        LoginFailure::Unauthorized => FieldError::Password,
        LoginFailure::InvalidRole | LoginFailure::Other => FieldError::None,
    }
}

pub(crate) fn validate_credentials(email: &str, password: &str) -> Result<(), &'static str> {
    if is_blank(email) || password.is_empty() {
        return Err("Please enter your email and password");
    }
    if !is_plausible_email(email) {
        return Err("Please enter a valid email address");
    }
    Ok(())
}

/// Hand a login result to the session. Runs even if the page has unmounted,
/// so an accepted login is never dropped.
pub(crate) fn establish_session(
    session: SessionContext,
    result: Result<(User, String), LoginFailure>,
) -> Result<(), LoginFailure> {
    let (user, token) = result?;
    session.login(user, &token).map_err(|e| {
        log::warn!("login response rejected: {e}");
        LoginFailure::Other
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let alive = use_liveness();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let field_error = RwSignal::new(FieldError::None);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        if let Some(user) = session.user() {
            navigate(&user.dashboard_path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        field_error.set(FieldError::None);
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Err(message) = validate_credentials(&email_value, &password_value) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        let alive = alive.clone();
        spawn(async move {
            let result = api::login(&email_value, &password_value).await;
            let outcome = establish_session(session, result);
            if !alive.is_alive() {
                return;
            }
            busy.set(false);
            // On success the effect above navigates once the session is published.
            if let Err(failure) = outcome {
                field_error.set(field_for(failure));
                error.set(failure.to_string());
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2>"Login"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="notice notice--error">{move || error.get()}</p>
                </Show>
                <label class="field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        autocomplete="email"
                        class:input--invalid=move || field_error.get() == FieldError::Email
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Password"</span>
                    <div class="field__row">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            autocomplete="current-password"
                            class:input--invalid=move || field_error.get() == FieldError::Password
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="btn btn--link" type="button" on:click=move |_| show_password.update(|s| *s = !*s)>
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                </label>
                <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Login" }}
                </button>
                <p class="auth-card__footer">
                    "New here? " <a href="/register">"Register as a donor"</a> " or "
                    <a href="/ngo-register">"register your NGO"</a>
                </p>
            </form>
        </div>
    }
}
