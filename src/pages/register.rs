//! Donor registration, plus the form rules shared with NGO registration.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::LOGIN_ROUTE;

use crate::net::api::{self, ApiError};
use crate::net::types::DonorRegistration;
use crate::pages::form::{is_blank, is_plausible_email};
use crate::util::liveness::{Liveness, use_liveness};
use crate::util::task::spawn;

/// Pause on the success message before moving on to `/login`.
pub(crate) const REDIRECT_DELAY_MS: u32 = 1500;

pub(crate) fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), &'static str> {
    if is_blank(name) || is_blank(email) || password.is_empty() {
        return Err("Please fill in all fields");
    }
    if !is_plausible_email(email) {
        return Err("Please enter a valid email address");
    }
    Ok(())
}

/// How a failed registration is shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum RegistrationError {
    /// The email is taken; shown next to the "log in instead" link.
    AlreadyRegistered(String),
    Other(String),
}

pub(crate) fn registration_error(error: &ApiError) -> RegistrationError {
    match error {
        ApiError::Status { message, .. } if message.to_lowercase().contains("already") => {
            RegistrationError::AlreadyRegistered(message.clone())
        }
        ApiError::Network(_) | ApiError::Unavailable => RegistrationError::Other("Network error".to_owned()),
        ApiError::Status { message, .. } => RegistrationError::Other(message.clone()),
        ApiError::Unauthorized(_) | ApiError::Decode(_) => {
            RegistrationError::Other("Registration failed. Please try again.".to_owned())
        }
    }
}

/// Navigate to `/login` after [`REDIRECT_DELAY_MS`], unless the page is gone.
pub(crate) fn redirect_to_login_later<F>(navigate: F, alive: Liveness)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    spawn(async move {
        #[cfg(feature = "csr")]
        gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
        if alive.is_alive() {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let alive = use_liveness();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<RegistrationError>);
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        success.set(String::new());
        let body = DonorRegistration {
            name: name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
        };
        if let Err(message) = validate_registration(&body.name, &body.email, &body.password) {
            error.set(Some(RegistrationError::Other(message.to_owned())));
            return;
        }
        busy.set(true);
        let alive = alive.clone();
        let navigate = navigate.clone();
        spawn(async move {
            let result = api::register_donor(&body).await;
            if !alive.is_alive() {
                return;
            }
            busy.set(false);
            match result {
                Ok(_) => {
                    success.set("Registration successful! Please login.".to_owned());
                    redirect_to_login_later(navigate, alive);
                }
                Err(e) => {
                    log::info!("donor registration failed: {e}");
                    error.set(Some(registration_error(&e)));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2>"Register"</h2>
                <Show when=move || !success.get().is_empty()>
                    <p class="notice notice--success">{move || success.get()}</p>
                </Show>
                <RegistrationErrorView error=error/>
                <label class="field">
                    <span>"Name"</span>
                    <input type="text" prop:value=move || name.get() on:input=move |ev| name.set(event_target_value(&ev))/>
                </label>
                <label class="field">
                    <span>"Email"</span>
                    <input type="email" prop:value=move || email.get() on:input=move |ev| email.set(event_target_value(&ev))/>
                </label>
                <label class="field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>"Register"</button>
                <p class="auth-card__footer">"Already have an account? " <a href="/login">"Login"</a></p>
            </form>
        </div>
    }
}

/// Error line for both registration forms.
#[component]
pub(crate) fn RegistrationErrorView(error: RwSignal<Option<RegistrationError>>) -> impl IntoView {
    move || {
        error.get().map(|e| match e {
            RegistrationError::AlreadyRegistered(message) => view! {
                <p class="notice notice--error">{message} " " <a href="/login">"Log in instead"</a></p>
            }
            .into_any(),
            RegistrationError::Other(message) => view! { <p class="notice notice--error">{message}</p> }.into_any(),
        })
    }
}
