//! NGO registration (`POST /api/ngo/register`).

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::Role;

use crate::net::api;
use crate::net::types::NgoRegistration;
use crate::pages::register::{
    RegistrationError, RegistrationErrorView, redirect_to_login_later, registration_error, validate_registration,
};
use crate::util::liveness::use_liveness;
use crate::util::task::spawn;

#[component]
pub fn NgoRegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let alive = use_liveness();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
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
        let body = NgoRegistration {
            name: name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
            role: Role::Ngo.as_str().to_owned(),
            description: description.get_untracked().trim().to_owned(),
        };
        if let Err(message) = validate_registration(&body.name, &body.email, &body.password) {
            error.set(Some(RegistrationError::Other(message.to_owned())));
            return;
        }
        busy.set(true);
        let alive = alive.clone();
        let navigate = navigate.clone();
        spawn(async move {
            let result = api::register_ngo(&body).await;
            if !alive.is_alive() {
                return;
            }
            busy.set(false);
            match result {
                Ok(message) => {
                    success.set(message.unwrap_or_else(|| "NGO registered successfully!".to_owned()));
                    redirect_to_login_later(navigate, alive);
                }
                Err(e) => {
                    log::info!("NGO registration failed: {e}");
                    error.set(Some(registration_error(&e)));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2>"NGO Registration"</h2>
                <Show when=move || !success.get().is_empty()>
                    <p class="notice notice--success">{move || success.get()}</p>
                </Show>
                <RegistrationErrorView error=error/>
                <label class="field">
                    <span>"NGO Name"</span>
                    <input type="text" prop:value=move || name.get() on:input=move |ev| name.set(event_target_value(&ev))/>
                </label>
                <label class="field">
                    <span>"Email"</span>
                    <input type="email" prop:value=move || email.get() on:input=move |ev| email.set(event_target_value(&ev))/>
                </label>
                <label class="field">
                    <span>"Description"</span>
                    <textarea
                        rows="3"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
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
                <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>"Register NGO"</button>
                <Show when=move || !matches!(error.get(), Some(RegistrationError::AlreadyRegistered(_)))>
                    <p class="auth-card__footer">"Already have an account? " <a href="/login">"Login"</a></p>
                </Show>
            </form>
        </div>
    }
}
