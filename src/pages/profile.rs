//! Donor account page: personal details, password change, payment methods.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::campaign_card::format_etb;
use crate::components::notice_banner::NoticeBanner;
use crate::components::payment_settings::PaymentSettings;
use crate::net::api::{self, ApiError};
use crate::net::types::{DonorAccount, PasswordChange, PostalAddress, ProfileUpdate};
use crate::pages::form::is_blank;
use crate::state::session::SessionContext;
use crate::util::liveness::use_liveness;
use crate::util::notice::{Notice, flash};
use crate::util::task::spawn;

/// Collapsible sections; one is open at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Section {
    Personal,
    Security,
    Payments,
}

impl Section {
    fn title(self) -> &'static str {
        match self {
            Self::Personal => "Personal Information",
            Self::Security => "Security",
            Self::Payments => "Payment Methods",
        }
    }
}

pub(crate) fn validate_password_change(current: &str, new: &str, confirm: &str) -> Result<PasswordChange, &'static str> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Err("Please fill all password fields");
    }
    if new != confirm {
        return Err("New passwords do not match");
    }
    Ok(PasswordChange { current_password: current.to_owned(), new_password: new.to_owned() })
}

pub(crate) fn build_profile_update(name: &str, phone: &str, country: &str, city: &str) -> Result<ProfileUpdate, &'static str> {
    if is_blank(name) {
        return Err("Name is required");
    }
    Ok(ProfileUpdate {
        name: name.trim().to_owned(),
        phone: phone.trim().to_owned(),
        address: PostalAddress { country: country.trim().to_owned(), city: city.trim().to_owned() },
    })
}

/// A wrong current password comes back as a 401 from this endpoint, so it is
/// reported inline instead of ending the session.
pub(crate) fn password_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Unauthorized(message) | ApiError::Status { message, .. } => message.clone(),
        _ => "Failed to update password".to_owned(),
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let alive = use_liveness();
    let notice = RwSignal::new(None::<Notice>);
    let loading = RwSignal::new(true);
    let open = RwSignal::new(Section::Personal);

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let totals = RwSignal::new((0.0_f64, 0_u64));
    let saving = RwSignal::new(false);

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let pwd_saving = RwSignal::new(false);

    {
        let alive = alive.clone();
        spawn(async move {
            let result = api::fetch_donor_profile(session.token_untracked().as_ref()).await;
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(DonorAccount { name: n, email: e, phone: p, address, total_donated, campaigns_supported }) => {
                    name.set(n);
                    email.set(e);
                    phone.set(p);
                    country.set(address.country);
                    city.set(address.city);
                    totals.set((total_donated, campaigns_supported));
                }
                Err(e) => {
                    if !session.handle_api_error(&e) {
                        log::warn!("loading profile failed: {e}");
                        flash(notice, Notice::error("Failed to load profile"));
                    }
                }
            }
            loading.set(false);
        });
    }

    let on_save = {
        let alive = alive.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if saving.get_untracked() {
                return;
            }
            let update = match build_profile_update(
                &name.get_untracked(),
                &phone.get_untracked(),
                &country.get_untracked(),
                &city.get_untracked(),
            ) {
                Ok(update) => update,
                Err(message) => {
                    flash(notice, Notice::error(message));
                    return;
                }
            };
            saving.set(true);
            let alive = alive.clone();
            spawn(async move {
                let result = api::update_donor_profile(&update, session.token_untracked().as_ref()).await;
                if !alive.is_alive() {
                    return;
                }
                saving.set(false);
                match result {
                    Ok(()) => flash(notice, Notice::success("Profile saved")),
                    Err(e) => {
                        if !session.handle_api_error(&e) {
                            flash(notice, Notice::error(e.user_message()));
                        }
                    }
                }
            });
        }
    };

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pwd_saving.get_untracked() {
            return;
        }
        let change = match validate_password_change(
            &current_password.get_untracked(),
            &new_password.get_untracked(),
            &confirm_password.get_untracked(),
        ) {
            Ok(change) => change,
            Err(message) => {
                flash(notice, Notice::error(message));
                return;
            }
        };
        pwd_saving.set(true);
        let alive = alive.clone();
        spawn(async move {
            let result = api::change_password(&change, session.token_untracked().as_ref()).await;
            if !alive.is_alive() {
                return;
            }
            pwd_saving.set(false);
            match result {
                Ok(()) => {
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                    flash(notice, Notice::success("Password updated"));
                }
                Err(e) => flash(notice, Notice::error(password_error_message(&e))),
            }
        });
    };

    let header = move |section: Section| {
        view! {
            <button
                class="section-toggle"
                class:section-toggle--open=move || open.get() == section
                on:click=move |_| open.set(section)
            >
                {section.title()}
            </button>
        }
    };

    let ready = move || !loading.get();
    let showing = move |section: Section| ready() && open.get() == section;

    view! {
        <div class="page profile">
            <NoticeBanner notice=notice/>
            <Show when=move || loading.get()>
                <p class="muted">"Loading profile..."</p>
            </Show>
            <Show when=ready>
                <section class="panel">
                    <h2>{move || name.get()}</h2>
                    <p class="muted">
                        {move || {
                            let (donated, supported) = totals.get();
                            format!("Total donated: {} · Campaigns supported: {supported}", format_etb(donated))
                        }}
                    </p>
                </section>
                {header(Section::Personal)}
            </Show>
            <Show when=move || showing(Section::Personal)>
                <form class="panel form" on:submit=on_save.clone()>
                    <label class="field">
                        <span>"Name"</span>
                        <input type="text" prop:value=move || name.get() on:input=move |ev| name.set(event_target_value(&ev))/>
                    </label>
                    <label class="field">
                        <span>"Email"</span>
                        <input type="email" readonly=true prop:value=move || email.get()/>
                    </label>
                    <label class="field">
                        <span>"Phone"</span>
                        <input type="tel" prop:value=move || phone.get() on:input=move |ev| phone.set(event_target_value(&ev))/>
                    </label>
                    <label class="field">
                        <span>"Country"</span>
                        <input type="text" prop:value=move || country.get() on:input=move |ev| country.set(event_target_value(&ev))/>
                    </label>
                    <label class="field">
                        <span>"City"</span>
                        <input type="text" prop:value=move || city.get() on:input=move |ev| city.set(event_target_value(&ev))/>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Profile" }}
                    </button>
                </form>
            </Show>

            <Show when=ready>{header(Section::Security)}</Show>
            <Show when=move || showing(Section::Security)>
                <form class="panel form" on:submit=on_change_password.clone()>
                    <label class="field">
                        <span>"Current Password"</span>
                        <input
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || current_password.get()
                            on:input=move |ev| current_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"New Password"</span>
                        <input
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Confirm New Password"</span>
                        <input
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || pwd_saving.get()>
                        {move || if pwd_saving.get() { "Updating..." } else { "Change Password" }}
                    </button>
                </form>
            </Show>

            <Show when=ready>{header(Section::Payments)}</Show>
            <Show when=move || showing(Section::Payments)>
                <PaymentSettings/>
            </Show>
        </div>
    }
}
