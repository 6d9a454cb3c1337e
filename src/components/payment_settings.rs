//! Saved payment methods, recurring donation and notification settings for
//! the signed-in donor.
//!
//! Only a method type and the last four digits are ever entered or stored;
//! card numbers and secrets never pass through the client. Recurring and
//! notification settings start from their defaults and are written back on
//! submit.

#[cfg(test)]
#[path = "payment_settings_test.rs"]
mod payment_settings_test;

use leptos::prelude::*;

use crate::components::notice_banner::NoticeBanner;
use crate::net::api;
use crate::net::types::{NewPaymentMethod, NotificationPreferences, PaymentMethod, RecurringDonation, RecurringFrequency};
use crate::state::session::SessionContext;
use crate::util::browser::confirm;
use crate::util::liveness::use_liveness;
use crate::util::notice::{Notice, flash};
use crate::util::task::spawn;

/// Payment providers offered in the add form.
pub const PAYMENT_TYPES: [&str; 3] = ["CBE", "TeleBirr", "PayPal"];

pub(crate) const LAST4_MESSAGE: &str = "Please enter the last 4 digits of your card/number";

/// Validate the add form. `last4` must be exactly four ASCII digits.
pub(crate) fn validate_new_method(kind: &str, last4: &str) -> Result<NewPaymentMethod, &'static str> {
    if !PAYMENT_TYPES.contains(&kind) {
        return Err("Please choose a payment type");
    }
    let last4 = last4.trim();
    if last4.len() != 4 || !last4.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LAST4_MESSAGE);
    }
    Ok(NewPaymentMethod { kind: kind.to_owned(), last4: last4.to_owned() })
}

pub(crate) const RECURRING_AMOUNT_MESSAGE: &str = "Please enter a recurring amount";

/// Validate the recurring form. A disabled schedule always carries a zero amount.
pub(crate) fn validate_recurring(
    enabled: bool,
    amount: &str,
    frequency: RecurringFrequency,
) -> Result<RecurringDonation, &'static str> {
    if !enabled {
        return Ok(RecurringDonation { enabled, amount: 0.0, frequency, next_charge: None });
    }
    match amount.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => {
            Ok(RecurringDonation { enabled, amount, frequency, next_charge: None })
        }
        _ => Err(RECURRING_AMOUNT_MESSAGE),
    }
}

/// One checkbox of the notification form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NotificationToggle {
    Receipts,
    Reminders,
    ExpiringCards,
}

impl NotificationToggle {
    pub(crate) const ALL: [Self; 3] = [Self::Receipts, Self::Reminders, Self::ExpiringCards];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Receipts => "Email me receipts",
            Self::Reminders => "Remind me before recurring charges",
            Self::ExpiringCards => "Notify me about expiring cards",
        }
    }

    pub(crate) fn get(self, prefs: &NotificationPreferences) -> bool {
        match self {
            Self::Receipts => prefs.receipts,
            Self::Reminders => prefs.reminders,
            Self::ExpiringCards => prefs.expiring_cards,
        }
    }

    pub(crate) fn set(self, prefs: &mut NotificationPreferences, on: bool) {
        match self {
            Self::Receipts => prefs.receipts = on,
            Self::Reminders => prefs.reminders = on,
            Self::ExpiringCards => prefs.expiring_cards = on,
        }
    }
}

pub(crate) fn mark_default(methods: &mut [PaymentMethod], id: &str) {
    for method in methods {
        method.is_default = method.id == id;
    }
}

pub(crate) fn remove_method(methods: &mut Vec<PaymentMethod>, id: &str) {
    methods.retain(|m| m.id != id);
}

#[component]
pub fn PaymentSettings() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let alive = use_liveness();
    let methods = RwSignal::new(Vec::<PaymentMethod>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<Notice>);
    let show_add = RwSignal::new(false);
    let new_kind = RwSignal::new(PAYMENT_TYPES[0].to_owned());
    let new_last4 = RwSignal::new(String::new());

    {
        let alive = alive.clone();
        spawn(async move {
            let result = api::list_payment_methods(session.token_untracked().as_ref()).await;
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(list) => methods.set(list),
                Err(e) => {
                    if !session.handle_api_error(&e) {
                        log::warn!("loading payment methods failed: {e}");
                        flash(notice, Notice::error("Failed to load payment methods"));
                    }
                }
            }
            loading.set(false);
        });
    }

    let reset_form = move || {
        show_add.set(false);
        new_kind.set(PAYMENT_TYPES[0].to_owned());
        new_last4.set(String::new());
    };

    let on_add = {
        let alive = alive.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let body = match validate_new_method(&new_kind.get_untracked(), &new_last4.get_untracked()) {
                Ok(body) => body,
                Err(message) => {
                    flash(notice, Notice::error(message));
                    return;
                }
            };
            let alive = alive.clone();
            spawn(async move {
                let result = api::add_payment_method(&body, session.token_untracked().as_ref()).await;
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(saved) => {
                        methods.update(|list| list.push(saved));
                        reset_form();
                        flash(notice, Notice::success("Payment method added"));
                    }
                    Err(e) => {
                        if !session.handle_api_error(&e) {
                            flash(notice, Notice::error("Failed to add payment method"));
                        }
                    }
                }
            });
        }
    };

    let on_remove = {
        let alive = alive.clone();
        Callback::new(move |id: String| {
            if !confirm("Remove this payment method?") {
                return;
            }
            let alive = alive.clone();
            spawn(async move {
                let result = api::remove_payment_method(&id, session.token_untracked().as_ref()).await;
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(()) => {
                        methods.update(|list| remove_method(list, &id));
                        flash(notice, Notice::success("Payment method removed"));
                    }
                    Err(e) => {
                        if !session.handle_api_error(&e) {
                            flash(notice, Notice::error("Failed to remove payment method"));
                        }
                    }
                }
            });
        })
    };

    let on_default = Callback::new(move |id: String| {
        let alive = alive.clone();
        spawn(async move {
            let result = api::set_default_payment_method(&id, session.token_untracked().as_ref()).await;
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(()) => {
                    methods.update(|list| mark_default(list, &id));
                    flash(notice, Notice::success("Default payment method updated"));
                }
                Err(e) => {
                    if !session.handle_api_error(&e) {
                        flash(notice, Notice::error("Failed to set default method"));
                    }
                }
            }
        });
    });

    let list = move || {
        if loading.get() {
            return view! { <p class="muted">"Loading payment methods..."</p> }.into_any();
        }
        let items = methods.get();
        if items.is_empty() {
            return view! { <p class="muted">"You haven't added any payment methods yet."</p> }.into_any();
        }
        items
            .into_iter()
            .map(|method| {
                let remove_id = method.id.clone();
                let default_id = method.id.clone();
                let is_default = method.is_default;
                view! {
                    <li class="payment-method" class:payment-method--default=is_default>
                        <span class="payment-method__label">{method.label()}</span>
                        <Show
                            when=move || is_default
                            fallback=move || {
                                let id = default_id.clone();
                                view! {
                                    <button class="btn btn--link" on:click=move |_| on_default.run(id.clone())>
                                        "Set default"
                                    </button>
                                }
                            }
                        >
                            <span class="badge">"Default"</span>
                        </Show>
                        <button class="btn btn--danger" on:click=move |_| on_remove.run(remove_id.clone())>
                            "Remove"
                        </button>
                    </li>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="panel payment-settings">
            <NoticeBanner notice=notice/>
            <header class="panel__header">
                <h3>"Saved Payment Methods"</h3>
                <Show when=move || !show_add.get()>
                    <button class="btn btn--link" on:click=move |_| show_add.set(true)>"+ Add Method"</button>
                </Show>
            </header>
            <Show when=move || show_add.get()>
                <form class="payment-settings__form" on:submit=on_add.clone()>
                    <select
                        prop:value=move || new_kind.get()
                        on:change=move |ev| new_kind.set(event_target_value(&ev))
                    >
                        {PAYMENT_TYPES.into_iter().map(|kind| view! { <option value=kind>{kind}</option> }).collect_view()}
                    </select>
                    <input
                        type="text"
                        maxlength="4"
                        inputmode="numeric"
                        placeholder="Last 4 digits"
                        prop:value=move || new_last4.get()
                        on:input=move |ev| new_last4.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Add"</button>
                    <button class="btn" type="button" on:click=move |_| reset_form()>"Cancel"</button>
                </form>
            </Show>
            <ul class="payment-settings__list">{list}</ul>
        </section>
        <RecurringDonationForm notice=notice/>
        <NotificationPreferencesForm notice=notice/>
    }
}

#[component]
fn RecurringDonationForm(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let alive = use_liveness();
    let enabled = RwSignal::new(false);
    let amount = RwSignal::new(String::new());
    let frequency = RwSignal::new(RecurringFrequency::default());
    let next_charge = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let settings = match validate_recurring(enabled.get_untracked(), &amount.get_untracked(), frequency.get_untracked()) {
            Ok(settings) => settings,
            Err(message) => {
                flash(notice, Notice::error(message));
                return;
            }
        };
        saving.set(true);
        let alive = alive.clone();
        spawn(async move {
            let result = api::save_recurring_donation(&settings, session.token_untracked().as_ref()).await;
            if !alive.is_alive() {
                return;
            }
            saving.set(false);
            match result {
                Ok(stored) => {
                    next_charge.set(stored.next_charge.filter(|_| settings.enabled));
                    flash(notice, Notice::success("Recurring donation settings saved"));
                }
                Err(e) => {
                    if !session.handle_api_error(&e) {
                        log::warn!("saving recurring settings failed: {e}");
                        flash(notice, Notice::error("Failed to save recurring settings"));
                    }
                }
            }
        });
    };

    view! {
        <section class="panel payment-settings">
            <header class="panel__header">
                <h3>"Recurring Donation"</h3>
            </header>
            <form class="payment-settings__form" on:submit=on_submit>
                <label class="field field--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || enabled.get()
                        on:change=move |ev| enabled.set(event_target_checked(&ev))
                    />
                    "Donate automatically"
                </label>
                <input
                    type="number"
                    min="1"
                    placeholder="Amount (ETB)"
                    prop:disabled=move || !enabled.get()
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
                <select
                    prop:disabled=move || !enabled.get()
                    prop:value=move || frequency.get().as_str()
                    on:change=move |ev| {
                        if let Some(f) = RecurringFrequency::parse(&event_target_value(&ev)) {
                            frequency.set(f);
                        }
                    }
                >
                    {RecurringFrequency::ALL
                        .into_iter()
                        .map(|f| view! { <option value=f.as_str()>{f.label()}</option> })
                        .collect_view()}
                </select>
                <button class="btn btn--primary" type="submit" prop:disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
            </form>
            {move || next_charge.get().map(|at| view! { <p class="muted">"Next charge: " {at}</p> })}
        </section>
    }
}

#[component]
fn NotificationPreferencesForm(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let alive = use_liveness();
    let prefs = RwSignal::new(NotificationPreferences::default());
    let saving = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = prefs.get_untracked();
        saving.set(true);
        let alive = alive.clone();
        spawn(async move {
            let result = api::save_notification_preferences(&current, session.token_untracked().as_ref()).await;
            if !alive.is_alive() {
                return;
            }
            saving.set(false);
            match result {
                Ok(()) => flash(notice, Notice::success("Notification preferences saved")),
                Err(e) => {
                    if !session.handle_api_error(&e) {
                        log::warn!("saving notification preferences failed: {e}");
                        flash(notice, Notice::error("Failed to save notification preferences"));
                    }
                }
            }
        });
    };

    view! {
        <section class="panel payment-settings">
            <header class="panel__header">
                <h3>"Notifications"</h3>
            </header>
            <form class="payment-settings__form payment-settings__form--stacked" on:submit=on_submit>
                {NotificationToggle::ALL
                    .into_iter()
                    .map(|toggle| {
                        view! {
                            <label class="field field--inline">
                                <input
                                    type="checkbox"
                                    prop:checked=move || prefs.with(|p| toggle.get(p))
                                    on:change=move |ev| {
                                        let on = event_target_checked(&ev);
                                        prefs.update(|p| toggle.set(p, on));
                                    }
                                />
                                {toggle.label()}
                            </label>
                        }
                    })
                    .collect_view()}
                <button class="btn btn--primary" type="submit" prop:disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save Preferences" }}
                </button>
            </form>
        </section>
    }
}
