//! Editable text fields of an NGO profile.
//!
//! Saves through `PATCH /api/ngo/update/{id}` as multipart form data with
//! text parts only. Logo and featured image are shown for reference but not
//! replaced from here.

#[cfg(test)]
#[path = "ngo_profile_form_test.rs"]
mod ngo_profile_form_test;

use leptos::prelude::*;

use crate::components::notice_banner::NoticeBanner;
use crate::net::api;
use crate::net::types::{Ngo, NgoProfileUpdate};
use crate::pages::form::is_blank;
use crate::state::session::SessionContext;
use crate::util::liveness::use_liveness;
use crate::util::notice::{Notice, flash};
use crate::util::task::spawn;

/// Trim every field; the name is mandatory.
pub(crate) fn validate_ngo_update(draft: &NgoProfileUpdate) -> Result<NgoProfileUpdate, &'static str> {
    if is_blank(&draft.name) {
        return Err("NGO name is required");
    }
    let trim = |value: &String| value.trim().to_owned();
    Ok(NgoProfileUpdate {
        name: trim(&draft.name),
        description: trim(&draft.description),
        story: trim(&draft.story),
        phone: trim(&draft.phone),
        address: trim(&draft.address),
        website: trim(&draft.website),
        social: trim(&draft.social),
        bank_account: trim(&draft.bank_account),
    })
}

/// One labelled text input bound to a field of the draft.
fn text_field(
    draft: RwSignal<NgoProfileUpdate>,
    label: &'static str,
    placeholder: &'static str,
    get: fn(&NgoProfileUpdate) -> &String,
    set: fn(&mut NgoProfileUpdate) -> &mut String,
) -> impl IntoView {
    view! {
        <label class="field">
            <span>{label}</span>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || draft.with(|d| get(d).clone())
                on:input=move |ev| draft.update(|d| *set(d) = event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn NgoProfileForm(ngo: Ngo, #[prop(into)] on_saved: Callback<NgoProfileUpdate>) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let alive = use_liveness();
    let notice = RwSignal::new(None::<Notice>);
    let saving = RwSignal::new(false);
    let draft = RwSignal::new(NgoProfileUpdate::from_ngo(&ngo));
    let ngo_id = ngo.id.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let update = match draft.with_untracked(validate_ngo_update) {
            Ok(update) => update,
            Err(message) => {
                flash(notice, Notice::error(message));
                return;
            }
        };
        saving.set(true);
        let alive = alive.clone();
        let id = ngo_id.clone();
        spawn(async move {
            let result = api::update_ngo_profile(&id, &update, session.token_untracked().as_ref()).await;
            if !alive.is_alive() {
                return;
            }
            saving.set(false);
            match result {
                Ok(()) => on_saved.run(update),
                Err(e) => {
                    if !session.handle_api_error(&e) {
                        log::warn!("updating NGO {id} failed: {e}");
                        flash(notice, Notice::error(e.user_message()));
                    }
                }
            }
        });
    };

    view! {
        <form class="panel form" on:submit=on_submit>
            <h3>"Edit Profile"</h3>
            <NoticeBanner notice=notice/>
            {text_field(draft, "NGO Name", "", |d| &d.name, |d| &mut d.name)}
            {text_field(draft, "Description", "", |d| &d.description, |d| &mut d.description)}
            <label class="field">
                <span>"Story"</span>
                <textarea
                    prop:value=move || draft.with(|d| d.story.clone())
                    on:input=move |ev| draft.update(|d| d.story = event_target_value(&ev))
                ></textarea>
            </label>
            {text_field(draft, "Phone", "", |d| &d.phone, |d| &mut d.phone)}
            {text_field(draft, "Address", "", |d| &d.address, |d| &mut d.address)}
            {text_field(draft, "Website", "https://yourngo.org", |d| &d.website, |d| &mut d.website)}
            {text_field(draft, "Social", "Facebook, Telegram, ...", |d| &d.social, |d| &mut d.social)}
            {text_field(draft, "Bank Account", "Bank name, account number, etc.", |d| &d.bank_account, |d| &mut d.bank_account)}
            <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Update Profile" }}
            </button>
        </form>
    }
}
