//! Inline editor for a campaign's title, description, target and deadline.
//!
//! Saves through `PATCH /api/campaign/{id}` as multipart form data with
//! text parts only; the campaign image is kept.

#[cfg(test)]
#[path = "campaign_edit_form_test.rs"]
mod campaign_edit_form_test;

use leptos::prelude::*;

use crate::components::notice_banner::NoticeBanner;
use crate::net::api;
use crate::net::types::{Campaign, CampaignUpdate};
use crate::pages::form::is_blank;
use crate::state::session::SessionContext;
use crate::util::liveness::use_liveness;
use crate::util::notice::{Notice, flash};
use crate::util::task::spawn;

pub(crate) const MIN_TARGET_ETB: f64 = 1.0;

/// `YYYY-MM-DD` with plausible month and day.
pub(crate) fn is_iso_date(raw: &str) -> bool {
    let parts: Vec<&str> = raw.split('-').collect();
    let &[year, month, day] = parts.as_slice() else {
        return false;
    };
    let digits = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());
    if !(digits(year, 4) && digits(month, 2) && digits(day, 2)) {
        return false;
    }
    matches!(month.parse::<u8>(), Ok(1..=12)) && matches!(day.parse::<u8>(), Ok(1..=31))
}

pub(crate) fn validate_campaign_update(
    title: &str,
    description: &str,
    target: &str,
    deadline: &str,
) -> Result<CampaignUpdate, &'static str> {
    if is_blank(title) || is_blank(description) {
        return Err("Please fill in the title and description");
    }
    let target_amount = match target.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= MIN_TARGET_ETB => amount,
        _ => return Err("Target amount must be at least 1 ETB"),
    };
    let deadline = deadline.trim();
    if !is_iso_date(deadline) {
        return Err("Please choose a deadline");
    }
    Ok(CampaignUpdate {
        title: title.trim().to_owned(),
        description: description.trim().to_owned(),
        target_amount,
        deadline: deadline.to_owned(),
    })
}

#[component]
pub fn CampaignEditForm(
    campaign: Campaign,
    #[prop(into)] on_saved: Callback<(String, CampaignUpdate)>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let alive = use_liveness();
    let notice = RwSignal::new(None::<Notice>);
    let saving = RwSignal::new(false);

    let title = RwSignal::new(campaign.title.clone());
    let description = RwSignal::new(campaign.description.clone());
    let target = RwSignal::new(campaign.target_amount.to_string());
    let deadline = RwSignal::new(campaign.deadline_date().unwrap_or_default().to_owned());
    let campaign_id = campaign.id.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let update = match validate_campaign_update(
            &title.get_untracked(),
            &description.get_untracked(),
            &target.get_untracked(),
            &deadline.get_untracked(),
        ) {
            Ok(update) => update,
            Err(message) => {
                flash(notice, Notice::error(message));
                return;
            }
        };
        saving.set(true);
        let alive = alive.clone();
        let id = campaign_id.clone();
        spawn(async move {
            let result = api::update_campaign(&id, &update, session.token_untracked().as_ref()).await;
            if !alive.is_alive() {
                return;
            }
            saving.set(false);
            match result {
                Ok(()) => on_saved.run((id, update)),
                Err(e) => {
                    if !session.handle_api_error(&e) {
                        log::warn!("updating campaign {id} failed: {e}");
                        flash(notice, Notice::error(e.user_message()));
                    }
                }
            }
        });
    };

    view! {
        <form class="panel form campaign-edit" on:submit=on_submit>
            <h3>"Edit Campaign"</h3>
            <NoticeBanner notice=notice/>
            <label class="field">
                <span>"Title"</span>
                <input type="text" prop:value=move || title.get() on:input=move |ev| title.set(event_target_value(&ev))/>
            </label>
            <label class="field">
                <span>"Description"</span>
                <textarea
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="field">
                <span>"Target Amount (ETB)"</span>
                <input
                    type="number"
                    min="1"
                    prop:value=move || target.get()
                    on:input=move |ev| target.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"Deadline"</span>
                <input type="date" prop:value=move || deadline.get() on:input=move |ev| deadline.set(event_target_value(&ev))/>
            </label>
            <div class="field__row">
                <button class="btn" type="button" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                </button>
            </div>
        </form>
    }
}
