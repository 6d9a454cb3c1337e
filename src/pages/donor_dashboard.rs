//! Donor dashboard: giving summary, saved campaigns and payment settings.
//!
//! The summary is always loaded for the signed-in donor; the `:id` route
//! segment only mirrors it for bookmarking.

#[cfg(test)]
#[path = "donor_dashboard_test.rs"]
mod donor_dashboard_test;

use leptos::prelude::*;

use crate::components::campaign_card::format_etb;
use crate::components::payment_settings::PaymentSettings;
use crate::config::app_config;
use crate::net::api;
use crate::net::types::DonorSummary;
use crate::state::session::SessionContext;
use crate::util::liveness::use_liveness;
use crate::util::task::spawn;

/// Up to two uppercase initials, e.g. `"abebe kebede"` gives `"AK"`.
pub(crate) fn initials(name: &str) -> String {
    let letters: String = name.split_whitespace().filter_map(|word| word.chars().next()).take(2).collect();
    if letters.is_empty() { "?".to_owned() } else { letters.to_uppercase() }
}

fn avatar(photo: Option<String>, name: &str) -> AnyView {
    match photo {
        Some(src) => view! { <img class="avatar avatar--large" src=src alt=name.to_owned()/> }.into_any(),
        None => view! { <div class="avatar avatar--large avatar--initials">{initials(name)}</div> }.into_any(),
    }
}

#[component]
pub fn DonorDashboardPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let alive = use_liveness();
    let summary = RwSignal::new(DonorSummary::default());
    let loading = RwSignal::new(true);

    let user = session.user_untracked();
    let donor_name = user.as_ref().map_or_else(|| "Donor".to_owned(), |u| u.name().to_owned());
    let photo = user.as_ref().and_then(|u| u.avatar_url()).map(|url| app_config().asset_url(url));

    if let Some(user) = user {
        let donor_id = user.id().to_owned();
        spawn(async move {
            let result = api::fetch_donor_summary(&donor_id, session.token_untracked().as_ref()).await;
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(loaded) => summary.set(loaded),
                Err(e) => {
                    if !session.handle_api_error(&e) {
                        log::warn!("loading donor summary failed: {e}");
                    }
                }
            }
            loading.set(false);
        });
    }

    let is_new = move || summary.with(DonorSummary::is_new_donor);

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <p class="page muted">"Loading your dashboard..."</p> }>
            <div class="page dashboard">
                <section class="panel dashboard__welcome">
                    {avatar(photo.clone(), &donor_name)}
                    <div>
                        <h2>"Welcome, " {donor_name.clone()}</h2>
                        <Show
                            when=move || !is_new()
                            fallback=|| view! { <p class="muted">"You haven't donated yet. Start by exploring campaigns."</p> }
                        >
                            <p class="dashboard__stats">
                                <span>"Total Donated: " <b>{move || format_etb(summary.get().total_donated)}</b></span>
                                <span>"Campaigns Supported: " <b>{move || summary.get().campaigns_supported}</b></span>
                                <span>"Impact: " <b>{move || summary.get().impact}</b></span>
                            </p>
                        </Show>
                    </div>
                    <a class="btn" href="/profile">"Edit Profile"</a>
                </section>
                <section class="panel">
                    <h3>"Saved Campaigns"</h3>
                    {move || {
                        let saved = summary.get().saved_campaigns;
                        if saved.is_empty() {
                            view! { <p class="muted">"Bookmark campaigns you care about to find them here."</p> }.into_any()
                        } else {
                            view! {
                                <ul>
                                    {saved
                                        .into_iter()
                                        .map(|c| view! { <li><a href=format!("/campaign/{}", c.id)>{c.title}</a></li> })
                                        .collect_view()}
                                </ul>
                            }
                                .into_any()
                        }
                    }}
                </section>
                <section class="panel">
                    <h3>"Explore"</h3>
                    <a class="btn btn--primary" href="/campaigns">"Browse active campaigns"</a>
                </section>
                <PaymentSettings/>
            </div>
        </Show>
    }
}
