//! NGO dashboard: profile overview, statistics and received donations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Statistics and donations are only fetched once the profile is complete
//! (see `Ngo::is_profile_complete`). Donations show the most recent
//! [`RECENT_WINDOW`] until expanded; the full list can be exported as CSV.
//!
//! The owning NGO can edit its text profile here. An incomplete profile opens
//! the editor straight away, and a save that completes it loads the
//! statistics without a reload.

#[cfg(test)]
#[path = "ngo_dashboard_test.rs"]
mod ngo_dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use session::{Role, Token, User};

use crate::components::campaign_card::format_etb;
use crate::components::notice_banner::NoticeBanner;
use crate::components::ngo_profile_form::NgoProfileForm;
use crate::config::app_config;
use crate::net::api;
use crate::net::types::{Donation, Ngo, NgoProfileUpdate, NgoStatistics};
use crate::state::session::SessionContext;
use crate::util::browser::download_csv;
use crate::util::liveness::{Liveness, use_liveness};
use crate::util::notice::{Notice, flash};
use crate::util::task::spawn;

pub(crate) const RECENT_WINDOW: usize = 5;
pub(crate) const CSV_HEADER: &str = "Donor,Amount (ETB),Campaign,Date";
const CSV_FILE_NAME: &str = "donations.csv";

pub(crate) fn visible_donations(all: &[Donation], expanded: bool) -> &[Donation] {
    if expanded { all } else { &all[..all.len().min(RECENT_WINDOW)] }
}

/// Label of the expand/collapse control; `None` when everything already fits.
pub(crate) fn toggle_label(total: usize, expanded: bool) -> Option<String> {
    if total <= RECENT_WINDOW {
        None
    } else if expanded {
        Some("Show less".to_owned())
    } else {
        Some(format!("Show all {total} donations"))
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

pub(crate) fn donations_csv(donations: &[Donation]) -> String {
    let mut lines = Vec::with_capacity(donations.len() + 1);
    lines.push(CSV_HEADER.to_owned());
    for d in donations {
        let row = [csv_field(d.donor_name()), d.amount.to_string(), csv_field(d.campaign_title()), csv_field(d.date())];
        lines.push(row.join(","));
    }
    lines.join("\n")
}

/// Only the NGO account the dashboard belongs to may edit it.
pub(crate) fn can_edit(user: Option<&User>, ngo_id: &str) -> bool {
    user.is_some_and(|u| u.role() == Role::Ngo && u.id() == ngo_id)
}

#[derive(Clone, Copy)]
struct Insights {
    stats: RwSignal<Option<NgoStatistics>>,
    donations: RwSignal<Vec<Donation>>,
    loading: RwSignal<bool>,
}

async fn load_insights(id: String, token: Option<Token>, session: SessionContext, alive: Liveness, into: Insights) {
    match api::fetch_ngo_statistics(&id, token.as_ref()).await {
        Ok(loaded) if alive.is_alive() => into.stats.set(Some(loaded)),
        Ok(_) => return,
        Err(e) => log::warn!("loading statistics for {id} failed: {e}"),
    }
    let result = api::fetch_ngo_donations(&id, token.as_ref()).await;
    if !alive.is_alive() {
        return;
    }
    match result {
        Ok(list) => into.donations.set(list),
        Err(e) => {
            if !session.handle_api_error(&e) {
                log::warn!("loading donations for {id} failed: {e}");
            }
        }
    }
    into.loading.set(false);
}

#[component]
pub fn NgoDashboardPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let params = use_params_map();
    let alive = use_liveness();

    let ngo = RwSignal::new(None::<Ngo>);
    let error = RwSignal::new(String::new());
    let stats = RwSignal::new(None::<NgoStatistics>);
    let donations = RwSignal::new(Vec::<Donation>::new());
    let donations_loading = RwSignal::new(true);
    let expanded = RwSignal::new(false);
    let editing = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);
    let insights = Insights { stats, donations, loading: donations_loading };
    let save_alive = alive.clone();

    Effect::new(move || {
        let Some(id) = params.with(|p| p.get("id")) else {
            error.set("Missing NGO id in URL".to_owned());
            return;
        };
        let alive = alive.clone();
        spawn(async move {
            let token = session.token_untracked();
            let profile = match api::fetch_ngo(&id, token.as_ref()).await {
                Ok(profile) => profile,
                Err(e) => {
                    if alive.is_alive() && !session.handle_api_error(&e) {
                        log::warn!("loading NGO {id} failed: {e}");
                        error.set(e.user_message());
                    }
                    return;
                }
            };
            if !alive.is_alive() {
                return;
            }
            let complete = profile.is_profile_complete();
            editing.set(!complete && can_edit(session.user_untracked().as_ref(), &profile.id));
            ngo.set(Some(profile));
            if complete {
                load_insights(id, token, session, alive, insights).await;
            }
        });
    });

    let on_saved = {
        let alive = save_alive;
        Callback::new(move |update: NgoProfileUpdate| {
            let mut became_complete = false;
            ngo.update(|current| {
                if let Some(current) = current {
                    let was_complete = current.is_profile_complete();
                    update.apply_to(current);
                    became_complete = !was_complete && current.is_profile_complete();
                }
            });
            editing.set(false);
            flash(notice, Notice::success("Profile updated successfully!"));
            if became_complete {
                if let Some(id) = ngo.with_untracked(|n| n.as_ref().map(|n| n.id.clone())) {
                    spawn(load_insights(id, session.token_untracked(), session, alive.clone(), insights));
                }
            }
        })
    };

    let editable = move || ngo.with(|n| n.as_ref().is_some_and(|n| can_edit(session.user().as_ref(), &n.id)));

    let editor = move || {
        if !editing.get() {
            return None;
        }
        let current = ngo.get_untracked()?;
        Some(view! { <NgoProfileForm ngo=current on_saved=on_saved/> })
    };

    let complete = move || ngo.with(|n| n.as_ref().is_some_and(Ngo::is_profile_complete));

    let profile_panel = move || {
        ngo.get().map(|n| {
            let logo = n.logo_url.as_deref().map(|url| app_config().asset_url(url));
            let verified = n.verified;
            view! {
                <section class="panel ngo-profile">
                    {logo.map(|src| view! { <img class="avatar avatar--large" src=src alt="NGO logo"/> })}
                    <div>
                        <h2>{n.name.clone()}</h2>
                        <span class="badge" class:badge--active=verified>
                            {if verified { "Verified" } else { "Verification pending" }}
                        </span>
                        <p>{n.description.clone()}</p>
                        <p class="muted">{n.phone.clone()} " · " {n.address.clone()}</p>
                    </div>
                    <div class="field__row">
                        <Show when=editable>
                            <button class="btn" on:click=move |_| editing.update(|e| *e = !*e)>
                                {move || if editing.get() { "Close Editor" } else { "Edit Profile" }}
                            </button>
                        </Show>
                        <a class="btn" href="/my-campaigns">"My Campaigns"</a>
                    </div>
                </section>
            }
        })
    };

    let stats_panel = move || {
        stats.get().map(|s| {
            view! {
                <section class="panel stats">
                    <div class="stats__item"><span>"Total Donations"</span><b>{format_etb(s.total_donations)}</b></div>
                    <div class="stats__item"><span>"Donors"</span><b>{s.donor_count}</b></div>
                    <div class="stats__item"><span>"Campaigns"</span><b>{s.campaign_count}</b></div>
                    <div class="stats__item"><span>"Average Donation"</span><b>{format_etb(s.average_donation)}</b></div>
                    {s.top_campaign.map(|top| view! {
                        <div class="stats__item"><span>"Top Campaign"</span><b>{top.title} " (" {format_etb(top.amount)} ")"</b></div>
                    })}
                </section>
            }
        })
    };

    let donations_panel = move || {
        if donations_loading.get() {
            return view! { <p class="muted">"Loading donations..."</p> }.into_any();
        }
        let all = donations.get();
        if all.is_empty() {
            return view! { <p class="muted">"No donations yet."</p> }.into_any();
        }
        let is_expanded = expanded.get();
        let rows = visible_donations(&all, is_expanded)
            .iter()
            .map(|d| {
                view! {
                    <tr>
                        <td>{d.donor_name().to_owned()}</td>
                        <td>{d.amount}</td>
                        <td>{d.campaign_title().to_owned()}</td>
                        <td>{d.date().to_owned()}</td>
                    </tr>
                }
            })
            .collect_view();
        let toggle = toggle_label(all.len(), is_expanded).map(|label| {
            view! { <button class="btn btn--link" on:click=move |_| expanded.update(|e| *e = !*e)>{label}</button> }
        });
        let export = is_expanded.then(|| {
            let csv = donations_csv(&all);
            view! {
                <button class="btn btn--primary" on:click=move |_| download_csv(CSV_FILE_NAME, &csv)>"Export to CSV"</button>
            }
        });
        view! {
            <table class="table">
                <thead>
                    <tr><th>"Donor"</th><th>"Amount (ETB)"</th><th>"Campaign"</th><th>"Date"</th></tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <div class="table__actions">{toggle} {export}</div>
        }
            .into_any()
    };

    view! {
        <div class="page dashboard">
            <Show when=move || !error.get().is_empty()>
                <p class="notice notice--error">{move || error.get()}</p>
            </Show>
            <NoticeBanner notice=notice/>
            {profile_panel}
            {editor}
            <Show
                when=complete
                fallback=move || {
                    view! {
                        <Show when=move || ngo.with(Option::is_some)>
                            <p class="notice notice--info">
                                "Complete your profile (description, phone, address, bank account, logo and featured image) to see statistics and donations."
                            </p>
                        </Show>
                    }
                }
            >
                {stats_panel}
                <section class="panel">
                    <h3>"All Donations"</h3>
                    {donations_panel}
                </section>
            </Show>
        </div>
    }
}
