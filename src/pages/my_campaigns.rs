//! The signed-in NGO's own campaigns with an all/active/completed filter.
//! Each card can be opened in an inline editor.

#[cfg(test)]
#[path = "my_campaigns_test.rs"]
mod my_campaigns_test;

use leptos::prelude::*;

use crate::components::campaign_card::CampaignCard;
use crate::components::campaign_edit_form::CampaignEditForm;
use crate::components::notice_banner::NoticeBanner;
use crate::net::api;
use crate::net::types::{Campaign, CampaignUpdate, STATUS_ACTIVE, STATUS_COMPLETED};
use crate::state::session::SessionContext;
use crate::util::liveness::use_liveness;
use crate::util::notice::{Notice, flash};
use crate::util::task::spawn;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    pub fn matches(self, campaign: &Campaign) -> bool {
        match self {
            Self::All => true,
            Self::Active => campaign.status == STATUS_ACTIVE,
            Self::Completed => campaign.status == STATUS_COMPLETED,
        }
    }

    pub fn apply(self, campaigns: &[Campaign]) -> Vec<Campaign> {
        campaigns.iter().filter(|c| self.matches(c)).cloned().collect()
    }
}

/// Apply a saved edit to the matching campaign. Returns whether one matched.
pub(crate) fn apply_campaign_update(campaigns: &mut [Campaign], id: &str, update: &CampaignUpdate) -> bool {
    match campaigns.iter_mut().find(|c| c.id == id) {
        Some(campaign) => {
            update.apply_to(campaign);
            true
        }
        None => false,
    }
}

#[component]
pub fn MyCampaignsPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let alive = use_liveness();
    let campaigns = RwSignal::new(Vec::<Campaign>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let filter = RwSignal::new(StatusFilter::All);
    let editing = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<Notice>);

    let on_saved = Callback::new(move |(id, update): (String, CampaignUpdate)| {
        campaigns.update(|list| {
            apply_campaign_update(list, &id, &update);
        });
        editing.set(None);
        flash(notice, Notice::success("Campaign updated!"));
    });

    if let Some(user) = session.user_untracked() {
        let ngo_id = user.id().to_owned();
        spawn(async move {
            let result = api::fetch_ngo_campaigns(&ngo_id, session.token_untracked().as_ref()).await;
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(list) => campaigns.set(list),
                Err(e) => {
                    if !session.handle_api_error(&e) {
                        log::warn!("loading campaigns for {ngo_id} failed: {e}");
                        error.set(e.user_message());
                    }
                }
            }
            loading.set(false);
        });
    }

    let visible = move || campaigns.with(|list| filter.get().apply(list));

    let editor = move || {
        let id = editing.get()?;
        let campaign = campaigns.with_untracked(|list| list.iter().find(|c| c.id == id).cloned())?;
        Some(view! { <CampaignEditForm campaign=campaign on_saved=on_saved on_cancel=move |()| editing.set(None)/> })
    };

    view! {
        <section class="page">
            <header class="page__header">
                <h2 class="page__title">"My Campaigns"</h2>
            </header>
            <div class="filter-tabs">
                {StatusFilter::ALL
                    .into_iter()
                    .map(|f| {
                        view! {
                            <button
                                class="filter-tabs__tab"
                                class:filter-tabs__tab--active=move || filter.get() == f
                                on:click=move |_| filter.set(f)
                            >
                                {f.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <NoticeBanner notice=notice/>
            <Show when=move || !error.get().is_empty()>
                <p class="notice notice--error">{move || error.get()}</p>
            </Show>
            {editor}
            {move || {
                if loading.get() {
                    return view! { <p class="muted">"Loading campaigns..."</p> }.into_any();
                }
                let list = visible();
                if list.is_empty() {
                    return view! { <p class="muted">"No campaigns found."</p> }.into_any();
                }
                view! {
                    <div class="card-grid">
                        {list
                            .into_iter()
                            .map(|campaign| {
                                let id = campaign.id.clone();
                                view! {
                                    <div class="campaign-tile">
                                        <CampaignCard campaign=campaign show_status=true/>
                                        <button class="btn btn--link" on:click=move |_| editing.set(Some(id.clone()))>
                                            "Edit"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </section>
    }
}
