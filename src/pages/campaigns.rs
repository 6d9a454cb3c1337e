//! Public index of active campaigns.

use leptos::prelude::*;

use crate::components::campaign_card::CampaignCard;
use crate::net::api;
use crate::net::types::Campaign;
use crate::pages::my_campaigns::StatusFilter;
use crate::util::liveness::use_liveness;
use crate::util::task::spawn;

/// Fetch all campaigns into `target`, keeping only active ones.
/// Failures leave the list empty.
pub(crate) fn load_active_campaigns(target: RwSignal<Vec<Campaign>>, loading: RwSignal<bool>) {
    let alive = use_liveness();
    spawn(async move {
        let result = api::fetch_campaigns().await;
        if !alive.is_alive() {
            return;
        }
        match result {
            Ok(all) => target.set(StatusFilter::Active.apply(&all)),
            Err(e) => log::warn!("loading campaigns failed: {e}"),
        }
        loading.set(false);
    });
}

#[component]
pub fn CampaignsPage() -> impl IntoView {
    let campaigns = RwSignal::new(Vec::<Campaign>::new());
    let loading = RwSignal::new(true);
    load_active_campaigns(campaigns, loading);

    view! {
        <section class="page">
            <h2 class="page__title">"All Active Campaigns"</h2>
            {move || {
                if loading.get() {
                    return view! { <p class="muted">"Loading campaigns..."</p> }.into_any();
                }
                let list = campaigns.get();
                if list.is_empty() {
                    return view! { <p class="muted">"No active campaigns yet."</p> }.into_any();
                }
                view! {
                    <div class="card-grid">
                        {list.into_iter().map(|campaign| view! { <CampaignCard campaign=campaign/> }).collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </section>
    }
}
