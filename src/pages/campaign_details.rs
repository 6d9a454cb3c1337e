//! Single campaign view at `/campaign/:id`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::campaign_card::format_etb;
use crate::config::app_config;
use crate::net::api::{self, ApiError};
use crate::net::types::Campaign;
use crate::util::liveness::use_liveness;
use crate::util::task::spawn;

#[derive(Clone, Debug, PartialEq)]
enum Load {
    Loading,
    Found(Campaign),
    Missing,
}

#[component]
pub fn CampaignDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let alive = use_liveness();
    let state = RwSignal::new(Load::Loading);

    Effect::new(move || {
        let Some(id) = params.with(|p| p.get("id")) else {
            state.set(Load::Missing);
            return;
        };
        state.set(Load::Loading);
        let alive = alive.clone();
        spawn(async move {
            let result = api::fetch_campaign(&id).await;
            if !alive.is_alive() {
                return;
            }
            state.set(match result {
                Ok(campaign) => Load::Found(campaign),
                Err(e) => {
                    if !matches!(e, ApiError::Status { status: 404, .. }) {
                        log::warn!("loading campaign {id} failed: {e}");
                    }
                    Load::Missing
                }
            });
        });
    });

    move || match state.get() {
        Load::Loading => view! { <p class="page muted">"Loading..."</p> }.into_any(),
        Load::Missing => view! { <p class="page notice notice--error">"Campaign not found."</p> }.into_any(),
        Load::Found(campaign) => {
            let image = campaign.image_url.as_deref().map(|url| app_config().asset_url(url));
            let deadline = campaign.deadline_date().map(str::to_owned);
            let progress = format!("width: {:.0}%", campaign.progress_percent());
            view! {
                <article class="page campaign-details">
                    {image.map(|src| view! { <img class="campaign-details__image" src=src alt=campaign.title.clone()/> })}
                    <h1 class="page__title">{campaign.title.clone()}</h1>
                    <p>{campaign.description.clone()}</p>
                    <div class="progress">
                        <div class="progress__bar" style=progress></div>
                    </div>
                    <p><strong>"Raised: "</strong>{format_etb(campaign.raised_amount)}</p>
                    <p><strong>"Target: "</strong>{format_etb(campaign.target_amount)}</p>
                    {deadline.map(|d| view! { <p><strong>"Deadline: "</strong>{d}</p> })}
                    <button class="btn btn--primary" disabled=!campaign.is_active()>"Donate to this Campaign"</button>
                </article>
            }
                .into_any()
        }
    }
}
