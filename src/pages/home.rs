//! Landing page: hero, how-it-works and a teaser of active campaigns.

use leptos::prelude::*;

use crate::components::campaign_card::CampaignCard;
use crate::net::types::Campaign;
use crate::pages::campaigns::load_active_campaigns;

const TEASER_LEN: usize = 3;

const STEPS: [(&str, &str); 3] = [
    ("Find a cause", "Browse verified NGO profiles with real stories and photos."),
    ("Donate", "Choose your amount and payment method (TeleBirr, CBE, etc.)."),
    ("Track impact", "See exactly how your donation is used."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let campaigns = RwSignal::new(Vec::<Campaign>::new());
    let loading = RwSignal::new(true);
    load_active_campaigns(campaigns, loading);

    view! {
        <section class="hero">
            <h1 class="hero__title">"Support Verified NGOs in Ethiopia"</h1>
            <p class="hero__lead">"Give with confidence and follow your impact."</p>
            <div class="hero__actions">
                <a class="btn btn--primary" href="/register">"Get Started"</a>
                <a class="btn" href="/ngos">"Explore NGOs"</a>
            </div>
        </section>
        <section class="page steps">
            {STEPS
                .into_iter()
                .map(|(title, text)| view! { <div class="steps__item"><h3>{title}</h3><p>{text}</p></div> })
                .collect_view()}
        </section>
        <section class="page">
            <h2 class="page__title">"Active Campaigns"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <p class="muted">"Loading campaigns..."</p> }>
                <div class="card-grid">
                    {move || {
                        campaigns
                            .get()
                            .into_iter()
                            .take(TEASER_LEN)
                            .map(|campaign| view! { <CampaignCard campaign=campaign/> })
                            .collect_view()
                    }}
                </div>
                <a class="btn btn--link" href="/campaigns">"See all campaigns"</a>
            </Show>
        </section>
    }
}
