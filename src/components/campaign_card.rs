//! Card for a campaign in lists (home teaser, campaign index, NGO's own list).

#[cfg(test)]
#[path = "campaign_card_test.rs"]
mod campaign_card_test;

use leptos::prelude::*;

use crate::config::app_config;
use crate::net::types::Campaign;

/// Whole-birr amount with thousands separators, e.g. `12,500 ETB`.
pub fn format_etb(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = amount.max(0.0).round() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{grouped} ETB")
}

#[component]
pub fn CampaignCard(campaign: Campaign, #[prop(optional)] show_status: bool) -> impl IntoView {
    let href = format!("/campaign/{}", campaign.id);
    let progress = format!("width: {:.0}%", campaign.progress_percent());
    let image = campaign.image_url.as_deref().map(|url| app_config().asset_url(url));
    let title = campaign.title.clone();
    let status = campaign.status.clone();
    let active = campaign.is_active();

    view! {
        <article class="campaign-card">
            {image.map(|src| view! { <img class="campaign-card__image" src=src alt=title.clone()/> })}
            <div class="campaign-card__body">
                <h3 class="campaign-card__title">{campaign.title}</h3>
                <Show when=move || show_status>
                    <span class="badge" class:badge--active=active>{status.clone()}</span>
                </Show>
                <p class="campaign-card__description">{campaign.description}</p>
                <div class="progress">
                    <div class="progress__bar" style=progress></div>
                </div>
                <p class="campaign-card__amounts">
                    {format_etb(campaign.raised_amount)}
                    " raised of "
                    {format_etb(campaign.target_amount)}
                </p>
                <a class="btn btn--primary campaign-card__cta" href=href>"Donate"</a>
            </div>
        </article>
    }
}
