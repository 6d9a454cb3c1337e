//! Directory of partner NGOs.
//!
//! The list is curated and ships with the bundle; it is not fetched.

use leptos::prelude::*;

pub struct FeaturedNgo {
    pub name: &'static str,
    pub description: &'static str,
}

pub const FEATURED_NGOS: [FeaturedNgo; 3] = [
    FeaturedNgo {
        name: "Macedonia Humanitarian Association",
        description: "Supporting homeless and vulnerable communities in Addis Ababa.",
    },
    FeaturedNgo {
        name: "Organization for Women in Self Employment (WISE)",
        description: "Empowering women through training and microfinance initiatives.",
    },
    FeaturedNgo {
        name: "Hope for Children Organization",
        description: "Improving child welfare through education and health programs.",
    },
];

#[component]
pub fn NgosPage() -> impl IntoView {
    view! {
        <section class="page">
            <h1 class="page__title">"Available NGOs for Donation"</h1>
            <div class="card-grid">
                {FEATURED_NGOS
                    .iter()
                    .map(|ngo| {
                        view! {
                            <article class="ngo-card">
                                <h2 class="ngo-card__name">{ngo.name}</h2>
                                <p class="ngo-card__description">{ngo.description}</p>
                                <a class="btn btn--primary" href="/campaigns">"See campaigns"</a>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
