use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page page--centered">
            <h1 class="page__title">"Page not found"</h1>
            <a class="btn btn--primary" href="/">"Back to home"</a>
        </section>
    }
}
