//! Inline banner for the current [`Notice`].

use leptos::prelude::*;

use crate::util::notice::Notice;

#[component]
pub fn NoticeBanner(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            let class = n.css_class();
            view! { <p class=class role="status">{n.text}</p> }
        })
    }
}
