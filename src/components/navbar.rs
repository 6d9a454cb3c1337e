//! Top navigation bar.
//!
//! Public links are always shown. Logged out adds Login/Register; logged in
//! adds the role's dashboard, its account page and Logout.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use session::{LOGIN_ROUTE, Role, User};

use crate::config::app_config;
use crate::state::session::SessionContext;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NavLink {
    pub href: String,
    pub label: &'static str,
}

impl NavLink {
    fn new(href: impl Into<String>, label: &'static str) -> Self {
        Self { href: href.into(), label }
    }
}

pub(crate) fn nav_links(user: Option<&User>) -> Vec<NavLink> {
    let mut links = vec![NavLink::new("/", "Home"), NavLink::new("/campaigns", "Campaigns"), NavLink::new("/ngos", "NGOs")];
    match user {
        None => {
            links.push(NavLink::new(LOGIN_ROUTE, "Login"));
            links.push(NavLink::new("/register", "Register"));
        }
        Some(user) => {
            links.push(NavLink::new(user.dashboard_path(), "Dashboard"));
            match user.role() {
                Role::Donor => links.push(NavLink::new("/profile", "Profile")),
                Role::Ngo => links.push(NavLink::new("/my-campaigns", "My Campaigns")),
            }
        }
    }
    links
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let location = use_location();

    let on_logout = move |_| {
        session.logout();
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    let links = move || {
        let pathname = location.pathname.get();
        nav_links(session.user().as_ref())
            .into_iter()
            .map(|link| {
                let active = link.href == pathname;
                view! {
                    <a href=link.href class="navbar__link" class:navbar__link--active=active>
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };

    let avatar = move || {
        session.user().map(|user| {
            let name = user.name().to_owned();
            match user.avatar_url() {
                Some(url) => {
                    view! { <img class="navbar__avatar" src=app_config().asset_url(url) alt=name.clone() title=name/> }
                        .into_any()
                }
                None => view! { <span class="navbar__avatar navbar__avatar--initials" title=name.clone()>{initial(&name)}</span> }
                    .into_any(),
            }
        })
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">"Bright Ethiopia"</a>
            <div class="navbar__links">
                {links}
                {avatar}
                <Show when=move || session.is_logged_in()>
                    <button class="btn navbar__logout" on:click=on_logout.clone()>"Logout"</button>
                </Show>
            </div>
        </nav>
    }
}

fn initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_else(|| "?".to_owned())
}
