use super::*;

#[test]
fn pending_neither_redirects_nor_renders() {
    assert!(redirect_for(AccessDecision::Pending).is_none());
    assert!(!AccessDecision::Pending.renders_content());
}

#[test]
fn logged_out_replaces_history_with_login() {
    let (target, options) = redirect_for(AccessDecision::RedirectToLogin).expect("redirect");
    assert_eq!(target, "/login");
    assert!(options.replace);
}

#[test]
fn allowed_stays_put() {
    assert!(redirect_for(AccessDecision::Allow).is_none());
}

#[test]
fn placeholders_cover_everything_but_allow() {
    assert_eq!(placeholder(AccessDecision::Pending), Some("Loading..."));
    assert_eq!(placeholder(AccessDecision::RedirectToLogin), Some("Redirecting to login..."));
    assert_eq!(placeholder(AccessDecision::Allow), None);
}

#[cfg(not(feature = "csr"))]
mod with_session {
    use std::cell::RefCell;

    use leptos::reactive::owner::Owner;
    use session::{DonorProfile, MemoryStorage, SessionStore, User};

    use super::super::{follow, placeholder};
    use crate::state::session::SessionContext;

    fn recorded_navigation(ctx: SessionContext) -> Vec<(String, bool)> {
        let calls = RefCell::new(Vec::new());
        follow(ctx.access(), |target: &str, options: leptos_router::NavigateOptions| {
            calls.borrow_mut().push((target.to_owned(), options.replace));
        });
        calls.into_inner()
    }

    #[test]
    fn hydrating_session_shows_placeholder_without_navigating() {
        let owner = Owner::new();
        owner.set();
        let ctx = SessionContext::new(SessionStore::new(MemoryStorage::new()));
        assert_eq!(placeholder(ctx.access()), Some("Loading..."));
        assert!(recorded_navigation(ctx).is_empty());
    }

    #[test]
    fn ready_logged_out_session_replaces_to_login() {
        let owner = Owner::new();
        owner.set();
        let mut store = SessionStore::new(MemoryStorage::new());
        store.initialize();
        let ctx = SessionContext::new(store);
        assert_eq!(recorded_navigation(ctx), vec![("/login".to_owned(), true)]);
    }

    #[test]
    fn logged_in_session_renders_page_in_place() {
        let owner = Owner::new();
        owner.set();
        let mut store = SessionStore::new(MemoryStorage::new());
        store.initialize();
        let ctx = SessionContext::new(store);
        let donor = User::Donor(DonorProfile {
            id: "d1".to_owned(),
            name: "Abebe".to_owned(),
            email: "abebe@example.et".to_owned(),
            photo_url: None,
        });
        ctx.login(donor, "tok").expect("login");
        assert_eq!(placeholder(ctx.access()), None);
        assert!(recorded_navigation(ctx).is_empty());
    }
}
