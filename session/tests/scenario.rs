//! End-to-end session lifecycle through the public API: start, login,
//! reload, logout, reload.

use session::{AccessDecision, DonorProfile, MemoryStorage, SessionStore, Storage, TOKEN_KEY, USER_KEY, User};

fn sample_donor() -> User {
    User::Donor(DonorProfile {
        id: "1".to_owned(),
        name: "A".to_owned(),
        email: "a@x.com".to_owned(),
        photo_url: None,
    })
}

#[test]
fn login_reload_logout_lifecycle() {
    // Process start on empty storage.
    let mut store = SessionStore::new(MemoryStorage::new());
    assert_eq!(store.access(), AccessDecision::Pending);
    store.initialize();
    let snapshot = store.snapshot();
    assert!(snapshot.ready);
    assert_eq!(snapshot.user(), None);
    assert_eq!(snapshot.token(), None);

    store.login(sample_donor(), "tok123").expect("login");
    assert!(store.is_logged_in());

    // Simulated reload against the same storage.
    let mut store = SessionStore::new(store.into_storage());
    store.initialize();
    assert_eq!(store.user(), Some(&sample_donor()));
    assert_eq!(store.token().map(|t| t.as_str()), Some("tok123"));
    assert_eq!(store.access(), AccessDecision::Allow);

    store.logout();
    assert_eq!(store.user(), None);
    assert_eq!(store.token(), None);
    assert_eq!(store.storage().get(USER_KEY), Ok(None));
    assert_eq!(store.storage().get(TOKEN_KEY), Ok(None));

    let mut store = SessionStore::new(store.into_storage());
    store.initialize();
    assert_eq!(store.access(), AccessDecision::RedirectToLogin);
}

#[test]
fn independent_stores_do_not_share_state() {
    let mut a = SessionStore::new(MemoryStorage::new());
    let mut b = SessionStore::new(MemoryStorage::new());
    a.initialize();
    b.initialize();
    a.login(sample_donor(), "tok").expect("login");
    assert!(a.is_logged_in());
    assert!(!b.is_logged_in());
}
