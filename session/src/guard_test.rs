use super::*;

// =============================================================
// Decision table
// =============================================================

#[test]
fn not_ready_is_pending_regardless_of_login() {
    assert_eq!(decide(false, false), AccessDecision::Pending);
    assert_eq!(decide(false, true), AccessDecision::Pending);
}

#[test]
fn ready_and_logged_out_redirects() {
    assert_eq!(decide(true, false), AccessDecision::RedirectToLogin);
}

#[test]
fn ready_and_logged_in_allows() {
    assert_eq!(decide(true, true), AccessDecision::Allow);
}

// =============================================================
// Outcome details
// =============================================================

#[test]
fn pending_renders_neither_content_nor_redirect() {
    let decision = decide(false, true);
    assert!(!decision.renders_content());
    assert_eq!(decision.redirect_target(), None);
}

#[test]
fn redirect_targets_login_and_replaces_history() {
    let decision = decide(true, false);
    assert_eq!(decision.redirect_target(), Some(LOGIN_ROUTE));
    assert_eq!(LOGIN_ROUTE, "/login");
    assert!(decision.replaces_history());
    assert!(!decision.renders_content());
}

#[test]
fn allow_renders_content_without_redirect() {
    let decision = decide(true, true);
    assert!(decision.renders_content());
    assert_eq!(decision.redirect_target(), None);
    assert!(!decision.replaces_history());
}
