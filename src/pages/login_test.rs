use super::*;

#[test]
fn requires_both_fields() {
    assert_eq!(validate_credentials("", "secret"), Err("Please enter your email and password"));
    assert_eq!(validate_credentials("a@x.com", ""), Err("Please enter your email and password"));
}

#[test]
fn requires_an_email_shape() {
    assert_eq!(validate_credentials("abebe", "secret"), Err("Please enter a valid email address"));
    assert_eq!(validate_credentials("abebe@example.et", "secret"), Ok(()));
}

#[test]
fn failures_highlight_the_right_field() {
    assert_eq!(field_for(LoginFailure::NotFound), FieldError::Email);
    assert_eq!(field_for(LoginFailure::Unauthorized), FieldError::Password);
    assert_eq!(field_for(LoginFailure::InvalidRole), FieldError::None);
    assert_eq!(field_for(LoginFailure::Other), FieldError::None);
}

#[cfg(not(feature = "csr"))]
mod session_handoff {
    use leptos::reactive::owner::Owner;
    use session::{DonorProfile, MemoryStorage, SessionStore, User};

    use super::super::establish_session;
    use crate::net::api::LoginFailure;
    use crate::state::session::SessionContext;

    fn donor() -> User {
        User::Donor(DonorProfile {
            id: "d1".to_owned(),
            name: "Abebe".to_owned(),
            email: "abebe@example.et".to_owned(),
            photo_url: None,
        })
    }

    fn context() -> SessionContext {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.initialize();
        SessionContext::new(store)
    }

    #[test]
    fn accepted_login_establishes_the_session() {
        let owner = Owner::new();
        owner.set();
        let ctx = context();
        assert_eq!(establish_session(ctx, Ok((donor(), "tok".to_owned()))), Ok(()));
        assert_eq!(ctx.user_untracked(), Some(donor()));
        assert_eq!(ctx.token_untracked().map(|t| t.as_str().to_owned()), Some("tok".to_owned()));
    }

    #[test]
    fn refused_login_leaves_session_empty() {
        let owner = Owner::new();
        owner.set();
        let ctx = context();
        assert_eq!(establish_session(ctx, Err(LoginFailure::Unauthorized)), Err(LoginFailure::Unauthorized));
        assert!(ctx.user_untracked().is_none());
    }

    #[test]
    fn blank_token_is_reported_as_generic_failure() {
        let owner = Owner::new();
        owner.set();
        let ctx = context();
        assert_eq!(establish_session(ctx, Ok((donor(), "  ".to_owned()))), Err(LoginFailure::Other));
        assert!(ctx.user_untracked().is_none());
    }
}
