use super::*;

#[test]
fn accepts_ordinary_addresses() {
    assert!(is_plausible_email("abebe@example.et"));
    assert!(is_plausible_email("  hope.ngo@mail.org "));
}

#[test]
fn rejects_malformed_addresses() {
    for email in ["", "abebe", "@example.et", "abebe@", "abebe@localhost", "a@.et", "a@example."] {
        assert!(!is_plausible_email(email), "accepted {email:?}");
    }
}

#[test]
fn whitespace_is_blank() {
    assert!(is_blank("   "));
    assert!(!is_blank(" x "));
}
