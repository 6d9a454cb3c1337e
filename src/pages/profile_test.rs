use super::*;

#[test]
fn password_change_requires_every_field() {
    assert_eq!(validate_password_change("", "new", "new"), Err("Please fill all password fields"));
    assert_eq!(validate_password_change("old", "", "new"), Err("Please fill all password fields"));
    assert_eq!(validate_password_change("old", "new", ""), Err("Please fill all password fields"));
}

#[test]
fn password_confirmation_must_match() {
    assert_eq!(validate_password_change("old", "new-1", "new-2"), Err("New passwords do not match"));
}

#[test]
fn valid_password_change_builds_request() {
    assert_eq!(
        validate_password_change("old", "fresh", "fresh"),
        Ok(PasswordChange { current_password: "old".to_owned(), new_password: "fresh".to_owned() })
    );
}

#[test]
fn profile_update_trims_and_requires_a_name() {
    assert_eq!(build_profile_update("  ", "", "", ""), Err("Name is required"));
    let update = build_profile_update(" Sara ", " 0911 ", "Ethiopia", " Adama ").expect("update");
    assert_eq!(update.name, "Sara");
    assert_eq!(update.phone, "0911");
    assert_eq!(update.address, PostalAddress { country: "Ethiopia".to_owned(), city: "Adama".to_owned() });
}

#[test]
fn sections_have_titles() {
    assert_eq!(Section::Personal.title(), "Personal Information");
    assert_eq!(Section::Security.title(), "Security");
    assert_eq!(Section::Payments.title(), "Payment Methods");
}

#[test]
fn password_errors_prefer_backend_message() {
    let wrong = ApiError::Unauthorized("Current password is incorrect".to_owned());
    assert_eq!(password_error_message(&wrong), "Current password is incorrect");
    let rejected = ApiError::Status { status: 400, message: "Password too short".to_owned() };
    assert_eq!(password_error_message(&rejected), "Password too short");
    assert_eq!(password_error_message(&ApiError::Unavailable), "Failed to update password");
}
