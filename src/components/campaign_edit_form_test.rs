use super::*;

#[test]
fn accepts_a_complete_edit() {
    let update = validate_campaign_update(" Wells ", " Clean water for Afar ", "75000", "2025-06-30").expect("valid");
    assert_eq!(update.title, "Wells");
    assert_eq!(update.description, "Clean water for Afar");
    assert!((update.target_amount - 75_000.0).abs() < f64::EPSILON);
    assert_eq!(update.deadline, "2025-06-30");
}

#[test]
fn title_and_description_are_required() {
    assert_eq!(
        validate_campaign_update("", "d", "10", "2025-06-30"),
        Err("Please fill in the title and description")
    );
    assert_eq!(
        validate_campaign_update("t", "  ", "10", "2025-06-30"),
        Err("Please fill in the title and description")
    );
}

#[test]
fn target_must_be_a_positive_amount() {
    for bad in ["", "abc", "0", "0.5", "-10", "inf"] {
        assert_eq!(
            validate_campaign_update("t", "d", bad, "2025-06-30"),
            Err("Target amount must be at least 1 ETB"),
            "target {bad:?}"
        );
    }
}

#[test]
fn deadline_must_be_a_date() {
    assert_eq!(validate_campaign_update("t", "d", "10", ""), Err("Please choose a deadline"));
    assert_eq!(validate_campaign_update("t", "d", "10", "30/06/2025"), Err("Please choose a deadline"));
}

#[test]
fn iso_dates() {
    assert!(is_iso_date("2025-01-31"));
    assert!(!is_iso_date("2025-13-01"));
    assert!(!is_iso_date("2025-1-01"));
    assert!(!is_iso_date("2025-01-01T00:00"));
}
