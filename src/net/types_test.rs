use super::*;

fn campaign(raised: f64, target: f64) -> Campaign {
    Campaign {
        id: "c1".to_owned(),
        title: "Clean water".to_owned(),
        description: String::new(),
        target_amount: target,
        raised_amount: raised,
        status: STATUS_ACTIVE.to_owned(),
        deadline: None,
        image_url: None,
    }
}

// =============================================================
// Campaign
// =============================================================

#[test]
fn campaign_parses_backend_shape() {
    let c: Campaign = serde_json::from_value(serde_json::json!({
        "_id": "65a", "title": "School books", "description": "Books for Gondar",
        "targetAmount": 50000, "raisedAmount": 1250.5, "status": "active",
        "deadline": "2025-03-01T00:00:00.000Z", "imageUrl": "/uploads/books.jpg", "ngo": "n1"
    }))
    .expect("campaign");
    assert_eq!(c.id, "65a");
    assert!((c.target_amount - 50_000.0).abs() < f64::EPSILON);
    assert!(c.is_active());
    assert_eq!(c.deadline_date(), Some("2025-03-01"));
    assert_eq!(c.image_url.as_deref(), Some("/uploads/books.jpg"));
}

#[test]
fn campaign_defaults_missing_amounts() {
    let c: Campaign = serde_json::from_value(serde_json::json!({ "_id": "x", "title": "t" })).expect("campaign");
    assert!(c.raised_amount.abs() < f64::EPSILON);
    assert!(!c.is_active());
    assert_eq!(c.deadline_date(), None);
}

#[test]
fn progress_is_clamped_and_zero_without_target() {
    assert!((campaign(250.0, 1000.0).progress_percent() - 25.0).abs() < 1e-9);
    assert!((campaign(5000.0, 1000.0).progress_percent() - 100.0).abs() < 1e-9);
    assert!(campaign(10.0, 0.0).progress_percent().abs() < 1e-9);
    assert!(campaign(0.0, 100.0).progress_percent().abs() < 1e-9);
}

// =============================================================
// NGO
// =============================================================

fn complete_ngo() -> Ngo {
    Ngo {
        id: "n1".to_owned(),
        name: "Hope".to_owned(),
        description: "Child welfare".to_owned(),
        phone: "+251 11 000 0000".to_owned(),
        address: "Addis Ababa".to_owned(),
        bank_account: "1000123456789".to_owned(),
        logo_url: Some("/uploads/logo.png".to_owned()),
        featured_image_url: Some("/uploads/hero.jpg".to_owned()),
        ..Ngo::default()
    }
}

#[test]
fn complete_ngo_profile_is_detected() {
    assert!(complete_ngo().is_profile_complete());
}

#[test]
fn missing_logo_or_blank_field_makes_profile_incomplete() {
    let mut ngo = complete_ngo();
    ngo.logo_url = None;
    assert!(!ngo.is_profile_complete());

    let mut ngo = complete_ngo();
    ngo.bank_account = "   ".to_owned();
    assert!(!ngo.is_profile_complete());
}

#[test]
fn ngo_tolerates_sparse_record() {
    let ngo: Ngo = serde_json::from_value(serde_json::json!({ "_id": "n2", "name": "New NGO" })).expect("ngo");
    assert_eq!(ngo.name, "New NGO");
    assert!(!ngo.verified);
    assert!(!ngo.is_profile_complete());
}

// =============================================================
// Donations and summaries
// =============================================================

#[test]
fn donation_falls_back_for_missing_donor_and_campaign() {
    let d: Donation = serde_json::from_value(serde_json::json!({
        "_id": "d1", "amount": 300, "createdAt": "2024-11-02T10:00:00Z"
    }))
    .expect("donation");
    assert_eq!(d.donor_name(), "Anonymous");
    assert_eq!(d.campaign_title(), "N/A");
    assert_eq!(d.date(), "2024-11-02");
}

#[test]
fn donation_reads_populated_refs() {
    let d: Donation = serde_json::from_value(serde_json::json!({
        "_id": "d2", "amount": 50, "donor": { "name": "Abebe" }, "campaign": { "title": "Water" }
    }))
    .expect("donation");
    assert_eq!(d.donor_name(), "Abebe");
    assert_eq!(d.campaign_title(), "Water");
    assert_eq!(d.date(), "");
}

#[test]
fn statistics_default_when_empty() {
    let stats: NgoStatistics = serde_json::from_value(serde_json::json!({})).expect("stats");
    assert_eq!(stats, NgoStatistics::default());
}

#[test]
fn new_donor_has_no_history() {
    assert!(DonorSummary::default().is_new_donor());
    let summary = DonorSummary { campaigns_supported: 1, ..DonorSummary::default() };
    assert!(!summary.is_new_donor());
}

// =============================================================
// Payment methods
// =============================================================

#[test]
fn payment_method_maps_reserved_field_names() {
    let m: PaymentMethod = serde_json::from_value(serde_json::json!({
        "_id": "p1", "type": "TeleBirr", "last4": "4321", "default": true
    }))
    .expect("method");
    assert_eq!(m.kind, "TeleBirr");
    assert!(m.is_default);
    assert_eq!(m.label(), "TeleBirr •••• 4321");
}

#[test]
fn payment_method_label_without_digits() {
    let m = PaymentMethod { id: "p2".to_owned(), kind: "PayPal".to_owned(), last4: "—".to_owned(), is_default: false };
    assert_eq!(m.label(), "PayPal");
}

#[test]
fn new_payment_method_serializes_type_key() {
    let body = NewPaymentMethod { kind: "CBE".to_owned(), last4: "1234".to_owned() };
    assert_eq!(serde_json::to_value(body).expect("json"), serde_json::json!({ "type": "CBE", "last4": "1234" }));
}

#[test]
fn password_change_uses_camel_case() {
    let body = PasswordChange { current_password: "a".to_owned(), new_password: "b".to_owned() };
    assert_eq!(
        serde_json::to_value(body).expect("json"),
        serde_json::json!({ "currentPassword": "a", "newPassword": "b" })
    );
}

// =============================================================
// Profile and campaign edits
// =============================================================

#[test]
fn ngo_update_form_uses_backend_field_names() {
    let update = NgoProfileUpdate::from_ngo(&complete_ngo());
    let names: Vec<&str> = update.form_fields().iter().map(|(name, _)| *name).collect();
    assert_eq!(names, ["name", "description", "story", "phone", "address", "website", "social", "bankAccount"]);
    assert!(update.form_fields().contains(&("bankAccount", "1000123456789".to_owned())));
}

#[test]
fn ngo_update_applies_text_fields_and_keeps_images() {
    let mut ngo = complete_ngo();
    let update = NgoProfileUpdate { name: "Hope Ethiopia".to_owned(), phone: "0911".to_owned(), ..NgoProfileUpdate::from_ngo(&ngo) };
    update.apply_to(&mut ngo);
    assert_eq!(ngo.name, "Hope Ethiopia");
    assert_eq!(ngo.phone, "0911");
    assert_eq!(ngo.logo_url.as_deref(), Some("/uploads/logo.png"));
    assert!(ngo.is_profile_complete());
}

#[test]
fn campaign_update_form_and_apply() {
    let update = CampaignUpdate {
        title: "Clean water 2".to_owned(),
        description: "Wells".to_owned(),
        target_amount: 75_000.0,
        deadline: "2025-06-30".to_owned(),
    };
    assert_eq!(update.form_fields()[2], ("targetAmount", "75000".to_owned()));
    let mut c = campaign(10.0, 100.0);
    update.apply_to(&mut c);
    assert_eq!(c.title, "Clean water 2");
    assert_eq!(c.deadline_date(), Some("2025-06-30"));
    assert!((c.target_amount - 75_000.0).abs() < f64::EPSILON);
}

// =============================================================
// Donor settings
// =============================================================

#[test]
fn recurring_settings_round_trip_through_json() {
    let settings = RecurringDonation {
        enabled: true,
        amount: 250.0,
        frequency: RecurringFrequency::Weekly,
        next_charge: None,
    };
    let json = serde_json::to_value(&settings).expect("json");
    assert_eq!(json, serde_json::json!({ "enabled": true, "amount": 250.0, "frequency": "weekly", "nextCharge": null }));
    let back: RecurringDonation = serde_json::from_value(json).expect("settings");
    assert_eq!(back, settings);
}

#[test]
fn recurring_settings_default_to_monthly_and_off() {
    let settings: RecurringDonation = serde_json::from_value(serde_json::json!({})).expect("settings");
    assert!(!settings.enabled);
    assert_eq!(settings.frequency, RecurringFrequency::Monthly);
    assert_eq!(RecurringFrequency::parse("daily"), Some(RecurringFrequency::Daily));
    assert_eq!(RecurringFrequency::parse("yearly"), None);
}

#[test]
fn notification_preferences_round_trip_and_default_on() {
    let prefs = NotificationPreferences { receipts: false, ..NotificationPreferences::default() };
    let json = serde_json::to_value(prefs).expect("json");
    assert_eq!(json, serde_json::json!({ "receipts": false, "reminders": true, "expiringCards": true }));
    let back: NotificationPreferences = serde_json::from_value(json).expect("prefs");
    assert_eq!(back, prefs);
    let sparse: NotificationPreferences = serde_json::from_value(serde_json::json!({ "reminders": false })).expect("prefs");
    assert!(sparse.receipts && !sparse.reminders && sparse.expiring_cards);
}
