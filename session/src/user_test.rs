use super::*;

fn donor() -> User {
    User::Donor(DonorProfile {
        id: "1".to_owned(),
        name: "A".to_owned(),
        email: "a@x.com".to_owned(),
        photo_url: None,
    })
}

// =============================================================
// Wire parsing
// =============================================================

#[test]
fn parses_donor_with_plain_id() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "1", "role": "donor", "name": "A", "email": "a@x.com"
    }))
    .expect("donor should parse");
    assert_eq!(user, donor());
}

#[test]
fn parses_mongo_style_underscore_id() {
    let user = User::from_value(serde_json::json!({
        "_id": "65f0", "role": "ngo", "name": "Hope", "email": "hope@ngo.org", "logoUrl": "/uploads/logo.png"
    }))
    .expect("ngo should parse");
    assert_eq!(user.id(), "65f0");
    assert_eq!(user.role(), Role::Ngo);
    assert_eq!(user.avatar_url(), Some("/uploads/logo.png"));
}

#[test]
fn ignores_unknown_backend_fields() {
    let user = User::from_value(serde_json::json!({
        "id": "1", "role": "donor", "name": "A", "email": "a@x.com", "createdAt": "2024-01-01", "__v": 0
    }))
    .expect("extra fields are ignored");
    assert_eq!(user, donor());
}

#[test]
fn rejects_unknown_role() {
    let err = User::from_value(serde_json::json!({
        "id": "1", "role": "admin", "name": "A", "email": "a@x.com"
    }));
    assert!(err.is_err());
}

#[test]
fn rejects_missing_role() {
    let err = User::from_value(serde_json::json!({ "id": "1", "name": "A", "email": "a@x.com" }));
    assert!(err.is_err());
}

#[test]
fn serializes_with_role_tag_and_plain_id() {
    let value = serde_json::to_value(donor()).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({ "role": "donor", "id": "1", "name": "A", "email": "a@x.com" })
    );
}

#[test]
fn donor_photo_is_written_camel_case() {
    let user = User::Donor(DonorProfile {
        id: "1".to_owned(),
        name: "A".to_owned(),
        email: "a@x.com".to_owned(),
        photo_url: Some("/p.png".to_owned()),
    });
    let value = serde_json::to_value(&user).expect("serialize");
    assert_eq!(value["photoUrl"], "/p.png");
}

// =============================================================
// Accessors
// =============================================================

#[test]
fn dashboard_path_depends_on_role() {
    assert_eq!(donor().dashboard_path(), "/donor-dashboard/1");
    let ngo = User::Ngo(NgoProfile {
        id: "n9".to_owned(),
        name: "N".to_owned(),
        email: "n@x.com".to_owned(),
        logo_url: None,
    });
    assert_eq!(ngo.dashboard_path(), "/ngo-dashboard/n9");
}

#[test]
fn accessors_read_through_variant() {
    let user = donor();
    assert_eq!(user.name(), "A");
    assert_eq!(user.email(), "a@x.com");
    assert_eq!(user.role().to_string(), "donor");
    assert_eq!(user.avatar_url(), None);
}
