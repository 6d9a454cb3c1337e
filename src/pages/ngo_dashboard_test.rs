use super::*;
use crate::net::types::{CampaignRef, DonorRef};

fn donation(id: usize, donor: Option<&str>, campaign: Option<&str>, amount: f64) -> Donation {
    Donation {
        id: format!("d{id}"),
        amount,
        donor: donor.map(|name| DonorRef { name: name.to_owned() }),
        campaign: campaign.map(|title| CampaignRef { title: title.to_owned() }),
        created_at: Some("2024-12-01T08:30:00.000Z".to_owned()),
    }
}

fn many(n: usize) -> Vec<Donation> {
    (0..n).map(|i| donation(i, Some("Abebe"), Some("Water"), 100.0)).collect()
}

// =============================================================
// Recent window
// =============================================================

#[test]
fn collapsed_view_shows_five_most_recent() {
    let all = many(8);
    let shown = visible_donations(&all, false);
    assert_eq!(shown.len(), RECENT_WINDOW);
    assert_eq!(shown[0].id, "d0");
    assert_eq!(visible_donations(&all, true).len(), 8);
}

#[test]
fn short_lists_are_shown_whole() {
    let all = many(3);
    assert_eq!(visible_donations(&all, false).len(), 3);
    assert_eq!(visible_donations(&[], false).len(), 0);
}

#[test]
fn toggle_only_when_list_overflows() {
    assert_eq!(toggle_label(5, false), None);
    assert_eq!(toggle_label(6, false), Some("Show all 6 donations".to_owned()));
    assert_eq!(toggle_label(6, true), Some("Show less".to_owned()));
}

// =============================================================
// CSV export
// =============================================================

#[test]
fn csv_has_header_and_one_row_per_donation() {
    let csv = donations_csv(&[donation(1, Some("Abebe"), Some("Clean water"), 250.0)]);
    assert_eq!(csv, "Donor,Amount (ETB),Campaign,Date\nAbebe,250,Clean water,2024-12-01");
}

#[test]
fn csv_uses_fallbacks_for_missing_refs() {
    let csv = donations_csv(&[donation(1, None, None, 12.5)]);
    assert_eq!(csv.lines().nth(1), Some("Anonymous,12.5,N/A,2024-12-01"));
}

#[test]
fn csv_quotes_fields_with_commas_and_quotes() {
    let csv = donations_csv(&[donation(1, Some("Kebede, T."), Some("Books \"for all\""), 10.0)]);
    assert_eq!(csv.lines().nth(1), Some("\"Kebede, T.\",10,\"Books \"\"for all\"\"\",2024-12-01"));
}

#[test]
fn empty_export_is_just_the_header() {
    assert_eq!(donations_csv(&[]), CSV_HEADER);
}

// =============================================================
// Editing rights
// =============================================================

#[test]
fn only_the_owning_ngo_may_edit() {
    use session::{DonorProfile, NgoProfile};

    let owner = User::Ngo(NgoProfile {
        id: "n1".to_owned(),
        name: "Hope Ethiopia".to_owned(),
        email: "hope@example.et".to_owned(),
        logo_url: None,
    });
    let donor = User::Donor(DonorProfile {
        id: "n1".to_owned(),
        name: "Abebe".to_owned(),
        email: "abebe@example.et".to_owned(),
        photo_url: None,
    });
    assert!(can_edit(Some(&owner), "n1"));
    assert!(!can_edit(Some(&owner), "n2"));
    assert!(!can_edit(Some(&donor), "n1"));
    assert!(!can_edit(None, "n1"));
}
