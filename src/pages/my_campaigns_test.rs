use super::*;

fn campaign(id: &str, status: &str) -> Campaign {
    Campaign {
        id: id.to_owned(),
        title: id.to_owned(),
        description: String::new(),
        target_amount: 100.0,
        raised_amount: 0.0,
        status: status.to_owned(),
        deadline: None,
        image_url: None,
    }
}

fn ids(list: &[Campaign]) -> Vec<&str> {
    list.iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn default_filter_shows_everything() {
    let list = vec![campaign("a", "active"), campaign("b", "completed"), campaign("c", "draft")];
    assert_eq!(StatusFilter::default(), StatusFilter::All);
    assert_eq!(ids(&StatusFilter::All.apply(&list)), ["a", "b", "c"]);
}

#[test]
fn status_filters_match_exactly() {
    let list = vec![campaign("a", "active"), campaign("b", "completed"), campaign("c", "Active")];
    assert_eq!(ids(&StatusFilter::Active.apply(&list)), ["a"]);
    assert_eq!(ids(&StatusFilter::Completed.apply(&list)), ["b"]);
}

#[test]
fn tabs_are_labelled_in_order() {
    let labels: Vec<&str> = StatusFilter::ALL.iter().map(|f| f.label()).collect();
    assert_eq!(labels, ["All", "Active", "Completed"]);
}

#[test]
fn saved_edit_updates_only_the_matching_campaign() {
    let mut list = vec![campaign("a", "active"), campaign("b", "active")];
    let update = CampaignUpdate {
        title: "School books".to_owned(),
        description: "Books for Gondar".to_owned(),
        target_amount: 500.0,
        deadline: "2025-09-01".to_owned(),
    };
    assert!(apply_campaign_update(&mut list, "b", &update));
    assert_eq!(list[0].title, "a");
    assert_eq!(list[1].title, "School books");
    assert_eq!(list[1].deadline_date(), Some("2025-09-01"));
    assert!(!apply_campaign_update(&mut list, "zzz", &update));
}
