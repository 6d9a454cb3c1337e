use session::{DonorProfile, NgoProfile};

use super::*;

fn labels(links: &[NavLink]) -> Vec<&'static str> {
    links.iter().map(|l| l.label).collect()
}

#[test]
fn logged_out_offers_login_and_register() {
    let links = nav_links(None);
    assert_eq!(labels(&links), ["Home", "Campaigns", "NGOs", "Login", "Register"]);
    assert_eq!(links[3].href, "/login");
}

#[test]
fn donor_gets_dashboard_and_profile() {
    let user = User::Donor(DonorProfile {
        id: "d9".to_owned(),
        name: "Sara".to_owned(),
        email: "s@x.com".to_owned(),
        photo_url: None,
    });
    let links = nav_links(Some(&user));
    assert_eq!(labels(&links), ["Home", "Campaigns", "NGOs", "Dashboard", "Profile"]);
    assert_eq!(links[3].href, "/donor-dashboard/d9");
}

#[test]
fn ngo_gets_dashboard_and_campaigns() {
    let user = User::Ngo(NgoProfile {
        id: "n4".to_owned(),
        name: "WISE".to_owned(),
        email: "w@ngo.org".to_owned(),
        logo_url: None,
    });
    let links = nav_links(Some(&user));
    assert_eq!(labels(&links), ["Home", "Campaigns", "NGOs", "Dashboard", "My Campaigns"]);
    assert_eq!(links[3].href, "/ngo-dashboard/n4");
}

#[test]
fn initial_falls_back_for_empty_names() {
    assert_eq!(initial("abebe"), "A");
    assert_eq!(initial(""), "?");
}
