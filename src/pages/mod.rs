//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route's data fetching and form state and delegates
//! shared rendering to `components`. Validation lives in pure helpers next
//! to the page so it is testable without a browser.

pub mod campaign_details;
pub mod campaigns;
pub mod donor_dashboard;
pub(crate) mod form;
pub mod home;
pub mod login;
pub mod my_campaigns;
pub mod ngo_dashboard;
pub mod ngo_register;
pub mod ngos;
pub mod not_found;
pub mod profile;
pub mod register;
