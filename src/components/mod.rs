//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navbar, notices, cards) and the route
//! guard, reading session state from the `SessionContext` provider.

pub mod campaign_card;
pub mod campaign_edit_form;
pub mod navbar;
pub mod ngo_profile_form;
pub mod notice_banner;
pub mod payment_settings;
pub mod private_route;
