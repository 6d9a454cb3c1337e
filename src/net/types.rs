//! Wire DTOs for the donation backend's REST API.
//!
//! DESIGN
//! ======
//! The backend is Mongo-backed and sends identifiers as `_id`; every record
//! accepts `_id` or `id`. Optional numeric and text fields default instead of
//! failing the whole response, since list pages should still render when a
//! single record is sparse.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Campaign status value for campaigns currently accepting donations.
pub const STATUS_ACTIVE: &str = "active";
/// Campaign status value for finished campaigns.
pub const STATUS_COMPLETED: &str = "completed";

/// A fundraising campaign run by an NGO.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Goal in ETB.
    #[serde(default)]
    pub target_amount: f64,
    /// Collected so far in ETB.
    #[serde(default)]
    pub raised_amount: f64,
    #[serde(default)]
    pub status: String,
    /// ISO-8601 timestamp.
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Campaign {
    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }

    /// Funding progress in percent, clamped to `0..=100`.
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount <= 0.0 || self.raised_amount <= 0.0 {
            return 0.0;
        }
        (self.raised_amount / self.target_amount * 100.0).min(100.0)
    }

    /// Deadline as `YYYY-MM-DD`, when present.
    pub fn deadline_date(&self) -> Option<&str> {
        self.deadline.as_deref().map(date_part)
    }
}

/// Text fields of `PATCH /api/campaign/{id}`, sent as multipart form data.
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignUpdate {
    pub title: String,
    pub description: String,
    pub target_amount: f64,
    /// `YYYY-MM-DD`.
    pub deadline: String,
}

impl CampaignUpdate {
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("targetAmount", self.target_amount.to_string()),
            ("deadline", self.deadline.clone()),
        ]
    }

    pub fn apply_to(&self, campaign: &mut Campaign) {
        campaign.title.clone_from(&self.title);
        campaign.description.clone_from(&self.description);
        campaign.target_amount = self.target_amount;
        campaign.deadline = Some(self.deadline.clone());
    }
}

/// NGO profile as returned by `GET /api/ngo/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ngo {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub story: String,
    pub phone: String,
    pub address: String,
    pub website: String,
    pub social: String,
    pub bank_account: String,
    pub verified: bool,
    pub logo_url: Option<String>,
    pub featured_image_url: Option<String>,
}

impl Ngo {
    /// A profile is complete once every field donors rely on is filled in;
    /// statistics and donations are only shown for complete profiles.
    pub fn is_profile_complete(&self) -> bool {
        [&self.name, &self.description, &self.phone, &self.address, &self.bank_account]
            .iter()
            .all(|field| is_filled(field))
            && [&self.logo_url, &self.featured_image_url]
                .iter()
                .all(|url| url.as_deref().is_some_and(is_filled))
    }
}

fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Text fields of `PATCH /api/ngo/update/{id}`, sent as multipart form data.
///
/// Logo and featured image parts are never attached here; the backend keeps
/// whatever images it already has.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NgoProfileUpdate {
    pub name: String,
    pub description: String,
    pub story: String,
    pub phone: String,
    pub address: String,
    pub website: String,
    pub social: String,
    pub bank_account: String,
}

impl NgoProfileUpdate {
    pub fn from_ngo(ngo: &Ngo) -> Self {
        Self {
            name: ngo.name.clone(),
            description: ngo.description.clone(),
            story: ngo.story.clone(),
            phone: ngo.phone.clone(),
            address: ngo.address.clone(),
            website: ngo.website.clone(),
            social: ngo.social.clone(),
            bank_account: ngo.bank_account.clone(),
        }
    }

    /// Multipart field names and values, in the order the backend expects.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("description", self.description.clone()),
            ("story", self.story.clone()),
            ("phone", self.phone.clone()),
            ("address", self.address.clone()),
            ("website", self.website.clone()),
            ("social", self.social.clone()),
            ("bankAccount", self.bank_account.clone()),
        ]
    }

    /// Mirror a saved update into the locally held profile.
    pub fn apply_to(&self, ngo: &mut Ngo) {
        ngo.name.clone_from(&self.name);
        ngo.description.clone_from(&self.description);
        ngo.story.clone_from(&self.story);
        ngo.phone.clone_from(&self.phone);
        ngo.address.clone_from(&self.address);
        ngo.website.clone_from(&self.website);
        ngo.social.clone_from(&self.social);
        ngo.bank_account.clone_from(&self.bank_account);
    }
}

/// Campaign with the highest donation total.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopCampaign {
    pub title: String,
    pub amount: f64,
}

/// Aggregates from `GET /api/ngo/{id}/statistics`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NgoStatistics {
    pub total_donations: f64,
    pub donor_count: u64,
    pub campaign_count: u64,
    pub average_donation: f64,
    pub top_campaign: Option<TopCampaign>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonorRef {
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignRef {
    pub title: String,
}

/// A single donation received by an NGO.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub donor: Option<DonorRef>,
    #[serde(default)]
    pub campaign: Option<CampaignRef>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Donation {
    pub fn donor_name(&self) -> &str {
        self.donor.as_ref().map(|d| d.name.as_str()).filter(|n| !n.is_empty()).unwrap_or("Anonymous")
    }

    pub fn campaign_title(&self) -> &str {
        self.campaign.as_ref().map(|c| c.title.as_str()).filter(|t| !t.is_empty()).unwrap_or("N/A")
    }

    /// Creation date as `YYYY-MM-DD`, or empty when unknown.
    pub fn date(&self) -> &str {
        self.created_at.as_deref().map(date_part).unwrap_or_default()
    }
}

/// Campaign bookmarked by a donor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedCampaign {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
}

/// Donor dashboard summary from `GET /api/donor/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DonorSummary {
    pub total_donated: f64,
    pub campaigns_supported: u64,
    pub impact: String,
    pub saved_campaigns: Vec<SavedCampaign>,
}

impl DonorSummary {
    pub fn is_new_donor(&self) -> bool {
        self.total_donated <= 0.0 && self.campaigns_supported == 0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostalAddress {
    pub country: String,
    pub city: String,
}

/// The signed-in donor's editable account (`GET /api/donor/me`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DonorAccount {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: PostalAddress,
    pub total_donated: f64,
    pub campaigns_supported: u64,
}

/// Body of `PUT /api/donor/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub phone: String,
    pub address: PostalAddress,
}

/// Body of `PUT /api/donor/me/password`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

/// A saved donor payment method. Only the last four digits are ever sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub last4: String,
    #[serde(rename = "default", default)]
    pub is_default: bool,
}

impl PaymentMethod {
    /// Display label such as `CBE •••• 1234`.
    pub fn label(&self) -> String {
        if self.last4.is_empty() || self.last4 == "—" {
            self.kind.clone()
        } else {
            format!("{} •••• {}", self.kind, self.last4)
        }
    }
}

/// Body of `POST /api/payments/methods`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewPaymentMethod {
    #[serde(rename = "type")]
    pub kind: String,
    pub last4: String,
}

/// How often a recurring donation is charged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringFrequency {
    Daily,
    Weekly,
    #[default]
    Monthly,
}

impl RecurringFrequency {
    pub const ALL: [Self; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == raw)
    }
}

/// Recurring donation settings (`POST /api/payments/recurring`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecurringDonation {
    pub enabled: bool,
    /// ETB per charge; zero while disabled.
    pub amount: f64,
    pub frequency: RecurringFrequency,
    /// ISO-8601 timestamp of the next charge, reported by the backend.
    pub next_charge: Option<String>,
}

/// Donor e-mail preferences (`PATCH /api/users/notifications`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationPreferences {
    pub receipts: bool,
    pub reminders: bool,
    pub expiring_cards: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self { receipts: true, reminders: true, expiring_cards: true }
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Raw login response; `user` is parsed separately so an unknown role can
/// be reported distinctly.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: String,
    pub user: serde_json::Value,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DonorRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/ngo/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NgoRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub description: String,
}

/// Optional `{ message }` envelope the backend uses for errors and notices.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

fn date_part(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}
