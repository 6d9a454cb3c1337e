//! Signed-in user identity, split by role.
//!
//! DESIGN
//! ======
//! Donors and NGOs carry different optional attributes (a donor photo, an NGO
//! logo), so the record is a tagged variant keyed by `role` instead of one
//! loosely-typed struct. The backend sends the identifier as either `id` or
//! `_id`; both are accepted and it is always written back as `id`.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account role as reported by the authentication backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Donor,
    Ngo,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Donor => "donor",
            Self::Ngo => "ngo",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Donor account fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorProfile {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// NGO account fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NgoProfile {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// The authenticated user record, tagged by `role` on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum User {
    Donor(DonorProfile),
    Ngo(NgoProfile),
}

impl User {
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::Donor(_) => Role::Donor,
            Self::Ngo(_) => Role::Ngo,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Donor(p) => &p.id,
            Self::Ngo(p) => &p.id,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Donor(p) => &p.name,
            Self::Ngo(p) => &p.name,
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            Self::Donor(p) => &p.email,
            Self::Ngo(p) => &p.email,
        }
    }

    /// Role-specific picture: a donor's photo or an NGO's logo.
    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        match self {
            Self::Donor(p) => p.photo_url.as_deref(),
            Self::Ngo(p) => p.logo_url.as_deref(),
        }
    }

    /// Landing route after a successful login.
    #[must_use]
    pub fn dashboard_path(&self) -> String {
        match self {
            Self::Donor(p) => format!("/donor-dashboard/{}", p.id),
            Self::Ngo(p) => format!("/ngo-dashboard/{}", p.id),
        }
    }

    /// Parse a user from a backend JSON value.
    ///
    /// # Errors
    ///
    /// Returns the serde error when required fields are missing or `role`
    /// is not one of `donor` / `ngo`.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}
