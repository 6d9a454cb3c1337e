//! REST API helpers for the donation backend.
//!
//! Browser (csr): real HTTP calls via `gloo-net` against
//! [`AppConfig::api_base`](crate::config::AppConfig).
//! Native builds (tests): every call returns [`ApiError::Unavailable`].
//!
//! Authenticated endpoints take the session's `Option<&Token>` and attach
//! `Authorization: Bearer <token>` only when a token is present.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. HTTP 401 maps to
//! [`ApiError::Unauthorized`]; pages hand that to
//! `SessionContext::handle_api_error`, which expires the session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use session::{Role, Token, User};

use super::types::{
    ApiMessage, Campaign, DonorAccount, DonorRegistration, DonorSummary, Donation, LoginRequest, LoginResponse,
    CampaignUpdate, NewPaymentMethod, Ngo, NgoProfileUpdate, NgoRegistration, NgoStatistics, NotificationPreferences,
    PasswordChange, PaymentMethod, ProfileUpdate, RecurringDonation,
};

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    /// HTTP 401: the credential is missing, wrong or expired.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("backend calls are only available in the browser")]
    Unavailable,
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Text suitable for an inline error banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) | Self::Unavailable => "Could not reach the server. Please try again.".to_owned(),
            Self::Status { message, .. } => message.clone(),
            Self::Unauthorized(_) => "Your session has expired. Please log in again.".to_owned(),
            Self::Decode(_) => "The server sent an unexpected response.".to_owned(),
        }
    }
}

/// Why a login attempt was refused, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginFailure {
    #[error("Email not found")]
    NotFound,
    #[error("Incorrect password")]
    Unauthorized,
    #[error("Invalid user role")]
    InvalidRole,
    #[error("Login failed. Please check your credentials.")]
    Other,
}

const HTTP_UNAUTHORIZED: u16 = 401;
const HTTP_NOT_FOUND: u16 = 404;

/// Map a non-2xx response to an [`ApiError`], preferring the backend's
/// `{ message }` body when it has one.
pub(crate) fn error_for_status(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ApiMessage>(body)
        .ok()
        .and_then(|m| m.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed with status {status}"));
    if status == HTTP_UNAUTHORIZED {
        ApiError::Unauthorized(message)
    } else {
        ApiError::Status { status, message }
    }
}

pub(crate) fn classify_login_failure(error: &ApiError) -> LoginFailure {
    match error {
        ApiError::Status { status: HTTP_NOT_FOUND, .. } => LoginFailure::NotFound,
        ApiError::Status { message, .. } if message.to_lowercase().contains("email not found") => {
            LoginFailure::NotFound
        }
        ApiError::Unauthorized(message) => {
            let message = message.to_lowercase();
            if message.contains("email not found") {
                LoginFailure::NotFound
            } else if message.contains("incorrect") || message.contains("password") {
                LoginFailure::Unauthorized
            } else {
                LoginFailure::Other
            }
        }
        _ => LoginFailure::Other,
    }
}

/// Split a login response into a typed user and its raw token.
pub(crate) fn parse_login_response(response: LoginResponse) -> Result<(User, String), LoginFailure> {
    if response.token.trim().is_empty() {
        return Err(LoginFailure::Other);
    }
    let role = response.user.get("role").and_then(serde_json::Value::as_str);
    if !matches!(role, Some(r) if r == Role::Donor.as_str() || r == Role::Ngo.as_str()) {
        return Err(LoginFailure::InvalidRole);
    }
    let user = User::from_value(response.user).map_err(|e| {
        log::warn!("login response carried an unreadable user: {e}");
        LoginFailure::Other
    })?;
    Ok((user, response.token))
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn authorization_header(token: Option<&Token>) -> Option<String> {
    token.map(Token::authorization_header)
}

pub(crate) fn campaign_path(id: &str) -> String {
    format!("/api/campaign/{id}")
}

pub(crate) fn ngo_campaigns_path(ngo_id: &str) -> String {
    format!("/api/campaign/ngo/{ngo_id}")
}

pub(crate) fn ngo_path(id: &str) -> String {
    format!("/api/ngo/{id}")
}

pub(crate) fn ngo_update_path(id: &str) -> String {
    format!("/api/ngo/update/{id}")
}

pub(crate) fn ngo_statistics_path(id: &str) -> String {
    format!("/api/ngo/{id}/statistics")
}

pub(crate) fn ngo_donations_path(id: &str) -> String {
    format!("/api/donation/ngo/{id}")
}

pub(crate) fn donor_summary_path(id: &str) -> String {
    format!("/api/donor/{id}")
}

pub(crate) fn payment_method_path(id: &str) -> String {
    format!("{PAYMENT_METHODS_PATH}/{id}")
}

pub(crate) fn default_payment_method_path(id: &str) -> String {
    format!("{PAYMENT_METHODS_PATH}/{id}/default")
}

const LOGIN_PATH: &str = "/api/auth/login";
const REGISTER_DONOR_PATH: &str = "/api/auth/register";
const REGISTER_NGO_PATH: &str = "/api/ngo/register";
const CAMPAIGNS_PATH: &str = "/api/campaign";
const DONOR_ME_PATH: &str = "/api/donor/me";
const DONOR_PASSWORD_PATH: &str = "/api/donor/me/password";
const PAYMENT_METHODS_PATH: &str = "/api/payments/methods";
const RECURRING_DONATION_PATH: &str = "/api/payments/recurring";
const NOTIFICATIONS_PATH: &str = "/api/users/notifications";

#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

const NO_BODY: Option<&()> = None;

#[cfg(feature = "csr")]
fn request_builder(verb: Verb, path: &str, token: Option<&Token>) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::Request;

    let url = crate::config::app_config().endpoint(path);
    let builder = match verb {
        Verb::Get => Request::get(&url),
        Verb::Post => Request::post(&url),
        Verb::Put => Request::put(&url),
        Verb::Patch => Request::patch(&url),
        Verb::Delete => Request::delete(&url),
    };
    match authorization_header(token) {
        Some(header) => builder.header("Authorization", &header),
        None => builder,
    }
}

#[cfg(feature = "csr")]
async fn dispatch(
    verb: Verb,
    path: &str,
    request: Result<gloo_net::http::Request, gloo_net::Error>,
) -> Result<gloo_net::http::Response, ApiError> {
    let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
    log::debug!("{verb:?} {path}");
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    log::debug!("{verb:?} {path} failed with {status}");
    Err(error_for_status(status, &text))
}

#[cfg(feature = "csr")]
async fn send<B: Serialize>(
    verb: Verb,
    path: &str,
    token: Option<&Token>,
    body: Option<&B>,
) -> Result<gloo_net::http::Response, ApiError> {
    let builder = request_builder(verb, path, token);
    let request = match body {
        Some(body) => builder.json(body),
        None => builder.build(),
    };
    dispatch(verb, path, request).await
}

/// Send text-only multipart form data. The browser sets the boundary header.
#[cfg(feature = "csr")]
async fn send_form(
    verb: Verb,
    path: &str,
    token: Option<&Token>,
    fields: &[(&'static str, String)],
) -> Result<gloo_net::http::Response, ApiError> {
    let js_error = |e: wasm_bindgen::JsValue| ApiError::Network(format!("building form data failed: {e:?}"));
    let form = web_sys::FormData::new().map_err(js_error)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(js_error)?;
    }
    dispatch(verb, path, request_builder(verb, path, token).body(form)).await
}

async fn fetch_json<T: DeserializeOwned, B: Serialize>(
    verb: Verb,
    path: &str,
    token: Option<&Token>,
    body: Option<&B>,
) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = send(verb, path, token, body).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (verb, path, token, body);
        Err(ApiError::Unavailable)
    }
}

async fn fetch_unit<B: Serialize>(
    verb: Verb,
    path: &str,
    token: Option<&Token>,
    body: Option<&B>,
) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        send(verb, path, token, body).await.map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (verb, path, token, body);
        Err(ApiError::Unavailable)
    }
}

async fn fetch_form_unit(
    verb: Verb,
    path: &str,
    token: Option<&Token>,
    fields: &[(&'static str, String)],
) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        send_form(verb, path, token, fields).await.map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (verb, path, token, fields);
        Err(ApiError::Unavailable)
    }
}

/// Authenticate via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the [`LoginFailure`] to show on the login form.
pub async fn login(email: &str, password: &str) -> Result<(User, String), LoginFailure> {
    let body = LoginRequest { email: email.trim().to_owned(), password: password.to_owned() };
    match fetch_json::<LoginResponse, _>(Verb::Post, LOGIN_PATH, None, Some(&body)).await {
        Ok(response) => parse_login_response(response),
        Err(e) => {
            log::info!("login rejected: {e}");
            Err(classify_login_failure(&e))
        }
    }
}

/// Create a donor account. Returns the backend's confirmation message.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn register_donor(registration: &DonorRegistration) -> Result<Option<String>, ApiError> {
    let reply: ApiMessage = fetch_json(Verb::Post, REGISTER_DONOR_PATH, None, Some(registration)).await?;
    Ok(reply.message)
}

/// Create an NGO account. Returns the backend's confirmation message.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn register_ngo(registration: &NgoRegistration) -> Result<Option<String>, ApiError> {
    let reply: ApiMessage = fetch_json(Verb::Post, REGISTER_NGO_PATH, None, Some(registration)).await?;
    Ok(reply.message)
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_campaigns() -> Result<Vec<Campaign>, ApiError> {
    fetch_json(Verb::Get, CAMPAIGNS_PATH, None, NO_BODY).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_campaign(id: &str) -> Result<Campaign, ApiError> {
    fetch_json(Verb::Get, &campaign_path(id), None, NO_BODY).await
}

/// Edit a campaign's text fields; the current image is kept.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn update_campaign(id: &str, update: &CampaignUpdate, token: Option<&Token>) -> Result<(), ApiError> {
    fetch_form_unit(Verb::Patch, &campaign_path(id), token, &update.form_fields()).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_ngo_campaigns(ngo_id: &str, token: Option<&Token>) -> Result<Vec<Campaign>, ApiError> {
    fetch_json(Verb::Get, &ngo_campaigns_path(ngo_id), token, NO_BODY).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_ngo(id: &str, token: Option<&Token>) -> Result<Ngo, ApiError> {
    fetch_json(Verb::Get, &ngo_path(id), token, NO_BODY).await
}

/// Save an NGO's text profile fields; existing images are left alone.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn update_ngo_profile(id: &str, update: &NgoProfileUpdate, token: Option<&Token>) -> Result<(), ApiError> {
    fetch_form_unit(Verb::Patch, &ngo_update_path(id), token, &update.form_fields()).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_ngo_statistics(id: &str, token: Option<&Token>) -> Result<NgoStatistics, ApiError> {
    fetch_json(Verb::Get, &ngo_statistics_path(id), token, NO_BODY).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_ngo_donations(id: &str, token: Option<&Token>) -> Result<Vec<Donation>, ApiError> {
    fetch_json(Verb::Get, &ngo_donations_path(id), token, NO_BODY).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_donor_summary(id: &str, token: Option<&Token>) -> Result<DonorSummary, ApiError> {
    fetch_json(Verb::Get, &donor_summary_path(id), token, NO_BODY).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_donor_profile(token: Option<&Token>) -> Result<DonorAccount, ApiError> {
    fetch_json(Verb::Get, DONOR_ME_PATH, token, NO_BODY).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn update_donor_profile(update: &ProfileUpdate, token: Option<&Token>) -> Result<(), ApiError> {
    fetch_unit(Verb::Put, DONOR_ME_PATH, token, Some(update)).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails, e.g. a wrong current password.
pub async fn change_password(change: &PasswordChange, token: Option<&Token>) -> Result<(), ApiError> {
    fetch_unit(Verb::Put, DONOR_PASSWORD_PATH, token, Some(change)).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn list_payment_methods(token: Option<&Token>) -> Result<Vec<PaymentMethod>, ApiError> {
    fetch_json(Verb::Get, PAYMENT_METHODS_PATH, token, NO_BODY).await
}

/// Save a new payment method; the backend echoes the stored record.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn add_payment_method(method: &NewPaymentMethod, token: Option<&Token>) -> Result<PaymentMethod, ApiError> {
    fetch_json(Verb::Post, PAYMENT_METHODS_PATH, token, Some(method)).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn remove_payment_method(id: &str, token: Option<&Token>) -> Result<(), ApiError> {
    fetch_unit(Verb::Delete, &payment_method_path(id), token, NO_BODY).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn set_default_payment_method(id: &str, token: Option<&Token>) -> Result<(), ApiError> {
    let empty = serde_json::json!({});
    fetch_unit(Verb::Patch, &default_payment_method_path(id), token, Some(&empty)).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails. The backend echoes the
/// stored schedule, including the next charge date when one is planned.
pub async fn save_recurring_donation(
    settings: &RecurringDonation,
    token: Option<&Token>,
) -> Result<RecurringDonation, ApiError> {
    fetch_json(Verb::Post, RECURRING_DONATION_PATH, token, Some(settings)).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn save_notification_preferences(
    preferences: &NotificationPreferences,
    token: Option<&Token>,
) -> Result<(), ApiError> {
    fetch_unit(Verb::Patch, NOTIFICATIONS_PATH, token, Some(preferences)).await
}
