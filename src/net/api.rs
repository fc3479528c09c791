//! API client for the auction backend.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns an explicit `Result<_, ApiError>`; non-success statuses
//! become `ApiError::Status` with the message pulled out of the backend's
//! JSON error body. Callers that want to absorb failures (the session store)
//! pattern-match instead of relying on panics or swallowed errors.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::cookie::{CookieStore, Jar};
use uuid::Uuid;

use super::types::{
    CreateItemResponse, ErrorBody, ItemImages, LoginResponse, NewSaleItem, PlaceBidResponse,
    RegisterResponse, SaleItemDetail, SaleItemSummary, UploadImageResponse,
};
use crate::config::Config;

/// Cookie the backend stores the session JWT under.
pub const AUTH_COOKIE: &str = "Authorization";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status} for {path}: {message}")]
    Status {
        status: StatusCode,
        path: String,
        message: String,
    },
}

/// HTTP client for the auction backend.
///
/// Owns a cookie jar so the `Authorization` cookie set by login/register is
/// replayed on subsequent calls. Cloning is cheap and shares the jar.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: reqwest::Url,
    jar: Arc<Jar>,
}

impl ApiClient {
    /// Build a client with an empty cookie jar.
    ///
    /// # Errors
    ///
    /// Fails if the configured base URL does not parse or the underlying
    /// HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let mut base_url = reqwest::Url::parse(&config.base_url)
            .map_err(|_| ApiError::InvalidBaseUrl(config.base_url.clone()))?;
        // A trailing slash makes Url::join treat the last segment as a
        // directory, so a base like http://host/app keeps its prefix.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }
        let jar = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .cookie_provider(jar.clone())
            .build()?;
        Ok(Self { http, base_url, jar })
    }

    /// Build a client pre-seeded with a session token, for callers that
    /// persisted one from an earlier login (e.g. via `GAVEL_AUTH_TOKEN`).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ApiClient::new`].
    pub fn with_auth_token(config: &Config, token: &str) -> Result<Self, ApiError> {
        let client = Self::new(config)?;
        client
            .jar
            .add_cookie_str(&format!("{AUTH_COOKIE}={token}; Path=/"), &client.base_url);
        Ok(client)
    }

    /// The session token currently held in the jar, if any. Populated by
    /// [`ApiClient::login`], [`ApiClient::register`], or token seeding.
    #[must_use]
    pub fn auth_token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.base_url)?;
        cookie_value(header.to_str().ok()?, AUTH_COOKIE)
    }

    /// `POST /api/login/check`: succeeds iff the jar holds a valid session
    /// cookie. The backend uses a write-style method for this read-only
    /// check; kept as-is to match its routing.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or any non-success status.
    pub async fn check_login(&self) -> Result<(), ApiError> {
        let response = self.http.post(self.url("/api/login/check")?).send().await?;
        check_status("/api/login/check", response).await?;
        Ok(())
    }

    /// `POST /api/login`. On success the auth cookie lands in the jar.
    ///
    /// # Errors
    ///
    /// Fails on transport errors; bad credentials come back as a 401
    /// `ApiError::Status`.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/api/login")?)
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;
        let response = check_status("/api/login", response).await?;
        Ok(response.json().await?)
    }

    /// `POST /api/register`: creates the account and logs it in (the
    /// backend sets the auth cookie on success).
    ///
    /// # Errors
    ///
    /// Fails on transport errors or when the username is already taken.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<RegisterResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/api/register")?)
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;
        let response = check_status("/api/register", response).await?;
        Ok(response.json().await?)
    }

    /// `GET /api/sale_items`: all items, soonest-ending first.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-success status.
    pub async fn list_items(&self) -> Result<Vec<SaleItemSummary>, ApiError> {
        let response = self.http.get(self.url("/api/sale_items")?).send().await?;
        let response = check_status("/api/sale_items", response).await?;
        Ok(response.json().await?)
    }

    /// `GET /api/sale_item/{id}`: item detail with its top bids.
    ///
    /// # Errors
    ///
    /// Fails on transport errors; an unknown id is a 400 from the backend.
    pub async fn get_item(&self, item_id: Uuid) -> Result<SaleItemDetail, ApiError> {
        let path = format!("/api/sale_item/{item_id}");
        let response = self.http.get(self.url(&path)?).send().await?;
        let response = check_status(&path, response).await?;
        Ok(response.json().await?)
    }

    /// `POST /api/sale_item`: create an auction (requires a session).
    ///
    /// # Errors
    ///
    /// Fails on transport errors, missing/invalid fields, or a missing
    /// session (401).
    pub async fn create_item(&self, item: &NewSaleItem) -> Result<CreateItemResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/api/sale_item")?)
            .json(item)
            .send()
            .await?;
        let response = check_status("/api/sale_item", response).await?;
        Ok(response.json().await?)
    }

    /// `POST /api/sale_item/{id}/bid`: place a bid (requires a session).
    ///
    /// # Errors
    ///
    /// Fails on transport errors; the backend answers 409 when the price
    /// does not beat the current one and 400 when the auction has ended or
    /// the item is unknown.
    pub async fn place_bid(&self, item_id: Uuid, price: i64) -> Result<PlaceBidResponse, ApiError> {
        let path = format!("/api/sale_item/{item_id}/bid");
        let response = self
            .http
            .post(self.url(&path)?)
            .json(&serde_json::json!({ "price": price }))
            .send()
            .await?;
        let response = check_status(&path, response).await?;
        Ok(response.json().await?)
    }

    /// `GET /api/sale_item/images/{id}`: image URLs for an item, in upload
    /// order.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-success status.
    pub async fn item_images(&self, item_id: Uuid) -> Result<Vec<String>, ApiError> {
        let path = format!("/api/sale_item/images/{item_id}");
        let response = self.http.get(self.url(&path)?).send().await?;
        let response = check_status(&path, response).await?;
        let body: ItemImages = response.json().await?;
        Ok(body.images)
    }

    /// `POST /api/img/upload/{id}`: attach an image to a sale item
    /// (requires a session; only the seller may upload).
    ///
    /// # Errors
    ///
    /// Fails on transport errors; the backend answers 403 when the caller
    /// is not the seller and 400 for unknown items or unsupported file
    /// types (only `.jpeg`, `.jpg`, and `.png` are accepted).
    pub async fn upload_image(
        &self,
        item_id: Uuid,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadImageResponse, ApiError> {
        let path = format!("/api/img/upload/{item_id}");
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_owned());
        let form = reqwest::multipart::Form::new().part("image", part);
        let response = self
            .http
            .post(self.url(&path)?)
            .multipart(form)
            .send()
            .await?;
        let response = check_status(&path, response).await?;
        Ok(response.json().await?)
    }

    fn url(&self, path: &str) -> Result<reqwest::Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))
    }
}

/// Map a non-success response to `ApiError::Status`, extracting the message
/// from the backend's JSON error body.
async fn check_status(
    path: &str,
    response: reqwest::Response,
) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body);
    tracing::debug!(%status, path, reason = %message, "request failed");
    Err(ApiError::Status {
        status,
        path: path.to_owned(),
        message,
    })
}

/// Pull the most specific message out of an error body. The backend mixes
/// `detail`, `message`, and `error` keys depending on the endpoint.
pub(crate) fn error_message(body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
        return body.trim().to_owned();
    };
    parsed
        .detail
        .or(parsed.message)
        .or(parsed.error)
        .unwrap_or_else(|| body.trim().to_owned())
}

/// Extract a named cookie's value from a `Cookie` header string.
pub(crate) fn cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_owned())
    })
}
