//! HTTP client for the hosted booking backend. One method per endpoint, no
//! retries, no caching; the server's answer is taken at face value.
//!
//! List endpoints are decoded leniently: the backend sometimes returns a bare
//! array and sometimes wraps it in an object, and individual entries that do
//! not decode are skipped rather than failing the whole page.

use crate::types::{Booking, Branch, CreateBookingRequest, Notification, Room, Roof};

use reqwest::Method;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug)]
pub enum ApiError {
    Request(reqwest::Error),
    Status(StatusCode),
    Decode(reqwest::Error),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Request(err) => write!(f, "request failed: {err}"),
            ApiError::Status(status) => write!(f, "backend returned {status}"),
            ApiError::Decode(err) => write!(f, "failed to decode response: {err}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    bearer: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer: None,
        }
    }

    /// Attaches the session token forwarded as `Authorization: Bearer`.
    #[must_use]
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Value, ApiError> {
        let request = self
            .request(Method::POST, "/auth/login")
            .json(&serde_json::json!({ "email": email, "password": password }));
        let response = expect_ok(request).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    pub async fn room(&self, room_id: &str) -> Result<Room, ApiError> {
        let path = format!("/api/rooms/{}", urlencoding::encode(room_id));
        let response = expect_ok(self.request(Method::GET, &path)).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    /// Fetches rooms one identifier at a time, skipping the ones the backend
    /// rejects. There is no list endpoint to fall back on.
    pub async fn rooms(&self, room_ids: &[String]) -> Vec<Room> {
        let mut rooms = Vec::with_capacity(room_ids.len());
        for room_id in room_ids {
            match self.room(room_id).await {
                Ok(room) => rooms.push(room),
                Err(err) => eprintln!("failed to fetch room '{room_id}': {err}"),
            }
        }
        rooms
    }

    pub async fn roofs(&self) -> Result<Vec<Roof>, ApiError> {
        let response = expect_ok(self.request(Method::GET, "/roof")).await?;
        let value: Value = response.json().await.map_err(ApiError::Decode)?;
        Ok(decode_list(value, &["roofs", "data"]))
    }

    pub async fn branches(&self) -> Result<Vec<Branch>, ApiError> {
        let response = expect_ok(self.request(Method::GET, "/api/branches")).await?;
        let value: Value = response.json().await.map_err(ApiError::Decode)?;
        Ok(decode_list(value, &["branches", "data"]))
    }

    pub async fn bookings(&self) -> Result<Vec<Booking>, ApiError> {
        let response = expect_ok(self.request(Method::GET, "/bookings")).await?;
        let value: Value = response.json().await.map_err(ApiError::Decode)?;
        Ok(decode_list(value, &["bookings", "data"]))
    }

    pub async fn create_booking(&self, booking: &CreateBookingRequest) -> Result<Value, ApiError> {
        let request = self
            .request(Method::POST, "/api/bookings/create")
            .json(booking);
        let response = expect_ok(request).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    pub async fn approve_booking(&self, booking_id: &str) -> Result<(), ApiError> {
        let path = format!("/booking/{}/approve", urlencoding::encode(booking_id));
        expect_ok(self.request(Method::POST, &path)).await?;
        Ok(())
    }

    pub async fn reject_booking(&self, booking_id: &str) -> Result<(), ApiError> {
        let path = format!("/booking/{}/reject", urlencoding::encode(booking_id));
        expect_ok(self.request(Method::POST, &path)).await?;
        Ok(())
    }

    pub async fn notifications(&self, user_id: &str) -> Result<Vec<Notification>, ApiError> {
        let path = format!(
            "/api/notifications/my-notifications?userId={}",
            urlencoding::encode(user_id)
        );
        let response = expect_ok(self.request(Method::GET, &path)).await?;
        let value: Value = response.json().await.map_err(ApiError::Decode)?;
        Ok(decode_list(value, &["notifications", "data"]))
    }

    pub async fn mark_notification_read(&self, notification_id: &str) -> Result<(), ApiError> {
        let path = format!(
            "/api/notifications/mark-as-read?notiId={}",
            urlencoding::encode(notification_id)
        );
        expect_ok(self.request(Method::POST, &path)).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);
        if let Some(token) = &self.bearer {
            request = request.bearer_auth(token);
        }
        request
    }
}

async fn expect_ok(request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
    let response = request.send().await.map_err(ApiError::Request)?;
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

/// Accepts either a bare array or an object wrapping one under any of `keys`.
fn decode_list<T: DeserializeOwned>(value: Value, keys: &[&str]) -> Vec<T> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => keys
            .iter()
            .find_map(|key| map.remove(*key))
            .and_then(|nested| match nested {
                Value::Array(items) => Some(items),
                _ => None,
            })
            .unwrap_or_default(),
        _ => Vec::new(),
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                eprintln!("skipping list entry that failed to decode: {err}");
                None
            }
        })
        .collect()
}
