//! Records as the booking backend serves them. Fields default rather than
//! fail: the backend omits or renames fields freely, and a half-filled record
//! is still worth rendering.

use serde::Deserialize;
use serde::Serialize;

/// Lifecycle status of a booking. `Pending` is the only state the dashboard
/// acts on; `Confirmed` and `Rejected` are terminal. `Completed` appears on
/// the wire for past bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum BookingStatus {
    #[default]
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "CONFIRMED")]
    Confirmed,
    #[serde(rename = "REJECTED")]
    Rejected,
    #[serde(rename = "COMPLETED")]
    Completed,
}

impl BookingStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(Self::Pending),
            "CONFIRMED" => Some(Self::Confirmed),
            "REJECTED" => Some(Self::Rejected),
            "COMPLETED" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Rejected => "REJECTED",
            Self::Completed => "COMPLETED",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Some rooms carry their display name under `name-en` instead of `name`.
    #[serde(default, rename = "name-en")]
    pub name_en: Option<String>,
    #[serde(default)]
    pub branch_id: String,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub price_per_hour: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Roof {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub branch_id: String,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub price_per_hour: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub room_id: Option<String>,
    #[serde(default)]
    pub roof_id: Option<String>,
    #[serde(default)]
    pub branch_id: String,
    #[serde(default)]
    pub branch_name: String,
    #[serde(default)]
    pub room_name: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub deposit_screenshot_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub guest_name: Option<String>,
    #[serde(default)]
    pub number_of_guests: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub related_id: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: String,
}

/// Payload for `POST /api/bookings/create`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roof_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_guests: Option<u32>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub total_price: f64,
}

/// `None` means no filter (the ALL tab).
pub fn filter_by_status(bookings: Vec<Booking>, status: Option<BookingStatus>) -> Vec<Booking> {
    match status {
        Some(status) => bookings
            .into_iter()
            .filter(|booking| booking.status == status)
            .collect(),
        None => bookings,
    }
}

fn default_active() -> bool {
    true
}
