use crate::state;
use crate::templates;
use crate::types::{Booking, BookingStatus, CreateBookingRequest, filter_by_status};

use axum::Json;
use axum::extract::Form;
use axum::extract::Path as AxumPath;
use axum::extract::Query;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::response::Redirect;
use serde::Deserialize;
use serde::Serialize;

use super::auth::authorized_client;
use super::auth::manager_email;

#[derive(Debug, Deserialize)]
pub(crate) struct BookingListQuery {
    status: Option<String>,
}

pub(crate) async fn booking_list(
    State(state): State<state::AppState>,
    headers: HeaderMap,
    Query(query): Query<BookingListQuery>,
) -> templates::BookingsTemplate {
    let manager = manager_email(&state, &headers);
    let client = authorized_client(&state, &headers);

    let bookings = match client.bookings().await {
        Ok(bookings) => bookings,
        Err(err) => {
            eprintln!("failed to fetch bookings: {err}");
            Vec::new()
        }
    };

    let (filter_label, filter) = resolve_filter(query.status.as_deref());
    let bookings = filter_by_status(bookings, filter)
        .into_iter()
        .map(booking_card)
        .collect();

    templates::BookingsTemplate {
        app_name: state.config.app_name,
        manager,
        active_page: "bookings",
        filter: filter_label,
        bookings,
    }
}

/// PENDING is the tab managers land on; anything unrecognized collapses back
/// to it.
fn resolve_filter(raw: Option<&str>) -> (String, Option<BookingStatus>) {
    match raw {
        Some("ALL") => ("ALL".to_string(), None),
        Some(value) => match BookingStatus::parse(value) {
            Some(status) => (value.to_string(), Some(status)),
            None => ("PENDING".to_string(), Some(BookingStatus::Pending)),
        },
        None => ("PENDING".to_string(), Some(BookingStatus::Pending)),
    }
}

fn booking_card(booking: Booking) -> templates::BookingCard {
    let title = booking
        .guest_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| {
            if booking.user_email.is_empty() {
                "Guest".to_string()
            } else {
                booking.user_email.clone()
            }
        });
    let space = booking
        .room_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "Room".to_string());
    let branch = if booking.branch_name.is_empty() {
        "Branch".to_string()
    } else {
        booking.branch_name
    };
    let guests = booking
        .number_of_guests
        .map(|count| count.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    templates::BookingCard {
        id: booking.id,
        title,
        space,
        branch,
        date: booking.date,
        start_time: booking.start_time,
        end_time: booking.end_time,
        guests,
        total_price: format!("{} EGP", booking.total_price),
        status: booking.status.to_string(),
        status_class: status_class(booking.status),
        payment_proof_url: booking.deposit_screenshot_url.unwrap_or_default(),
        pending: booking.status == BookingStatus::Pending,
    }
}

fn status_class(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Confirmed => "status-confirmed",
        BookingStatus::Rejected => "status-rejected",
        BookingStatus::Pending | BookingStatus::Completed => "status-pending",
    }
}

#[derive(Serialize, Deserialize)]
pub(crate) struct BookingActionResponse {
    pub(crate) id: String,
    pub(crate) status: String,
}

#[derive(Serialize)]
pub(crate) struct ErrorResponse {
    pub(crate) error: &'static str,
}

/// The booking card script PATCHes the card in place from this response; the
/// new status is asserted locally because the backend's answer is trusted.
pub(crate) async fn booking_approve(
    State(state): State<state::AppState>,
    headers: HeaderMap,
    AxumPath(booking_id): AxumPath<String>,
) -> Result<Json<BookingActionResponse>, (StatusCode, Json<ErrorResponse>)> {
    let client = authorized_client(&state, &headers);
    match client.approve_booking(&booking_id).await {
        Ok(()) => Ok(Json(BookingActionResponse {
            id: booking_id,
            status: BookingStatus::Confirmed.to_string(),
        })),
        Err(err) => {
            eprintln!("failed to approve booking {booking_id}: {err}");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Failed to approve booking.",
                }),
            ))
        }
    }
}

pub(crate) async fn booking_reject(
    State(state): State<state::AppState>,
    headers: HeaderMap,
    AxumPath(booking_id): AxumPath<String>,
) -> Result<Json<BookingActionResponse>, (StatusCode, Json<ErrorResponse>)> {
    let client = authorized_client(&state, &headers);
    match client.reject_booking(&booking_id).await {
        Ok(()) => Ok(Json(BookingActionResponse {
            id: booking_id,
            status: BookingStatus::Rejected.to_string(),
        })),
        Err(err) => {
            eprintln!("failed to reject booking {booking_id}: {err}");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Failed to reject booking.",
                }),
            ))
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct NewBookingQuery {
    room: Option<String>,
    roof: Option<String>,
}

pub(crate) async fn booking_new(
    State(state): State<state::AppState>,
    headers: HeaderMap,
    Query(query): Query<NewBookingQuery>,
) -> Result<templates::NewBookingTemplate, Redirect> {
    let (space_kind, space_id) = match (query.room, query.roof) {
        (Some(room), _) => ("room".to_string(), room),
        (None, Some(roof)) => ("roof".to_string(), roof),
        (None, None) => return Err(Redirect::to("/")),
    };

    Ok(templates::NewBookingTemplate {
        app_name: state.config.app_name.clone(),
        manager: manager_email(&state, &headers),
        active_page: "dashboard",
        space_kind,
        space_id,
        error: String::new(),
    })
}

#[derive(Debug, Deserialize)]
pub(crate) struct NewBookingForm {
    space_kind: String,
    space_id: String,
    guest_name: String,
    number_of_guests: String,
    date: String,
    start_time: String,
    end_time: String,
    total_price: String,
}

pub(crate) async fn booking_create(
    State(state): State<state::AppState>,
    headers: HeaderMap,
    Form(form): Form<NewBookingForm>,
) -> Result<Redirect, (StatusCode, templates::NewBookingTemplate)> {
    let manager = manager_email(&state, &headers);
    let client = authorized_client(&state, &headers);

    let render_error = |status: StatusCode, message: &str| {
        (
            status,
            templates::NewBookingTemplate {
                app_name: state.config.app_name.clone(),
                manager: manager.clone(),
                active_page: "dashboard",
                space_kind: form.space_kind.clone(),
                space_id: form.space_id.clone(),
                error: message.to_string(),
            },
        )
    };

    if form.date.trim().is_empty()
        || form.start_time.trim().is_empty()
        || form.end_time.trim().is_empty()
    {
        return Err(render_error(
            StatusCode::BAD_REQUEST,
            "Date, start time and end time are required.",
        ));
    }
    let total_price: f64 = match form.total_price.trim().parse() {
        Ok(price) => price,
        Err(_) => {
            return Err(render_error(
                StatusCode::BAD_REQUEST,
                "Total price must be a number.",
            ));
        }
    };
    let number_of_guests = match form.number_of_guests.trim() {
        "" => None,
        raw => match raw.parse::<u32>() {
            Ok(count) => Some(count),
            Err(_) => {
                return Err(render_error(
                    StatusCode::BAD_REQUEST,
                    "Number of guests must be a whole number.",
                ));
            }
        },
    };

    let guest_name = form.guest_name.trim();
    let request = CreateBookingRequest {
        room_id: (form.space_kind == "room").then(|| form.space_id.clone()),
        roof_id: (form.space_kind == "roof").then(|| form.space_id.clone()),
        guest_name: (!guest_name.is_empty()).then(|| guest_name.to_string()),
        number_of_guests,
        date: form.date.trim().to_string(),
        start_time: form.start_time.trim().to_string(),
        end_time: form.end_time.trim().to_string(),
        total_price,
    };

    match client.create_booking(&request).await {
        Ok(_) => Ok(Redirect::to("/bookings?status=ALL")),
        Err(err) => {
            eprintln!("failed to create booking: {err}");
            Err(render_error(
                StatusCode::BAD_GATEWAY,
                "Failed to create booking. Please try again.",
            ))
        }
    }
}
