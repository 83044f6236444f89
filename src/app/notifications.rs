use crate::state;
use crate::templates;
use crate::types::Notification;

use axum::Json;
use axum::extract::Path as AxumPath;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::auth::authorized_client;
use super::auth::manager_email;

pub(crate) async fn notification_list(
    State(state): State<state::AppState>,
    headers: HeaderMap,
) -> templates::NotificationsTemplate {
    let manager = manager_email(&state, &headers);
    let client = authorized_client(&state, &headers);

    // Notifications are addressed to the signed-in manager; with auth
    // disabled there is nobody to fetch them for.
    let notifications = if manager.is_empty() {
        Vec::new()
    } else {
        match client.notifications(&manager).await {
            Ok(notifications) => notifications,
            Err(err) => {
                eprintln!("failed to fetch notifications for '{manager}': {err}");
                Vec::new()
            }
        }
    };

    templates::NotificationsTemplate {
        app_name: state.config.app_name,
        manager,
        active_page: "notifications",
        notifications: notifications.into_iter().map(notification_row).collect(),
    }
}

fn notification_row(notification: Notification) -> templates::NotificationRow {
    templates::NotificationRow {
        id: notification.id,
        text: notification.text,
        kind: notification.kind,
        created_at: notification.created_at,
        is_read: notification.is_read,
    }
}

#[derive(Serialize, Deserialize)]
pub(crate) struct NotificationReadResponse {
    pub(crate) id: String,
    pub(crate) is_read: bool,
}

#[derive(Serialize)]
pub(crate) struct ErrorResponse {
    pub(crate) error: &'static str,
}

pub(crate) async fn notification_mark_read(
    State(state): State<state::AppState>,
    headers: HeaderMap,
    AxumPath(notification_id): AxumPath<String>,
) -> Result<Json<NotificationReadResponse>, (StatusCode, Json<ErrorResponse>)> {
    let client = authorized_client(&state, &headers);
    match client.mark_notification_read(&notification_id).await {
        Ok(()) => Ok(Json(NotificationReadResponse {
            id: notification_id,
            is_read: true,
        })),
        Err(err) => {
            eprintln!("failed to mark notification {notification_id} as read: {err}");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Failed to mark notification as read.",
                }),
            ))
        }
    }
}
