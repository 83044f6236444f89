use crate::assets;
use crate::auth as auth_service;
use crate::client::ApiClient;
use crate::config;
use crate::state;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;

mod auth;
mod bookings;
mod notifications;
mod spaces;

pub fn app(config: config::AppConfig) -> Router {
    let auth = auth_service::AuthState::from_config(&config)
        .unwrap_or_else(|err| panic!("invalid auth configuration: {err}"));
    let client = ApiClient::new(config.api_base_url.clone());
    let state = state::AppState {
        config,
        auth,
        client,
    };
    Router::new()
        .route("/", get(spaces::dashboard))
        .route("/login", get(auth::login_form).post(auth::login_submit))
        .route("/logout", post(auth::logout))
        .route("/bookings", get(bookings::booking_list))
        .route(
            "/bookings/new",
            get(bookings::booking_new).post(bookings::booking_create),
        )
        .route("/api/bookings/{id}/approve", post(bookings::booking_approve))
        .route("/api/bookings/{id}/reject", post(bookings::booking_reject))
        .route("/notifications", get(notifications::notification_list))
        .route(
            "/api/notifications/{id}/read",
            post(notifications::notification_mark_read),
        )
        .route("/static/style.css", get(assets::stylesheet))
        .route(
            "/static/features/booking_actions.js",
            get(assets::booking_actions_script),
        )
        .route(
            "/static/features/login_prefill.js",
            get(assets::login_prefill_script),
        )
        .route(
            "/static/features/notifications.js",
            get(assets::notifications_script),
        )
        .route("/health", get(health))
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(state, auth::auth_middleware))
}

pub(crate) async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(non_snake_case)]
pub(crate) mod tests {
    use super::*;
    use crate::templates;
    use askama::Template as _;
    use axum::Json;
    use axum::body::Body;
    use axum::body::to_bytes;
    use axum::extract::Path as AxumPath;
    use axum::extract::Query;
    use axum::http::Request;
    use axum::http::StatusCode;
    use axum::http::header::{COOKIE, LOCATION, SET_COOKIE};
    use base64::{URL_SAFE_NO_PAD, encode_config};
    use jwt_simple::algorithms::MACLike;
    use jwt_simple::prelude::{Claims, Duration as JwtDuration, HS256Key};
    use serde_json::Value as JsonValue;
    use serde_json::from_slice as json_from_slice;
    use std::collections::HashMap;
    use time::Duration;
    use tower::ServiceExt;

    #[tokio::test]
    async fn app__should_return_ok_on_health_endpoint() {
        // Given
        let app = app(config::AppConfig::default());

        // When
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("request failed");

        // Then
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        assert_eq!(body.as_ref(), b"ok");
    }

    #[tokio::test]
    async fn auth_middleware__should_redirect_html_when_missing_cookie() {
        // Given
        let app_config = auth_app_config(unreachable_backend(), b"auth-redirect-secret");

        // When
        let response = app(app_config)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .expect("request failed");

        // Then
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers().get(LOCATION).expect("location header");
        assert_eq!(location, "/login");
    }

    #[tokio::test]
    async fn auth_middleware__should_return_json_unauthorized_for_api() {
        // Given
        let app_config = auth_app_config(unreachable_backend(), b"auth-api-secret");

        // When
        let response = app(app_config)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/bookings/bk-1/approve")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("request failed");

        // Then
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let payload: JsonValue = json_from_slice(&body).expect("parse json");
        assert_eq!(payload["error"], "unauthorized");
    }

    #[tokio::test]
    async fn auth_middleware__should_allow_valid_cookie() {
        // Given
        let key_bytes = b"auth-valid-secret";
        let app_config = auth_app_config(unreachable_backend(), key_bytes);
        let cookie = session_cookie(&app_config, key_bytes, "manager@shagaf.com");

        // When
        let response = app(app_config)
            .oneshot(
                Request::builder()
                    .uri("/bookings")
                    .header(COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("request failed");

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("manager@shagaf.com"));
    }

    #[tokio::test]
    async fn login__should_accept_any_nonempty_credentials() {
        // Given
        let app_config = auth_app_config(unreachable_backend(), b"auth-login-secret");
        let form = "email=anything%40example.com&password=whatever&next=%2Fbookings";

        // When
        let response = app(app_config)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from(form))
                    .unwrap(),
            )
            .await
            .expect("request failed");

        // Then
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(LOCATION).expect("location header"),
            "/bookings"
        );
        let cookie = response.headers().get(SET_COOKIE).expect("set-cookie");
        let cookie = cookie.to_str().expect("cookie header");
        assert!(cookie.contains("shagaf_auth="));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
    }

    #[tokio::test]
    async fn login__should_reject_empty_fields() {
        // Given
        let app_config = auth_app_config(unreachable_backend(), b"auth-login-empty");
        let form = "email=&password=";

        // When
        let response = app(app_config)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from(form))
                    .unwrap(),
            )
            .await
            .expect("request failed");

        // Then
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_string(response).await;
        assert!(body.contains("Please enter both email and password."));
    }

    #[tokio::test]
    async fn logout__should_clear_cookie() {
        // Given
        let app_config = auth_app_config(unreachable_backend(), b"auth-logout-secret");

        // When
        let response = app(app_config)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/logout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("request failed");

        // Then
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(LOCATION).expect("location header"),
            "/login"
        );
        let cookie = response.headers().get(SET_COOKIE).expect("set-cookie");
        let cookie = cookie.to_str().expect("cookie header");
        assert!(cookie.contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn booking_list__should_show_only_the_filtered_status() {
        // Given
        let backend = spawn_backend(bookings_backend()).await;
        let key_bytes = b"bookings-filter-secret";
        let app_config = auth_app_config(backend, key_bytes);
        let cookie = session_cookie(&app_config, key_bytes, "manager@shagaf.com");

        // When
        let response = app(app_config)
            .oneshot(
                Request::builder()
                    .uri("/bookings?status=CONFIRMED")
                    .header(COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("request failed");

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Nadia"));
        assert!(body.contains("https://cdn.example/proof.png"));
        assert!(!body.contains("Amr"));
    }

    #[tokio::test]
    async fn booking_list__should_default_to_pending_requests() {
        // Given
        let backend = spawn_backend(bookings_backend()).await;
        let key_bytes = b"bookings-default-secret";
        let app_config = auth_app_config(backend, key_bytes);
        let cookie = session_cookie(&app_config, key_bytes, "manager@shagaf.com");

        // When
        let response = app(app_config)
            .oneshot(
                Request::builder()
                    .uri("/bookings")
                    .header(COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("request failed");

        // Then
        let body = body_string(response).await;
        assert!(body.contains("Amr"));
        assert!(body.contains("data-approve=\"bk-1\""));
        assert!(!body.contains("Nadia"));
    }

    #[tokio::test]
    async fn booking_approve__should_answer_with_the_confirmed_status() {
        // Given
        let backend = spawn_backend(bookings_backend()).await;
        let key_bytes = b"approve-secret";
        let app_config = auth_app_config(backend, key_bytes);
        let cookie = session_cookie(&app_config, key_bytes, "manager@shagaf.com");

        // When
        let response = app(app_config)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/bookings/bk-1/approve")
                    .header(COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("request failed");

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let action: bookings::BookingActionResponse = json_from_slice(&body).expect("parse json");
        assert_eq!(action.id, "bk-1");
        assert_eq!(action.status, "CONFIRMED");
    }

    #[tokio::test]
    async fn booking_reject__should_propagate_backend_failures() {
        // Given
        let backend = spawn_backend(bookings_backend()).await;
        let key_bytes = b"reject-secret";
        let app_config = auth_app_config(backend, key_bytes);
        let cookie = session_cookie(&app_config, key_bytes, "manager@shagaf.com");

        // When: bk-404 is unknown to the fixture backend
        let response = app(app_config)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/bookings/bk-404/reject")
                    .header(COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("request failed");

        // Then
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let payload: JsonValue = json_from_slice(&body).expect("parse json");
        assert_eq!(payload["error"], "Failed to reject booking.");
    }

    #[tokio::test]
    async fn dashboard__should_render_rooms_and_roofs() {
        // Given
        let backend = spawn_backend(spaces_backend()).await;
        let key_bytes = b"dashboard-secret";
        let app_config = auth_app_config(backend, key_bytes);
        let cookie = session_cookie(&app_config, key_bytes, "manager@shagaf.com");

        // When
        let response = app(app_config)
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("request failed");

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Small Study Room"));
        assert!(body.contains("Roof Garden"));
    }

    #[tokio::test]
    async fn dashboard__should_render_the_selected_space_panel() {
        // Given
        let backend = spawn_backend(spaces_backend()).await;
        let key_bytes = b"dashboard-panel-secret";
        let app_config = auth_app_config(backend, key_bytes);
        let cookie = session_cookie(&app_config, key_bytes, "manager@shagaf.com");

        // When
        let response = app(app_config)
            .oneshot(
                Request::builder()
                    .uri("/?tab=roof&selected=roof-garden")
                    .header(COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("request failed");

        // Then
        let body = body_string(response).await;
        assert!(body.contains("Current status"));
        assert!(body.contains("20 people"));
    }

    #[tokio::test]
    async fn notifications__should_render_the_manager_feed() {
        // Given
        let backend = spawn_backend(notifications_backend()).await;
        let key_bytes = b"notifications-secret";
        let app_config = auth_app_config(backend, key_bytes);
        let cookie = session_cookie(&app_config, key_bytes, "manager@shagaf.com");

        // When
        let response = app(app_config)
            .oneshot(
                Request::builder()
                    .uri("/notifications")
                    .header(COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("request failed");

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("A new booking request is waiting."));
        assert!(body.contains("data-mark-read=\"noti-1\""));
    }

    #[tokio::test]
    async fn notification_mark_read__should_answer_with_the_read_flag() {
        // Given
        let backend = spawn_backend(notifications_backend()).await;
        let key_bytes = b"mark-read-secret";
        let app_config = auth_app_config(backend, key_bytes);
        let cookie = session_cookie(&app_config, key_bytes, "manager@shagaf.com");

        // When
        let response = app(app_config)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/notifications/noti-1/read")
                    .header(COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("request failed");

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let read: notifications::NotificationReadResponse =
            json_from_slice(&body).expect("parse json");
        assert_eq!(read.id, "noti-1");
        assert!(read.is_read);
    }

    #[tokio::test]
    async fn booking_new__should_redirect_when_no_space_is_selected() {
        // Given
        let key_bytes = b"booking-new-secret";
        let app_config = auth_app_config(unreachable_backend(), key_bytes);
        let cookie = session_cookie(&app_config, key_bytes, "manager@shagaf.com");

        // When
        let response = app(app_config)
            .oneshot(
                Request::builder()
                    .uri("/bookings/new")
                    .header(COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("request failed");

        // Then
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(LOCATION).expect("location header"),
            "/"
        );
    }

    #[tokio::test]
    async fn booking_create__should_post_to_the_backend_and_redirect() {
        // Given
        let backend = spawn_backend(bookings_backend()).await;
        let key_bytes = b"booking-create-secret";
        let app_config = auth_app_config(backend, key_bytes);
        let cookie = session_cookie(&app_config, key_bytes, "manager@shagaf.com");
        let form = "space_kind=room&space_id=Small%20Study%20Room&guest_name=Amr&number_of_guests=3\
                    &date=2025-03-01&start_time=10%3A00&end_time=12%3A00&total_price=150";

        // When
        let response = app(app_config)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/bookings/new")
                    .header(COOKIE, cookie)
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from(form))
                    .unwrap(),
            )
            .await
            .expect("request failed");

        // Then
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(LOCATION).expect("location header"),
            "/bookings?status=ALL"
        );
    }

    #[tokio::test]
    async fn booking_create__should_reject_a_malformed_price() {
        // Given
        let key_bytes = b"booking-price-secret";
        let app_config = auth_app_config(unreachable_backend(), key_bytes);
        let cookie = session_cookie(&app_config, key_bytes, "manager@shagaf.com");
        let form = "space_kind=room&space_id=r1&guest_name=&number_of_guests=\
                    &date=2025-03-01&start_time=10%3A00&end_time=12%3A00&total_price=abc";

        // When
        let response = app(app_config)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/bookings/new")
                    .header(COOKIE, cookie)
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from(form))
                    .unwrap(),
            )
            .await
            .expect("request failed");

        // Then
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_string(response).await;
        assert!(body.contains("Total price must be a number."));
    }

    #[test]
    fn render_bookings__should_offer_actions_only_for_pending_cards() {
        // Given
        let template = templates::BookingsTemplate {
            app_name: "Shagaf".to_string(),
            manager: "manager@shagaf.com".to_string(),
            active_page: "bookings",
            filter: "ALL".to_string(),
            bookings: vec![
                templates::BookingCard {
                    id: "bk-1".to_string(),
                    title: "Amr".to_string(),
                    space: "Small Study Room".to_string(),
                    branch: "Maadi".to_string(),
                    date: "2025-03-01".to_string(),
                    start_time: "10:00".to_string(),
                    end_time: "12:00".to_string(),
                    guests: "3".to_string(),
                    total_price: "150 EGP".to_string(),
                    status: "PENDING".to_string(),
                    status_class: "status-pending",
                    payment_proof_url: String::new(),
                    pending: true,
                },
                templates::BookingCard {
                    id: "bk-2".to_string(),
                    title: "Nadia".to_string(),
                    space: "Roof Garden".to_string(),
                    branch: "Maadi".to_string(),
                    date: "2025-03-02".to_string(),
                    start_time: "18:00".to_string(),
                    end_time: "20:00".to_string(),
                    guests: "N/A".to_string(),
                    total_price: "200 EGP".to_string(),
                    status: "REJECTED".to_string(),
                    status_class: "status-rejected",
                    payment_proof_url: String::new(),
                    pending: false,
                },
            ],
        };

        // When
        let html = template.render().unwrap();

        // Then
        assert!(html.contains(r#"data-approve="bk-1""#));
        assert!(html.contains(r#"data-reject="bk-1""#));
        assert!(!html.contains(r#"data-approve="bk-2""#));
        assert!(html.contains("status-rejected"));
    }

    #[test]
    fn render_login__should_list_branch_credentials() {
        // Given
        let template = templates::LoginTemplate {
            app_name: "Shagaf".to_string(),
            error: String::new(),
            next: "/".to_string(),
            branches: vec![templates::BranchOption {
                id: "b1".to_string(),
                name: "Maadi".to_string(),
                email: "admin@maadi".to_string(),
                password: "secret".to_string(),
            }],
        };

        // When
        let html = template.render().unwrap();

        // Then
        assert!(html.contains(r#"data-email="admin@maadi""#));
        assert!(html.contains(r#"name="email""#));
        assert!(html.contains(r#"name="password""#));
    }

    #[test]
    fn render_dashboard__should_mark_the_active_tab() {
        // Given
        let template = templates::DashboardTemplate {
            app_name: "Shagaf".to_string(),
            manager: String::new(),
            active_page: "dashboard",
            error: String::new(),
            active_tab: "roof".to_string(),
            rooms: Vec::new(),
            roofs: vec![templates::SpaceCard {
                id: "roof-garden".to_string(),
                name: "Roof Garden".to_string(),
                capacity: 20,
                status: "Available".to_string(),
            }],
            selected: Some(templates::SpaceDetail {
                id: "roof-garden".to_string(),
                name: "Roof Garden".to_string(),
                kind: "Roof".to_string(),
                capacity: 20,
                status: "Available".to_string(),
                available: true,
            }),
        };

        // When
        let html = template.render().unwrap();

        // Then
        assert!(html.contains(r#"href="/?tab=roof" class="tab active""#));
        assert!(html.contains("Roof Garden"));
        assert!(html.contains("No pending booking requests for this space."));
    }

    pub(crate) async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind backend listener");
        let addr = listener.local_addr().expect("backend addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("backend server");
        });
        format!("http://{addr}")
    }

    fn bookings_backend() -> Router {
        Router::new()
            .route(
                "/bookings",
                get(|| async {
                    Json(serde_json::json!({
                        "bookings": [
                            {
                                "id": "bk-1",
                                "guestName": "Amr",
                                "status": "PENDING",
                                "roomName": "Small Study Room",
                                "branchName": "Maadi",
                                "date": "2025-03-01",
                                "startTime": "10:00",
                                "endTime": "12:00",
                                "totalPrice": 150.0,
                                "numberOfGuests": 3
                            },
                            {
                                "id": "bk-2",
                                "guestName": "Nadia",
                                "status": "CONFIRMED",
                                "depositScreenshotUrl": "https://cdn.example/proof.png"
                            }
                        ]
                    }))
                }),
            )
            .route(
                "/booking/{id}/approve",
                post(|AxumPath(id): AxumPath<String>| async move {
                    if id != "bk-1" {
                        return Err(StatusCode::NOT_FOUND);
                    }
                    Ok(Json(serde_json::json!({ "status": "CONFIRMED" })))
                }),
            )
            .route(
                "/booking/{id}/reject",
                post(|AxumPath(id): AxumPath<String>| async move {
                    if id != "bk-1" {
                        return Err(StatusCode::NOT_FOUND);
                    }
                    Ok(Json(serde_json::json!({ "status": "REJECTED" })))
                }),
            )
            .route(
                "/api/bookings/create",
                post(|Json(payload): Json<JsonValue>| async move {
                    if payload["roomId"] != "Small Study Room" {
                        return Err(StatusCode::BAD_REQUEST);
                    }
                    Ok(Json(serde_json::json!({ "id": "bk-3", "status": "PENDING" })))
                }),
            )
    }

    fn spaces_backend() -> Router {
        Router::new()
            .route(
                "/api/rooms/{id}",
                get(|AxumPath(id): AxumPath<String>| async move {
                    Json(serde_json::json!({
                        "id": id,
                        "name-en": "Small Study Room",
                        "capacity": 4,
                        "status": "Available"
                    }))
                }),
            )
            .route(
                "/roof",
                get(|| async {
                    Json(serde_json::json!({
                        "roofs": [
                            { "id": "roof-garden", "name": "Roof Garden", "capacity": 20 }
                        ]
                    }))
                }),
            )
    }

    fn notifications_backend() -> Router {
        Router::new()
            .route(
                "/api/notifications/my-notifications",
                get(|Query(params): Query<HashMap<String, String>>| async move {
                    if params.get("userId").map(String::as_str) != Some("manager@shagaf.com") {
                        return Err(StatusCode::BAD_REQUEST);
                    }
                    Ok(Json(serde_json::json!({
                        "notifications": [
                            {
                                "id": "noti-1",
                                "userId": "manager@shagaf.com",
                                "text": "A new booking request is waiting.",
                                "type": "BOOKING",
                                "isRead": false,
                                "createdAt": "2025-03-01T09:00:00Z"
                            }
                        ]
                    })))
                }),
            )
            .route(
                "/api/notifications/mark-as-read",
                post(|Query(params): Query<HashMap<String, String>>| async move {
                    if params.get("notiId").map(String::as_str) != Some("noti-1") {
                        return Err(StatusCode::BAD_REQUEST);
                    }
                    Ok(Json(serde_json::json!({ "ok": true })))
                }),
            )
    }

    fn unreachable_backend() -> String {
        // nothing listens on the discard port
        "http://127.0.0.1:9".to_string()
    }

    fn auth_app_config(api_base_url: String, key_bytes: &[u8]) -> config::AppConfig {
        let key = encode_config(key_bytes, URL_SAFE_NO_PAD);
        config::AppConfig {
            api_base_url,
            app_name: "Shagaf".to_string(),
            room_ids: vec!["Small Study Room".to_string()],
            auth: Some(config::AuthConfig {
                key,
                token_ttl: Duration::days(1),
                cookie_name: "shagaf_auth".to_string(),
                cookie_secure: false,
            }),
        }
    }

    fn session_cookie(
        config: &config::AppConfig,
        key_bytes: &[u8],
        email: &str,
    ) -> String {
        let token = auth_token(key_bytes, &config.app_name, email);
        format!("shagaf_auth={token}")
    }

    fn auth_token(key_bytes: &[u8], issuer: &str, subject: &str) -> String {
        let key = HS256Key::from_bytes(key_bytes);
        let claims = Claims::create(JwtDuration::from_hours(1))
            .with_issuer(issuer)
            .with_subject(subject);
        key.authenticate(claims).expect("authenticate token")
    }

    async fn body_string(response: axum::response::Response) -> String {
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        String::from_utf8(body.to_vec()).expect("utf8 body")
    }
}
