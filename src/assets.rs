pub(crate) async fn stylesheet() -> axum::response::Response {
    const CSS_CONTENT: &str = include_str!("../static/style.css");
    axum::response::Response::builder()
        .status(200)
        .header("content-type", "text/css")
        .header("cache-control", "public, max-age=3600")
        .body(CSS_CONTENT.into())
        .unwrap()
}

pub(crate) async fn booking_actions_script() -> axum::response::Response {
    const BOOKING_ACTIONS_JS: &str = include_str!("../static/features/booking_actions.js");
    axum::response::Response::builder()
        .status(200)
        .header("content-type", "application/javascript")
        .header("cache-control", "public, max-age=3600")
        .body(BOOKING_ACTIONS_JS.into())
        .unwrap()
}

pub(crate) async fn login_prefill_script() -> axum::response::Response {
    const LOGIN_PREFILL_JS: &str = include_str!("../static/features/login_prefill.js");
    axum::response::Response::builder()
        .status(200)
        .header("content-type", "application/javascript")
        .header("cache-control", "public, max-age=3600")
        .body(LOGIN_PREFILL_JS.into())
        .unwrap()
}

pub(crate) async fn notifications_script() -> axum::response::Response {
    const NOTIFICATIONS_JS: &str = include_str!("../static/features/notifications.js");
    axum::response::Response::builder()
        .status(200)
        .header("content-type", "application/javascript")
        .header("cache-control", "public, max-age=3600")
        .body(NOTIFICATIONS_JS.into())
        .unwrap()
}
