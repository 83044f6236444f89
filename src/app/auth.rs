use crate::auth as auth_service;
use crate::client::ApiClient;
use crate::state;
use crate::templates;

use axum::Json;
use axum::body::Body;
use axum::extract::Form;
use axum::extract::Query;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::HeaderValue;
use axum::http::Request;
use axum::http::StatusCode;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;
use serde::Serialize;

#[derive(Serialize)]
struct AuthErrorResponse {
    error: &'static str,
}

/// A verified session: the manager's email plus the raw token, which doubles
/// as the bearer token for backend calls.
pub(crate) struct Session {
    pub(crate) email: String,
    pub(crate) token: String,
}

pub(crate) async fn auth_middleware(
    State(state): State<state::AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let auth = match &state.auth {
        Some(auth) => auth,
        None => return next.run(req).await,
    };

    let path = req.uri().path();
    if is_auth_bypass_path(path) {
        return next.run(req).await;
    }

    if let Some(token) = auth_cookie(req.headers(), auth.cookie_name())
        && auth.verify_token(token).is_ok()
    {
        return next.run(req).await;
    }

    if path.starts_with("/api/") {
        return (
            StatusCode::UNAUTHORIZED,
            Json(AuthErrorResponse {
                error: "unauthorized",
            }),
        )
            .into_response();
    }

    Redirect::to("/login").into_response()
}

fn is_auth_bypass_path(path: &str) -> bool {
    path == "/login" || path == "/logout" || path == "/health" || path.starts_with("/static/")
}

pub(crate) fn session_from_headers(
    headers: &HeaderMap,
    auth: &Option<auth_service::AuthState>,
) -> Option<Session> {
    let auth = auth.as_ref()?;
    let token = auth_cookie(headers, auth.cookie_name())?;
    let email = auth.verify_token(token).ok()?;
    Some(Session {
        email,
        token: token.to_string(),
    })
}

/// The API client for this request, carrying the session token when there is
/// one. With auth disabled the backend is called without a bearer token.
pub(crate) fn authorized_client(state: &state::AppState, headers: &HeaderMap) -> ApiClient {
    match session_from_headers(headers, &state.auth) {
        Some(session) => state.client.clone().with_bearer(session.token),
        None => state.client.clone(),
    }
}

pub(crate) fn manager_email(state: &state::AppState, headers: &HeaderMap) -> String {
    session_from_headers(headers, &state.auth)
        .map(|session| session.email)
        .unwrap_or_default()
}

fn auth_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    for header in headers.get_all(COOKIE).iter() {
        if let Ok(raw) = header.to_str()
            && let Some(value) = cookie_from_header(raw, name)
        {
            return Some(value);
        }
    }
    None
}

fn cookie_from_header<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    for part in header.split(';') {
        let trimmed = part.trim();
        if let Some((cookie_name, cookie_value)) = trimmed.split_once('=')
            && cookie_name == name
        {
            return Some(cookie_value);
        }
    }
    None
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginQuery {
    next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginForm {
    email: String,
    password: String,
    next: Option<String>,
}

pub(crate) async fn login_form(
    State(state): State<state::AppState>,
    Query(query): Query<LoginQuery>,
) -> Result<templates::LoginTemplate, (StatusCode, &'static str)> {
    if state.auth.is_none() {
        return Err((StatusCode::NOT_FOUND, "not found"));
    }
    let next = sanitize_next(query.next.as_deref()).unwrap_or_else(|| "/".to_string());
    let branches = branch_options(&state.client).await;

    Ok(templates::LoginTemplate {
        app_name: state.config.app_name,
        error: String::new(),
        next,
        branches,
    })
}

pub(crate) async fn login_submit(
    State(state): State<state::AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, (StatusCode, templates::LoginTemplate)> {
    let auth = state.auth.as_ref().ok_or((
        StatusCode::NOT_FOUND,
        templates::LoginTemplate {
            app_name: state.config.app_name.clone(),
            error: "Auth is not enabled.".to_string(),
            next: String::new(),
            branches: Vec::new(),
        },
    ))?;
    let email = form.email.trim().to_string();
    let password = form.password;
    let next = sanitize_next(form.next.as_deref()).unwrap_or_else(|| "/".to_string());

    // Mock sign-in: any non-empty pair passes. Only emptiness is rejected.
    if email.is_empty() || password.trim().is_empty() {
        return Err(login_error(
            StatusCode::BAD_REQUEST,
            &state.config.app_name,
            &next,
            "Please enter both email and password.",
        ));
    }

    // Fire the backend login so sign-ins reach its audit trail; the outcome
    // never blocks the session.
    if let Err(err) = state.client.login(&email, &password).await {
        eprintln!("backend login for '{email}' failed (continuing with local session): {err}");
    }

    let token = match auth.issue_token(&email) {
        Ok(token) => token,
        Err(err) => {
            eprintln!("failed to issue session token: {err}");
            return Err(login_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                &state.config.app_name,
                &next,
                "Failed to sign in.",
            ));
        }
    };

    let mut response = Redirect::to(&next).into_response();
    let cookie = auth.auth_cookie(&token);
    response.headers_mut().append(
        SET_COOKIE,
        HeaderValue::from_str(&cookie).expect("auth cookie header"),
    );
    Ok(response)
}

pub(crate) async fn logout(
    State(state): State<state::AppState>,
) -> Result<Response, (StatusCode, &'static str)> {
    let auth = state
        .auth
        .as_ref()
        .ok_or((StatusCode::NOT_FOUND, "not found"))?;
    let mut response = Redirect::to("/login").into_response();
    let cookie = auth.clear_cookie();
    response.headers_mut().append(
        SET_COOKIE,
        HeaderValue::from_str(&cookie).expect("logout cookie header"),
    );
    Ok(response)
}

async fn branch_options(client: &ApiClient) -> Vec<templates::BranchOption> {
    let branches = match client.branches().await {
        Ok(branches) => branches,
        Err(err) => {
            eprintln!("failed to fetch branches for login page: {err}");
            return Vec::new();
        }
    };

    branches
        .into_iter()
        .map(|branch| {
            let email = branch.email.filter(|email| !email.is_empty()).unwrap_or_else(|| {
                format!("admin@{}", branch.name.to_lowercase().replace(' ', ""))
            });
            templates::BranchOption {
                id: branch.id,
                name: branch.name,
                email,
                password: branch.password.unwrap_or_default(),
            }
        })
        .collect()
}

fn sanitize_next(next: Option<&str>) -> Option<String> {
    let next = next?.trim();
    if next.is_empty() {
        return None;
    }
    if !next.starts_with('/') || next.starts_with("//") || next.contains("://") {
        return None;
    }
    Some(next.to_string())
}

fn login_error(
    status: StatusCode,
    app_name: &str,
    next: &str,
    message: &str,
) -> (StatusCode, templates::LoginTemplate) {
    (
        status,
        templates::LoginTemplate {
            app_name: app_name.to_string(),
            error: message.to_string(),
            next: next.to_string(),
            branches: Vec::new(),
        },
    )
}
