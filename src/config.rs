use time::Duration;

/// Room identifiers used when the configuration does not name any. The
/// backend has no working room-list endpoint, so rooms are fetched one by one
/// by identifier.
pub const DEFAULT_ROOM_IDS: &[&str] = &[
    "Small Study Room",
    "study room3",
    "gaming room2",
    // the backend id really does end with a space
    "gaming room ",
];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub app_name: String,
    pub room_ids: Vec<String>,
    pub auth: Option<AuthConfig>,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub key: String,
    pub token_ttl: Duration,
    pub cookie_name: String,
    pub cookie_secure: bool,
}

#[cfg(test)]
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            // a closed local port, so stray fetches in tests fail fast
            api_base_url: "http://127.0.0.1:9".to_string(),
            app_name: "Shagaf".to_string(),
            room_ids: DEFAULT_ROOM_IDS.iter().map(|id| id.to_string()).collect(),
            auth: None,
        }
    }
}
