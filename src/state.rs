use crate::auth;
use crate::client::ApiClient;
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub(crate) auth: Option<auth::AuthState>,
    pub(crate) client: ApiClient,
}
