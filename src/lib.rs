pub mod auth;
pub mod client;
pub mod config;
pub mod types;

mod app;
mod assets;
mod state;
mod templates;

pub use app::app;

use std::net::SocketAddr;

pub async fn serve(addr: SocketAddr, config: config::AppConfig) {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app(config))
        .await
        .expect("server error");
}
