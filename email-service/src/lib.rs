use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod resend;
pub mod templates;

use config::Config;
use handlers::{health, send_password_reset_email, send_verification_email, send_welcome_email};
use resend::ResendClient;

pub struct AppState {
    pub config: Config,
    pub resend: ResendClient,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let resend = ResendClient::new(&config)?;
        Ok(Self { config, resend })
    }
}

/// CORS for the send endpoints: POST only, loopback origins on any port.
/// The health endpoint is left outside the layer.
fn loopback_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            |origin: &HeaderValue, _parts: &axum::http::request::Parts| {
                origin.to_str().map(is_loopback_origin).unwrap_or(false)
            },
        ))
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

fn is_loopback_origin(origin: &str) -> bool {
    let Some(rest) = origin.strip_prefix("http://") else {
        return false;
    };
    let host = rest.split(':').next().unwrap_or(rest);
    matches!(host, "localhost" | "127.0.0.1" | "0.0.0.0")
}

pub fn create_app_router(app_state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .route("/api/send-verification-email", post(send_verification_email))
        .route("/api/send-password-reset-email", post(send_password_reset_email))
        .route("/api/send-welcome-email", post(send_welcome_email))
        .layer(loopback_cors());

    Router::new()
        .route("/health", get(health))
        .merge(api_router)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
