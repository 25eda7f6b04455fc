use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod github;
pub mod handlers;
pub mod payload;
pub mod signature;

use config::Config;
use github::GithubClient;
use handlers::{health, railway_deploy};

pub struct AppState {
    pub config: Config,
    pub github: GithubClient,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let github = GithubClient::new(&config)?;
        Ok(Self { config, github })
    }
}

pub fn create_app_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/railway-deploy", post(railway_deploy))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
