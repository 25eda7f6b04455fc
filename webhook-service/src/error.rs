//! Error handling for the webhook relay

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid JSON body: {message}")]
    BadPayload { message: String },

    #[error("GITHUB_TOKEN not configured")]
    MissingToken,

    #[error("GitHub API error: {status_code}")]
    Dispatch { status_code: u16 },

    #[error("Upstream error: {message}")]
    Upstream { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidSignature => {
                warn!("Invalid webhook signature");
                (
                    StatusCode::UNAUTHORIZED,
                    json!({"error": "Invalid signature"}),
                )
            }
            AppError::BadPayload { message } => {
                warn!("Rejected malformed webhook body: {}", message);
                (StatusCode::BAD_REQUEST, json!({"error": message}))
            }
            AppError::MissingToken => {
                error!("GITHUB_TOKEN not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": "GITHUB_TOKEN not configured"}),
                )
            }
            AppError::Dispatch { status_code } => {
                error!("GitHub API error: {}", status_code);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Failed to trigger GitHub Actions",
                        "status_code": status_code
                    }),
                )
            }
            AppError::Upstream { message } => {
                error!("Webhook handler error: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, json!({"error": message}))
            }
        };

        (status, Json(body)).into_response()
    }
}
