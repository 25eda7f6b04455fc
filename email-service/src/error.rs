//! Error handling for the email service

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Error envelope returned on any failure: `{error, details?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// One failed field reported by the request validator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Validation error")]
    Validation { errors: Vec<FieldError> },

    #[error("Email provider error: {message}")]
    Provider { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl AppError {
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Body deserialization failures (missing field, wrong type, bad JSON)
    /// are reported through the same envelope as schema violations.
    pub fn from_rejection(rejection: JsonRejection) -> Self {
        Self::Validation {
            errors: vec![FieldError {
                field: "body".to_string(),
                message: rejection.body_text(),
            }],
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse {
                    error: "Unauthorized".to_string(),
                    details: None,
                },
            ),
            AppError::Validation { ref errors } => {
                error!("Validation error: {:?}", errors);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation error".to_string(),
                        details: Some(serde_json::json!({ "errors": errors })),
                    },
                )
            }
            AppError::Provider { message } => {
                error!("Error sending email: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: message,
                        details: None,
                    },
                )
            }
            AppError::Configuration { message } => {
                error!("Configuration error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: message,
                        details: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
