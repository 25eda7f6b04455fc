//! HTTP handlers for the email service

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    Json,
};
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

use crate::config::{Config, SERVICE_NAME, SERVICE_VERSION};
use crate::error::{AppError, Result};
use crate::models::{
    format_validation_errors, EmailResponse, HealthResponse, PasswordResetEmailRequest,
    VerificationEmailRequest, WelcomeEmailRequest,
};
use crate::templates;
use crate::AppState;

const VERIFICATION_SUBJECT: &str = "Verify Your Email Address - OTP Code";
const PASSWORD_RESET_SUBJECT: &str = "Reset Your Password - OTP Code";
const WELCOME_SUBJECT: &str = "Welcome to Tabrela!";

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
    })
}

/// Shared-secret gate for the send endpoints. Runs before body validation;
/// with no configured key every request is rejected.
fn require_api_key(config: &Config, headers: &HeaderMap) -> Result<()> {
    let provided = headers.get("X-API-Key").and_then(|v| v.to_str().ok());

    let authorized = match (provided, config.service_api_key.as_deref()) {
        (Some(provided), Some(expected)) => provided == expected,
        _ => false,
    };

    if !authorized {
        warn!("Rejected request with missing or invalid API key");
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

pub async fn send_verification_email(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: std::result::Result<Json<VerificationEmailRequest>, JsonRejection>,
) -> Result<Json<EmailResponse>> {
    require_api_key(&state.config, &headers)?;

    let Json(request) = payload.map_err(AppError::from_rejection)?;
    let request = request.normalized();
    request.validate().map_err(|e| AppError::Validation {
        errors: format_validation_errors(&e),
    })?;

    let html = templates::verification_email(&request.username, &request.otp);
    let sent = state
        .resend
        .send(&request.to_email, VERIFICATION_SUBJECT, &html)
        .await?;

    info!("Verification email sent to {}", request.to_email);
    Ok(Json(EmailResponse {
        success: true,
        email_id: sent.id,
        message: "Verification email sent successfully".to_string(),
    }))
}

pub async fn send_password_reset_email(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: std::result::Result<Json<PasswordResetEmailRequest>, JsonRejection>,
) -> Result<Json<EmailResponse>> {
    require_api_key(&state.config, &headers)?;

    let Json(request) = payload.map_err(AppError::from_rejection)?;
    let request = request.normalized();
    request.validate().map_err(|e| AppError::Validation {
        errors: format_validation_errors(&e),
    })?;

    let html = templates::password_reset_email(&request.username, &request.otp);
    let sent = state
        .resend
        .send(&request.to_email, PASSWORD_RESET_SUBJECT, &html)
        .await?;

    info!("Password reset OTP email sent to {}", request.to_email);
    Ok(Json(EmailResponse {
        success: true,
        email_id: sent.id,
        message: "Password reset email sent successfully".to_string(),
    }))
}

pub async fn send_welcome_email(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: std::result::Result<Json<WelcomeEmailRequest>, JsonRejection>,
) -> Result<Json<EmailResponse>> {
    require_api_key(&state.config, &headers)?;

    let Json(request) = payload.map_err(AppError::from_rejection)?;
    let request = request.normalized();
    request.validate().map_err(|e| AppError::Validation {
        errors: format_validation_errors(&e),
    })?;

    let html = templates::welcome_email(&request.username, &state.config.frontend_url);
    let sent = state
        .resend
        .send(&request.to_email, WELCOME_SUBJECT, &html)
        .await?;

    info!("Welcome email sent to {}", request.to_email);
    Ok(Json(EmailResponse {
        success: true,
        email_id: sent.id,
        message: "Welcome email sent successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_app_router;
    use axum::{
        body::Body,
        http::{self, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt; // for `oneshot`
    use wiremock::{
        matchers::{body_partial_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    const API_KEY: &str = "test-service-key";

    fn test_app_with(config: Config) -> axum::Router {
        let state = AppState::new(config).expect("Failed to create AppState for test");
        create_app_router(Arc::new(state))
    }

    fn test_app(resend_base: &str) -> axum::Router {
        let config = Config {
            resend_api_base: resend_base.to_string(),
            ..Config::default()
        };
        test_app_with(config)
    }

    fn post_json(uri: &str, api_key: Option<&str>, body: &Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method(http::Method::POST)
            .uri(uri)
            .header(http::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref());
        if let Some(key) = api_key {
            builder = builder.header("X-API-Key", key);
        }
        builder
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    async fn response_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn mount_send_mock(server: &MockServer, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "email_123"})))
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn health_reports_fixed_identity() {
        let app = test_app("http://unused.invalid");

        let response = app
            .oneshot(
                Request::builder()
                    .method(http::Method::GET)
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(
            body,
            json!({"status": "healthy", "service": "email-service", "version": "1.0.0"})
        );
    }

    #[tokio::test]
    async fn verification_email_is_forwarded_to_provider() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(header("Authorization", "Bearer re_test_key"))
            .and(body_partial_json(json!({
                "to": "user@example.com",
                "subject": "Verify Your Email Address - OTP Code"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "email_123"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let app = test_app(&mock_server.uri());
        let response = app
            .oneshot(post_json(
                "/api/send-verification-email",
                Some(API_KEY),
                &json!({"to_email": "user@example.com", "username": "johndoe", "otp": "123456"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["email_id"], json!("email_123"));
        assert_eq!(
            body["message"],
            json!("Verification email sent successfully")
        );

        mock_server.verify().await;
    }

    #[tokio::test]
    async fn password_reset_email_uses_its_own_subject() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(body_partial_json(
                json!({"subject": "Reset Your Password - OTP Code"}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "email_456"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let app = test_app(&mock_server.uri());
        let response = app
            .oneshot(post_json(
                "/api/send-password-reset-email",
                Some(API_KEY),
                &json!({"to_email": "user@example.com", "username": "johndoe", "otp": "000042"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["message"], json!("Password reset email sent successfully"));

        mock_server.verify().await;
    }

    #[tokio::test]
    async fn welcome_email_needs_no_otp() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(body_partial_json(json!({"subject": "Welcome to Tabrela!"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "email_789"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let app = test_app(&mock_server.uri());
        let response = app
            .oneshot(post_json(
                "/api/send-welcome-email",
                Some(API_KEY),
                &json!({"to_email": "user@example.com", "username": "johndoe"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        mock_server.verify().await;
    }

    #[tokio::test]
    async fn missing_api_key_is_rejected_before_any_provider_call() {
        let mock_server = MockServer::start().await;
        mount_send_mock(&mock_server, 0).await;

        let app = test_app(&mock_server.uri());
        let response = app
            .oneshot(post_json(
                "/api/send-verification-email",
                None,
                &json!({"to_email": "user@example.com", "username": "johndoe", "otp": "123456"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = response_json(response).await;
        assert_eq!(body, json!({"error": "Unauthorized"}));

        mock_server.verify().await;
    }

    #[tokio::test]
    async fn wrong_api_key_is_rejected() {
        let mock_server = MockServer::start().await;
        mount_send_mock(&mock_server, 0).await;

        let app = test_app(&mock_server.uri());
        let response = app
            .oneshot(post_json(
                "/api/send-welcome-email",
                Some("not-the-key"),
                &json!({"to_email": "user@example.com", "username": "johndoe"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        mock_server.verify().await;
    }

    #[tokio::test]
    async fn auth_gate_runs_even_when_the_body_is_invalid() {
        let app = test_app("http://unused.invalid");
        let response = app
            .oneshot(post_json(
                "/api/send-verification-email",
                None,
                &json!({"otp": 42}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn validation_failures_report_all_fields_at_once() {
        let mock_server = MockServer::start().await;
        mount_send_mock(&mock_server, 0).await;

        let app = test_app(&mock_server.uri());
        let response = app
            .oneshot(post_json(
                "/api/send-verification-email",
                Some(API_KEY),
                &json!({"to_email": "not-an-email", "username": "ab", "otp": "12x"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["error"], json!("Validation error"));

        let errors = body["details"]["errors"].as_array().unwrap();
        let fields: Vec<&str> = errors
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert!(fields.contains(&"to_email"));
        assert!(fields.contains(&"username"));
        assert!(fields.contains(&"otp"));

        mock_server.verify().await;
    }

    #[tokio::test]
    async fn missing_field_is_a_validation_error_not_a_422() {
        let app = test_app("http://unused.invalid");
        let response = app
            .oneshot(post_json(
                "/api/send-verification-email",
                Some(API_KEY),
                &json!({"to_email": "user@example.com", "username": "johndoe"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["error"], json!("Validation error"));
    }

    #[tokio::test]
    async fn provider_failure_is_surfaced_as_500() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(
                ResponseTemplate::new(422).set_body_json(json!({"message": "Invalid `from` field"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let app = test_app(&mock_server.uri());
        let response = app
            .oneshot(post_json(
                "/api/send-verification-email",
                Some(API_KEY),
                &json!({"to_email": "user@example.com", "username": "johndoe", "otp": "123456"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response_json(response).await;
        assert_eq!(body["error"], json!("Invalid `from` field"));

        mock_server.verify().await;
    }

    #[tokio::test]
    async fn missing_provider_key_fails_the_dispatch() {
        let config = Config {
            resend_api_key: None,
            ..Config::default()
        };
        let app = test_app_with(config);

        let response = app
            .oneshot(post_json(
                "/api/send-verification-email",
                Some(API_KEY),
                &json!({"to_email": "user@example.com", "username": "johndoe", "otp": "123456"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response_json(response).await;
        assert_eq!(body["error"], json!("RESEND_API_KEY not configured"));
    }

    #[tokio::test]
    async fn no_configured_service_key_rejects_everything() {
        let config = Config {
            service_api_key: None,
            ..Config::default()
        };
        let app = test_app_with(config);

        let response = app
            .oneshot(post_json(
                "/api/send-welcome-email",
                Some("anything"),
                &json!({"to_email": "user@example.com", "username": "johndoe"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn repeated_requests_each_trigger_a_fresh_dispatch() {
        let mock_server = MockServer::start().await;
        mount_send_mock(&mock_server, 2).await;

        let payload =
            json!({"to_email": "user@example.com", "username": "johndoe", "otp": "123456"});
        for _ in 0..2 {
            let app = test_app(&mock_server.uri());
            let response = app
                .oneshot(post_json(
                    "/api/send-verification-email",
                    Some(API_KEY),
                    &payload,
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        mock_server.verify().await;
    }
}
