//! Request and response models for the email service
//!
//! Every inbound body is deserialized, trimmed, then validated as a whole so
//! the caller gets all failing fields back at once.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::FieldError;

lazy_static! {
    static ref OTP_RE: Regex = Regex::new(r"^\d{6}$").unwrap();
}

// ============================================================================
// REQUEST MODELS
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerificationEmailRequest {
    #[validate(email(message = "Invalid email format"))]
    pub to_email: String,

    #[validate(length(min = 3, max = 50, message = "Username must be between 3 and 50 characters"))]
    pub username: String,

    #[validate(custom(function = "validate_otp"))]
    pub otp: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PasswordResetEmailRequest {
    #[validate(email(message = "Invalid email format"))]
    pub to_email: String,

    #[validate(length(min = 3, max = 50, message = "Username must be between 3 and 50 characters"))]
    pub username: String,

    #[validate(custom(function = "validate_otp"))]
    pub otp: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WelcomeEmailRequest {
    #[validate(email(message = "Invalid email format"))]
    pub to_email: String,

    #[validate(length(min = 3, max = 50, message = "Username must be between 3 and 50 characters"))]
    pub username: String,
}

impl VerificationEmailRequest {
    pub fn normalized(mut self) -> Self {
        self.to_email = self.to_email.trim().to_string();
        self.username = self.username.trim().to_string();
        self.otp = self.otp.trim().to_string();
        self
    }
}

impl PasswordResetEmailRequest {
    pub fn normalized(mut self) -> Self {
        self.to_email = self.to_email.trim().to_string();
        self.username = self.username.trim().to_string();
        self.otp = self.otp.trim().to_string();
        self
    }
}

impl WelcomeEmailRequest {
    pub fn normalized(mut self) -> Self {
        self.to_email = self.to_email.trim().to_string();
        self.username = self.username.trim().to_string();
        self
    }
}

// ============================================================================
// RESPONSE MODELS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

// ============================================================================
// VALIDATION FUNCTIONS
// ============================================================================

/// OTP is an exact 6-digit string; leading zeros are significant.
fn validate_otp(otp: &str) -> Result<(), ValidationError> {
    if !OTP_RE.is_match(otp) {
        let mut validation_error = ValidationError::new("otp");
        validation_error.message = Some("OTP must be exactly 6 digits".into());
        return Err(validation_error);
    }
    Ok(())
}

/// Flatten `ValidationErrors` into the batched `{field, message}` list the
/// error envelope carries.
pub fn format_validation_errors(errors: &validator::ValidationErrors) -> Vec<FieldError> {
    let mut formatted_errors = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = match error.message {
                Some(ref msg) => msg.to_string(),
                None => match error.code.as_ref() {
                    "email" => "Invalid email format".to_string(),
                    "length" => "Invalid length".to_string(),
                    "otp" => "OTP must be exactly 6 digits".to_string(),
                    _ => "Invalid value".to_string(),
                },
            };
            formatted_errors.push(FieldError {
                field: field.to_string(),
                message,
            });
        }
    }

    formatted_errors
}
