//! Configuration for the email service

use std::env;

pub const SERVICE_NAME: &str = "email-service";
pub const SERVICE_VERSION: &str = "1.0.0";

#[derive(Debug, Clone)]
pub struct Config {
    /// Resend API key. When absent, every dispatch fails with a 500.
    pub resend_api_key: Option<String>,
    /// Base URL of the Resend API, overridable in tests.
    pub resend_api_base: String,
    pub from_email: String,
    pub frontend_url: String,
    /// Shared secret expected in the `X-API-Key` header. When absent,
    /// no inbound request can authenticate.
    pub service_api_key: Option<String>,
    pub port: u16,
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            resend_api_key: env::var("RESEND_API_KEY").ok(),
            resend_api_base: env::var("RESEND_API_BASE")
                .unwrap_or_else(|_| "https://api.resend.com".to_string()),
            from_email: env::var("FROM_EMAIL")
                .unwrap_or_else(|_| "onboarding@resend.dev".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            service_api_key: env::var("SERVICE_API_KEY").ok(),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()?,
            debug: env::var("DEBUG")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(false),
        })
    }
}

#[cfg(test)]
impl Default for Config {
    fn default() -> Self {
        Config {
            resend_api_key: Some("re_test_key".to_string()),
            resend_api_base: "https://api.resend.com".to_string(),
            from_email: "onboarding@resend.dev".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            service_api_key: Some("test-service-key".to_string()),
            port: 5000,
            debug: false,
        }
    }
}
