//! HTTP client for the Resend transactional-email API

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, Result};

const SEND_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone)]
pub struct ResendClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    from_email: String,
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct SendEmailResponse {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResendErrorBody {
    message: Option<String>,
}

impl ResendClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(SEND_TIMEOUT_SECONDS))
            .build()?;

        Ok(Self {
            client,
            base_url: config.resend_api_base.clone(),
            api_key: config.resend_api_key.clone(),
            from_email: config.from_email.clone(),
        })
    }

    /// Submit one send request. No retries; any provider-side failure is
    /// surfaced to the caller as is.
    pub async fn send(&self, to: &str, subject: &str, html: &str) -> Result<SendEmailResponse> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::configuration("RESEND_API_KEY not configured"))?;

        let body = SendEmailRequest {
            from: &self.from_email,
            to,
            subject,
            html,
        };

        debug!("Submitting send request to {}", self.base_url);

        let response = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::provider(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ResendErrorBody>()
                .await
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| format!("Email provider returned status {}", status.as_u16()));
            return Err(AppError::provider(message));
        }

        response
            .json::<SendEmailResponse>()
            .await
            .map_err(|e| AppError::provider(e.to_string()))
    }
}
