//! HTTP client for the GitHub repository-dispatch API

use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, Result};

const DISPATCH_TIMEOUT_SECONDS: u64 = 10;
const DISPATCH_EVENT_TYPE: &str = "railway-deploy-success";
const USER_AGENT: &str = "Tabrela-Webhook-Service";

#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    base_url: String,
    repo: String,
    token: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClientPayload {
    pub commit_sha: String,
    pub deployment_id: String,
    pub environment: String,
}

#[derive(Debug, Serialize)]
struct DispatchRequest<'a> {
    event_type: &'static str,
    client_payload: &'a ClientPayload,
}

impl GithubClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DISPATCH_TIMEOUT_SECONDS))
            .build()?;

        Ok(Self {
            client,
            base_url: config.github_api_base.clone(),
            repo: config.github_repo.clone(),
            token: config.github_token.clone(),
        })
    }

    /// Fire one repository-dispatch event. GitHub answers 204 on success;
    /// anything outside 200/204 is surfaced with its status code.
    pub async fn repository_dispatch(&self, payload: &ClientPayload) -> Result<()> {
        let token = self.token.as_deref().ok_or(AppError::MissingToken)?;

        let url = format!("{}/repos/{}/dispatches", self.base_url, self.repo);
        debug!("Dispatching {} to {}", DISPATCH_EVENT_TYPE, url);

        let response = self
            .client
            .post(&url)
            .header("Accept", "application/vnd.github.v3+json")
            .header("Authorization", format!("token {}", token))
            .header("User-Agent", USER_AGENT)
            .json(&DispatchRequest {
                event_type: DISPATCH_EVENT_TYPE,
                client_payload: payload,
            })
            .send()
            .await
            .map_err(|e| AppError::Upstream {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if !matches!(status, 200 | 204) {
            return Err(AppError::Dispatch {
                status_code: status,
            });
        }

        Ok(())
    }
}
