//! Configuration for the webhook relay

use std::env;

pub const SERVICE_NAME: &str = "webhook-service";
pub const SERVICE_VERSION: &str = "1.0.0";

#[derive(Debug, Clone)]
pub struct Config {
    /// Token for the repository-dispatch call. Absence is a per-request
    /// configuration error, not a startup failure.
    pub github_token: Option<String>,
    pub github_repo: String,
    /// Base URL of the GitHub API, overridable in tests.
    pub github_api_base: String,
    /// Shared secret for inbound signature checks. When absent, every
    /// signature (or none at all) is accepted. Permissive by design.
    pub webhook_secret: Option<String>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            github_token: env::var("GITHUB_TOKEN").ok(),
            github_repo: env::var("GITHUB_REPO")
                .unwrap_or_else(|_| "Hamza-Bin-Aamir/tabrela".to_string()),
            github_api_base: env::var("GITHUB_API_BASE")
                .unwrap_or_else(|_| "https://api.github.com".to_string()),
            webhook_secret: env::var("WEBHOOK_SECRET").ok(),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5001".to_string())
                .parse()?,
        })
    }
}

#[cfg(test)]
impl Default for Config {
    fn default() -> Self {
        Config {
            github_token: Some("ghp_test_token".to_string()),
            github_repo: "Hamza-Bin-Aamir/tabrela".to_string(),
            github_api_base: "https://api.github.com".to_string(),
            webhook_secret: None,
            port: 5001,
        }
    }
}
