//! HTTP handlers for the webhook relay

use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::config::{SERVICE_NAME, SERVICE_VERSION};
use crate::error::{AppError, Result};
use crate::github::ClientPayload;
use crate::payload;
use crate::signature::verify_signature;
use crate::AppState;

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": SERVICE_VERSION
    }))
}

/// Railway posts here when a deployment finishes. A successful deployment is
/// relayed to GitHub as a repository-dispatch event; everything else is
/// acknowledged and dropped. The body is taken raw so the signature check
/// covers exactly the bytes that were sent.
pub async fn railway_deploy(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>> {
    let signature = headers.get("X-Signature").and_then(|v| v.to_str().ok());
    if !verify_signature(state.config.webhook_secret.as_deref(), &body, signature) {
        return Err(AppError::InvalidSignature);
    }

    let payload: Value = serde_json::from_slice(&body).map_err(|e| AppError::BadPayload {
        message: format!("Invalid JSON body: {}", e),
    })?;
    info!("Received Railway webhook: {}", payload);

    if !payload::is_successful(&payload) {
        let status = payload::resolve_status(&payload);
        info!(
            "Deployment status {:?} is not successful, skipping",
            status
        );
        return Ok(Json(json!({
            "message": "Ignored - deployment not successful",
            "status": status
        })));
    }

    let dispatch = ClientPayload {
        commit_sha: payload::resolve_commit_sha(&payload),
        deployment_id: payload::resolve_deployment_id(&payload),
        environment: payload::resolve_environment(&payload),
    };
    state.github.repository_dispatch(&dispatch).await?;

    info!(
        "Successfully triggered frontend deploy for commit: {}",
        dispatch.commit_sha
    );
    Ok(Json(json!({
        "message": "Frontend deployment triggered",
        "commit_sha": dispatch.commit_sha
    })))
}
