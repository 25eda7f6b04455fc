//! Deployment payload resolution
//!
//! Railway does not commit to a single webhook schema, so every field is read
//! through an ordered fallback chain over the untyped JSON document. The
//! first present, non-null, non-empty string wins. Nothing here can fail;
//! missing paths fall through to the chain's default.

use serde_json::Value;

/// status <- deployment.status, else status, else type
pub fn resolve_status(payload: &Value) -> Option<&str> {
    lookup(payload, "/deployment/status")
        .or_else(|| lookup(payload, "/status"))
        .or_else(|| lookup(payload, "/type"))
}

/// A deployment counts as successful on `SUCCESS`, `COMPLETED`, or the
/// `deployment.completed` event type.
pub fn is_successful(payload: &Value) -> bool {
    let status = resolve_status(payload);
    status == Some("SUCCESS")
        || status == Some("COMPLETED")
        || lookup(payload, "/type") == Some("deployment.completed")
}

/// commit <- deployment.meta.commitHash, else meta.commitHash,
/// else commitHash, else "unknown"
pub fn resolve_commit_sha(payload: &Value) -> String {
    lookup(payload, "/deployment/meta/commitHash")
        .or_else(|| lookup(payload, "/meta/commitHash"))
        .or_else(|| lookup(payload, "/commitHash"))
        .unwrap_or("unknown")
        .to_string()
}

pub fn resolve_deployment_id(payload: &Value) -> String {
    lookup(payload, "/deployment/id")
        .unwrap_or("unknown")
        .to_string()
}

pub fn resolve_environment(payload: &Value) -> String {
    lookup(payload, "/environment/name")
        .unwrap_or("production")
        .to_string()
}

fn lookup<'a>(payload: &'a Value, pointer: &str) -> Option<&'a str> {
    payload
        .pointer(pointer)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
