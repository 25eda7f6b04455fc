//! Inbound webhook signature verification

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Check an `X-Signature` header against the raw request body.
///
/// With no secret configured this accepts everything; that is the documented
/// permissive mode, not an oversight. With a secret, the header must carry
/// the hex HMAC-SHA256 of the body (optionally prefixed with `sha256=`) and
/// is compared in constant time.
pub fn verify_signature(secret: Option<&str>, payload: &[u8], signature: Option<&str>) -> bool {
    let Some(secret) = secret else {
        return true;
    };
    let Some(signature) = signature else {
        return false;
    };

    let hex_digest = signature.strip_prefix("sha256=").unwrap_or(signature);
    let Ok(provided) = hex::decode(hex_digest) else {
        return false;
    };

    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(payload);
    mac.verify_slice(&provided).is_ok()
}

/// Hex HMAC-SHA256 of a payload. Used by tests to produce valid headers.
#[cfg(test)]
pub fn sign(secret: &str, payload: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key size");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}
