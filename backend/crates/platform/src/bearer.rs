//! Bearer Token Extraction
//!
//! Pulls the credential out of an `Authorization: Bearer <token>` header
//! (RFC 6750 §2.1). The scheme name is matched case-insensitively.

use axum::http::{HeaderMap, header};

const BEARER_SCHEME: &str = "bearer";

/// Value for `WWW-Authenticate` on 401 responses
pub const WWW_AUTHENTICATE_BEARER: &str = "Bearer";

/// Extract a bearer token from headers
///
/// Returns `None` when the header is missing, not valid ASCII, uses another
/// scheme, or carries an empty credential.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, credential) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }

    let credential = credential.trim();
    if credential.is_empty() {
        return None;
    }

    Some(credential.to_string())
}
