//! Token Codec
//!
//! Wire form: `base64url(json(claims)) "." base64url(hmac_sha256(key, payload))`.
//! The MAC covers the encoded payload exactly as transmitted. Other token
//! families may share the key as long as their payload carries a `kind`.

use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};
use serde::Deserialize;

use crate::domain::entity::session_claims::{ADMIN_TOKEN_KIND, SessionClaims};
use crate::error::{AuthError, AuthResult};

/// The one field every token family agrees on
#[derive(Deserialize)]
struct KindEnvelope {
    kind: String,
}

/// Signs and decodes session tokens under one secret key
#[derive(Clone)]
pub struct TokenCodec {
    secret: [u8; 32],
}

impl TokenCodec {
    pub fn new(secret: [u8; 32]) -> Self {
        Self { secret }
    }

    pub fn sign(&self, claims: &SessionClaims) -> AuthResult<String> {
        let json = serde_json::to_vec(claims)
            .map_err(|e| AuthError::Internal(format!("Failed to encode claims: {e}")))?;
        let payload = to_base64url(&json);
        let tag = hmac_sha256(&self.secret, payload.as_bytes());

        Ok(format!("{}.{}", payload, to_base64url(&tag)))
    }

    /// Check the signature, then the `kind`, then parse the admin claims.
    ///
    /// A signed payload of another family is `WrongTokenKind` whatever its
    /// shape. Anything else that fails is `MalformedToken`.
    pub fn decode(&self, token: &str) -> AuthResult<SessionClaims> {
        let json = self.verified_payload(token)?;

        let envelope: KindEnvelope =
            serde_json::from_slice(&json).map_err(|_| AuthError::MalformedToken)?;
        if envelope.kind != ADMIN_TOKEN_KIND {
            tracing::debug!(kind = %envelope.kind, "Signed token of another family");
            return Err(AuthError::WrongTokenKind);
        }

        serde_json::from_slice(&json).map_err(|_| AuthError::MalformedToken)
    }

    fn verified_payload(&self, token: &str) -> AuthResult<Vec<u8>> {
        let (payload, signature) = token.split_once('.').ok_or(AuthError::MalformedToken)?;
        if payload.is_empty() || signature.contains('.') {
            return Err(AuthError::MalformedToken);
        }

        let tag = from_base64url(signature).map_err(|_| AuthError::MalformedToken)?;
        if !verify_hmac_sha256(&self.secret, payload.as_bytes(), &tag) {
            return Err(AuthError::MalformedToken);
        }

        from_base64url(payload).map_err(|_| AuthError::MalformedToken)
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
