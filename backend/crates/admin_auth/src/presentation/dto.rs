//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::AuthenticateOutput;
use crate::domain::entity::{principal::PrincipalView, session_claims::SessionClaims};

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub principal: PrincipalResponse,
}

impl From<AuthenticateOutput> for LoginResponse {
    fn from(output: AuthenticateOutput) -> Self {
        Self {
            token: output.token,
            expires_at: output.expires_at,
            principal: output.principal.into(),
        }
    }
}

/// Public principal fields
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrincipalResponse {
    pub username: String,
    /// `admin` or `super_admin`
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<PrincipalView> for PrincipalResponse {
    fn from(view: PrincipalView) -> Self {
        Self {
            username: view.username.into(),
            role: view.role.code().to_string(),
            created_at: view.created_at,
        }
    }
}

// ============================================================================
// Current Session
// ============================================================================

/// Current session response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub subject: String,
    pub role: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl From<&SessionClaims> for SessionResponse {
    fn from(claims: &SessionClaims) -> Self {
        Self {
            subject: claims.sub.as_str().to_string(),
            role: claims.role.code().to_string(),
            issued_at: claims.issued_at(),
            expires_at: claims.expires_at(),
        }
    }
}
