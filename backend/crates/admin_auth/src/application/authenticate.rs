//! Authenticate Use Case
//!
//! Exchanges a username and password for a signed session token.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::application::store_call::bounded;
use crate::application::token_codec::TokenCodec;
use crate::domain::entity::{principal::PrincipalView, session_claims::SessionClaims};
use crate::domain::repository::PrincipalRepository;
use crate::domain::value_object::{
    principal_password::{CandidatePassword, PasswordHash},
    username::Username,
};
use crate::error::{AuthError, AuthResult};

/// Authenticate input
pub struct AuthenticateInput {
    pub username: String,
    pub password: String,
}

/// Authenticate output
#[derive(Debug, Clone)]
pub struct AuthenticateOutput {
    /// Signed bearer token
    pub token: String,
    pub expires_at: DateTime<Utc>,
    /// Public projection of the principal, no credential material
    pub principal: PrincipalView,
}

/// Authenticate use case
pub struct AuthenticateUseCase<R>
where
    R: PrincipalRepository + Send + Sync + 'static,
{
    principal_repo: Arc<R>,
    codec: TokenCodec,
    config: Arc<AuthConfig>,
}

impl<R> AuthenticateUseCase<R>
where
    R: PrincipalRepository + Send + Sync + 'static,
{
    pub fn new(principal_repo: Arc<R>, codec: TokenCodec, config: Arc<AuthConfig>) -> Self {
        // Unknown-user logins must not pay for building the dummy hash
        PasswordHash::prepare_absent_check();

        Self {
            principal_repo,
            codec,
            config,
        }
    }

    pub async fn execute(&self, input: AuthenticateInput) -> AuthResult<AuthenticateOutput> {
        // Malformed input is indistinguishable from a wrong password
        let username =
            Username::new(input.username).map_err(|_| AuthError::InvalidCredentials)?;
        let candidate =
            CandidatePassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let pepper = self.config.pepper();
        let principal = bounded(
            self.config.store_timeout,
            self.principal_repo.find_by_username(&username),
        )
        .await?;

        let principal = match principal {
            Some(p) if p.password_hash.verify(&candidate, pepper) => p,
            Some(_) => return Err(AuthError::InvalidCredentials),
            None => {
                PasswordHash::verify_absent(&candidate, pepper);
                return Err(AuthError::InvalidCredentials);
            }
        };

        if principal.password_hash.needs_rehash() {
            tracing::info!(username = %principal.username, "Stored password hash uses outdated parameters");
        }

        let now = Utc::now();
        let claims = self
            .config
            .token_ttl_chrono()
            .and_then(|ttl| SessionClaims::issue(&principal, now, ttl))
            .ok_or_else(|| AuthError::Internal("Token expiry out of range".to_string()))?;
        let token = self.codec.sign(&claims)?;

        // Record the login in background
        let repo = self.principal_repo.clone();
        let timeout = self.config.store_timeout;
        let subject = principal.username.clone();
        tokio::spawn(async move {
            if let Err(e) = bounded(timeout, repo.update_last_login(&subject, now)).await {
                tracing::warn!(username = %subject, error = %e, "Failed to record last login");
            }
        });

        tracing::info!(
            username = %principal.username,
            role = %principal.role,
            jti = %claims.jti,
            "Admin authenticated"
        );

        Ok(AuthenticateOutput {
            token,
            expires_at: claims.expires_at(),
            principal: principal.view(),
        })
    }
}
