//! Verify Token Use Case
//!
//! Checks, in order: signature, kind, expiry, principal existence. The
//! first failing check decides the error.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::application::store_call::bounded;
use crate::application::token_codec::TokenCodec;
use crate::domain::entity::session_claims::SessionClaims;
use crate::domain::repository::PrincipalRepository;
use crate::error::{AuthError, AuthResult};

/// Verify token use case
pub struct VerifyTokenUseCase<R>
where
    R: PrincipalRepository,
{
    principal_repo: Arc<R>,
    codec: TokenCodec,
    config: Arc<AuthConfig>,
}

impl<R> VerifyTokenUseCase<R>
where
    R: PrincipalRepository,
{
    pub fn new(principal_repo: Arc<R>, codec: TokenCodec, config: Arc<AuthConfig>) -> Self {
        Self {
            principal_repo,
            codec,
            config,
        }
    }

    pub async fn execute(&self, token: &str) -> AuthResult<SessionClaims> {
        self.execute_at(token, Utc::now()).await
    }

    /// Verify against an explicit clock
    pub async fn execute_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<SessionClaims> {
        // Signature, then kind
        let claims = self.codec.decode(token)?;

        if claims.is_expired_at(now) {
            return Err(AuthError::TokenExpired);
        }

        // A deleted principal revokes every token it was issued
        let principal = bounded(
            self.config.store_timeout,
            self.principal_repo.find_by_username(&claims.sub),
        )
        .await?;
        if principal.is_none() {
            return Err(AuthError::UnknownPrincipal);
        }

        Ok(claims)
    }
}
