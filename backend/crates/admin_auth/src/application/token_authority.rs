//! Token Authority
//!
//! Single entry point over bootstrap, authenticate, and verify, all sharing
//! one repository handle, one signing key and one configuration.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::authenticate::{AuthenticateInput, AuthenticateOutput, AuthenticateUseCase};
use crate::application::bootstrap::{BootstrapOutcome, BootstrapUseCase};
use crate::application::config::AuthConfig;
use crate::application::token_codec::TokenCodec;
use crate::application::verify_token::VerifyTokenUseCase;
use crate::domain::entity::session_claims::SessionClaims;
use crate::domain::repository::PrincipalRepository;
use crate::error::AuthResult;

pub struct TokenAuthority<R>
where
    R: PrincipalRepository + Send + Sync + 'static,
{
    bootstrap: BootstrapUseCase<R>,
    authenticate: AuthenticateUseCase<R>,
    verify: VerifyTokenUseCase<R>,
    codec: TokenCodec,
}

impl<R> TokenAuthority<R>
where
    R: PrincipalRepository + Send + Sync + 'static,
{
    pub fn new(principal_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        let codec = TokenCodec::new(config.secret_key);
        Self {
            bootstrap: BootstrapUseCase::new(principal_repo.clone(), config.clone()),
            authenticate: AuthenticateUseCase::new(
                principal_repo.clone(),
                codec.clone(),
                config.clone(),
            ),
            verify: VerifyTokenUseCase::new(principal_repo, codec.clone(), config),
            codec,
        }
    }

    pub async fn bootstrap(&self) -> AuthResult<BootstrapOutcome> {
        self.bootstrap.execute().await
    }

    pub async fn authenticate(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> AuthResult<AuthenticateOutput> {
        self.authenticate
            .execute(AuthenticateInput {
                username: username.into(),
                password: password.into(),
            })
            .await
    }

    pub async fn verify(&self, token: &str) -> AuthResult<SessionClaims> {
        self.verify.execute(token).await
    }

    pub async fn verify_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<SessionClaims> {
        self.verify.execute_at(token, now).await
    }

    /// Codec bound to this authority's key
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }
}
