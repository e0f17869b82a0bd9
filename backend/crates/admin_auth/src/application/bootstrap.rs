//! Bootstrap Use Case
//!
//! Provisions the default super admin into an empty credential store.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::store_call::bounded;
use crate::domain::entity::principal::Principal;
use crate::domain::repository::PrincipalRepository;
use crate::domain::value_object::{
    principal_password::{NewPassword, PasswordHash},
    username::Username,
};
use crate::error::{AuthError, AuthResult};

/// What bootstrap did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The store was empty and the default principal was created
    Created,
    /// The store already held principals, or another instance won the race
    AlreadyProvisioned,
}

/// Bootstrap use case
pub struct BootstrapUseCase<R>
where
    R: PrincipalRepository,
{
    principal_repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> BootstrapUseCase<R>
where
    R: PrincipalRepository,
{
    pub fn new(principal_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            principal_repo,
            config,
        }
    }

    /// Create the bootstrap principal if and only if the store is empty.
    ///
    /// Never overwrites an existing principal.
    pub async fn execute(&self) -> AuthResult<BootstrapOutcome> {
        let timeout = self.config.store_timeout;

        let existing = bounded(timeout, self.principal_repo.count()).await?;
        if existing > 0 {
            tracing::debug!(principals = existing, "Credential store already provisioned");
            return Ok(BootstrapOutcome::AlreadyProvisioned);
        }

        let credentials = &self.config.bootstrap;
        let username = Username::new(credentials.username.as_str())
            .map_err(|e| AuthError::InvalidInput(format!("bootstrap username: {e}")))?;
        let password = NewPassword::new(credentials.password.clone())
            .map_err(|e| AuthError::InvalidInput(format!("bootstrap password: {e}")))?;
        let password_hash = PasswordHash::from_new(&password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let principal = Principal::bootstrap(username, password_hash);

        match bounded(timeout, self.principal_repo.create(&principal)).await {
            Ok(()) => {
                if credentials.uses_dev_default() {
                    tracing::warn!(
                        username = %principal.username,
                        "Bootstrap principal uses the development default password; change it"
                    );
                }
                tracing::info!(
                    username = %principal.username,
                    role = %principal.role,
                    "Bootstrap principal created"
                );
                Ok(BootstrapOutcome::Created)
            }
            Err(AuthError::DuplicateCredential) => {
                tracing::info!("Bootstrap principal created concurrently by another instance");
                Ok(BootstrapOutcome::AlreadyProvisioned)
            }
            Err(e) => Err(e),
        }
    }
}
