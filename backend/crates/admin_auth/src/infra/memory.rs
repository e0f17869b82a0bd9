//! In-Memory Credential Store
//!
//! Process-local principal repository for tests and single-node
//! development. Enforces the same uniqueness rules as the Postgres table.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::entity::principal::Principal;
use crate::domain::repository::PrincipalRepository;
use crate::domain::value_object::username::Username;
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct InMemoryPrincipalRepository {
    principals: Arc<RwLock<HashMap<Username, Principal>>>,
}

impl InMemoryPrincipalRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrincipalRepository for InMemoryPrincipalRepository {
    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<Principal>> {
        Ok(self.principals.read().await.get(username).cloned())
    }

    async fn create(&self, principal: &Principal) -> AuthResult<()> {
        let mut principals = self.principals.write().await;

        if principals.contains_key(&principal.username) {
            return Err(AuthError::DuplicateCredential);
        }
        if principal.is_bootstrap && principals.values().any(|p| p.is_bootstrap) {
            return Err(AuthError::DuplicateCredential);
        }

        principals.insert(principal.username.clone(), principal.clone());
        Ok(())
    }

    async fn update_last_login(&self, username: &Username, at: DateTime<Utc>) -> AuthResult<()> {
        if let Some(principal) = self.principals.write().await.get_mut(username) {
            principal.last_login_at = Some(at);
        }
        Ok(())
    }

    async fn count(&self) -> AuthResult<u64> {
        Ok(self.principals.read().await.len() as u64)
    }

    async fn delete(&self, username: &Username) -> AuthResult<bool> {
        Ok(self.principals.write().await.remove(username).is_some())
    }
}
