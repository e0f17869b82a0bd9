//! Principal Entity
//!
//! A named administrative actor: username, password hash, role.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    principal_password::PasswordHash, principal_role::PrincipalRole, username::Username,
};

/// Principal entity
///
/// Never serialized directly; callers outside the crate get a
/// [`PrincipalView`].
#[derive(Debug, Clone)]
pub struct Principal {
    /// Unique, case-sensitive login handle
    pub username: Username,
    /// Argon2id PHC string
    pub password_hash: PasswordHash,
    /// Role copied into every token issued for this principal
    pub role: PrincipalRole,
    /// Set only on the account created by bootstrap
    pub is_bootstrap: bool,
    /// Creation time, immutable
    pub created_at: DateTime<Utc>,
    /// Last successful authentication
    pub last_login_at: Option<DateTime<Utc>>,
}

impl Principal {
    pub fn new(username: Username, password_hash: PasswordHash, role: PrincipalRole) -> Self {
        Self {
            username,
            password_hash,
            role,
            is_bootstrap: false,
            created_at: Utc::now(),
            last_login_at: None,
        }
    }

    /// The default account provisioned into an empty store
    pub fn bootstrap(username: Username, password_hash: PasswordHash) -> Self {
        Self {
            is_bootstrap: true,
            ..Self::new(username, password_hash, PrincipalRole::SuperAdmin)
        }
    }

    pub fn view(&self) -> PrincipalView {
        PrincipalView::from(self)
    }
}

/// Public projection of a principal. Carries no credential material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalView {
    pub username: Username,
    pub role: PrincipalRole,
    pub created_at: DateTime<Utc>,
}

impl From<&Principal> for PrincipalView {
    fn from(principal: &Principal) -> Self {
        Self {
            username: principal.username.clone(),
            role: principal.role,
            created_at: principal.created_at,
        }
    }
}
