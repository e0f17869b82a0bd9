//! Repository Traits
//!
//! The credential store contract. Implementations live in the
//! infrastructure layer.

use chrono::{DateTime, Utc};

use crate::domain::entity::principal::Principal;
use crate::domain::value_object::username::Username;
use crate::error::AuthResult;

/// Principal repository trait
///
/// Every failure to reach or read the store is `AuthError::StoreUnavailable`.
/// "Not found" is never an error.
#[trait_variant::make(PrincipalRepository: Send)]
pub trait LocalPrincipalRepository {
    /// Find a principal by exact username. No side effects.
    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<Principal>>;

    /// Insert a new principal.
    ///
    /// Fails with `DuplicateCredential` if the username is taken, or if the
    /// principal is flagged as bootstrap and another bootstrap principal
    /// already exists.
    async fn create(&self, principal: &Principal) -> AuthResult<()>;

    /// Record a successful login. Best-effort from the caller's view.
    async fn update_last_login(&self, username: &Username, at: DateTime<Utc>) -> AuthResult<()>;

    /// Number of stored principals
    async fn count(&self) -> AuthResult<u64>;

    /// Remove a principal. Returns whether one was removed.
    async fn delete(&self, username: &Username) -> AuthResult<bool>;
}
