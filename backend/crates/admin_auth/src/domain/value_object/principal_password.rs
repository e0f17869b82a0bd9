//! Principal Password Value Objects
//!
//! Domain wrappers over `platform::password`.
//!
//! - [`NewPassword`] is a password being set; it must satisfy the policy.
//! - [`CandidatePassword`] is a password presented at login; it is only
//!   normalized and bounded.
//! - [`PasswordHash`] is the Argon2id PHC string that gets persisted.

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

/// Password chosen for a principal
#[derive(Debug)]
pub struct NewPassword(ClearTextPassword);

impl NewPassword {
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        ClearTextPassword::new(raw).map(Self)
    }
}

/// Password presented for verification
#[derive(Debug)]
pub struct CandidatePassword(ClearTextPassword);

impl CandidatePassword {
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        ClearTextPassword::candidate(raw).map(Self)
    }
}

/// Salted Argon2id hash in PHC format, safe to store and log.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(HashedPassword);

impl PasswordHash {
    pub fn from_new(password: &NewPassword, pepper: Option<&[u8]>) -> Result<Self, PasswordHashError> {
        password.0.hash(pepper).map(Self)
    }

    /// Rebuild from a persisted PHC string
    pub fn from_phc_string(phc_string: impl Into<String>) -> Result<Self, PasswordHashError> {
        HashedPassword::from_phc_string(phc_string).map(Self)
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    pub fn verify(&self, candidate: &CandidatePassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(&candidate.0, pepper)
    }

    /// Burn the same Argon2 work as [`PasswordHash::verify`] for a principal
    /// that does not exist. Always `false`.
    pub fn verify_absent(candidate: &CandidatePassword, pepper: Option<&[u8]>) -> bool {
        HashedPassword::dummy().verify(&candidate.0, pepper)
    }

    /// Build the hash used by [`PasswordHash::verify_absent`] ahead of the
    /// first login
    pub fn prepare_absent_check() {
        HashedPassword::dummy();
    }

    pub fn needs_rehash(&self) -> bool {
        self.0.needs_rehash()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHash")
            .field("hash", &"[HASH]")
            .finish()
    }
}

impl fmt::Display for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[HASHED_PASSWORD]")
    }
}
