//! Admin Auth Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Principal, session claims, credential store trait
//! - `application/` - Token Authority: bootstrap, authenticate, verify
//! - `infra/` - Credential store adapters (PostgreSQL, in-memory)
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Username + password login for CMS administrators
//! - Stateless signed bearer tokens (HMAC-SHA256), 8 hour default lifetime
//! - Default super admin provisioned into an empty store
//! - Roles: Admin, SuperAdmin
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Unknown user and wrong password are indistinguishable, including latency
//! - Every verification re-reads the principal; deleting it revokes its tokens
//! - Failure details are logged, never returned

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::{
    AuthConfig, BootstrapOutcome, ConfigError, RuntimeProfile, TokenAuthority, TokenCodec,
};
pub use domain::{Principal, PrincipalRepository, PrincipalView, SessionClaims};
pub use error::{AuthError, AuthResult};
pub use infra::{InMemoryPrincipalRepository, PgPrincipalRepository};
pub use presentation::{AuthenticatedAdmin, admin_auth_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
