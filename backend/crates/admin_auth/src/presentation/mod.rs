//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AdminAuthState;
pub use middleware::{AuthenticatedAdmin, require_admin};
pub use router::admin_auth_router;
