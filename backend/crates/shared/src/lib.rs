//! Shared Kernel - Domain-crossing minimal core
//!
//! Common error vocabulary used by every crate in the workspace:
//! - [`error::kind::ErrorKind`] - coarse classification mapped to HTTP status
//! - [`error::app_error::AppError`] - outward-facing error with a generic message
//!
//! Only things with the same meaning in every domain belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
