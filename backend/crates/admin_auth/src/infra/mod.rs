//! Infrastructure Layer
//!
//! Credential store adapters.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryPrincipalRepository;
pub use postgres::PgPrincipalRepository;
