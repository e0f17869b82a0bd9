//! Application Layer
//!
//! Use cases and the Token Authority facade.

pub mod authenticate;
pub mod bootstrap;
pub mod config;
mod store_call;
pub mod token_authority;
pub mod token_codec;
pub mod verify_token;

// Re-exports
pub use authenticate::{AuthenticateInput, AuthenticateOutput, AuthenticateUseCase};
pub use bootstrap::{BootstrapOutcome, BootstrapUseCase};
pub use config::{AuthConfig, ConfigError, RuntimeProfile};
pub use token_authority::TokenAuthority;
pub use token_codec::TokenCodec;
pub use verify_token::VerifyTokenUseCase;
