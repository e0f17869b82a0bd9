//! Admin Auth Error Types
//!
//! Fine-grained failure kinds for authentication and token verification.
//! They are logged precisely on the server and collapsed into a generic
//! `kernel::error::AppError` before leaving the process, so a caller never
//! learns which check failed.

use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::bearer::WWW_AUTHENTICATE_BEARER;
use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong password. Deliberately one variant.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A principal with this username (or a second bootstrap principal) exists
    #[error("Principal already exists")]
    DuplicateCredential,

    /// Token could not be parsed or its signature did not verify
    #[error("Malformed or forged token")]
    MalformedToken,

    /// Token was signed by us but minted for another purpose
    #[error("Token kind is not accepted here")]
    WrongTokenKind,

    #[error("Token expired")]
    TokenExpired,

    /// Token subject no longer exists in the store
    #[error("Token subject no longer exists")]
    UnknownPrincipal,

    /// Store failed or timed out. Retryable.
    #[error("Credential store unavailable: {0}")]
    StoreUnavailable(String),

    /// Rejected input when creating a principal
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials
            | AuthError::MalformedToken
            | AuthError::WrongTokenKind
            | AuthError::TokenExpired
            | AuthError::UnknownPrincipal => ErrorKind::Unauthorized,
            AuthError::DuplicateCredential => ErrorKind::Conflict,
            AuthError::StoreUnavailable(_) => ErrorKind::ServiceUnavailable,
            AuthError::InvalidInput(_) => ErrorKind::BadRequest,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// True for the four token verification failures
    pub fn is_token_rejection(&self) -> bool {
        matches!(
            self,
            AuthError::MalformedToken
                | AuthError::WrongTokenKind
                | AuthError::TokenExpired
                | AuthError::UnknownPrincipal
        )
    }

    /// Stable label for logs and metrics
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::DuplicateCredential => "duplicate_credential",
            AuthError::MalformedToken => "malformed_token",
            AuthError::WrongTokenKind => "wrong_token_kind",
            AuthError::TokenExpired => "token_expired",
            AuthError::UnknownPrincipal => "unknown_principal",
            AuthError::StoreUnavailable(_) => "store_unavailable",
            AuthError::InvalidInput(_) => "invalid_input",
            AuthError::Internal(_) => "internal",
        }
    }

    /// Generic, caller-safe representation
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::InvalidCredentials => AppError::unauthorized("Invalid credentials"),
            e if e.is_token_rejection() => AppError::unauthorized("Authentication required")
                .with_action("Sign in again to obtain a new token"),
            AuthError::StoreUnavailable(_) => {
                AppError::service_unavailable("Service temporarily unavailable")
                    .with_action("Retry after a short delay")
            }
            AuthError::DuplicateCredential => AppError::conflict("Principal already exists"),
            AuthError::InvalidInput(msg) => AppError::bad_request(msg.clone()),
            _ => AppError::internal("Internal server error"),
        }
    }

    fn log(&self) {
        match self {
            AuthError::StoreUnavailable(msg) => {
                tracing::error!(reason = self.code(), error = %msg, "Credential store unavailable");
            }
            AuthError::Internal(msg) => {
                tracing::error!(reason = self.code(), message = %msg, "Admin auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!(reason = self.code(), "Rejected admin login");
            }
            e if e.is_token_rejection() => {
                tracing::warn!(reason = self.code(), "Rejected admin token");
            }
            _ => {
                tracing::debug!(reason = self.code(), error = %self, "Admin auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        let challenge = self.kind() == ErrorKind::Unauthorized;
        let mut response = self.to_app_error().into_response();
        if challenge {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(WWW_AUTHENTICATE_BEARER),
            );
        }
        response
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AuthError::DuplicateCredential
            }
            _ => AuthError::StoreUnavailable(err.to_string()),
        }
    }
}

impl From<tokio::time::error::Elapsed> for AuthError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        AuthError::StoreUnavailable("store call timed out".to_string())
    }
}
