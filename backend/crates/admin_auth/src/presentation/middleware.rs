//! Admin Auth Middleware
//!
//! `require_admin` verifies the bearer token and stores the claims in the
//! request extensions; `AuthenticatedAdmin` reads them back in handlers.

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::Request;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::{AppError, AppResult};
use platform::bearer::extract_bearer_token;

use crate::domain::entity::session_claims::SessionClaims;
use crate::domain::repository::PrincipalRepository;
use crate::error::AuthError;
use crate::presentation::handlers::AdminAuthState;

/// Middleware that requires a valid admin bearer token
pub async fn require_admin<R>(
    State(state): State<AdminAuthState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: PrincipalRepository + Clone + Send + Sync + 'static,
{
    let Some(token) = extract_bearer_token(req.headers()) else {
        tracing::debug!("No admin bearer token");
        return Err(AuthError::MalformedToken.into_response());
    };

    let claims = state
        .authority
        .verify(&token)
        .await
        .map_err(IntoResponse::into_response)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Verified admin session, available behind [`require_admin`]
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin(pub SessionClaims);

impl AuthenticatedAdmin {
    pub fn claims(&self) -> &SessionClaims {
        &self.0
    }

    /// Reject standard admins
    pub fn require_super_admin(&self) -> AppResult<&SessionClaims> {
        if self.0.role.is_super_admin() {
            Ok(&self.0)
        } else {
            tracing::warn!(username = %self.0.sub, "Super admin role required");
            Err(AppError::forbidden("Insufficient role"))
        }
    }
}

impl<S> FromRequestParts<S> for AuthenticatedAdmin
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Absent only when the route is not behind `require_admin`
        parts
            .extensions
            .get::<SessionClaims>()
            .cloned()
            .map(AuthenticatedAdmin)
            .ok_or(AuthError::MalformedToken)
    }
}
